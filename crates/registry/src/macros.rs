//! Registration macros.

/// Submits a type for registration under a family.
///
/// The name defaults to the last segment of the type's path. The submission is picked up by
/// [`load_family`](crate::plugin::load_family); declaring it does not touch any
/// registry on its own.
///
/// ```
/// use subtype_registry::{Family, Registry, plugin, register_type};
///
/// struct Backends;
/// impl Family for Backends {
/// 	const NAME: &'static str = "backends";
/// }
///
/// struct Memory;
/// struct Disk;
///
/// register_type!(Backends, Memory);
/// register_type!(Backends, Disk, "disk");
///
/// fn main() {
/// 	let registry = Registry::for_family::<Backends>();
/// 	assert_eq!(plugin::load_family::<Backends, _>(&registry), Ok(2));
/// 	assert!(registry.lookup("disk").unwrap().is::<Disk>());
/// }
/// ```
#[macro_export]
macro_rules! register_type {
	($family:ty, $ty:ty, $name:expr) => {
		$crate::__private::inventory::submit! {
			$crate::plugin::Registrant::new($crate::TypeDescriptor::of::<$family, $ty>($name))
		}
	};
	($family:ty, $($segment:ident)::+) => {
		$crate::register_type!($family, $($segment)::+, $crate::__last_segment!($($segment)::+));
	};
}

/// Stringifies the last segment of a `::`-separated path.
#[doc(hidden)]
#[macro_export]
macro_rules! __last_segment {
	($last:ident) => {
		stringify!($last)
	};
	($head:ident :: $($rest:ident)::+) => {
		$crate::__last_segment!($($rest)::+)
	};
}
