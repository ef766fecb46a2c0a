//! Type families and the type-tag descriptor.
//!
//! A [`Family`] stands for a base that implementations register under. It names
//! the registry and decides, at definition time, whether that registry keeps
//! anything at all.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::config::{RegistryConfig, StoreState};
use crate::core::{AdmissionPolicy, Registry, RejectDuplicates};

/// A base that implementations register under.
///
/// ```
/// use subtype_registry::{Family, Registry, TypeDescriptor};
///
/// struct Codecs;
/// impl Family for Codecs {
/// 	const NAME: &'static str = "codecs";
/// }
///
/// struct Gzip;
///
/// let registry = Registry::for_family::<Codecs>();
/// registry
/// 	.register("Gzip", TypeDescriptor::of::<Codecs, Gzip>("Gzip"))
/// 	.unwrap();
/// assert!(registry.lookup("Gzip").unwrap().is::<Gzip>());
/// ```
pub trait Family: 'static {
	/// Registry label. Submissions are routed by the family type, not this name.
	const NAME: &'static str;
	/// Whether the family's registry has a backing store.
	const ACTIVE: bool = true;
}

/// Descriptor identifying a concrete type registered under a [`Family`].
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
	name: &'static str,
	family: &'static str,
	family_id: fn() -> TypeId,
	type_name: fn() -> &'static str,
	type_id: fn() -> TypeId,
}

impl TypeDescriptor {
	pub const fn of<F: Family, T: 'static>(name: &'static str) -> Self {
		Self {
			name,
			family: F::NAME,
			family_id: TypeId::of::<F>,
			type_name: std::any::type_name::<T>,
			type_id: TypeId::of::<T>,
		}
	}

	/// Name the type registers under.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	/// Label of the family, as given by [`Family::NAME`].
	pub const fn family(&self) -> &'static str {
		self.family
	}

	/// Fully qualified Rust type name (diagnostic only).
	pub fn type_name(&self) -> &'static str {
		(self.type_name)()
	}

	pub fn family_id(&self) -> TypeId {
		(self.family_id)()
	}

	pub fn type_id(&self) -> TypeId {
		(self.type_id)()
	}

	pub fn is<T: 'static>(&self) -> bool {
		self.type_id() == TypeId::of::<T>()
	}

	pub fn belongs_to<F: Family>(&self) -> bool {
		self.family_id() == TypeId::of::<F>()
	}
}

impl PartialEq for TypeDescriptor {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
			&& self.family_id() == other.family_id()
			&& self.type_id() == other.type_id()
	}
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state);
		self.family_id().hash(state);
		self.type_id().hash(state);
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeDescriptor")
			.field("name", &self.name)
			.field("family", &self.family)
			.field("type_name", &self.type_name())
			.finish()
	}
}

impl<D> Registry<D, RejectDuplicates> {
	/// Creates the registry for family `F`, active or not according to `F::ACTIVE`.
	pub fn for_family<F: Family>() -> Self {
		Self::from_config(family_config::<F>())
	}
}

impl<D, P> Registry<D, P>
where
	P: AdmissionPolicy<D>,
{
	pub fn for_family_with_policy<F: Family>(policy: P) -> Self {
		Self::from_config_with_policy(family_config::<F>(), policy)
	}
}

fn family_config<F: Family>() -> RegistryConfig {
	RegistryConfig::new(F::NAME, StoreState::from_active(F::ACTIVE))
}
