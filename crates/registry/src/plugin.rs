//! Link-time submissions and the loading pass that registers them.
//!
//! Implementations announce themselves with [`register_type!`](crate::register_type),
//! which submits a [`Registrant`] through `inventory`. Nothing reaches a registry
//! until the owner runs [`load_family`] during its initialization step.

use crate::core::{AdmissionPolicy, RegisterError, Registry};
use crate::family::{Family, TypeDescriptor};

/// A type submitted for registration under a family.
#[derive(Debug)]
pub struct Registrant {
	pub descriptor: TypeDescriptor,
}

inventory::collect!(Registrant);

impl Registrant {
	pub const fn new(descriptor: TypeDescriptor) -> Self {
		Self { descriptor }
	}
}

/// Submissions for family `F`, sorted by name.
pub fn submitted<F: Family>() -> Vec<&'static Registrant> {
	let mut registrants: Vec<&'static Registrant> = inventory::iter::<Registrant>
		.into_iter()
		.filter(|r| r.descriptor.belongs_to::<F>())
		.collect();
	registrants.sort_by(|a, b| a.descriptor.name().cmp(b.descriptor.name()));
	registrants
}

/// Registers every submission for family `F` into `registry`, in name order.
///
/// Returns how many entries were inserted. The first refused submission aborts the
/// pass and is returned; submissions registered before it stay registered.
pub fn load_family<F, P>(registry: &Registry<TypeDescriptor, P>) -> Result<usize, RegisterError>
where
	F: Family,
	P: AdmissionPolicy<TypeDescriptor>,
{
	let registrants = submitted::<F>();
	let result = registry.register_all(
		registrants
			.iter()
			.map(|r| (r.descriptor.name(), r.descriptor)),
	);

	match result {
		Ok(inserted) => {
			tracing::debug!(
				registry = registry.label(),
				family = F::NAME,
				submitted = registrants.len(),
				count = inserted,
				"loaded family submissions"
			);
			Ok(inserted)
		}
		Err(err) => {
			tracing::warn!(
				registry = registry.label(),
				family = F::NAME,
				name = err.name(),
				"family load aborted: {err}"
			);
			Err(err)
		}
	}
}
