//! Admission policies consulted before an entry is inserted.
//!
//! # Role
//!
//! [`AdmissionPolicy`] is the hook a registry owner overrides to refine what the
//! registry accepts. The provided [`AdmissionPolicy::check`] body rejects
//! duplicate names; implementations that replace it should still call
//! [`reject_duplicate`] unless they intend to relax uniqueness, which the
//! registry would then enforce anyway by refusing to overwrite.
//!
//! # Invariants
//!
//! - A policy never mutates the registry. It sees the current entries read-only,
//!   under the registration lock.

use std::fmt;

use super::error::{DuplicateNameError, RegisterError};
use super::registry::Mapping;

/// Acceptance check run by [`crate::Registry::register`] on active registries.
///
/// `check` runs while the registry's writer lock is held. It may read the same
/// registry, but it must not register into it: that lock is not re-entrant.
pub trait AdmissionPolicy<D> {
	/// Decides whether `name` may be bound to `descriptor` given the current `entries`.
	fn check(
		&self,
		registry: &'static str,
		name: &str,
		descriptor: &D,
		entries: &Mapping<D>,
	) -> Result<(), RegisterError> {
		let _ = descriptor;
		reject_duplicate(registry, name, entries)
	}
}

/// Fails with [`DuplicateNameError`] when `name` is already bound in `entries`.
pub fn reject_duplicate<D>(
	registry: &'static str,
	name: &str,
	entries: &Mapping<D>,
) -> Result<(), RegisterError> {
	if entries.contains_key(name) {
		return Err(DuplicateNameError {
			registry,
			name: name.to_owned(),
		}
		.into());
	}
	Ok(())
}

/// The default policy: unique names, anything else goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectDuplicates;

impl<D> AdmissionPolicy<D> for RejectDuplicates {}

/// Requires names to satisfy a naming convention.
#[derive(Clone, Copy)]
pub struct NameConvention {
	/// Human-readable form of the rule, used in rejection messages.
	pub rule: &'static str,
	pub accepts: fn(&str) -> bool,
}

impl NameConvention {
	pub const fn new(rule: &'static str, accepts: fn(&str) -> bool) -> Self {
		Self { rule, accepts }
	}
}

impl fmt::Debug for NameConvention {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NameConvention")
			.field("rule", &self.rule)
			.finish_non_exhaustive()
	}
}

impl<D> AdmissionPolicy<D> for NameConvention {
	fn check(
		&self,
		registry: &'static str,
		name: &str,
		_descriptor: &D,
		entries: &Mapping<D>,
	) -> Result<(), RegisterError> {
		if !(self.accepts)(name) {
			return Err(RegisterError::Rejected {
				registry,
				name: name.to_owned(),
				reason: format!("name must {}", self.rule),
			});
		}
		reject_duplicate(registry, name, entries)
	}
}

/// Requires descriptors to carry some property, e.g. a non-empty type name.
pub struct DescriptorCheck<D> {
	pub rule: &'static str,
	pub accepts: fn(&D) -> bool,
}

impl<D> DescriptorCheck<D> {
	pub const fn new(rule: &'static str, accepts: fn(&D) -> bool) -> Self {
		Self { rule, accepts }
	}
}

impl<D> Clone for DescriptorCheck<D> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<D> Copy for DescriptorCheck<D> {}

impl<D> fmt::Debug for DescriptorCheck<D> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DescriptorCheck")
			.field("rule", &self.rule)
			.finish_non_exhaustive()
	}
}

impl<D> AdmissionPolicy<D> for DescriptorCheck<D> {
	fn check(
		&self,
		registry: &'static str,
		name: &str,
		descriptor: &D,
		entries: &Mapping<D>,
	) -> Result<(), RegisterError> {
		reject_duplicate(registry, name, entries)?;
		if !(self.accepts)(descriptor) {
			return Err(RegisterError::Rejected {
				registry,
				name: name.to_owned(),
				reason: format!("descriptor must {}", self.rule),
			});
		}
		Ok(())
	}
}
