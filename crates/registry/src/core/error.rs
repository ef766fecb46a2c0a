/// A name was registered twice in the same active registry.
///
/// The entry already present is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{name}` already exists in registry `{registry}`")]
pub struct DuplicateNameError {
	pub registry: &'static str,
	pub name: String,
}

/// Registration failures surfaced by [`crate::Registry::register`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
	#[error(transparent)]
	Duplicate(#[from] DuplicateNameError),

	/// An admission policy refused the entry for a reason other than a duplicate name.
	#[error("`{name}` rejected by registry `{registry}`: {reason}")]
	Rejected {
		registry: &'static str,
		name: String,
		reason: String,
	},
}

impl RegisterError {
	/// Returns the name whose registration failed.
	pub fn name(&self) -> &str {
		match self {
			Self::Duplicate(err) => &err.name,
			Self::Rejected { name, .. } => name,
		}
	}

	pub fn is_duplicate(&self) -> bool {
		matches!(self, Self::Duplicate(_))
	}
}
