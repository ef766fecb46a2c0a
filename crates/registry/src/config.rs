//! Construction-time settings for a registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whether a registry owns a backing store.
///
/// Fixed at construction. An [`Uninitialized`](StoreState::Uninitialized) registry
/// accepts registrations without keeping them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreState {
	#[default]
	Active,
	Uninitialized,
}

impl StoreState {
	pub const fn from_active(active: bool) -> Self {
		if active { Self::Active } else { Self::Uninitialized }
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Active => "active",
			Self::Uninitialized => "uninitialized",
		}
	}
}

impl fmt::Display for StoreState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown store state `{0}`, expected `active` or `uninitialized`")]
pub struct ParseStoreStateError(String);

impl FromStr for StoreState {
	type Err = ParseStoreStateError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"active" => Ok(Self::Active),
			"uninitialized" => Ok(Self::Uninitialized),
			other => Err(ParseStoreStateError(other.to_owned())),
		}
	}
}

/// Label and store state for [`crate::Registry::from_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
	pub label: &'static str,
	pub state: StoreState,
}

impl RegistryConfig {
	pub const fn new(label: &'static str, state: StoreState) -> Self {
		Self { label, state }
	}

	pub const fn active(label: &'static str) -> Self {
		Self::new(label, StoreState::Active)
	}

	pub const fn uninitialized(label: &'static str) -> Self {
		Self::new(label, StoreState::Uninitialized)
	}
}
