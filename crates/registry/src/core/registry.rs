//! Registry container with atomic publication.
//!
//! # Role
//!
//! [`Registry`] binds names to caller-supplied descriptors. A registry is either
//! active (it owns a mapping) or inactive (it never does); the choice is made once
//! at construction and never changes.
//!
//! # Concurrency
//!
//! - **Reads:** Wait-free. [`Registry::lookup`] and [`Registry::snapshot`] load the
//!   currently published mapping.
//! - **Writes:** Serialized by a writer lock. Each accepted registration publishes a
//!   new mapping, so a reader sees either the old or the new one, never a partial
//!   insert.
//!
//! # Invariants
//!
//! - Names are unique within an active registry. A duplicate is refused even when
//!   the admission policy lets it through.
//! - Entries are never removed or replaced.
//! - An inactive registry never gains entries.

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::error::{DuplicateNameError, RegisterError};
use super::policy::{AdmissionPolicy, RejectDuplicates};
use crate::config::{RegistryConfig, StoreState};

/// Name to descriptor mapping handed out by [`Registry::snapshot`].
pub type Mapping<D> = FxHashMap<String, D>;

struct Store<D> {
	entries: ArcSwap<Mapping<D>>,
	write: Mutex<()>,
}

impl<D> Store<D> {
	fn new() -> Self {
		Self {
			entries: ArcSwap::from_pointee(Mapping::default()),
			write: Mutex::new(()),
		}
	}
}

/// A name to descriptor registry.
///
/// `D` is opaque to the registry: it is stored and returned verbatim. `P` is the
/// admission policy consulted before each insertion.
pub struct Registry<D, P = RejectDuplicates> {
	label: &'static str,
	store: Option<Store<D>>,
	policy: P,
}

impl<D> Registry<D, RejectDuplicates> {
	/// Creates an active registry with the default duplicate-name policy.
	pub fn active(label: &'static str) -> Self {
		Self::with_policy(label, RejectDuplicates)
	}

	/// Creates a registry without a backing store.
	///
	/// Registration always succeeds and is discarded; lookups report absence.
	pub fn uninitialized(label: &'static str) -> Self {
		Self {
			label,
			store: None,
			policy: RejectDuplicates,
		}
	}

	pub fn from_config(config: RegistryConfig) -> Self {
		Self::from_config_with_policy(config, RejectDuplicates)
	}
}

impl<D, P> Registry<D, P>
where
	P: AdmissionPolicy<D>,
{
	/// Creates an active registry consulting `policy` before each insertion.
	pub fn with_policy(label: &'static str, policy: P) -> Self {
		Self {
			label,
			store: Some(Store::new()),
			policy,
		}
	}

	pub fn from_config_with_policy(config: RegistryConfig, policy: P) -> Self {
		let store = match config.state {
			StoreState::Active => Some(Store::new()),
			StoreState::Uninitialized => None,
		};
		Self {
			label: config.label,
			store,
			policy,
		}
	}
}

impl<D, P> Registry<D, P> {
	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns whether this registry has a backing store.
	pub fn is_active(&self) -> bool {
		self.store.is_some()
	}

	pub fn state(&self) -> StoreState {
		if self.is_active() {
			StoreState::Active
		} else {
			StoreState::Uninitialized
		}
	}

	pub fn policy(&self) -> &P {
		&self.policy
	}

	/// Number of registered entries; zero for an inactive registry.
	pub fn len(&self) -> usize {
		self.store.as_ref().map_or(0, |s| s.entries.load().len())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn contains(&self, name: &str) -> bool {
		self.store
			.as_ref()
			.is_some_and(|s| s.entries.load().contains_key(name))
	}

	/// Registered names in lexical order.
	pub fn names(&self) -> Vec<String> {
		let Some(store) = &self.store else {
			return Vec::new();
		};
		let mut names: Vec<String> = store.entries.load().keys().cloned().collect();
		names.sort_unstable();
		names
	}
}

impl<D: Clone, P> Registry<D, P> {
	/// Returns a copy of the current mapping, or `None` for an inactive registry.
	///
	/// The copy is detached: mutating it has no effect on the registry.
	pub fn snapshot(&self) -> Option<Mapping<D>> {
		let store = self.store.as_ref()?;
		Some(Mapping::<D>::clone(&store.entries.load()))
	}

	/// Returns the descriptor registered under `name`.
	///
	/// Names compare exactly (case-sensitive).
	pub fn lookup(&self, name: &str) -> Option<D> {
		let store = self.store.as_ref()?;
		store.entries.load().get(name).cloned()
	}
}

impl<D, P> Registry<D, P>
where
	D: Clone,
	P: AdmissionPolicy<D>,
{
	/// Binds `name` to `descriptor`.
	///
	/// On an inactive registry this is a no-op that succeeds. On an active one the
	/// admission policy runs first; a refused entry leaves the registry unchanged.
	pub fn register(&self, name: impl Into<String>, descriptor: D) -> Result<(), RegisterError> {
		let name = name.into();
		let Some(store) = &self.store else {
			tracing::trace!(registry = self.label, %name, "registry inactive, registration discarded");
			return Ok(());
		};

		let _write = store.write.lock();
		let current = store.entries.load_full();
		self.policy.check(self.label, &name, &descriptor, &current)?;
		if current.contains_key(&name) {
			return Err(DuplicateNameError {
				registry: self.label,
				name,
			}
			.into());
		}

		let mut next = Mapping::<D>::clone(&current);
		next.insert(name.clone(), descriptor);
		let count = next.len();
		store.entries.store(Arc::new(next));
		tracing::trace!(registry = self.label, %name, count, "registered entry");
		Ok(())
	}

	/// Registers each `(name, descriptor)` pair in order.
	///
	/// Stops at the first refused entry; entries registered before it are kept.
	/// Returns how many entries were inserted, which is zero for an inactive registry.
	pub fn register_all<I, N>(&self, entries: I) -> Result<usize, RegisterError>
	where
		I: IntoIterator<Item = (N, D)>,
		N: Into<String>,
	{
		let mut inserted = 0;
		for (name, descriptor) in entries {
			self.register(name, descriptor)?;
			if self.is_active() {
				inserted += 1;
			}
		}
		Ok(inserted)
	}
}

impl<D, P> fmt::Debug for Registry<D, P> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry")
			.field("label", &self.label)
			.field("state", &self.state())
			.field("len", &self.len())
			.finish_non_exhaustive()
	}
}
