//! Name-keyed registries of implementations.
//!
//! A [`Registry`] maps names to opaque descriptors (constructors, type tags,
//! factories) so implementations of a common base can be discovered by name
//! without the consumer keeping a list of them.
//!
//! # Mental Model
//!
//! 1. **Ownership:** Each registry is an explicit value owned by some scope: a
//!    local, a struct field, or a `LazyLock` static. There is no hidden global.
//! 2. **State:** A registry is *active* (it keeps entries) or *uninitialized* (it
//!    accepts registrations and discards them). The state is picked at construction.
//! 3. **Registration:** Registrants call [`Registry::register`] during an explicit
//!    initialization step, either directly or through a loading pass over
//!    [`register_type!`] submissions ([`plugin::load_family`]).
//! 4. **Admission:** Before insertion the registry consults its
//!    [`AdmissionPolicy`]. The default rejects duplicate names with
//!    [`DuplicateNameError`].
//!
//! # Example
//!
//! ```
//! use subtype_registry::Registry;
//!
//! trait Shape {
//! 	fn sides(&self) -> u32;
//! }
//!
//! struct Triangle;
//! impl Shape for Triangle {
//! 	fn sides(&self) -> u32 {
//! 		3
//! 	}
//! }
//!
//! fn triangle() -> Box<dyn Shape> {
//! 	Box::new(Triangle)
//! }
//!
//! let shapes: Registry<fn() -> Box<dyn Shape>> = Registry::active("shapes");
//! shapes.register("Triangle", triangle).unwrap();
//! assert!(shapes.register("Triangle", triangle).is_err());
//!
//! let make = shapes.lookup("Triangle").unwrap();
//! assert_eq!(make().sides(), 3);
//! assert!(shapes.lookup("Square").is_none());
//! ```

pub mod config;
pub mod core;
pub mod family;
mod macros;
pub mod plugin;

pub use config::{RegistryConfig, StoreState};
pub use crate::core::{
	AdmissionPolicy, DescriptorCheck, DuplicateNameError, Mapping, NameConvention, RegisterError,
	Registry, RejectDuplicates,
};
pub use family::{Family, TypeDescriptor};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}

#[cfg(test)]
mod tests;
