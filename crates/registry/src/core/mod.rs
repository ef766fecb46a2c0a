//! Registry container, admission policies and registration errors.

pub mod error;
pub mod policy;
pub mod registry;

pub use error::{DuplicateNameError, RegisterError};
pub use policy::{AdmissionPolicy, DescriptorCheck, NameConvention, RejectDuplicates, reject_duplicate};
pub use registry::{Mapping, Registry};
