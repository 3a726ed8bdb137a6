//! Parameter store abstraction layer
//!
//! Provides a trait-based seam over AWS SSM for testability.

pub mod ssm;
pub mod traits;

pub use ssm::SsmStore;
pub use traits::{PageRequest, ParameterPage, ParameterStore};
