//! Domain models for ssm-params
//!
//! This module contains the parameter types and validated settings.
//! Types are validated on construction (fail-fast pattern).

pub mod page_size;
pub mod parameter;

pub use page_size::PageSize;
pub use parameter::{join_key, short_name, Parameter, ParameterSet};
