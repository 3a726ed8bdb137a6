//! Trait definitions for parameter store operations
//!
//! These traits abstract over the SSM client to enable testing with mocks.

use crate::domain::Parameter;
use crate::error::StoreError;

/// One request to the paged "get parameters by path" listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest<'a> {
    /// Path prefix to list under
    pub path: &'a str,
    /// Decrypt SecureString values
    pub with_decryption: bool,
    /// Page size hint
    pub max_results: i32,
    /// Continuation token from the previous page, `None` for the first page
    pub next_token: Option<&'a str>,
}

/// One page of listing results
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterPage {
    /// Parameters on this page
    pub parameters: Vec<Parameter>,
    /// Token for the next page; `None` once the listing is exhausted
    pub next_token: Option<String>,
}

impl ParameterPage {
    /// Whether another page follows this one
    pub fn has_more(&self) -> bool {
        self.next_token.is_some()
    }
}

/// Trait for remote parameter store operations
///
/// This trait abstracts the two calls the tool makes, allowing for mock
/// implementations in tests while using the real SSM client in production.
pub trait ParameterStore: Send + Sync {
    /// Fetch a single page of parameters under a path
    fn parameters_by_path(&self, request: &PageRequest<'_>) -> Result<ParameterPage, StoreError>;

    /// Fetch one parameter by its full name
    fn parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter, StoreError>;
}
