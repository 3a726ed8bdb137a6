//! Mock implementations for testing
//!
//! Provides a scripted parameter store for unit testing without AWS access.

use crate::domain::Parameter;
use crate::error::StoreError;
use crate::store::{PageRequest, ParameterPage, ParameterStore};

use std::collections::HashMap;
use std::sync::Mutex;

/// A recorded call against the mock store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `parameters_by_path(path, next_token)`
    ByPath {
        path: String,
        next_token: Option<String>,
        max_results: i32,
        with_decryption: bool,
    },
    /// `parameter(name)`
    Get { name: String, with_decryption: bool },
}

/// Mock parameter store for testing
///
/// Each path serves a scripted list of pages. Page `n` is returned for
/// token `None` (n = 0) or `"<path>#n"`, and carries the token of page
/// `n + 1` if one exists.
#[derive(Debug, Default)]
pub struct MockStore {
    pages: HashMap<String, Vec<Vec<Parameter>>>,
    failures: HashMap<String, fn(&str) -> StoreError>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockStore {
    /// Create an empty mock store
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: serve `pages` for `path`
    pub fn with_pages(mut self, path: impl Into<String>, pages: Vec<Vec<Parameter>>) -> Self {
        self.pages.insert(path.into(), pages);
        self
    }

    /// Builder: serve a single page of `(name, value)` pairs for `path`
    pub fn with_path(self, path: impl Into<String>, entries: &[(&str, &str)]) -> Self {
        let page = entries
            .iter()
            .map(|(name, value)| Parameter::new(*name, *value))
            .collect();
        self.with_pages(path, vec![page])
    }

    /// Builder: fail every call that targets `target` (a path or a name)
    pub fn with_failure(mut self, target: impl Into<String>, make: fn(&str) -> StoreError) -> Self {
        self.failures.insert(target.into(), make);
        self
    }

    /// Calls made so far, in order
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn check_failure(&self, target: &str) -> Result<(), StoreError> {
        match self.failures.get(target) {
            Some(make) => Err(make(target)),
            None => Ok(()),
        }
    }
}

fn page_token(path: &str, index: usize) -> String {
    format!("{}#{}", path, index)
}

impl ParameterStore for MockStore {
    fn parameters_by_path(&self, request: &PageRequest<'_>) -> Result<ParameterPage, StoreError> {
        self.record(MockCall::ByPath {
            path: request.path.to_string(),
            next_token: request.next_token.map(str::to_string),
            max_results: request.max_results,
            with_decryption: request.with_decryption,
        });
        self.check_failure(request.path)?;

        let pages = self.pages.get(request.path).map(Vec::as_slice).unwrap_or(&[]);

        let index = match request.next_token {
            None => 0,
            Some(token) => token
                .strip_prefix(&format!("{}#", request.path))
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| StoreError::Service {
                    code: "InvalidNextToken".to_string(),
                    message: format!("token {} does not belong to {}", token, request.path),
                })?,
        };

        let parameters = pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < pages.len()).then(|| page_token(request.path, index + 1));

        Ok(ParameterPage {
            parameters,
            next_token,
        })
    }

    fn parameter(&self, name: &str, with_decryption: bool) -> Result<Parameter, StoreError> {
        self.record(MockCall::Get {
            name: name.to_string(),
            with_decryption,
        });
        self.check_failure(name)?;

        self.pages
            .values()
            .flatten()
            .flatten()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| StoreError::ParameterNotFound(name.to_string()))
    }
}
