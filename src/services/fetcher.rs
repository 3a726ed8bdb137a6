//! Parameter fetch service
//!
//! Drains the paged "get parameters by path" listing into a single flat
//! [`ParameterSet`], and performs single-parameter lookups.

use crate::domain::{join_key, short_name, PageSize, ParameterSet};
use crate::error::StoreError;
use crate::store::{PageRequest, ParameterStore};

/// SecureString values are always returned decrypted
const WITH_DECRYPTION: bool = true;

/// Service for fetching parameters from a store
pub struct Fetcher<'a, S: ParameterStore> {
    store: &'a S,
    page_size: PageSize,
}

impl<'a, S: ParameterStore> Fetcher<'a, S> {
    /// Create a new fetcher over a store
    pub fn new(store: &'a S, page_size: PageSize) -> Self {
        Self { store, page_size }
    }

    /// Fetch every parameter under every path into one set
    ///
    /// Paths are processed in order, so a later path shadows an earlier one
    /// when both hold a parameter with the same last segment. The first
    /// store error aborts the whole fetch.
    pub fn fetch_all<P: AsRef<str>>(&self, paths: &[P]) -> Result<ParameterSet, StoreError> {
        let mut set = ParameterSet::new();
        for path in paths {
            self.fetch_path(path.as_ref(), &mut set)?;
        }
        log::debug!("Fetched {} parameters from {} paths", set.len(), paths.len());
        Ok(set)
    }

    /// Fetch all pages under one path into `set`
    pub fn fetch_path(&self, path: &str, set: &mut ParameterSet) -> Result<(), StoreError> {
        log::info!("Fetching parameters under {}", path);

        let mut next_token: Option<String> = None;
        let mut page_number = 0usize;

        loop {
            let request = PageRequest {
                path,
                with_decryption: WITH_DECRYPTION,
                max_results: self.page_size.as_i32(),
                next_token: next_token.as_deref(),
            };
            let page = self.store.parameters_by_path(&request)?;
            page_number += 1;

            log::debug!(
                "{} page {}: {} parameters{}",
                path,
                page_number,
                page.parameters.len(),
                if page.has_more() { ", more to follow" } else { "" }
            );

            for parameter in page.parameters {
                let name = parameter.name.clone();
                // Values are decrypted; never log them
                if set.insert(parameter).is_some() {
                    log::debug!("{} shadows an earlier {}", name, short_name(&name));
                }
            }

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        Ok(())
    }

    /// Look up a single value by joining `path` and `key`
    pub fn lookup(&self, path: &str, key: &str) -> Result<String, StoreError> {
        let name = join_key(path, key);
        log::info!("Looking up {}", name);
        Ok(self.store.parameter(&name, WITH_DECRYPTION)?.value)
    }
}
