//! Page size for paged listing calls
//!
//! The parameter store caps "get parameters by path" at ten results per page.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of parameters requested per page (1-10)
///
/// Validated on construction to ensure the service will accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageSize(u32);

impl PageSize {
    /// Smallest page the service accepts
    pub const MIN: u32 = 1;
    /// Largest page the service accepts
    pub const MAX: u32 = 10;

    /// Create a new PageSize with validation
    ///
    /// # Errors
    /// Returns `DomainError::InvalidPageSize` if value is 0 or above 10
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::InvalidPageSize {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value))
    }

    /// Get the page size as the SDK's integer type
    #[inline]
    pub const fn as_i32(&self) -> i32 {
        self.0 as i32
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageSize {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for u32 {
    fn from(size: PageSize) -> Self {
        size.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_valid() {
        assert_eq!(PageSize::new(1).unwrap().get(), 1);
        assert_eq!(PageSize::new(10).unwrap().as_i32(), 10);
    }

    #[test]
    fn test_page_size_out_of_range() {
        assert!(PageSize::new(0).is_err());
        assert!(matches!(
            PageSize::new(11),
            Err(DomainError::InvalidPageSize { value: 11, max: 10 })
        ));
    }

    #[test]
    fn test_page_size_default_is_service_max() {
        assert_eq!(PageSize::default().get(), PageSize::MAX);
    }

    #[test]
    fn test_page_size_deserialize_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            size: PageSize,
        }

        let ok: Wrapper = toml::from_str("size = 5").unwrap();
        assert_eq!(ok.size.get(), 5);

        let bad: Result<Wrapper, _> = toml::from_str("size = 25");
        assert!(bad.is_err());
    }
}
