//! Service layer for parameter retrieval
//!
//! Services encapsulate the fetch logic on top of the parameter store seam.

pub mod fetcher;

pub use fetcher::Fetcher;
