//! Command handlers
//!
//! Each command handler orchestrates one mode of the tool.

pub mod fetch;
pub mod lookup;

pub use fetch::run_fetch;
pub use lookup::run_lookup;
