//! ssm-params - AWS SSM Parameter Store export library
//!
//! This library provides the fetch and render logic behind the
//! `ssm-params` binary.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and output rendering
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Parameter types
//! - [`error`]: Error types
//! - [`services`]: Paginated fetch logic
//! - [`store`]: Parameter store abstraction layer
//! - [`template`]: User-supplied output templates

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod store;
pub mod template;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{AppError, Result};
