//! Unified error types for ssm-params
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the remote parameter store
    #[error("Parameter store error: {0}")]
    Store(#[from] StoreError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error while rendering output
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Single-key lookup requested without any path
    #[error("--key requires at least one --path")]
    MissingPath,

    /// IO error (stdout, file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from parameter store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to start the runtime driving the SDK client
    #[error("Failed to initialize parameter store client: {0}")]
    InitializationFailed(String),

    /// Parameter does not exist
    #[error("Parameter not found: {0}")]
    ParameterNotFound(String),

    /// Credentials missing, expired or lacking permission
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// Request rate exceeded
    #[error("Request throttled: {0}")]
    Throttled(String),

    /// Network failure or timeout reaching the service
    #[error("Service unreachable: {0}")]
    Unreachable(String),

    /// Request could not be built (usually missing credentials or region)
    #[error("Failed to construct request: {0}")]
    Request(String),

    /// Any other error reported by the service
    #[error("{code}: {message}")]
    Service { code: String, message: String },

    /// Response lacked a field every parameter must carry
    #[error("Malformed response: parameter without {0}")]
    MalformedResponse(&'static str),

    /// Unclassified error
    #[error("{0}")]
    Unknown(String),
}

/// Errors from domain type validation
///
/// Raised while deserializing configuration, so it reaches callers wrapped
/// in [`ConfigError::TomlError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Page size outside what the service accepts
    #[error("Invalid page size: {value} (valid range: 1-{max})")]
    InvalidPageSize { value: u32, max: u32 },
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Config file exists but could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid config value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Errors from output rendering
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template file could not be read
    #[error("Failed to read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Template text is malformed
    #[error("Template syntax error at line {line}: {message}")]
    TemplateSyntax { line: usize, message: String },
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
