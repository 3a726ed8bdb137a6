//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging. The result is
//! one immutable [`Config`] handed to the fetch and render stages.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::args::OutputFormat;
use crate::cli::output::Renderer;
use crate::domain::PageSize;
use crate::error::{ConfigError, RenderError};
use crate::template::Template;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Region used when neither the CLI nor a config file names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Parameter paths, read in order
    pub paths: Vec<String>,
    /// AWS settings
    pub aws: AwsConfig,
    /// Output settings
    pub output: OutputConfig,
    /// Single key to look up under the first path (CLI only)
    #[serde(skip)]
    pub key: Option<String>,
}

/// AWS client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AwsConfig {
    /// Region to query
    pub region: String,
    /// Parameters requested per page
    pub page_size: PageSize,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            page_size: PageSize::default(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Built-in output format
    pub format: OutputFormat,
    /// Template file; takes precedence over `format`
    pub template: Option<PathBuf>,
}

impl OutputConfig {
    /// Build the renderer, loading and parsing the template if one is set
    pub fn renderer(&self) -> Result<Renderer, RenderError> {
        match &self.template {
            Some(path) => Ok(Renderer::Template(Template::from_file(path)?)),
            None => Ok(Renderer::Format(self.format)),
        }
    }
}

impl Config {
    /// Check values that deserialization alone cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.aws.region.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "aws.region".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(path) = self.paths.iter().find(|p| p.is_empty()) {
            return Err(ConfigError::InvalidValue {
                key: "paths".to_string(),
                message: format!("empty path {:?}", path),
            });
        }
        Ok(())
    }

    /// Path used for single-key lookups
    pub fn first_path(&self) -> Option<&str> {
        self.paths.first().map(String::as_str)
    }
}
