//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

use std::path::{Path, PathBuf};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must exist. Without one, the default locations are
    /// searched and defaults are kept when none is found.
    pub fn with_file(mut self, path: Option<&Path>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default()?,
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI paths; an empty list keeps the file's paths
    pub fn with_paths(mut self, paths: Vec<String>) -> Self {
        if !paths.is_empty() {
            self.config.paths = paths;
        }
        self
    }

    /// Override with CLI region
    pub fn with_region(mut self, region: Option<String>) -> Self {
        if let Some(r) = region {
            self.config.aws.region = r;
        }
        self
    }

    /// Override with CLI output format
    ///
    /// An explicit format also drops a template inherited from the file.
    pub fn with_output(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.output.format = f;
            self.config.output.template = None;
        }
        self
    }

    /// Override with CLI template file
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        if let Some(t) = template {
            self.config.output.template = Some(t);
        }
        self
    }

    /// Set the single key to look up
    pub fn with_key(mut self, key: Option<String>) -> Self {
        self.config.key = key;
        self
    }

    /// Build and validate the final configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
