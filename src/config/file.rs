//! Configuration file loading
//!
//! Handles loading configuration from TOML files.

use crate::config::Config;
use crate::error::ConfigError;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::FileNotFound(path.display().to_string()),
            _ => ConfigError::Read {
                path: path.display().to_string(),
                source,
            },
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the first default location that exists
    ///
    /// A file that exists but fails to parse is an error rather than being
    /// skipped.
    pub fn load_default() -> Result<Option<Config>, ConfigError> {
        for path in Self::default_paths() {
            if path.exists() {
                let config = Self::load(&path)?;
                log::info!("Loaded config from {}", path.display());
                return Ok(Some(config));
            }
        }
        Ok(None)
    }

    /// Get default configuration file paths
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // System-wide config
        paths.push(PathBuf::from("/etc/ssm-params/config.toml"));

        // User config
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("ssm-params/config.toml"));
        }

        // Current directory
        paths.push(PathBuf::from("ssm-params.toml"));
        paths.push(PathBuf::from(".ssm-params.toml"));

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_paths_not_empty() {
        let paths = ConfigFile::default_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.ends_with("config.toml")
            || p.ends_with("ssm-params.toml")
            || p.ends_with(".ssm-params.toml")));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigFile::load("/nonexistent/path/config.toml");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "paths = [\"/app\"]\n[aws]\nregion = \"eu-west-1\"\npage_size = 5").unwrap();

        let config = ConfigFile::load(file.path()).unwrap();
        assert_eq!(config.paths, vec!["/app"]);
        assert_eq!(config.aws.region, "eu-west-1");
        assert_eq!(config.aws.page_size.get(), 5);
    }

    #[test]
    fn test_load_invalid_page_size() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[aws]\npage_size = 50").unwrap();

        match ConfigFile::load(file.path()) {
            Err(err @ ConfigError::TomlError(_)) => {
                assert!(err.to_string().contains("Invalid page size: 50"));
            }
            other => panic!("Expected TomlError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_unreadable_path_is_not_reported_missing() {
        let dir = tempfile::TempDir::new().unwrap();

        let result = ConfigFile::load(dir.path());
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
