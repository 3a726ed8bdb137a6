//! Lookup command implementation
//!
//! Prints the raw value of a single parameter.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::Fetcher;
use crate::store::ParameterStore;

use std::io::Write;

/// Execute a single-key lookup under the first configured path
pub fn run_lookup<S: ParameterStore, W: Write>(
    store: &S,
    config: &Config,
    key: &str,
    out: &mut W,
) -> Result<()> {
    let path = config.first_path().ok_or(AppError::MissingPath)?;

    let value = Fetcher::new(store, config.aws.page_size).lookup(path, key)?;
    writeln!(out, "{}", value)?;
    out.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::mock::{MockCall, MockStore};

    fn config(paths: &[&str]) -> Config {
        let mut config = Config::default();
        config.paths = paths.iter().map(|p| p.to_string()).collect();
        config
    }

    #[test]
    fn test_lookup_prints_raw_value() {
        let store = MockStore::new().with_path("/app/prod", &[("/app/prod/DB_HOST", "db.internal")]);
        let mut out = Vec::new();

        run_lookup(&store, &config(&["/app/prod", "/ignored"]), "DB_HOST", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "db.internal\n");
        assert_eq!(store.calls().len(), 1);
    }

    #[test]
    fn test_lookup_without_path() {
        let store = MockStore::new();
        let mut out = Vec::new();

        let result = run_lookup(&store, &config(&[]), "DB_HOST", &mut out);

        assert!(matches!(result, Err(AppError::MissingPath)));
        assert!(out.is_empty());
        assert!(store.calls().is_empty());
    }

    #[test]
    fn test_lookup_missing_parameter() {
        let store = MockStore::new();
        let mut out = Vec::new();

        let result = run_lookup(&store, &config(&["/app"]), "NOPE", &mut out);

        assert!(matches!(
            result,
            Err(AppError::Store(StoreError::ParameterNotFound(ref name))) if name == "/app/NOPE"
        ));
        assert_eq!(
            store.calls(),
            vec![MockCall::Get {
                name: "/app/NOPE".to_string(),
                with_decryption: true,
            }]
        );
    }
}
