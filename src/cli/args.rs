//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments.

use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Fetch SSM parameters by path and render them
///
/// Parameters are keyed by the last segment of their name; a later path
/// overrides an earlier one when both define the same key.
#[derive(Parser, Debug)]
#[command(name = "ssm-params")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Parameter path to read from (repeatable)
    #[arg(short, long = "path", value_name = "PATH", action = ArgAction::Append)]
    pub paths: Vec<String>,

    /// AWS region [default: us-east-1]
    #[arg(short, long)]
    pub region: Option<String>,

    /// Output format [default: json]
    #[arg(short, long, value_enum, conflicts_with = "shell")]
    pub output: Option<OutputFormat>,

    /// Output shell export statements (same as --output shell)
    #[arg(long)]
    pub shell: bool,

    /// Print the raw value of a single key under the first path and exit
    #[arg(short, long)]
    pub key: Option<String>,

    /// Render through a template file instead of a built-in format
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "SSM_PARAMS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Output format requested on the command line, if any
    pub fn output_format(&self) -> Option<OutputFormat> {
        if self.shell {
            Some(OutputFormat::Shell)
        } else {
            self.output
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Indented JSON object of key to value
    #[default]
    Json,
    /// `export KEY="VALUE"` lines
    Shell,
    /// `KEY=VALUE` lines
    Text,
    /// Indented JSON array of {"name", "value"} sorted by name
    Ecs,
    /// The compact ECS array embedded as a string under "JSONString"
    TerraformEcs,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_repeated_paths() {
        let args =
            Cli::try_parse_from(["ssm-params", "--path", "/a", "-p", "/b", "--path", "/c"]).unwrap();
        assert_eq!(args.paths, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_cli_defaults_left_unset() {
        let args = Cli::try_parse_from(["ssm-params"]).unwrap();
        assert!(args.paths.is_empty());
        assert!(args.region.is_none());
        assert!(args.output_format().is_none());
        assert!(args.key.is_none());
    }

    #[test]
    fn test_cli_parse_output_formats() {
        let args = Cli::try_parse_from(["ssm-params", "-o", "terraform-ecs"]).unwrap();
        assert_eq!(args.output_format(), Some(OutputFormat::TerraformEcs));

        let args = Cli::try_parse_from(["ssm-params", "--output", "text"]).unwrap();
        assert_eq!(args.output_format(), Some(OutputFormat::Text));
    }

    #[test]
    fn test_cli_unknown_output_rejected() {
        let result = Cli::try_parse_from(["ssm-params", "--output", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_shell_flag() {
        let args = Cli::try_parse_from(["ssm-params", "--shell"]).unwrap();
        assert_eq!(args.output_format(), Some(OutputFormat::Shell));
    }

    #[test]
    fn test_cli_shell_conflicts_with_output() {
        let result = Cli::try_parse_from(["ssm-params", "--shell", "--output", "json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_key_lookup() {
        let args =
            Cli::try_parse_from(["ssm-params", "-p", "/app", "-k", "DB_HOST", "-r", "eu-west-1"])
                .unwrap();
        assert_eq!(args.key.as_deref(), Some("DB_HOST"));
        assert_eq!(args.region.as_deref(), Some("eu-west-1"));
    }

    #[test]
    fn test_output_format_deserializes_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }

        let w: Wrapper = toml::from_str(r#"format = "terraform-ecs""#).unwrap();
        assert_eq!(w.format, OutputFormat::TerraformEcs);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
