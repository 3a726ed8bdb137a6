//! ssm-params - AWS SSM Parameter Store exporter
//!
//! Fetches parameters by path and prints them as JSON, shell exports,
//! plain text, ECS environment definitions or through a template.

use clap::Parser;
use ssm_params::cli::args::{generate_completions, Cli};
use ssm_params::commands::{run_fetch, run_lookup};
use ssm_params::config::ConfigBuilder;
use ssm_params::error::{AppError, StoreError};
use ssm_params::store::SsmStore;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Usage errors exit 1; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let output = cli.output_format();
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_paths(cli.paths)
        .with_region(cli.region)
        .with_output(output)
        .with_template(cli.template)
        .with_key(cli.key)
        .build()?;

    // Usage error; reject before building a client
    if config.key.is_some() && config.first_path().is_none() {
        return Err(AppError::MissingPath);
    }

    let store = SsmStore::connect(&config.aws.region)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.key.as_deref() {
        Some(key) => run_lookup(&store, &config, key, &mut out),
        None => run_fetch(&store, &config, &mut out),
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::MissingPath => {
            eprintln!();
            eprintln!("Usage: ssm-params --path <PATH> --key <KEY>");
        }
        AppError::Store(StoreError::AccessDenied(_)) | AppError::Store(StoreError::Request(_)) => {
            eprintln!();
            eprintln!("Hint: Check your AWS credentials (AWS_PROFILE, AWS_ACCESS_KEY_ID, ...)");
            eprintln!("      and that they allow ssm:GetParametersByPath and ssm:GetParameter.");
        }
        AppError::Store(StoreError::Unreachable(_)) => {
            eprintln!();
            eprintln!("Hint: Check --region and network connectivity to the SSM endpoint.");
        }
        AppError::Store(StoreError::ParameterNotFound(_)) => {
            eprintln!();
            eprintln!("Hint: --key is appended to the first --path; check both.");
        }
        _ => {}
    }
}
