//! rpcdoc CLI - Command-line interface for JSON-RPC method documentation
//!
//! This is the main entry point for the rpcdoc CLI application, providing
//! commands for validating method definitions, inspecting their parameter
//! trees, and rendering markdown reference pages.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::{Error, Result};
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Configuration is needed before logging starts, so failures here go
    // straight to stderr
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    if !config.output.color {
        control::set_override(false);
    }

    // Initialize logging
    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Run the application
    match run(cli, &config) {
        Ok(()) => process::exit(0),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: Error) -> ! {
    eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

    if e.should_show_help() {
        eprintln!("\nFor more information, try '--help'");
    }

    process::exit(e.exit_code());
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let format = cli
        .output_format(config.output.format.as_deref())
        .map_err(Error::config)?;
    let use_color = cli.use_color() && config.output.color;

    // Create output writer
    let mut output = OutputWriter::new(format, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Validate(args) => handlers::handle_validate(args, config, &mut output),
        Commands::List(args) => handlers::handle_list(args, config, &mut output),
        Commands::Params(args) => handlers::handle_params(args, config, &mut output),
        Commands::Render(args) => handlers::handle_render(args, config, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let verbosity = cli.verbosity_level();

    // Create logging configuration from CLI args, the config file, and environment
    let mut logging_config = LoggingConfig::from_verbosity(verbosity);
    logging_config.merge_with_file(&config.logging, verbosity);
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        // Test verbose flag
        let cli = Cli::parse_from(["rpcdoc", "-vv", "validate", "methods/"]);
        assert_eq!(cli.verbosity_level(), 2);

        // Test quiet flag
        let cli = Cli::parse_from(["rpcdoc", "--quiet", "validate", "methods/"]);
        assert_eq!(cli.verbosity_level(), 0);

        // Quiet and verbose conflict
        assert!(Cli::try_parse_from(["rpcdoc", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn test_run_reports_missing_method() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("eth_chainId.json");
        std::fs::write(
            &file,
            r#"{"method": "eth_chainId", "network": "ethereum", "cu": 0}"#,
        )
        .unwrap();

        let cli = Cli::parse_from([
            "rpcdoc",
            "-q",
            "-o",
            "json",
            "params",
            file.to_str().unwrap(),
            "--method",
            "eth_call",
        ]);
        let error = run(cli, &Config::default()).unwrap_err();
        assert_eq!(error.exit_code(), 7);
    }
}
