//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use rpcdoc_schemas::Section;
use std::path::PathBuf;

/// rpcdoc - JSON-RPC method documentation toolkit
///
/// Validate method definition files, inspect their parameter trees,
/// and render them as markdown reference pages.
#[derive(Parser, Debug)]
#[command(
    name = "rpcdoc",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "RPCDOC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results [default: human, or `output.format` from the config file]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate method definition files
    Validate(ValidateArgs),

    /// List the methods found in definition files
    List(ListArgs),

    /// Show the flattened parameter rows of one method
    Params(ParamsArgs),

    /// Render markdown reference pages
    Render(RenderArgs),

    /// Manage configuration files and settings
    Config(ConfigArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the validate command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Definition files or directories (JSON or YAML)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Also list every method that passed
    #[arg(long)]
    pub detailed: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Definition files or directories (JSON or YAML)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Only list methods on this network (case-insensitive)
    #[arg(short, long)]
    pub network: Option<String>,
}

/// Arguments for the params command
#[derive(Parser, Debug)]
pub struct ParamsArgs {
    /// Definition files or directories (JSON or YAML)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Method name, e.g. eth_getBalance
    #[arg(short, long)]
    pub method: String,

    /// Which parameter tree to show
    #[arg(short, long, value_enum, default_value = "request")]
    pub section: SectionArg,

    /// Nesting limit (overrides `render.max_depth`)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Definition files or directories (JSON or YAML)
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Render only this method
    #[arg(short, long)]
    pub method: Option<String>,

    /// Output file, or a directory to write one `{method}.md` per page
    #[arg(long = "save-to", value_name = "OUTPUT")]
    pub save_to: Option<PathBuf>,

    /// Leave out code samples
    #[arg(long)]
    pub no_snippets: bool,

    /// Leave out the table of contents
    #[arg(long)]
    pub no_toc: bool,

    /// Nesting limit (overrides `render.max_depth`)
    #[arg(long)]
    pub max_depth: Option<usize>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a configuration file with default values
    Init(ConfigInitArgs),

    /// Show the effective configuration
    Show(ConfigShowArgs),
}

/// Arguments for config init
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write; the extension picks the syntax
    #[arg(value_name = "FILE", default_value = ".rpcdoc.yaml")]
    pub path: PathBuf,

    /// Force overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for config show
#[derive(Parser, Debug)]
pub struct ConfigShowArgs {
    /// Show configuration in specified format
    #[arg(short, long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Configuration file formats
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    /// TOML format
    Toml,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Parameter tree selector
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    /// Request parameters
    Request,
    /// Response fields
    Response,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }

    /// The `-o` flag, else the config file's format, else human
    pub fn output_format(&self, configured: Option<&str>) -> Result<OutputFormat, String> {
        match (self.output, configured) {
            (Some(format), _) => Ok(format),
            (None, Some(name)) => OutputFormat::from_str(name, true)
                .map_err(|_| format!("unknown output format '{}' in config", name)),
            (None, None) => Ok(OutputFormat::Human),
        }
    }
}

impl From<SectionArg> for Section {
    fn from(section: SectionArg) -> Self {
        match section {
            SectionArg::Request => Section::Request,
            SectionArg::Response => Section::Response,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}
