//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookReturnCommand, CompletionsCommand, ComposeCommand, EmbedCommand, HostCommand,
    ParseCommand, ResolveCommand, RouteCommand, TargetCommand, ValidateCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use shelfpath::config::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for working with collection paths.
#[derive(Parser)]
#[command(name = "shelfpath")]
#[command(version, about = "Parse, compose and resolve collection paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read the user configuration from this directory
    #[arg(long, value_name = "PATH", global = true, env = "SHELFPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format (overrides configuration)
    #[arg(long, value_enum, value_name = "FORMAT", global = true, ignore_case = true)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum FormatArg {
    /// Human-readable text
    Human,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => Self::Human,
            FormatArg::Json => Self::Json,
            FormatArg::Yaml => Self::Yaml,
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Split a path into breadcrumbs, collection and filters
    Parse(ParseCommand),

    /// Join breadcrumbs, a collection and filters into a path
    Compose(ComposeCommand),

    /// Compose the link from one collection path to another
    Target(TargetCommand),

    /// Resolve a path against the configured collections
    Resolve(ResolveCommand),

    /// Classify a path by the page it leads to
    Route(RouteCommand),

    /// Check a path against an embedding host's settings
    Embed(EmbedCommand),

    /// Show the location an embedded page reports to its host
    Host(HostCommand),

    /// Show where to return to after leaving a book page
    BookReturn(BookReturnCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
