//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading and report printing.

use crate::error::CliError;
use shelfpath::config::OutputFormat;
use shelfpath::output::{render, Report};
use shelfpath::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,

    /// Output format from the command line.
    pub format: Option<OutputFormat>,
}

impl GlobalOptions {
    /// The output format to use: the command line wins over configuration.
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format
            .or(config.output_format)
            .unwrap_or_default()
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. Project configuration files
/// 3. User configuration (`--config-dir` or `~/.shelfpath`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    log::debug!(
        "loaded configuration with {} collections",
        config.collections.as_ref().map_or(0, Vec::len)
    );

    Ok(config)
}

/// Print a report to stdout in the selected format.
pub fn print_report<R: Report + ?Sized>(
    global: &GlobalOptions,
    config: &Config,
    report: &R,
) -> Result<(), CliError> {
    let text = render(report, global.output_format(config))?;
    println!("{text}");
    Ok(())
}
