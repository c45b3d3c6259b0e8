//! Library exports for shelfpath-cli.
//!
//! This module exports the CLI structure so the binary, the integration
//! tests and documentation tooling share one definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
