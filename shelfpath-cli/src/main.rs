//! Main entry point for the shelfpath CLI.
//!
//! This is the command-line interface for the shelfpath library. It
//! provides commands for working with collection paths:
//! - `parse`, `compose`, `target`: the path grammar and link composition
//! - `resolve`: apply a path's filters to a configured collection
//! - `route`, `embed`, `host`, `book-return`: site navigation helpers
//! - `validate`: check a configuration file

use clap::Parser;
use shelfpath_cli::cli::{Cli, Command};
use shelfpath_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records to stderr at the requested verbosity
    shelfpath::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        format: cli.format.map(Into::into),
    };

    // Execute the command
    let result = match cli.command {
        Command::Parse(cmd) => cmd.execute(&global),
        Command::Compose(cmd) => cmd.execute(&global),
        Command::Target(cmd) => cmd.execute(&global),
        Command::Resolve(cmd) => cmd.execute(&global),
        Command::Route(cmd) => cmd.execute(&global),
        Command::Embed(cmd) => cmd.execute(&global),
        Command::Host(cmd) => cmd.execute(&global),
        Command::BookReturn(cmd) => cmd.execute(&global),
        Command::Validate(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
