//! Build script for shelfpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("shelfpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse, compose and resolve collection paths")
        .long_about(
            "Command-line tool for the path grammar of a library browser: \
             breadcrumbs, collections and filters",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Read the user configuration from this directory")
                .value_name("PATH")
                .global(true)
                .env("SHELFPATH_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (overrides configuration)")
                .value_name("FORMAT")
                .value_parser(["human", "json", "yaml"])
                .global(true),
        )
        .subcommands(vec![
            Command::new("parse")
                .about("Split a path into breadcrumbs, collection and filters")
                .long_about("Parse a path; an empty path names the root collection"),
            Command::new("compose")
                .about("Join breadcrumbs, a collection and filters into a path")
                .long_about("Build a path from --breadcrumb and --filter values in order"),
            Command::new("target")
                .about("Compose the link from one collection path to another")
                .long_about("Append a child collection or a filter to the current path"),
            Command::new("resolve")
                .about("Resolve a path against the configured collections")
                .long_about("Look up the collection a path names and apply its filters"),
            Command::new("route")
                .about("Classify a path by the page it leads to")
                .long_about("Report whether a path is a redirect, book, player, page, search or collection"),
            Command::new("embed")
                .about("Check a path against an embedding host's settings")
                .long_about("Check the path after /embed/<key>/ against the configured embed settings"),
            Command::new("host")
                .about("Show the location an embedded page reports to its host")
                .long_about("Reduce an embedded page's path to the location sent to the host page"),
            Command::new("book-return")
                .about("Show where to return to after leaving a book page")
                .long_about("Strip the book segment and id from a book page path"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a shelfpath configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main shelfpath.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("shelfpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
