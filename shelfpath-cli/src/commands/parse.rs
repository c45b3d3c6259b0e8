//! Command to split a path into its parts.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::path::ParsedPath;

/// Split a path into breadcrumbs, collection name and filters.
#[derive(Args)]
pub struct ParseCommand {
    /// Path to parse (the root collection when omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<String>,
}

impl ParseCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let parsed = ParsedPath::parse(self.path.as_deref());
        print_report(global, &config, &parsed)
    }
}
