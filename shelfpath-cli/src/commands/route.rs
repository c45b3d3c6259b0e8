//! Command to classify a path by the page it leads to.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::route::RouteTable;

/// Classify a path: redirect, book, player, page, search or collection.
#[derive(Args)]
pub struct RouteCommand {
    /// Path to classify
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl RouteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let routes = RouteTable::from_config(&config);
        let route = routes.classify(&self.path);
        print_report(global, &config, &route)
    }
}
