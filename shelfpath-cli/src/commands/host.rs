//! Command to show the location an embedded page reports to its host.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::embed::host_location;
use shelfpath::output::ComposedPath;
use shelfpath::route::RouteTable;

/// Show the location an embedded page reports to the page hosting it.
#[derive(Args)]
pub struct HostCommand {
    /// Path of the embedded page
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Query string to carry along, including the leading '?'
    #[arg(long, value_name = "QUERY", default_value = "")]
    pub search: String,
}

impl HostCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let routes = RouteTable::from_config(&config);

        let Some(location) = host_location(&routes, &self.path, &self.search) else {
            return Err(CliError::SemanticFailure(format!(
                "{} would nest one embed inside another",
                self.path
            )));
        };

        print_report(global, &config, &ComposedPath::new(location))
    }
}
