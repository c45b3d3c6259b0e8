//! Command to compose a link relative to the current path.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::output::ComposedPath;
use shelfpath::path::compose_target_path;

/// Compose the link from the current path to a child collection or filter.
#[derive(Args)]
pub struct TargetCommand {
    /// Path of the page the link appears on
    #[arg(value_name = "CURRENT")]
    pub current: String,

    /// Collection key, or a ':'-prefixed filter, to append
    #[arg(value_name = "TARGET", allow_hyphen_values = true)]
    pub target: String,
}

impl TargetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = compose_target_path(&self.current, &self.target);
        print_report(global, &config, &ComposedPath::new(path))
    }
}
