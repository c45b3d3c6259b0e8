//! Command to resolve a path against the configured collections.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::catalog::Catalog;
use shelfpath::location::{locate, Location};

/// Look up the collection a path names and apply its filters.
#[derive(Args)]
pub struct ResolveCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Fail on skip values that are not non-negative integers
    #[arg(long)]
    pub strict: bool,
}

impl ResolveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let catalog = Catalog::from_config(&config);
        log::debug!("catalog holds {} collections", catalog.len());

        let resolved = match locate(&catalog, &self.path)? {
            Location::Ready(resolved) => resolved,
            Location::Pending(parsed) => {
                return Err(CliError::SemanticFailure(format!(
                    "collection '{}' is still loading",
                    parsed.collection_name
                )));
            }
        };

        let report = if self.strict {
            resolved.try_report()?
        } else {
            resolved.report()
        };

        print_report(global, &config, &report)
    }
}
