//! Command to build a path from its parts.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::output::ComposedPath;
use shelfpath::path::compose;

/// Join breadcrumbs, a collection name and filters into a path.
#[derive(Args)]
pub struct ComposeCommand {
    /// Collection the path leads to
    #[arg(value_name = "COLLECTION")]
    pub collection: String,

    /// Breadcrumb preceding the collection (repeatable, in order)
    #[arg(long = "breadcrumb", short = 'b', value_name = "KEY")]
    pub breadcrumbs: Vec<String>,

    /// Filter body without the leading ':' (repeatable, in order)
    #[arg(long = "filter", short = 'f', value_name = "KIND:VALUE")]
    pub filters: Vec<String>,
}

impl ComposeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.collection.trim().is_empty() {
            return Err(CliError::InvalidArguments(
                "collection name cannot be empty".to_string(),
            ));
        }

        let config = load_configuration(global)?;
        let path = compose(&self.breadcrumbs, &self.collection, &self.filters);
        print_report(global, &config, &ComposedPath::new(path))
    }
}
