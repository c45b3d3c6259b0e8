//! Command to show where a reader goes after leaving a book page.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::output::ComposedPath;
use shelfpath::path::book_return_path;

/// Show the collection path to return to from a book page.
#[derive(Args)]
pub struct BookReturnCommand {
    /// Path of the book page
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl BookReturnCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let path = book_return_path(&self.path);
        print_report(global, &config, &ComposedPath::new(path))
    }
}
