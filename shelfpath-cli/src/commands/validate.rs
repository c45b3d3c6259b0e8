//! Command to validate a shelfpath configuration file.

use crate::error::CliError;
use crate::utils::{print_report, GlobalOptions};
use clap::Args;
use shelfpath::config::{ConfigLoader, ConfigValidator};
use shelfpath::output::ConfigSummary;
use std::path::PathBuf;

/// Validate a shelfpath configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the configuration
        if let Err(e) = ConfigValidator::validate(&config) {
            eprintln!("Validation error: {e}");
            return Err(CliError::SemanticFailure(
                "Configuration validation failed".to_string(),
            ));
        }

        print_report(global, &config, &ConfigSummary::new(&self.config_path, &config))
    }
}
