//! Command to check an embedded path against its host's settings.

use crate::error::CliError;
use crate::utils::{load_configuration, print_report, GlobalOptions};
use clap::Args;
use shelfpath::embed::EmbedRegistry;

/// Check the path after `/embed/<SETTINGS_KEY>/` against the embed settings.
#[derive(Args)]
pub struct EmbedCommand {
    /// Key of the embedding settings
    #[arg(value_name = "SETTINGS_KEY")]
    pub settings_key: String,

    /// Path segments following the settings key
    #[arg(value_name = "SEGMENTS")]
    pub segments: String,
}

impl EmbedCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let registry = EmbedRegistry::from_config(&config);
        let parsed = registry.check(&self.settings_key, &self.segments)?;
        print_report(global, &config, &parsed)
    }
}
