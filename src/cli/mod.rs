//! Console configuration and menus

use std::path::PathBuf;

use clap::Parser;

pub(crate) mod logging;
pub(crate) mod menu;
pub(crate) mod prompt;
pub(crate) mod render;

use logging::LoggingConfig;

/// Forecourt console configuration
#[derive(Debug, Parser)]
#[command(name = "forecourt", about = "Forecourt dealership console", long_about = None)]
pub(crate) struct Config {
    /// Currency of every salary and price (GBP, USD, EUR)
    #[arg(short, long, env = "FORECOURT_CURRENCY", default_value = "USD")]
    pub currency: String,

    /// YAML fixture to seed the dealership with
    #[arg(short, long, env = "FORECOURT_FIXTURE")]
    pub fixture: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub(crate) fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
