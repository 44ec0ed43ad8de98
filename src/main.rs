//! Forecourt dealership console

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use forecourt::{dealership::Dealership, fixtures::DealershipFixture, pricing::parse_currency};

use crate::cli::{Config, logging, menu::Console};

mod cli;

/// Forecourt console entry point
fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|error| error.exit());

    logging::init(&config.logging)?;

    let currency = parse_currency(&config.currency)?;
    let mut dealership = Dealership::new(currency);

    if let Some(path) = config.fixture.as_deref() {
        let fixture = DealershipFixture::from_path(path)
            .with_context(|| format!("failed to read fixture {}", path.display()))?;

        fixture
            .seed(&mut dealership)
            .with_context(|| format!("failed to seed from fixture {}", path.display()))?;
    }

    info!(currency = currency.iso_alpha_code, "console started");

    let stdin = io::stdin();
    let stdout = io::stdout();

    Console::new(dealership, stdin.lock(), stdout.lock()).run()?;

    Ok(())
}
