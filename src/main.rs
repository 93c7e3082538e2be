// SPDX-License-Identifier: GPL-3.0-only
mod config;
mod console;
mod logging;
mod model;
mod render;
mod repository;

#[cfg(test)]
mod test_helpers;

use std::sync::Arc;
use tokio::io::BufReader;
use tracing::info;

use config::Config;
use console::Console;
use logging::setup_logging;
use repository::Repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    setup_logging(&config.log_level, config.log_ansi)?;

    info!("Starting depot-ledger v{}", env!("CARGO_PKG_VERSION"));

    let repos = Arc::new(Repositories::new());
    let mut console = Console::new(
        repos,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        config.show_tables,
    );
    console.run().await?;

    info!("Shutdown complete");
    Ok(())
}
