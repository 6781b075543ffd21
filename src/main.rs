//! Love Arcade entry point.

use anyhow::Result;
use clap::Parser;
use love_arcade::cli::Cli;
use love_arcade::config::ArcadeConfig;
use love_arcade::rng::ArcadeRng;
use love_arcade::tui;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to file so tracing output never corrupts the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Love Arcade");

    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::from_file(path)?,
        None => ArcadeConfig::default(),
    };
    if cli.muted {
        config = config.with_muted();
    }

    let rng = match cli.seed {
        Some(seed) => {
            info!(seed, "seeded run");
            ArcadeRng::new(seed)
        }
        None => ArcadeRng::from_entropy(),
    };

    tui::run(config, rng)
}
