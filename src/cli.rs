//! Command-line interface for love_arcade.

use clap::Parser;
use std::path::PathBuf;

/// Love Arcade - a terminal arcade of two-player mini-games
#[derive(Parser, Debug)]
#[command(name = "love_arcade")]
#[command(about = "Two-player couch mini-games in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (player names, accepted name, mute)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for deterministic randomness (shuffles, spawns, trivia coin)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Suppress all tone cues
    #[arg(long)]
    pub muted: bool,

    /// Log file path (logs never go to the terminal while the TUI runs)
    #[arg(long, default_value = "love_arcade.log")]
    pub log_file: PathBuf,
}
