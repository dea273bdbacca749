//! CLI argument parsing for firstline

use std::path::PathBuf;

use clap::Parser;
use firstwords::Screen;

/// First Line - creative intros and mood check-ins in your terminal
#[derive(Parser, Debug)]
#[command(name = "fl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short, long)]
    pub log_level: Option<String>,

    /// Seed for reproducible affirmations
    #[arg(long)]
    pub seed: Option<u64>,

    /// Screen to open on launch
    #[arg(long, value_enum)]
    pub screen: Option<Screen>,
}

/// Where log output goes
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("firstline")
        .join("logs")
        .join("firstline.log")
}
