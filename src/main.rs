//! Coinflip - a status-bar coin flip widget for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use coinflip_app::config;
use coinflip_core::logging;
use coinflip_core::prelude::*;

/// Coinflip - a status-bar coin flip widget for the terminal
#[derive(Parser, Debug)]
#[command(name = "coinflip")]
#[command(about = "A status-bar coin flip widget for the terminal", long_about = None)]
struct Args {
    /// Path to a config file (defaults to ~/.config/coinflip/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the data directory holding stats and logs
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref());
    if let Some(dir) = args.data_dir {
        settings.storage.data_dir = Some(dir);
    }

    logging::init(Some(&settings.data_dir()))?;
    info!("Config: {:?}", settings);

    coinflip_tui::run(settings).await
}
