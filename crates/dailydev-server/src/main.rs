//! DailyDev server binary

use clap::Parser;
use dailydev_server::run;

/// Command line interface for the DailyDev server
#[derive(Parser, Debug)]
#[command(name = "dailydev")]
#[command(about = "DailyDev - accounts and per-day todo lists over HTTP")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub dump_config: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref(), cli.dump_config).await
}
