//! Server Initialization
//!
//! Loads configuration, initializes logging, bootstraps the application
//! services and launches Rocket.

use crate::routes::build_rocket;
use crate::state::ServerState;
use dailydev_infrastructure::config::loader::to_toml;
use dailydev_infrastructure::config::{AppConfig, ConfigLoader};
use dailydev_infrastructure::di::init_app;
use dailydev_infrastructure::logging::init_logging;
use std::path::Path;
use tracing::info;

/// Run the DailyDev server
///
/// With `dump_config` the effective configuration is printed as TOML and
/// the server is not started.
pub async fn run(
    config_path: Option<&Path>,
    dump_config: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;

    if dump_config {
        println!("{}", to_toml(&config)?);
        return Ok(());
    }

    init_logging(&config.logging)?;
    info!(
        host = %config.server.host,
        port = config.server.port,
        provider = ?config.database.provider,
        "Starting DailyDev server"
    );

    let context = init_app(config.clone()).await?;
    let state = ServerState::from_context(&context);

    // Rocket's own logger is silenced; tracing covers request failures
    let figment = rocket::Config::figment()
        .merge(("address", config.server.host.clone()))
        .merge(("port", config.server.port))
        .merge(("log_level", "off"));

    build_rocket(state, &config.server.cors)
        .configure(figment)
        .launch()
        .await?;

    info!("DailyDev server stopped");
    Ok(())
}

/// Load configuration from optional path
fn load_config(config_path: Option<&Path>) -> dailydev_domain::error::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}
