//! Main application configuration

use super::{AuthConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
///
/// Every section falls back to its defaults, so a config file only needs
/// the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Password hashing and token configuration
    pub auth: AuthConfig,
    /// Storage configuration
    pub database: DatabaseConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}
