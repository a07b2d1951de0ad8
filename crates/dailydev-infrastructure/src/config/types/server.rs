//! HTTP server configuration types

use crate::constants::{DEFAULT_CORS_ORIGIN, DEFAULT_HTTP_HOST, DEFAULT_HTTP_PORT};
use serde::{Deserialize, Serialize};

/// CORS configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerCorsConfig {
    /// Attach CORS headers to responses
    pub enabled: bool,
    /// Allowed origins; `*` allows any
    pub allowed_origins: Vec<String>,
}

impl Default for ServerCorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// CORS settings
    pub cors: ServerCorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            cors: ServerCorsConfig::default(),
        }
    }
}
