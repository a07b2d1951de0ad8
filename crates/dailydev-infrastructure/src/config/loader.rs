//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables,
//! and default values.

use crate::config::{AppConfig, DatabaseProvider};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    JWT_MIN_SECRET_LENGTH, JWT_SECRET_ENV, MONGO_URI_ENV,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use dailydev_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Prefixed environment variables (e.g., `DAILYDEV__SERVER__PORT`)
    /// 4. `MONGO_URI` and `JWT_SECRET_KEY`
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    /// Merged configuration sources, before extraction
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            let exists = config_path.exists();
            if exists {
                figment = figment.merge(Toml::file(config_path));
            }
            log_config_loaded(config_path, exists);
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        // Double underscore nests: DAILYDEV__AUTH__JWT__SECRET -> auth.jwt.secret
        figment
            .merge(
                Env::prefixed(&format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}"))
                    .split(CONFIG_ENV_SEPARATOR),
            )
            .merge(
                Env::raw()
                    .only(&[MONGO_URI_ENV])
                    .map(|_| "database.uri".into()),
            )
            .merge(
                Env::raw()
                    .only(&[JWT_SECRET_ENV])
                    .map(|_| "auth.jwt.secret".into()),
            )
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string = to_toml(config)?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    /// Find the first existing default configuration file
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a configuration as pretty TOML
pub fn to_toml(config: &AppConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config to TOML")
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_auth_config(config)?;
    validate_database_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_auth_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.secret.is_empty() {
        return Err(Error::configuration(format!(
            "JWT secret is not set; configure {JWT_SECRET_ENV} or auth.jwt.secret"
        )));
    }
    if jwt.secret.len() < JWT_MIN_SECRET_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {JWT_MIN_SECRET_LENGTH} characters long"
        )));
    }
    if jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    if !(4..=31).contains(&config.auth.password.bcrypt_cost) {
        return Err(Error::configuration("bcrypt cost must be between 4 and 31"));
    }
    Ok(())
}

fn validate_database_config(config: &AppConfig) -> Result<()> {
    if config.database.provider == DatabaseProvider::Mongodb && config.database.uri.trim().is_empty()
    {
        return Err(Error::configuration(format!(
            "MongoDB URI is required; configure {MONGO_URI_ENV} or database.uri"
        )));
    }
    if config.database.users_collection.is_empty() || config.database.todos_collection.is_empty()
    {
        return Err(Error::configuration("Collection names cannot be empty"));
    }
    Ok(())
}
