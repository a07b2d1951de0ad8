//! Storage configuration types

use crate::constants::DEFAULT_MONGO_URI;
use dailydev_domain::constants::{DAILY_TODOS_COLLECTION, USERS_COLLECTION};
use serde::{Deserialize, Serialize};

/// Storage backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseProvider {
    /// MongoDB server
    #[default]
    Mongodb,
    /// Process-local maps, lost on restart
    Memory,
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend selection
    pub provider: DatabaseProvider,
    /// MongoDB connection string (also read from `MONGO_URI`)
    pub uri: String,
    /// Database name; when unset the name in the URI path is used
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Users collection
    pub users_collection: String,
    /// Per-day todo collection
    pub todos_collection: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: DatabaseProvider::default(),
            uri: DEFAULT_MONGO_URI.to_string(),
            name: None,
            users_collection: USERS_COLLECTION.to_string(),
            todos_collection: DAILY_TODOS_COLLECTION.to_string(),
        }
    }
}

impl DatabaseConfig {
    /// Configured database name, ignoring blank values
    pub fn database_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
