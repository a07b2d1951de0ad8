//! Application bootstrap
//!
//! ```text
//! AppConfig → repositories (MongoDB | memory) ┐
//!           → PasswordService, JwtTokenService ┴→ AuthService, TodoService
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let context = init_app(config).await?;
//! let user_id = context.auth_service().register(registration).await?;
//! ```

use crate::config::{AppConfig, DatabaseProvider};
use crate::constants::DEFAULT_DATABASE_NAME;
use crate::crypto::{JwtTokenService, PasswordService};
use dailydev_application::{AuthService, TodoService};
use dailydev_domain::error::Result;
use dailydev_domain::repositories::{DailyTodoRepository, UserRepository};
use dailydev_providers::database::{MemoryDailyTodoRepository, MemoryUserRepository, MongoStore};
use std::sync::Arc;
use tracing::{info, warn};

/// Application context holding the configured services
#[derive(Clone)]
pub struct AppContext {
    /// Application configuration
    pub config: Arc<AppConfig>,
    auth_service: Arc<AuthService>,
    todo_service: Arc<TodoService>,
}

impl AppContext {
    /// Authentication service
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    /// Todo service
    pub fn todo_service(&self) -> Arc<TodoService> {
        Arc::clone(&self.todo_service)
    }
}

/// Build the application context, connecting to the configured store
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let (users, todos): (Arc<dyn UserRepository>, Arc<dyn DailyTodoRepository>) =
        match config.database.provider {
            DatabaseProvider::Mongodb => {
                let db = &config.database;
                let store = MongoStore::connect(
                    &db.uri,
                    db.database_name(),
                    DEFAULT_DATABASE_NAME,
                    &db.users_collection,
                    &db.todos_collection,
                )
                .await?;
                store.ensure_indexes().await?;
                (
                    Arc::new(store.user_repository()),
                    Arc::new(store.daily_todo_repository()),
                )
            }
            DatabaseProvider::Memory => {
                warn!("Using in-memory storage; data is lost on restart");
                (
                    Arc::new(MemoryUserRepository::new()),
                    Arc::new(MemoryDailyTodoRepository::new()),
                )
            }
        };

    init_app_with_repositories(config, users, todos)
}

/// Build the application context over already constructed repositories
pub fn init_app_with_repositories(
    config: AppConfig,
    users: Arc<dyn UserRepository>,
    todos: Arc<dyn DailyTodoRepository>,
) -> Result<AppContext> {
    let hasher = Arc::new(PasswordService::from_config(&config.auth.password));
    let tokens = Arc::new(JwtTokenService::new(&config.auth.jwt)?);

    info!(
        provider = ?config.database.provider,
        password_algorithm = ?hasher.algorithm(),
        "Application services initialized"
    );

    Ok(AppContext {
        auth_service: Arc::new(AuthService::new(users, hasher, tokens)),
        todo_service: Arc::new(TodoService::new(todos)),
        config: Arc::new(config),
    })
}
