//! Configuration types module

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, JwtConfig, PasswordAlgorithm, PasswordConfig};
pub use database::{DatabaseConfig, DatabaseProvider};
pub use logging::LoggingConfig;
pub use server::{ServerConfig, ServerCorsConfig};
