//! Configuration management
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Typed configuration sections with defaults |
//! | [`loader`] | Figment-based layered loading and validation |

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, AuthConfig, DatabaseConfig, DatabaseProvider, JwtConfig, LoggingConfig,
    PasswordAlgorithm, PasswordConfig, ServerConfig, ServerCorsConfig,
};
