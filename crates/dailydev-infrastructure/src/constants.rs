//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `dailydev_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dailydev.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dailydev";

/// Environment variable prefix for configuration (`DAILYDEV__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "DAILYDEV";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Conventional MongoDB connection string variable
pub const MONGO_URI_ENV: &str = "MONGO_URI";

/// Conventional JWT signing secret variable
pub const JWT_SECRET_ENV: &str = "JWT_SECRET_KEY";

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// JWT default expiration time in seconds (24 hours)
pub const JWT_DEFAULT_EXPIRATION_SECS: u64 = dailydev_domain::constants::TOKEN_LIFETIME_SECS;

/// Issuer claim written to and required on every token
pub const JWT_DEFAULT_ISSUER: &str = "dailydev";

/// Minimum accepted length of the JWT signing secret
pub const JWT_MIN_SECRET_LENGTH: usize = 32;

/// Default bcrypt cost for password hashing
pub const BCRYPT_DEFAULT_COST: u32 = 12;

/// Length of the random salt fed to Argon2
pub const ARGON2_SALT_LENGTH: usize = 16;

// ============================================================================
// HTTP SERVER CONSTANTS
// ============================================================================

/// Default HTTP listen address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 5000;

/// Origin allowed by CORS when none is configured
pub const DEFAULT_CORS_ORIGIN: &str = "*";

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Default MongoDB connection string
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/dailydev";

/// Database used when neither the config nor the URI names one
pub const DEFAULT_DATABASE_NAME: &str = "dailydev";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding an `EnvFilter` directive
pub const LOG_FILTER_ENV: &str = "DAILYDEV_LOG";

/// File name stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "dailydev";
