//! Application ports
//!
//! Interfaces implemented by the infrastructure layer. Repository ports live
//! in `dailydev_domain::repositories`.

/// Password hashing and bearer token ports
pub mod crypto;

pub use crypto::{IssuedToken, PasswordHasher, TokenService};
