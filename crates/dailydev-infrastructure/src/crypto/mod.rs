//! Cryptographic adapters
//!
//! | Type | Port | Description |
//! |------|------|-------------|
//! | [`PasswordService`] | `PasswordHasher` | Argon2id or bcrypt hashing |
//! | [`JwtTokenService`] | `TokenService` | HS256 bearer tokens |

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtTokenService};
pub use password::PasswordService;
