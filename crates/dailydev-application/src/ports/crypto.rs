//! Crypto ports

use dailydev_domain::error::Result;
use serde::Serialize;

/// One-way salted password hashing
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password with a fresh random salt
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash
    ///
    /// Returns `Ok(false)` on mismatch; errors are reserved for hashes the
    /// implementation cannot parse.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Bearer token issued on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssuedToken {
    /// Encoded token
    pub token: String,
    /// Expiry as Unix seconds
    pub expires_at: u64,
}

/// Signed, expiring bearer tokens carrying a user id
pub trait TokenService: Send + Sync {
    /// Issue a token for the user
    fn issue(&self, user_id: &str) -> Result<IssuedToken>;

    /// Validate signature and expiry, returning the user id it carries
    fn verify(&self, token: &str) -> Result<String>;
}
