//! Password hashing service using Argon2 or bcrypt

use crate::config::{PasswordAlgorithm, PasswordConfig};
use crate::constants::ARGON2_SALT_LENGTH;
use crate::error_ext::ErrorContext;
use argon2::password_hash::{PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString};
use argon2::Argon2;
use dailydev_application::PasswordHasher;
use dailydev_domain::error::{Error, Result};
use rand::Rng;

/// Password hashing service
///
/// New hashes use the configured algorithm. Verification reads the
/// algorithm from the hash itself (`$argon2...` PHC strings or `$2...`
/// bcrypt strings), so switching algorithms keeps existing accounts valid.
#[derive(Clone)]
pub struct PasswordService {
    algorithm: PasswordAlgorithm,
    bcrypt_cost: u32,
    argon2: Argon2<'static>,
}

impl PasswordService {
    /// Create a password service for the given algorithm
    pub fn new(algorithm: PasswordAlgorithm, bcrypt_cost: u32) -> Self {
        Self {
            algorithm,
            bcrypt_cost,
            argon2: Argon2::default(),
        }
    }

    /// Create a password service from configuration
    pub fn from_config(config: &PasswordConfig) -> Self {
        Self::new(config.algorithm, config.bcrypt_cost)
    }

    /// Algorithm used for new hashes
    pub fn algorithm(&self) -> PasswordAlgorithm {
        self.algorithm
    }

    /// Hash a password with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        match self.algorithm {
            PasswordAlgorithm::Argon2 => self.hash_argon2(password),
            PasswordAlgorithm::Bcrypt => bcrypt::hash(password, self.bcrypt_cost)
                .context("Password hashing failed"),
        }
    }

    /// Verify a password against its hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        if hash.starts_with("$argon2") {
            let parsed_hash = PasswordHash::new(hash).map_err(|e| {
                Error::authentication(format!("Invalid password hash format: {e}"))
            })?;
            Ok(self
                .argon2
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok())
        } else if hash.starts_with("$2") {
            bcrypt::verify(password, hash).auth_context("Invalid password hash format")
        } else {
            Err(Error::authentication("Unsupported password hash format"))
        }
    }

    fn hash_argon2(&self, password: &str) -> Result<String> {
        let mut salt_bytes = [0u8; ARGON2_SALT_LENGTH];
        rand::rng().fill(&mut salt_bytes);
        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| Error::infrastructure(format!("Salt encoding failed: {e}")))?;

        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))?;

        Ok(password_hash.to_string())
    }
}

impl Default for PasswordService {
    fn default() -> Self {
        Self::from_config(&PasswordConfig::default())
    }
}

impl PasswordHasher for PasswordService {
    fn hash(&self, password: &str) -> Result<String> {
        self.hash_password(password)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        self.verify_password(password, hash)
    }
}
