//! Authentication Use Case
//!
//! Registers users, exchanges credentials for bearer tokens, and resolves
//! tokens back to users for the request pipeline.

use crate::ports::{IssuedToken, PasswordHasher, TokenService};
use dailydev_domain::entities::{NewUser, User};
use dailydev_domain::error::{Error, Result};
use dailydev_domain::repositories::UserRepository;
use dailydev_domain::value_objects::EmailAddress;
use std::sync::{Arc, OnceLock};
use tracing::{debug, info, warn};

/// Message returned for every credential failure so callers cannot probe
/// which emails are registered
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Password hashed once and verified against on unknown-email logins, so both
/// failure paths pay for one hash check
const DUMMY_PASSWORD: &str = "dailydev-dummy-password";

/// Registration request
#[derive(Debug, Clone, Default)]
pub struct Registration {
    /// Raw email as submitted
    pub email: String,
    /// Plaintext password
    pub password: String,
    /// Optional given name
    pub first_name: Option<String>,
    /// Optional family name
    pub last_name: Option<String>,
}

/// Authentication service
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenService>,
    dummy_hash: Arc<OnceLock<String>>,
}

impl AuthService {
    /// Create a new auth service with injected dependencies
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
            dummy_hash: Arc::new(OnceLock::new()),
        }
    }

    /// Register a user and return the new user id
    pub async fn register(&self, registration: Registration) -> Result<String> {
        let email = EmailAddress::parse(&registration.email)?;
        if registration.password.is_empty() {
            return Err(Error::missing_field("password"));
        }

        if self.users.find_by_email(&email).await?.is_some() {
            debug!(email = %email, "Registration rejected, email exists");
            return Err(Error::conflict("Email already registered"));
        }

        let password_hash = self.hash_password(registration.password).await?;
        let new_user = NewUser::new(
            email,
            non_blank(registration.first_name),
            non_blank(registration.last_name),
            password_hash,
        );

        let user = self.users.insert(new_user).await?;
        info!(user_id = %user.id, "User registered");
        Ok(user.id)
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> Result<IssuedToken> {
        let email = EmailAddress::parse(email)?;
        if password.is_empty() {
            return Err(Error::missing_field("password"));
        }

        let Some(user) = self.users.find_by_email(&email).await? else {
            warn!("Login failed: unknown email");
            self.verify_dummy(password.to_string()).await;
            return Err(Error::authentication(INVALID_CREDENTIALS));
        };

        if !self
            .verify_password(password.to_string(), user.password_hash.clone())
            .await?
        {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(Error::authentication(INVALID_CREDENTIALS));
        }

        let token = self.tokens.issue(&user.id)?;
        info!(user_id = %user.id, "User logged in");
        Ok(token)
    }

    /// Resolve a bearer token to the user it was issued for
    ///
    /// Fails with `Error::Authentication` when the token is blank, invalid,
    /// expired, or names a user that no longer exists.
    pub async fn verify_token(&self, token: &str) -> Result<User> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::authentication("Missing bearer token"));
        }

        let user_id = self.tokens.verify(token)?;
        match self.users.find_by_id(&user_id).await? {
            Some(user) => Ok(user),
            None => {
                debug!(user_id = %user_id, "Token names an unknown user");
                Err(Error::authentication("User no longer exists"))
            }
        }
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| Error::internal(format!("Password hashing task failed: {e}")))?
    }

    async fn verify_dummy(&self, password: String) {
        let hasher = Arc::clone(&self.hasher);
        let dummy_hash = Arc::clone(&self.dummy_hash);
        let outcome = tokio::task::spawn_blocking(move || {
            let hash = dummy_hash.get_or_init(|| hasher.hash(DUMMY_PASSWORD).unwrap_or_default());
            hasher.verify(&password, hash)
        })
        .await;

        if outcome.is_err() {
            warn!("Dummy password verification task failed");
        }
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let outcome = tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| Error::internal(format!("Password verification task failed: {e}")))?;

        // An unparseable stored hash is treated like a wrong password
        match outcome {
            Ok(matched) => Ok(matched),
            Err(Error::Authentication { message, .. }) => {
                warn!(reason = %message, "Stored password hash rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
