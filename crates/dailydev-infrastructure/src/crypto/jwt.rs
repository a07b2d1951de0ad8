//! HS256 bearer tokens

use crate::config::JwtConfig;
use crate::error_ext::ErrorContext;
use dailydev_application::{IssuedToken, TokenService};
use dailydev_domain::error::{Error, Result};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Issued at (Unix seconds)
    pub iat: u64,
    /// Expiry (Unix seconds)
    pub exp: u64,
    /// Issuer
    pub iss: String,
}

/// Issues and verifies HS256 tokens signed with a shared secret
///
/// Expiry is checked with zero leeway and the issuer must match.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    expiration_secs: u64,
}

impl JwtTokenService {
    /// Create a token service from configuration
    pub fn new(config: &JwtConfig) -> Result<Self> {
        if config.secret.is_empty() {
            return Err(Error::configuration("JWT secret cannot be empty"));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "iss"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            expiration_secs: config.expiration_secs,
        })
    }

    /// Issue a token as if it were created at `issued_at` (Unix seconds)
    pub fn issue_token_at(&self, user_id: &str, issued_at: u64) -> Result<IssuedToken> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at,
            exp: issued_at.saturating_add(self.expiration_secs),
            iss: self.issuer.clone(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("Failed to sign token")?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// Validate a token and return its claims
    pub fn decode_claims(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .auth_context("Invalid or expired token")
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: &str) -> Result<IssuedToken> {
        self.issue_token_at(user_id, jsonwebtoken::get_current_timestamp())
    }

    fn verify(&self, token: &str) -> Result<String> {
        self.decode_claims(token).map(|claims| claims.sub)
    }
}
