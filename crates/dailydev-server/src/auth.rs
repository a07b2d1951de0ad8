//! Bearer Token Authentication
//!
//! [`AuthenticatedUser`] is the request guard every todo route takes. It
//! reads `Authorization: Bearer <token>`, verifies the token and loads the
//! user it names. On failure the request is routed to the 401 catcher with
//! the failure message left in the request-local cache.

use crate::state::ServerState;
use dailydev_domain::entities::User;
use dailydev_domain::error::Error;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::{debug, error};

/// Authorization header name
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Authorization scheme
pub const BEARER_SCHEME: &str = "Bearer";

/// Reason an authenticated request was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthFailure(pub String);

impl Default for AuthFailure {
    fn default() -> Self {
        Self("Unauthorized".to_string())
    }
}

/// Request guard resolving the bearer token to a user
///
/// ```rust,ignore
/// #[get("/profile")]
/// fn profile(user: AuthenticatedUser) -> Json<ProfileResponse> {
///     Json(ProfileResponse::from(user.0))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub User);

impl AuthenticatedUser {
    /// Id of the authenticated user
    pub fn id(&self) -> &str {
        &self.0.id
    }
}

/// Extract the token from an `Authorization` header value
///
/// The scheme is matched case-insensitively.
pub fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case(BEARER_SCHEME) {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

fn reject(
    request: &Request<'_>,
    status: Status,
    message: String,
) -> request::Outcome<AuthenticatedUser, AuthFailure> {
    let failure = request.local_cache(|| AuthFailure(message)).clone();
    Outcome::Error((status, failure))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthFailure;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<ServerState>() else {
            return reject(
                request,
                Status::InternalServerError,
                "Server state not configured".to_string(),
            );
        };

        let Some(header) = request.headers().get_one(AUTHORIZATION_HEADER) else {
            return reject(request, Status::Unauthorized, "Missing bearer token".to_string());
        };

        let Some(token) = bearer_token(header) else {
            return reject(
                request,
                Status::Unauthorized,
                "Authorization header must use the Bearer scheme".to_string(),
            );
        };

        match state.auth.verify_token(token).await {
            Ok(user) => Outcome::Success(AuthenticatedUser(user)),
            Err(Error::Authentication { message, .. }) => {
                debug!(reason = %message, "Bearer token rejected");
                reject(request, Status::Unauthorized, message)
            }
            Err(e) => {
                error!(error = %e, "Token verification failed");
                reject(
                    request,
                    Status::InternalServerError,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}
