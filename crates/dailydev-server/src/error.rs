//! HTTP error mapping
//!
//! | Domain error | Status |
//! |--------------|--------|
//! | `InvalidArgument` | 400 |
//! | `Authentication` | 401 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//! | anything else | 500 |
//!
//! Every error body is `{"message": "..."}`, including the ones produced by
//! Rocket itself (malformed JSON, unknown routes, rejected guards).

use crate::auth::AuthFailure;
use crate::models::MessageResponse;
use dailydev_domain::error::Error;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{Catcher, catch, catchers};
use tracing::{debug, error};

/// Message returned for every server-side failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Result type for route handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Domain error rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error
    pub fn status(&self) -> Status {
        match &self.0 {
            Error::InvalidArgument { .. } => Status::BadRequest,
            Error::Authentication { .. } => Status::Unauthorized,
            Error::NotFound { .. } => Status::NotFound,
            Error::Conflict { .. } => Status::Conflict,
            _ => Status::InternalServerError,
        }
    }

    /// Message safe to show the caller
    pub fn public_message(&self) -> String {
        match &self.0 {
            Error::InvalidArgument { message }
            | Error::Conflict { message }
            | Error::Authentication { message, .. } => message.clone(),
            Error::NotFound { resource } => resource.clone(),
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if self.0.is_client_error() {
            debug!(error = %self.0, path = %request.uri(), "Request rejected");
        } else {
            error!(error = %self.0, path = %request.uri(), "Request failed");
        }
        (status, Json(MessageResponse::new(self.public_message()))).respond_to(request)
    }
}

fn message(status: Status, text: impl Into<String>) -> (Status, Json<MessageResponse>) {
    (status, Json(MessageResponse::new(text)))
}

#[catch(400)]
fn bad_request() -> (Status, Json<MessageResponse>) {
    message(Status::BadRequest, "Malformed request body")
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> (Status, Json<MessageResponse>) {
    let failure = request.local_cache(AuthFailure::default);
    message(Status::Unauthorized, failure.0.clone())
}

#[catch(404)]
fn not_found() -> (Status, Json<MessageResponse>) {
    message(Status::NotFound, "Resource not found")
}

// Well-formed JSON of the wrong shape is reported like any other bad input
#[catch(422)]
fn unprocessable() -> (Status, Json<MessageResponse>) {
    message(Status::BadRequest, "Invalid request body")
}

#[catch(500)]
fn internal_error() -> (Status, Json<MessageResponse>) {
    message(Status::InternalServerError, INTERNAL_ERROR_MESSAGE)
}

#[catch(default)]
fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<MessageResponse>) {
    message(status, status.reason().unwrap_or("Request failed"))
}

/// JSON catchers for every framework-level failure
pub fn json_catchers() -> Vec<Catcher> {
    catchers![
        bad_request,
        unauthorized,
        not_found,
        unprocessable,
        internal_error,
        default_catcher
    ]
}
