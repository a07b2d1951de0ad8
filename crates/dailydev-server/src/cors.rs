//! CORS Fairing
//!
//! Adds CORS headers to every response and answers preflight `OPTIONS`
//! requests, so the browser client can send `Authorization` headers.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::options;
use rocket::{Request, Response};

const ALLOWED_METHODS: &str = "GET, POST, PATCH, DELETE, OPTIONS";
const ALLOWED_HEADERS: &str = "Authorization, Content-Type";

/// CORS fairing for the configured origins
pub struct Cors {
    allowed_origins: Vec<String>,
}

impl Cors {
    /// Allow the given origins; `*` allows any
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self { allowed_origins }
    }

    fn allow_origin(&self, request_origin: Option<&str>) -> Option<String> {
        if self.allowed_origins.iter().any(|origin| origin == "*") {
            return Some("*".to_string());
        }
        let origin = request_origin?;
        self.allowed_origins
            .iter()
            .any(|allowed| allowed == origin)
            .then(|| origin.to_string())
    }
}

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS Headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        let Some(origin) = self.allow_origin(request.headers().get_one("Origin")) else {
            return;
        };

        if origin != "*" {
            response.set_header(Header::new("Vary", "Origin"));
        }
        response.set_header(Header::new("Access-Control-Allow-Origin", origin));
        response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
        response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
    }
}

/// Preflight responder for any path
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}
