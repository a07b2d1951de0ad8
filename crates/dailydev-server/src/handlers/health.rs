//! Liveness probe

use crate::models::HealthResponse;
use rocket::get;
use rocket::serde::json::Json;

#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
