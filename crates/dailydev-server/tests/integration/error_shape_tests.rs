//! Framework-level failures keep the `{message}` body

use crate::helpers::{body_json, test_client};
use rocket::http::{ContentType, Header, Status};

#[rocket::async_test]
async fn test_malformed_json_returns_400_message() {
    let client = test_client().await;
    let response = client
        .post("/register")
        .header(ContentType::JSON)
        .body("{not json")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert!(body_json(response).await["message"].is_string());
}

#[rocket::async_test]
async fn test_wrong_field_type_returns_400_message() {
    let client = test_client().await;
    let response = client
        .post("/register")
        .header(ContentType::JSON)
        .body(r#"{"email": 42, "password": true}"#)
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(body_json(response).await["message"], "Invalid request body");
}

#[rocket::async_test]
async fn test_unknown_route_returns_404_message() {
    let client = test_client().await;
    let response = client.get("/nowhere").dispatch().await;

    assert_eq!(response.status(), Status::NotFound);
    assert_eq!(body_json(response).await["message"], "Resource not found");
}

#[rocket::async_test]
async fn test_health_and_cors_headers() {
    let client = test_client().await;
    let response = client
        .get("/health")
        .header(Header::new("Origin", "http://localhost:3000"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );
    assert_eq!(body_json(response).await["status"], "healthy");
}

#[rocket::async_test]
async fn test_preflight_returns_204() {
    let client = test_client().await;
    let response = client
        .options("/todos/mark")
        .header(Header::new("Origin", "http://localhost:3000"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::NoContent);
    assert!(
        response
            .headers()
            .get_one("Access-Control-Allow-Headers")
            .is_some_and(|h| h.contains("Authorization"))
    );
}
