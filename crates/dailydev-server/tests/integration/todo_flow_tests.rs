//! Todo routes over HTTP

use crate::helpers::{bearer, body_json, signed_in, test_client};
use rocket::http::Status;
use serde_json::json;

#[rocket::async_test]
async fn test_save_then_get_returns_items_in_order() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;

    let response = client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({
            "date": "2024-01-01",
            "todos": [
                { "id": "b", "todo": "Second", "description": "", "isChecked": true },
                { "id": "a", "todo": "First", "description": "x", "isChecked": false }
            ]
        }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    assert_eq!(body_json(response).await["message"], "Todos saved successfully");

    let response = client
        .get("/todos?date=2024-01-01")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let body = body_json(response).await;
    assert_eq!(body["date"], "2024-01-01");
    assert!(body["_id"].is_string());
    assert!(body["userId"].is_string());
    assert_eq!(
        body["todos"],
        json!([
            { "id": "b", "todo": "Second", "description": "", "isChecked": true },
            { "id": "a", "todo": "First", "description": "x", "isChecked": false }
        ])
    );
}

#[rocket::async_test]
async fn test_buy_milk_gets_generated_id() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;

    client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({
            "date": "2024-01-01",
            "todos": [{ "todo": "buy milk", "isChecked": false }]
        }))
        .dispatch()
        .await;

    let body = body_json(
        client
            .get("/todos?date=2024-01-01")
            .header(bearer(&token))
            .dispatch()
            .await,
    )
    .await;

    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["todo"], "buy milk");
    assert_eq!(todos[0]["isChecked"], false);
    assert!(todos[0]["id"].as_str().is_some_and(|id| !id.is_empty()));
}

#[rocket::async_test]
async fn test_get_without_list_returns_empty_structure() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;

    let response = client
        .get("/todos?date=1999-12-31")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(
        body_json(response).await,
        json!({ "date": "1999-12-31", "todos": [] })
    );
}

#[rocket::async_test]
async fn test_lists_are_private_per_user() {
    let client = test_client().await;
    let ada = signed_in(&client, "ada@example.com").await;
    let bob = signed_in(&client, "bob@example.com").await;

    client
        .post("/todos")
        .header(bearer(&ada))
        .json(&json!({ "date": "2024-01-01", "todos": [{ "id": "1", "todo": "secret" }] }))
        .dispatch()
        .await;

    let body = body_json(
        client
            .get("/todos?date=2024-01-01")
            .header(bearer(&bob))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(body["todos"], json!([]));
}

#[rocket::async_test]
async fn test_mark_then_mark_again_returns_404() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;
    client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01", "todos": [{ "id": "1", "todo": "A" }] }))
        .dispatch()
        .await;

    let mark = json!({ "date": "2024-01-01", "todoId": "1", "isChecked": true });
    let response = client
        .patch("/todos/mark")
        .header(bearer(&token))
        .json(&mark)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(body_json(response).await["message"], "Todo updated");

    let response = client
        .patch("/todos/mark")
        .header(bearer(&token))
        .json(&mark)
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .patch("/todos/mark")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01", "todoId": "missing", "isChecked": true }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}

#[rocket::async_test]
async fn test_mark_accepts_completed_alias_and_requires_fields() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;
    client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01", "todos": [{ "id": "1", "todo": "A" }] }))
        .dispatch()
        .await;

    let response = client
        .patch("/todos/mark")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01", "todoId": "1", "completed": true }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .patch("/todos/mark")
        .header(bearer(&token))
        .json(&json!({ "todoId": "1", "isChecked": false }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(body_json(response).await["message"], "date is required");
}

#[rocket::async_test]
async fn test_delete_removes_one_item_and_requires_date() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;
    client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({
            "date": "2024-01-01",
            "todos": [{ "id": "1", "todo": "A" }, { "id": "2", "todo": "B" }]
        }))
        .dispatch()
        .await;

    let response = client
        .delete("/todos/1")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let response = client
        .delete("/todos/1?date=2024-01-01")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .delete("/todos/1?date=2024-01-01")
        .header(bearer(&token))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    let body = body_json(
        client
            .get("/todos?date=2024-01-01")
            .header(bearer(&token))
            .dispatch()
            .await,
    )
    .await;
    assert_eq!(body["todos"], json!([{ "id": "2", "todo": "B", "description": "", "isChecked": false }]));
}

#[rocket::async_test]
async fn test_save_rejects_duplicate_ids_and_missing_list() {
    let client = test_client().await;
    let token = signed_in(&client, "ada@example.com").await;

    let response = client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01", "todos": [{ "id": "1" }, { "id": "1" }] }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);

    let response = client
        .post("/todos")
        .header(bearer(&token))
        .json(&json!({ "date": "2024-01-01" }))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    assert_eq!(body_json(response).await["message"], "todos is required");
}
