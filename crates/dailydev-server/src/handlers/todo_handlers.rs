//! Todo routes
//!
//! Every route takes [`AuthenticatedUser`]; the user id never comes from
//! the request body or query.

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::models::{MarkTodoRequest, MessageResponse, SaveTodosRequest, TodoListResponse};
use crate::state::ServerState;
use dailydev_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, patch, post};

/// Todo list for a date, empty when none is stored
#[get("/todos?<date>")]
pub async fn get_todos(
    state: &State<ServerState>,
    user: AuthenticatedUser,
    date: Option<String>,
) -> ApiResult<Json<TodoListResponse>> {
    let list = state.todos.get_todos(user.id(), date.as_deref()).await?;
    Ok(Json(list.into()))
}

/// Replace the todo list for a date
#[post("/todos", data = "<body>")]
pub async fn save_todos(
    state: &State<ServerState>,
    user: AuthenticatedUser,
    body: Json<SaveTodosRequest>,
) -> ApiResult<(Status, Json<MessageResponse>)> {
    let SaveTodosRequest { date, todos } = body.into_inner();
    let todos = todos.ok_or_else(|| Error::missing_field("todos"))?;

    state
        .todos
        .save_todos(user.id(), date.as_deref(), todos)
        .await?;

    Ok((
        Status::Created,
        Json(MessageResponse::new("Todos saved successfully")),
    ))
}

/// Set the completion flag of one item
#[patch("/todos/mark", data = "<body>")]
pub async fn mark_todo(
    state: &State<ServerState>,
    user: AuthenticatedUser,
    body: Json<MarkTodoRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let MarkTodoRequest {
        date,
        todo_id,
        is_checked,
    } = body.into_inner();
    let is_checked = is_checked.ok_or_else(|| Error::missing_field("isChecked"))?;

    state
        .todos
        .mark_todo(
            user.id(),
            date.as_deref().unwrap_or_default(),
            todo_id.as_deref().unwrap_or_default(),
            is_checked,
        )
        .await?;

    Ok(Json(MessageResponse::new("Todo updated")))
}

/// Remove one item; `date` is required
#[delete("/todos/<todo_id>?<date>")]
pub async fn delete_todo(
    state: &State<ServerState>,
    user: AuthenticatedUser,
    todo_id: &str,
    date: Option<String>,
) -> ApiResult<Json<MessageResponse>> {
    state
        .todos
        .delete_todo(user.id(), date.as_deref(), todo_id)
        .await?;

    Ok(Json(MessageResponse::new("Todo deleted")))
}
