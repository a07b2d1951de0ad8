//! Account routes

use crate::auth::AuthenticatedUser;
use crate::error::ApiResult;
use crate::models::{LoginRequest, LoginResponse, ProfileResponse, RegisterRequest, RegisterResponse};
use crate::state::ServerState;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};

/// Create an account
#[post("/register", data = "<body>")]
pub async fn register(
    state: &State<ServerState>,
    body: Json<RegisterRequest>,
) -> ApiResult<(Status, Json<RegisterResponse>)> {
    let user_id = state.auth.register(body.into_inner().into()).await?;

    Ok((
        Status::Created,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// Exchange credentials for a bearer token
#[post("/login", data = "<body>")]
pub async fn login(
    state: &State<ServerState>,
    body: Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let LoginRequest { email, password } = body.into_inner();
    let issued = state
        .auth
        .login(
            email.as_deref().unwrap_or_default(),
            password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(LoginResponse {
        token: issued.token,
    }))
}

/// The authenticated user
#[get("/profile")]
pub fn profile(user: AuthenticatedUser) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(user.0))
}
