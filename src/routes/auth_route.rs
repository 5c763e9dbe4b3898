use crate::models::auth::{LoginRequest, LoginResponse};
use crate::services::auth_service::AuthService;
use crate::utils::error::AppError;
use rocket::serde::json::{json, Json, Value};
use rocket::State;
use rocket_okapi::openapi;

/// Login: verify credentials and issue an opaque session token
#[openapi(tag = "Auth")]
#[post("/login", format = "json", data = "<request>")]
pub async fn login(
    request: Json<LoginRequest>,
    auth_service: &State<AuthService>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = auth_service.login(request.into_inner()).await?;
    Ok(Json(response))
}

/// Logout: no server-side session state exists, so this only acknowledges
#[openapi(tag = "Auth")]
#[post("/logout")]
pub async fn logout() -> Json<Value> {
    Json(json!({ "success": true }))
}
