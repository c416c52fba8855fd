use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{Studio, dto::auth::LoginRequest, models::User};
use validator::Validate;

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed in; any credentials are accepted and the requested role is assigned", body = User),
        (status = 400, description = "Malformed login payload")
    ),
    tag = "auth"
)]
pub async fn login(
    State(studio): State<Studio>,
    Json(req): Json<LoginRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let user = services::login(&studio, req);

    Ok(Json(user).into_response())
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 204, description = "Session cleared")
    ),
    tag = "auth"
)]
pub async fn logout(State(studio): State<Studio>) -> WebResult<Response> {
    services::logout(&studio);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "The signed-in user", body = User),
        (status = 401, description = "Nobody is signed in")
    ),
    tag = "auth"
)]
pub async fn current_user(State(studio): State<Studio>) -> WebResult<Response> {
    let user = services::current_user(&studio).ok_or(WebError::Unauthorized)?;

    Ok(Json(user).into_response())
}
