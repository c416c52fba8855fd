use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Studio,
    dto::admin::{CreateCoachRequest, CreateMemberRequest, CreateWorkoutTemplateRequest},
    models::{Coach, Member, WorkoutTemplate},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/admin/coaches",
    responses(
        (status = 200, description = "The coach roster", body = Vec<Coach>),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn list_coaches(State(studio): State<Studio>) -> WebResult<Response> {
    services::require_admin(&studio)?;

    Ok(Json(services::list_coaches(&studio)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/coaches",
    request_body = CreateCoachRequest,
    responses(
        (status = 201, description = "Coach added", body = Coach),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn create_coach(
    State(studio): State<Studio>,
    Json(req): Json<CreateCoachRequest>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    req.validate()?;

    let coach = services::create_coach(&studio, req);

    Ok((StatusCode::CREATED, Json(coach)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/coaches/{id}",
    params(
        ("id" = Uuid, Path, description = "Coach id")
    ),
    responses(
        (status = 204, description = "Coach removed"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Coach not found")
    ),
    tag = "admin"
)]
pub async fn delete_coach(
    State(studio): State<Studio>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    services::delete_coach(&studio, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/members",
    responses(
        (status = 200, description = "The member roster", body = Vec<Member>),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn list_members(State(studio): State<Studio>) -> WebResult<Response> {
    services::require_admin(&studio)?;

    Ok(Json(services::list_members(&studio)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/members",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member added", body = Member),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn create_member(
    State(studio): State<Studio>,
    Json(req): Json<CreateMemberRequest>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    req.validate()?;

    let member = services::create_member(&studio, req);

    Ok((StatusCode::CREATED, Json(member)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/members/{id}",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Member not found")
    ),
    tag = "admin"
)]
pub async fn delete_member(
    State(studio): State<Studio>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    services::delete_member(&studio, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/admin/templates",
    responses(
        (status = 200, description = "Workout templates", body = Vec<WorkoutTemplate>),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn list_templates(State(studio): State<Studio>) -> WebResult<Response> {
    services::require_admin(&studio)?;

    Ok(Json(services::list_templates(&studio)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/admin/templates",
    request_body = CreateWorkoutTemplateRequest,
    responses(
        (status = 201, description = "Template created", body = WorkoutTemplate),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Admin role required")
    ),
    tag = "admin"
)]
pub async fn create_template(
    State(studio): State<Studio>,
    Json(req): Json<CreateWorkoutTemplateRequest>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    req.validate()?;

    let template = services::create_template(&studio, req);

    Ok((StatusCode::CREATED, Json(template)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/admin/templates/{id}",
    params(
        ("id" = Uuid, Path, description = "Template id")
    ),
    responses(
        (status = 204, description = "Template removed"),
        (status = 401, description = "Admin role required"),
        (status = 404, description = "Template not found")
    ),
    tag = "admin"
)]
pub async fn delete_template(
    State(studio): State<Studio>,
    Path(id): Path<Uuid>,
) -> WebResult<Response> {
    services::require_admin(&studio)?;
    services::delete_template(&studio, id)?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
