use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Studio, dto::workout_log::CreateWorkoutLogRequest, models::WorkoutLogEntry,
};
use validator::Validate;

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    post,
    path = "/api/workouts/logs",
    request_body = CreateWorkoutLogRequest,
    responses(
        (status = 201, description = "Result logged", body = WorkoutLogEntry),
        (status = 400, description = "A performance field required by the workout's modality is missing"),
        (status = 404, description = "Unknown workout id")
    ),
    tag = "workouts"
)]
pub async fn create_workout_log(
    State(studio): State<Studio>,
    Json(req): Json<CreateWorkoutLogRequest>,
) -> WebResult<Response> {
    req.validate()?;

    let entry = services::log_workout(&studio, &req)?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/logs",
    responses(
        (status = 200, description = "All logged results, in submission order", body = Vec<WorkoutLogEntry>)
    ),
    tag = "workouts"
)]
pub async fn list_workout_logs(State(studio): State<Studio>) -> WebResult<Response> {
    let logs = services::workout_logs(&studio);

    Ok(Json(logs).into_response())
}
