use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use chrono::Weekday;
use storage::{Studio, dto::schedule::ClassSessionResponse};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    get,
    path = "/api/schedule/{weekday}",
    params(
        ("weekday" = String, Path, description = "Day of week, e.g. `mon` or `monday`")
    ),
    responses(
        (status = 200, description = "Classes for the day with availability and booking status", body = Vec<ClassSessionResponse>),
        (status = 400, description = "Unrecognized weekday")
    ),
    tag = "schedule"
)]
pub async fn get_day_schedule(
    State(studio): State<Studio>,
    Path(weekday): Path<String>,
) -> WebResult<Response> {
    let weekday: Weekday = weekday
        .parse()
        .map_err(|_| WebError::BadRequest(format!("Unrecognized weekday: {weekday}")))?;

    let sessions = services::day_schedule(&studio, weekday);

    Ok(Json(sessions).into_response())
}
