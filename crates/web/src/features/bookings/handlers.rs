use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::Weekday;
use storage::{Studio, dto::booking::LoggableWorkout};

use crate::error::{WebError, WebResult};

use super::services;

#[utoipa::path(
    post,
    path = "/api/bookings/{session_id}",
    params(
        ("session_id" = String, Path, description = "Class session id")
    ),
    responses(
        (status = 204, description = "Seat reserved; booking an already-booked or unknown session is a no-op")
    ),
    tag = "bookings"
)]
pub async fn book_class(
    State(studio): State<Studio>,
    Path(session_id): Path<String>,
) -> WebResult<Response> {
    services::book(&studio, &session_id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{session_id}",
    params(
        ("session_id" = String, Path, description = "Class session id")
    ),
    responses(
        (status = 204, description = "Reservation removed; cancelling an unknown session is a no-op")
    ),
    tag = "bookings"
)]
pub async fn cancel_booking(
    State(studio): State<Studio>,
    Path(session_id): Path<String>,
) -> WebResult<Response> {
    services::cancel(&studio, &session_id);

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/bookings/day/{weekday}",
    params(
        ("weekday" = String, Path, description = "Day of week, e.g. `mon` or `monday`")
    ),
    responses(
        (status = 200, description = "Booked classes for the day, tagged with their scoring modality", body = Vec<LoggableWorkout>),
        (status = 400, description = "Unrecognized weekday")
    ),
    tag = "bookings"
)]
pub async fn list_booked_classes(
    State(studio): State<Studio>,
    Path(weekday): Path<String>,
) -> WebResult<Response> {
    let weekday: Weekday = weekday
        .parse()
        .map_err(|_| WebError::BadRequest(format!("Unrecognized weekday: {weekday}")))?;

    let workouts = services::booked_for_day(&studio, weekday);

    Ok(Json(workouts).into_response())
}
