use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Studio, dto::leaderboard::Leaderboard};

use crate::error::WebResult;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboard/{workout_id}",
    params(
        ("workout_id" = String, Path, description = "Class session id the results were logged against")
    ),
    responses(
        (status = 200, description = "Ranked board; an illustrative board is returned when no logs match", body = Leaderboard)
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(studio): State<Studio>,
    Path(workout_id): Path<String>,
) -> WebResult<Response> {
    let board = services::leaderboard_for(&studio, &workout_id);

    Ok(Json(board).into_response())
}
