use axum::{Router, routing::get};
use storage::Studio;

use super::handlers::get_leaderboard;

pub fn routes() -> Router<Studio> {
    Router::new().route("/:workout_id", get(get_leaderboard))
}
