use axum::{
    Router,
    routing::{get, post},
};
use storage::Studio;

use super::handlers::{create_workout_log, list_workout_logs};

pub fn routes() -> Router<Studio> {
    Router::new()
        .route("/logs", post(create_workout_log))
        .route("/logs", get(list_workout_logs))
}
