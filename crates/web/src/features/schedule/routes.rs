use axum::{Router, routing::get};
use storage::Studio;

use super::handlers::get_day_schedule;

pub fn routes() -> Router<Studio> {
    Router::new().route("/:weekday", get(get_day_schedule))
}
