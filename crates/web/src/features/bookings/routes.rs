use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Studio;

use super::handlers::{book_class, cancel_booking, list_booked_classes};

pub fn routes() -> Router<Studio> {
    Router::new()
        .route("/:session_id", post(book_class))
        .route("/:session_id", delete(cancel_booking))
        .route("/day/:weekday", get(list_booked_classes))
}
