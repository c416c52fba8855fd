use axum::{
    Router,
    routing::{delete, get, post},
};
use storage::Studio;

use super::handlers::{
    create_coach, create_member, create_template, delete_coach, delete_member, delete_template,
    list_coaches, list_members, list_templates,
};

pub fn routes() -> Router<Studio> {
    Router::new()
        .route("/coaches", get(list_coaches))
        .route("/coaches", post(create_coach))
        .route("/coaches/:id", delete(delete_coach))
        .route("/members", get(list_members))
        .route("/members", post(create_member))
        .route("/members/:id", delete(delete_member))
        .route("/templates", get(list_templates))
        .route("/templates", post(create_template))
        .route("/templates/:id", delete(delete_template))
}
