use axum::{
    Router,
    routing::{get, post},
};
use storage::Studio;

use super::handlers::{current_user, login, logout};

pub fn routes() -> Router<Studio> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(current_user))
}
