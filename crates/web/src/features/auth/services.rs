use storage::{Studio, dto::auth::LoginRequest, models::User};

/// Sign in. Credentials are never verified; the request's role becomes
/// the session's role flag.
pub fn login(studio: &Studio, req: LoginRequest) -> User {
    let user = req.into_user();
    tracing::info!(email = %user.email, role = ?user.role, "user signed in");

    *studio.session_user_mut() = Some(user.clone());
    user
}

pub fn logout(studio: &Studio) {
    *studio.session_user_mut() = None;
}

pub fn current_user(studio: &Studio) -> Option<User> {
    studio.session_user().clone()
}
