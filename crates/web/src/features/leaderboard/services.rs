use storage::{Studio, dto::leaderboard::Leaderboard, services::leaderboard};

/// Rank every log for a workout. Rows are labelled with the session
/// user's name; all logs belong to that one user.
pub fn leaderboard_for(studio: &Studio, workout_id: &str) -> Leaderboard {
    let athlete = studio
        .session_user()
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_else(|| "You".to_owned());

    let logs = studio.workout_logs();

    leaderboard::rank(logs.entries(), workout_id, &athlete)
}
