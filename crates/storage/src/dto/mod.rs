pub mod admin;
pub mod auth;
pub mod booking;
pub mod leaderboard;
pub mod schedule;
pub mod workout_log;
