pub mod admin;
pub mod auth;
pub mod bookings;
pub mod leaderboard;
pub mod schedule;
pub mod workouts;
