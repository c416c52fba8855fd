use chrono::Weekday;
use storage::{Studio, dto::schedule::ClassSessionResponse};

/// Sessions for a weekday, decorated with availability and booking status
pub fn day_schedule(studio: &Studio, weekday: Weekday) -> Vec<ClassSessionResponse> {
    let bookings = studio.bookings();

    studio
        .schedule()
        .for_weekday(weekday)
        .iter()
        .map(|session| ClassSessionResponse::from_session(session, &bookings))
        .collect()
}
