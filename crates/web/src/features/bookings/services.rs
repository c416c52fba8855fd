use chrono::Weekday;
use storage::{Studio, dto::booking::LoggableWorkout};

/// Reserve a seat. Idempotent; a full class is the class card's concern
/// and an unknown session id is ignored rather than erroring.
pub fn book(studio: &Studio, session_id: &str) {
    if studio.schedule().find(session_id).is_none() {
        tracing::debug!(session_id, "ignoring booking for unknown session");
        return;
    }

    studio.bookings_mut().book(session_id);
}

/// Drop a reservation. No-op if the session was never booked.
pub fn cancel(studio: &Studio, session_id: &str) {
    studio.bookings_mut().cancel(session_id);
}

/// The day's booked classes, tagged with their classified modality so the
/// log form knows which performance fields to ask for.
pub fn booked_for_day(studio: &Studio, weekday: Weekday) -> Vec<LoggableWorkout> {
    let bookings = studio.bookings();

    studio
        .schedule()
        .for_weekday(weekday)
        .iter()
        .filter(|session| bookings.is_booked(&session.session_id))
        .map(LoggableWorkout::from)
        .collect()
}
