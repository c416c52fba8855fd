use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ClassKind, ClassSession, WorkoutModality};
use crate::store::BookingLedger;

/// A schedule row decorated with everything a class card renders.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassSessionResponse {
    pub session_id: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub name: String,
    pub instructor: String,
    pub location: String,
    pub kind: ClassKind,
    pub kind_label: String,
    pub capacity: u32,
    pub booked: u32,
    pub available_spots: u32,
    /// `Booked`, `Full`, `{n} left` or `{n} spots`.
    pub status: String,
    pub is_booked: bool,
    pub workout_type: WorkoutModality,
    pub description: String,
}

impl ClassSessionResponse {
    pub fn from_session(session: &ClassSession, bookings: &BookingLedger) -> Self {
        Self {
            session_id: session.session_id.clone(),
            start_time: session.start_time,
            end_time: session.end_time,
            name: session.name.clone(),
            instructor: session.instructor.clone(),
            location: session.location.clone(),
            kind: session.kind,
            kind_label: session.kind.label().to_owned(),
            capacity: session.capacity,
            booked: session.booked,
            available_spots: BookingLedger::available_seats(session),
            status: bookings.status(session).to_string(),
            is_booked: bookings.is_booked(&session.session_id),
            workout_type: WorkoutModality::classify(&session.name, &session.description),
            description: session.description.clone(),
        }
    }
}
