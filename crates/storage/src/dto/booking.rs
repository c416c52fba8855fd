use chrono::NaiveTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{ClassSession, WorkoutModality};

/// A booked class ready to have a result logged against it. The modality
/// tag tells the log form which performance fields to ask for.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoggableWorkout {
    pub session_id: String,
    pub class_name: String,
    pub instructor: String,
    pub location: String,
    pub start_time: NaiveTime,
    pub workout_type: WorkoutModality,
    pub workout_details: String,
}

impl From<&ClassSession> for LoggableWorkout {
    fn from(session: &ClassSession) -> Self {
        Self {
            session_id: session.session_id.clone(),
            class_name: session.name.clone(),
            instructor: session.instructor.clone(),
            location: session.location.clone(),
            start_time: session.start_time,
            workout_type: WorkoutModality::classify(&session.name, &session.description),
            workout_details: session.description.clone(),
        }
    }
}
