use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Crossfit,
    Opengym,
}

impl ClassKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Crossfit => "CrossFit",
            Self::Opengym => "Open Gym",
        }
    }
}

/// A bookable class on the weekly timetable.
///
/// Capacity and booked counts come from the front desk system and are
/// treated as authoritative; seat arithmetic lives on the booking ledger.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClassSession {
    pub session_id: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub name: String,
    pub instructor: String,
    pub location: String,
    pub kind: ClassKind,
    pub capacity: u32,
    pub booked: u32,
    pub description: String,
}
