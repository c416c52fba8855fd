use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Performance, ScaleTier, WorkoutModality};

/// A logged performance. Immutable once accepted, lives for the lifetime
/// of the process.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutLogEntry {
    pub entry_id: Uuid,
    pub workout_id: String,
    pub workout_name: String,
    pub workout_details: String,
    pub instructor: String,
    pub modality: WorkoutModality,
    pub performance: Performance,
    pub scale: ScaleTier,
    pub notes: String,
    /// Submission order, strictly increasing across the store's lifetime.
    pub seq: u64,
    pub created_at: NaiveDateTime,
}
