use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{RawPerformance, ScaleTier};

/// Request payload for logging a result against a booked class.
///
/// All performance fields are optional at this layer; the log store
/// decides which ones the workout's modality actually requires.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutLogRequest {
    #[validate(length(min = 1, message = "workout id is required"))]
    pub workout_id: String,

    #[validate(range(max = 99, message = "minutes must be at most 99"))]
    pub minutes: Option<u32>,

    #[validate(range(max = 59, message = "seconds must be at most 59"))]
    pub seconds: Option<u32>,

    pub rounds: Option<u32>,

    pub reps: Option<u32>,

    pub weight: Option<Decimal>,

    #[serde(default = "default_scale")]
    pub scale: ScaleTier,

    #[validate(length(max = 1000))]
    #[serde(default)]
    pub notes: String,
}

fn default_scale() -> ScaleTier {
    ScaleTier::Rx
}

impl CreateWorkoutLogRequest {
    pub fn raw_performance(&self) -> RawPerformance {
        RawPerformance {
            minutes: self.minutes,
            seconds: self.seconds,
            rounds: self.rounds,
            reps: self.reps,
            weight: self.weight,
        }
    }
}
