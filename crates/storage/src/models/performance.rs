use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, StorageError};
use crate::models::WorkoutModality;

/// Scale tier of a logged performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScaleTier {
    Scaled,
    Rx,
    Rxplus,
}

impl ScaleTier {
    /// Whether the performance met the prescribed workout standards.
    pub fn is_rx(&self) -> bool {
        matches!(self, Self::Rx | Self::Rxplus)
    }
}

/// Performance fields exactly as submitted by the log form. Which fields
/// are required depends on the workout's modality; `Performance::from_raw`
/// enforces that.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RawPerformance {
    pub minutes: Option<u32>,
    pub seconds: Option<u32>,
    pub rounds: Option<u32>,
    pub reps: Option<u32>,
    pub weight: Option<Decimal>,
}

/// Typed performance payload. Each variant carries exactly the fields that
/// are valid for its modality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Performance {
    Time { minutes: u32, seconds: u32 },
    Rounds { rounds: u32, reps: Option<u32> },
    Load { weight: Decimal },
    Completion,
}

impl Performance {
    /// Builds the typed payload for a modality, rejecting submissions that
    /// miss the field the modality is scored by.
    pub fn from_raw(modality: WorkoutModality, raw: &RawPerformance) -> Result<Self> {
        match modality {
            WorkoutModality::ForTime => {
                if raw.minutes.is_none() && raw.seconds.is_none() {
                    return Err(StorageError::MissingField("time"));
                }
                Ok(Self::Time {
                    minutes: raw.minutes.unwrap_or(0),
                    seconds: raw.seconds.unwrap_or(0),
                })
            }
            WorkoutModality::Amrap => match raw.rounds {
                Some(rounds) => Ok(Self::Rounds {
                    rounds,
                    reps: raw.reps,
                }),
                None => Err(StorageError::MissingField("rounds")),
            },
            WorkoutModality::Strength => match raw.weight {
                Some(weight) => Ok(Self::Load { weight }),
                None => Err(StorageError::MissingField("weight")),
            },
            WorkoutModality::Emom => Ok(Self::Completion),
        }
    }
}
