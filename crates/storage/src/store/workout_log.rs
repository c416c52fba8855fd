use chrono::Utc;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Performance, RawPerformance, ScaleTier, WorkoutLogEntry, WorkoutModality};

/// A candidate entry as submitted by the presentation layer. The raw
/// performance fields are checked against the modality before anything is
/// stored.
#[derive(Debug, Clone)]
pub struct NewWorkoutLog {
    pub workout_id: String,
    pub workout_name: String,
    pub workout_details: String,
    pub instructor: String,
    pub modality: WorkoutModality,
    pub performance: RawPerformance,
    pub scale: ScaleTier,
    pub notes: String,
}

/// Append-only log of performances. No update or delete exists.
#[derive(Debug, Default)]
pub struct WorkoutLogStore {
    entries: Vec<WorkoutLogEntry>,
    next_seq: u64,
}

impl WorkoutLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the candidate against its declared modality and appends
    /// it. On rejection the store is left unchanged.
    pub fn append(&mut self, candidate: NewWorkoutLog) -> Result<WorkoutLogEntry> {
        let performance = Performance::from_raw(candidate.modality, &candidate.performance)?;

        let seq = self.next_seq;
        self.next_seq += 1;

        let entry = WorkoutLogEntry {
            entry_id: Uuid::new_v4(),
            workout_id: candidate.workout_id,
            workout_name: candidate.workout_name,
            workout_details: candidate.workout_details,
            instructor: candidate.instructor,
            modality: candidate.modality,
            performance,
            scale: candidate.scale,
            notes: candidate.notes,
            seq,
            created_at: Utc::now().naive_utc(),
        };

        self.entries.push(entry.clone());
        Ok(entry)
    }

    /// All accepted entries, in submission order.
    pub fn entries(&self) -> &[WorkoutLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(modality: WorkoutModality, performance: RawPerformance) -> NewWorkoutLog {
        NewWorkoutLog {
            workout_id: "mon-1".to_owned(),
            workout_name: "CrossFit WOD".to_owned(),
            workout_details: "21-15-9 reps for time".to_owned(),
            instructor: "Sarah Coach".to_owned(),
            modality,
            performance,
            scale: ScaleTier::Rx,
            notes: String::new(),
        }
    }

    #[test]
    fn accepted_entries_get_increasing_seq() {
        let mut store = WorkoutLogStore::new();
        let first = store
            .append(candidate(
                WorkoutModality::ForTime,
                RawPerformance {
                    minutes: Some(8),
                    seconds: Some(32),
                    ..RawPerformance::default()
                },
            ))
            .unwrap();
        let second = store
            .append(candidate(
                WorkoutModality::ForTime,
                RawPerformance {
                    minutes: Some(9),
                    seconds: Some(15),
                    ..RawPerformance::default()
                },
            ))
            .unwrap();

        assert_eq!(first.seq, 0);
        assert_eq!(second.seq, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_rounds_is_rejected_and_store_unchanged() {
        let mut store = WorkoutLogStore::new();
        let err = store
            .append(candidate(
                WorkoutModality::Amrap,
                RawPerformance::default(),
            ))
            .unwrap_err();

        assert!(matches!(
            err,
            crate::error::StorageError::MissingField("rounds")
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn timed_workout_requires_minutes_or_seconds() {
        let mut store = WorkoutLogStore::new();
        let err = store
            .append(candidate(
                WorkoutModality::ForTime,
                RawPerformance::default(),
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::StorageError::MissingField("time")
        ));

        // Seconds alone are enough.
        let entry = store
            .append(candidate(
                WorkoutModality::ForTime,
                RawPerformance {
                    seconds: Some(45),
                    ..RawPerformance::default()
                },
            ))
            .unwrap();
        assert_eq!(
            entry.performance,
            Performance::Time {
                minutes: 0,
                seconds: 45
            }
        );
    }

    #[test]
    fn strength_workout_requires_a_weight() {
        let mut store = WorkoutLogStore::new();
        let err = store
            .append(candidate(
                WorkoutModality::Strength,
                RawPerformance {
                    rounds: Some(5),
                    ..RawPerformance::default()
                },
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::StorageError::MissingField("weight")
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn emom_needs_no_performance_fields() {
        let mut store = WorkoutLogStore::new();
        let entry = store
            .append(candidate(WorkoutModality::Emom, RawPerformance::default()))
            .unwrap();
        assert_eq!(entry.performance, Performance::Completion);
    }
}
