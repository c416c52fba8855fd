use storage::{
    Studio,
    dto::workout_log::CreateWorkoutLogRequest,
    error::{Result, StorageError},
    models::{WorkoutLogEntry, WorkoutModality},
    store::NewWorkoutLog,
};

/// Validate and append a result against a scheduled class. The class's
/// name and description decide the modality the submission must satisfy.
pub fn log_workout(studio: &Studio, req: &CreateWorkoutLogRequest) -> Result<WorkoutLogEntry> {
    let session = studio
        .schedule()
        .find(&req.workout_id)
        .ok_or(StorageError::NotFound)?
        .clone();

    let modality = WorkoutModality::classify(&session.name, &session.description);

    studio.workout_logs_mut().append(NewWorkoutLog {
        workout_id: session.session_id,
        workout_name: session.name,
        workout_details: session.description,
        instructor: session.instructor,
        modality,
        performance: req.raw_performance(),
        scale: req.scale,
        notes: req.notes.clone(),
    })
}

/// All accepted log entries, oldest first.
pub fn workout_logs(studio: &Studio) -> Vec<WorkoutLogEntry> {
    studio.workout_logs().entries().to_vec()
}
