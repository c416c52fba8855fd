mod booking;
mod registry;
mod schedule;
mod workout_log;

pub use booking::{BookingLedger, BookingStatus};
pub use registry::{Registry, RegistryItem};
pub use schedule::ScheduleStore;
pub use workout_log::{NewWorkoutLog, WorkoutLogStore};
