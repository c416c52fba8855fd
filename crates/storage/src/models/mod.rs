mod class_session;
mod coach;
mod member;
mod modality;
mod performance;
mod user;
mod workout_log;
mod workout_template;

pub use class_session::{ClassKind, ClassSession};
pub use coach::Coach;
pub use member::Member;
pub use modality::WorkoutModality;
pub use performance::{Performance, RawPerformance, ScaleTier};
pub use user::{Role, User};
pub use workout_log::WorkoutLogEntry;
pub use workout_template::WorkoutTemplate;
