use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ClassKind;
use crate::store::RegistryItem;

/// A reusable workout an administrator can schedule classes from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutTemplate {
    pub template_id: Uuid,
    pub name: String,
    pub kind: ClassKind,
    pub description: String,
    pub duration_minutes: u32,
}

impl RegistryItem for WorkoutTemplate {
    fn id(&self) -> Uuid {
        self.template_id
    }
}
