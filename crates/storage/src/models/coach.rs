use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::store::RegistryItem;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Coach {
    pub coach_id: Uuid,
    pub name: String,
    pub email: String,
    pub specialties: Vec<String>,
    pub bio: String,
}

impl RegistryItem for Coach {
    fn id(&self) -> Uuid {
        self.coach_id
    }
}
