use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::store::RegistryItem;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub member_id: Uuid,
    pub name: String,
    pub email: String,
    pub membership_type: String,
    pub join_date: NaiveDate,
}

impl RegistryItem for Member {
    fn id(&self) -> Uuid {
        self.member_id
    }
}
