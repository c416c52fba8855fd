use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Role, User};

/// Login payload. Any credentials are accepted; the password is never
/// checked and only the role assignment matters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    pub name: Option<String>,

    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Member
}

impl LoginRequest {
    /// Builds the session user this login produces.
    pub fn into_user(self) -> User {
        let name = self.name.unwrap_or_else(|| {
            match self.role {
                Role::Admin => "Admin User",
                Role::Coach | Role::Member => "Test User",
            }
            .to_owned()
        });

        User {
            user_id: Uuid::new_v4(),
            name,
            email: self.email,
            role: self.role,
        }
    }
}
