use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ClassKind, Coach, Member, WorkoutTemplate};

/// Request payload for adding a coach to the roster
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCoachRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(default)]
    pub specialties: Vec<String>,

    #[validate(length(max = 1000))]
    #[serde(default)]
    pub bio: String,
}

impl From<CreateCoachRequest> for Coach {
    fn from(req: CreateCoachRequest) -> Self {
        Self {
            coach_id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            specialties: req.specialties,
            bio: req.bio,
        }
    }
}

/// Request payload for adding a member
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "A valid email is required"))]
    pub email: String,

    #[serde(default = "default_membership")]
    pub membership_type: String,
}

fn default_membership() -> String {
    "standard".to_owned()
}

impl From<CreateMemberRequest> for Member {
    fn from(req: CreateMemberRequest) -> Self {
        Self {
            member_id: Uuid::new_v4(),
            name: req.name,
            email: req.email,
            membership_type: req.membership_type,
            join_date: Utc::now().date_naive(),
        }
    }
}

/// Request payload for creating a workout template
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutTemplateRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,

    pub kind: ClassKind,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
}

fn default_duration() -> u32 {
    60
}

impl From<CreateWorkoutTemplateRequest> for WorkoutTemplate {
    fn from(req: CreateWorkoutTemplateRequest) -> Self {
        Self {
            template_id: Uuid::new_v4(),
            name: req.name,
            kind: req.kind,
            description: req.description,
            duration_minutes: req.duration_minutes,
        }
    }
}
