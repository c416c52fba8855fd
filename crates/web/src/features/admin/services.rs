use storage::{
    Studio,
    dto::admin::{CreateCoachRequest, CreateMemberRequest, CreateWorkoutTemplateRequest},
    error::Result,
    models::{Coach, Member, Role, WorkoutTemplate},
};
use uuid::Uuid;

use crate::error::WebError;

/// Admin endpoints require the session user's role flag to be `admin`.
/// There is no further authorization machinery behind the flag.
pub fn require_admin(studio: &Studio) -> std::result::Result<(), WebError> {
    match studio.session_user().as_ref() {
        Some(user) if user.role == Role::Admin => Ok(()),
        _ => {
            tracing::warn!("admin endpoint called without an admin session");
            Err(WebError::Unauthorized)
        }
    }
}

pub fn list_coaches(studio: &Studio) -> Vec<Coach> {
    studio.coaches().list().to_vec()
}

pub fn create_coach(studio: &Studio, req: CreateCoachRequest) -> Coach {
    let coach = Coach::from(req);
    studio.coaches_mut().add(coach.clone());
    coach
}

pub fn delete_coach(studio: &Studio, id: Uuid) -> Result<()> {
    studio.coaches_mut().remove(id)
}

pub fn list_members(studio: &Studio) -> Vec<Member> {
    studio.members().list().to_vec()
}

pub fn create_member(studio: &Studio, req: CreateMemberRequest) -> Member {
    let member = Member::from(req);
    studio.members_mut().add(member.clone());
    member
}

pub fn delete_member(studio: &Studio, id: Uuid) -> Result<()> {
    studio.members_mut().remove(id)
}

pub fn list_templates(studio: &Studio) -> Vec<WorkoutTemplate> {
    studio.templates().list().to_vec()
}

pub fn create_template(studio: &Studio, req: CreateWorkoutTemplateRequest) -> WorkoutTemplate {
    let template = WorkoutTemplate::from(req);
    studio.templates_mut().add(template.clone());
    template
}

pub fn delete_template(studio: &Studio, id: Uuid) -> Result<()> {
    studio.templates_mut().remove(id)
}
