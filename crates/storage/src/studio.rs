use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{ClassKind, Coach, Member, User, WorkoutTemplate};
use crate::store::{BookingLedger, Registry, ScheduleStore, WorkoutLogStore};

/// Shared, process-local studio state.
///
/// The design assumes one logical member session; behind the HTTP surface
/// the locks provide the mutual exclusion that assumption needs around
/// the booking ledger, the log store and the registries. The schedule is
/// immutable after seeding and needs no lock. Cheap to clone.
#[derive(Clone)]
pub struct Studio {
    inner: Arc<StudioInner>,
}

struct StudioInner {
    schedule: ScheduleStore,
    bookings: RwLock<BookingLedger>,
    workout_logs: RwLock<WorkoutLogStore>,
    coaches: RwLock<Registry<Coach>>,
    members: RwLock<Registry<Member>>,
    templates: RwLock<Registry<WorkoutTemplate>>,
    session_user: RwLock<Option<User>>,
}

impl Studio {
    pub fn new(
        schedule: ScheduleStore,
        coaches: Registry<Coach>,
        members: Registry<Member>,
        templates: Registry<WorkoutTemplate>,
    ) -> Self {
        Self {
            inner: Arc::new(StudioInner {
                schedule,
                bookings: RwLock::new(BookingLedger::new()),
                workout_logs: RwLock::new(WorkoutLogStore::new()),
                coaches: RwLock::new(coaches),
                members: RwLock::new(members),
                templates: RwLock::new(templates),
                session_user: RwLock::new(None),
            }),
        }
    }

    /// Studio state with the demo week and demo rosters loaded.
    pub fn seeded() -> Self {
        Self::new(
            ScheduleStore::seeded(),
            Registry::new(seed_coaches()),
            Registry::new(seed_members()),
            Registry::new(seed_templates()),
        )
    }

    pub fn schedule(&self) -> &ScheduleStore {
        &self.inner.schedule
    }

    pub fn bookings(&self) -> RwLockReadGuard<'_, BookingLedger> {
        read(&self.inner.bookings)
    }

    pub fn bookings_mut(&self) -> RwLockWriteGuard<'_, BookingLedger> {
        write(&self.inner.bookings)
    }

    pub fn workout_logs(&self) -> RwLockReadGuard<'_, WorkoutLogStore> {
        read(&self.inner.workout_logs)
    }

    pub fn workout_logs_mut(&self) -> RwLockWriteGuard<'_, WorkoutLogStore> {
        write(&self.inner.workout_logs)
    }

    pub fn coaches(&self) -> RwLockReadGuard<'_, Registry<Coach>> {
        read(&self.inner.coaches)
    }

    pub fn coaches_mut(&self) -> RwLockWriteGuard<'_, Registry<Coach>> {
        write(&self.inner.coaches)
    }

    pub fn members(&self) -> RwLockReadGuard<'_, Registry<Member>> {
        read(&self.inner.members)
    }

    pub fn members_mut(&self) -> RwLockWriteGuard<'_, Registry<Member>> {
        write(&self.inner.members)
    }

    pub fn templates(&self) -> RwLockReadGuard<'_, Registry<WorkoutTemplate>> {
        read(&self.inner.templates)
    }

    pub fn templates_mut(&self) -> RwLockWriteGuard<'_, Registry<WorkoutTemplate>> {
        write(&self.inner.templates)
    }

    pub fn session_user(&self) -> RwLockReadGuard<'_, Option<User>> {
        read(&self.inner.session_user)
    }

    pub fn session_user_mut(&self) -> RwLockWriteGuard<'_, Option<User>> {
        write(&self.inner.session_user)
    }
}

// A poisoned lock only means a writer panicked mid-mutation; the stores
// stay structurally valid, so recover the guard instead of propagating
// the panic to every later request.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn seed_coaches() -> Vec<Coach> {
    vec![
        Coach {
            coach_id: Uuid::new_v4(),
            name: "Sarah Coach".to_owned(),
            email: "sarah@resiliente.com".to_owned(),
            specialties: vec!["CrossFit".to_owned(), "Olympic Lifting".to_owned()],
            bio: "Certified CrossFit L2 trainer with 5+ years experience".to_owned(),
        },
        Coach {
            coach_id: Uuid::new_v4(),
            name: "Mike Coach".to_owned(),
            email: "mike@resiliente.com".to_owned(),
            specialties: vec!["Strength Training".to_owned(), "Powerlifting".to_owned()],
            bio: "Former competitive powerlifter, specializes in strength development".to_owned(),
        },
        Coach {
            coach_id: Uuid::new_v4(),
            name: "Alex Coach".to_owned(),
            email: "alex@resiliente.com".to_owned(),
            specialties: vec!["CrossFit".to_owned(), "Gymnastics".to_owned()],
            bio: "Movement specialist with gymnastics background".to_owned(),
        },
    ]
}

fn seed_members() -> Vec<Member> {
    vec![
        Member {
            member_id: Uuid::new_v4(),
            name: "John Doe".to_owned(),
            email: "john@example.com".to_owned(),
            membership_type: "premium".to_owned(),
            join_date: date(2024, 1, 15),
        },
        Member {
            member_id: Uuid::new_v4(),
            name: "Jane Smith".to_owned(),
            email: "jane@example.com".to_owned(),
            membership_type: "standard".to_owned(),
            join_date: date(2024, 2, 20),
        },
    ]
}

fn seed_templates() -> Vec<WorkoutTemplate> {
    vec![
        WorkoutTemplate {
            template_id: Uuid::new_v4(),
            name: "CrossFit WOD".to_owned(),
            kind: ClassKind::Crossfit,
            description: "21-15-9 reps for time of: Thrusters (95/65 lbs), Pull-ups".to_owned(),
            duration_minutes: 60,
        },
        WorkoutTemplate {
            template_id: Uuid::new_v4(),
            name: "CrossFit AMRAP".to_owned(),
            kind: ClassKind::Crossfit,
            description: "20 minute AMRAP: 5 Pull-ups, 10 Push-ups, 15 Air Squats".to_owned(),
            duration_minutes: 60,
        },
        WorkoutTemplate {
            template_id: Uuid::new_v4(),
            name: "Open Gym".to_owned(),
            kind: ClassKind::Opengym,
            description: "Free access to all gym equipment and space".to_owned(),
            duration_minutes: 60,
        },
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal seed date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_studio_has_rosters_and_a_schedule() {
        let studio = Studio::seeded();
        assert_eq!(studio.coaches().list().len(), 3);
        assert_eq!(studio.members().list().len(), 2);
        assert_eq!(studio.templates().list().len(), 3);
        assert!(studio.schedule().find("mon-1").is_some());
        assert!(studio.bookings().is_empty());
        assert!(studio.workout_logs().is_empty());
        assert!(studio.session_user().is_none());
    }
}
