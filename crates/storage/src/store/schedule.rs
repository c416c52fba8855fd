use std::collections::HashMap;

use chrono::{NaiveTime, Weekday};

use crate::models::{ClassKind, ClassSession};

/// The weekly timetable. Seeded once at startup and read-only after that.
pub struct ScheduleStore {
    days: HashMap<Weekday, Vec<ClassSession>>,
}

impl ScheduleStore {
    pub fn new(days: HashMap<Weekday, Vec<ClassSession>>) -> Self {
        Self { days }
    }

    /// Sessions for a weekday, in timetable order. Days without classes
    /// yield an empty slice.
    pub fn for_weekday(&self, weekday: Weekday) -> &[ClassSession] {
        self.days.get(&weekday).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn find(&self, session_id: &str) -> Option<&ClassSession> {
        self.days
            .values()
            .flat_map(|sessions| sessions.iter())
            .find(|session| session.session_id == session_id)
    }

    /// The week the studio currently runs. Weekends are rest days.
    pub fn seeded() -> Self {
        let mut days = HashMap::new();

        days.insert(
            Weekday::Mon,
            vec![
                session(
                    "mon-1",
                    (7, 0),
                    (8, 0),
                    "CrossFit WOD",
                    "Sarah Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    20,
                    15,
                    "21-15-9 reps for time of: Thrusters (95/65 lbs), Pull-ups",
                ),
                session(
                    "mon-2",
                    (12, 0),
                    (13, 0),
                    "Open Gym",
                    "Mike Coach",
                    "Gym Floor",
                    ClassKind::Opengym,
                    15,
                    12,
                    "Free access to all gym equipment and space for personal training",
                ),
                session(
                    "mon-3",
                    (18, 0),
                    (19, 0),
                    "CrossFit Strength",
                    "Alex Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    12,
                    8,
                    "Work up to a 1RM Back Squat, then 3x8 Front Squats at 75%",
                ),
            ],
        );

        days.insert(
            Weekday::Tue,
            vec![
                session(
                    "tue-1",
                    (6, 30),
                    (7, 30),
                    "CrossFit WOD",
                    "Emma Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    16,
                    16,
                    "For time: 400m Run, 21 KB Swings (24/16kg), 12 Pull-ups, 400m Run",
                ),
                session(
                    "tue-2",
                    (10, 0),
                    (11, 0),
                    "Open Gym",
                    "James Coach",
                    "Main Gym",
                    ClassKind::Opengym,
                    18,
                    14,
                    "Open access to all equipment - perfect for personal training sessions",
                ),
                session(
                    "tue-3",
                    (17, 30),
                    (18, 30),
                    "CrossFit Metcon",
                    "Lisa Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    25,
                    22,
                    "5 Rounds: 200m Run, 10 Burpees, 15 Box Jumps (24/20)",
                ),
            ],
        );

        days.insert(
            Weekday::Wed,
            vec![
                session(
                    "wed-1",
                    (7, 0),
                    (8, 0),
                    "CrossFit WOD",
                    "Sarah Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    20,
                    11,
                    "12 Min AMRAP: 9 Deadlifts (155/105 lbs), 12 Push-ups, 15 Air Squats",
                ),
                session(
                    "wed-2",
                    (19, 0),
                    (20, 0),
                    "Open Gym",
                    "Alex Coach",
                    "Main Gym",
                    ClassKind::Opengym,
                    12,
                    9,
                    "Evening open gym session - bring your own workout or ask for coaching tips",
                ),
            ],
        );

        days.insert(
            Weekday::Thu,
            vec![
                session(
                    "thu-1",
                    (6, 0),
                    (7, 0),
                    "CrossFit AMRAP",
                    "Robert Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    20,
                    18,
                    "20 Min AMRAP: 5 Pull-ups, 10 Push-ups, 15 Air Squats",
                ),
                session(
                    "thu-2",
                    (12, 30),
                    (13, 30),
                    "Open Gym",
                    "Emma Coach",
                    "Main Gym",
                    ClassKind::Opengym,
                    15,
                    13,
                    "Lunch break workout - perfect for quick training sessions",
                ),
                session(
                    "thu-3",
                    (18, 0),
                    (19, 0),
                    "CrossFit Open",
                    "Mike Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    16,
                    10,
                    "CrossFit Open 24.1: 21-18-15-12-9-6-3 reps: Burpees over Box, Box Jump Overs (24/20)",
                ),
            ],
        );

        days.insert(
            Weekday::Fri,
            vec![
                session(
                    "fri-1",
                    (7, 30),
                    (8, 30),
                    "CrossFit WOD",
                    "Sarah Coach",
                    "CrossFit Box",
                    ClassKind::Crossfit,
                    20,
                    16,
                    "Friday Team WOD: Partner up! 100 Wall Balls, 80 KB Swings, 60 Burpees, 40 Pull-ups",
                ),
                session(
                    "fri-2",
                    (17, 0),
                    (18, 0),
                    "Open Gym",
                    "Alex Coach",
                    "Main Gym",
                    ClassKind::Opengym,
                    15,
                    12,
                    "Friday wind-down session - lighter workouts and recovery focus",
                ),
            ],
        );

        Self::new(days)
    }
}

#[allow(clippy::too_many_arguments)]
fn session(
    id: &str,
    start: (u32, u32),
    end: (u32, u32),
    name: &str,
    instructor: &str,
    location: &str,
    kind: ClassKind,
    capacity: u32,
    booked: u32,
    description: &str,
) -> ClassSession {
    ClassSession {
        session_id: id.to_owned(),
        start_time: at(start),
        end_time: at(end),
        name: name.to_owned(),
        instructor: instructor.to_owned(),
        location: location.to_owned(),
        kind,
        capacity,
        booked,
        description: description.to_owned(),
    }
}

fn at((hour, minute): (u32, u32)) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("literal timetable time")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_has_three_classes() {
        let schedule = ScheduleStore::seeded();
        assert_eq!(schedule.for_weekday(Weekday::Mon).len(), 3);
    }

    #[test]
    fn weekends_are_empty() {
        let schedule = ScheduleStore::seeded();
        assert!(schedule.for_weekday(Weekday::Sat).is_empty());
        assert!(schedule.for_weekday(Weekday::Sun).is_empty());
    }

    #[test]
    fn find_locates_a_session_on_any_day() {
        let schedule = ScheduleStore::seeded();
        let session = schedule.find("wed-1").expect("wed-1 is seeded");
        assert_eq!(session.name, "CrossFit WOD");
        assert!(schedule.find("nope").is_none());
    }

    #[test]
    fn booked_counts_never_exceed_capacity_in_seed_data() {
        let schedule = ScheduleStore::seeded();
        for weekday in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
        ] {
            for session in schedule.for_weekday(weekday) {
                assert!(session.booked <= session.capacity, "{}", session.session_id);
            }
        }
    }
}
