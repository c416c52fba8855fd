use std::collections::HashSet;
use std::fmt;

use crate::models::ClassSession;

/// The set of class sessions the current user has reserved.
///
/// Capacity enforcement is a caller-side concern: booking is idempotent
/// and never errors, even for unknown or full sessions.
#[derive(Debug, Default)]
pub struct BookingLedger {
    reservations: HashSet<String>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&mut self, session_id: &str) {
        self.reservations.insert(session_id.to_owned());
    }

    pub fn cancel(&mut self, session_id: &str) {
        self.reservations.remove(session_id);
    }

    pub fn is_booked(&self, session_id: &str) -> bool {
        self.reservations.contains(session_id)
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Seats still open on a session, clamped at zero so an inconsistent
    /// booked count from upstream can never go negative.
    pub fn available_seats(session: &ClassSession) -> u32 {
        session.capacity.saturating_sub(session.booked)
    }

    /// Booking status shown on a class card. Precedence: booked by the
    /// user, then full, then low availability (three seats or fewer),
    /// then open.
    pub fn status(&self, session: &ClassSession) -> BookingStatus {
        let available = Self::available_seats(session);
        if self.is_booked(&session.session_id) {
            BookingStatus::Booked
        } else if available == 0 {
            BookingStatus::Full
        } else if available <= 3 {
            BookingStatus::AlmostFull(available)
        } else {
            BookingStatus::Open(available)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Booked,
    Full,
    AlmostFull(u32),
    Open(u32),
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Booked => write!(f, "Booked"),
            Self::Full => write!(f, "Full"),
            Self::AlmostFull(left) => write!(f, "{left} left"),
            Self::Open(spots) => write!(f, "{spots} spots"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassKind;
    use chrono::NaiveTime;

    fn session(capacity: u32, booked: u32) -> ClassSession {
        ClassSession {
            session_id: "mon-1".to_owned(),
            start_time: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            name: "CrossFit WOD".to_owned(),
            instructor: "Sarah Coach".to_owned(),
            location: "CrossFit Box".to_owned(),
            kind: ClassKind::Crossfit,
            capacity,
            booked,
            description: "21-15-9 reps for time".to_owned(),
        }
    }

    #[test]
    fn available_seats_is_capacity_minus_booked() {
        assert_eq!(BookingLedger::available_seats(&session(20, 5)), 15);
    }

    #[test]
    fn available_seats_never_goes_negative() {
        assert_eq!(BookingLedger::available_seats(&session(20, 25)), 0);
    }

    #[test]
    fn book_then_cancel_round_trips() {
        let mut ledger = BookingLedger::new();
        ledger.book("mon-1");
        assert!(ledger.is_booked("mon-1"));

        ledger.cancel("mon-1");
        assert!(!ledger.is_booked("mon-1"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn booking_twice_is_idempotent() {
        let mut ledger = BookingLedger::new();
        ledger.book("mon-1");
        ledger.book("mon-1");
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn cancelling_an_unknown_id_is_a_no_op() {
        let mut ledger = BookingLedger::new();
        ledger.cancel("nope");
        assert!(ledger.is_empty());
    }

    #[test]
    fn full_class_reads_full() {
        let ledger = BookingLedger::new();
        assert_eq!(ledger.status(&session(20, 20)).to_string(), "Full");
    }

    #[test]
    fn three_or_fewer_seats_reads_n_left() {
        let ledger = BookingLedger::new();
        assert_eq!(ledger.status(&session(20, 18)).to_string(), "2 left");
        assert_eq!(ledger.status(&session(20, 17)).to_string(), "3 left");
    }

    #[test]
    fn open_class_reads_n_spots() {
        let ledger = BookingLedger::new();
        assert_eq!(ledger.status(&session(20, 5)).to_string(), "15 spots");
        assert_eq!(ledger.status(&session(20, 16)).to_string(), "4 spots");
    }

    #[test]
    fn booked_wins_over_every_other_status() {
        let mut ledger = BookingLedger::new();
        ledger.book("mon-1");
        assert_eq!(ledger.status(&session(20, 20)), BookingStatus::Booked);
        assert_eq!(ledger.status(&session(20, 18)), BookingStatus::Booked);
    }
}
