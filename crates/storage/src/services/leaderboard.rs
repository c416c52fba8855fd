use std::cmp::Ordering;

use crate::dto::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::models::{Performance, WorkoutLogEntry, WorkoutModality};

/// Ranks all logs for one workout into a render-ready board.
///
/// Results are formatted first and the comparator works on the formatted
/// strings, so a value that cannot be read back (a non-time result on a
/// timed board) simply ranks last instead of failing the whole board. The
/// sort is stable: equal results keep submission order on every render.
///
/// `athlete` labels the rows; every log belongs to the one session user.
pub fn rank(logs: &[WorkoutLogEntry], workout_id: &str, athlete: &str) -> Leaderboard {
    let matching: Vec<&WorkoutLogEntry> = logs
        .iter()
        .filter(|log| log.workout_id == workout_id)
        .collect();

    let Some(latest) = matching.last() else {
        return placeholder_board();
    };

    let mut entries: Vec<LeaderboardEntry> = matching
        .iter()
        .map(|log| LeaderboardEntry {
            rank: 0,
            athlete_name: athlete.to_owned(),
            result: format_result(&log.performance),
            is_rx: log.scale.is_rx(),
            workout_type: log.modality,
        })
        .collect();

    sort_entries(&mut entries, latest.modality);

    for (index, entry) in entries.iter_mut().enumerate() {
        entry.rank = (index + 1) as u32;
    }

    Leaderboard {
        workout_name: latest.workout_name.clone(),
        workout_details: latest.workout_details.clone(),
        result_label: latest.modality.result_label().to_owned(),
        entries,
    }
}

fn format_result(performance: &Performance) -> String {
    match performance {
        Performance::Time { minutes, seconds } => format!("{minutes}:{seconds:02}"),
        Performance::Rounds {
            rounds,
            reps: Some(reps),
        } => format!("{rounds}+{reps}"),
        Performance::Rounds { rounds, reps: None } => rounds.to_string(),
        Performance::Load { weight } => format!("{weight} lbs"),
        Performance::Completion => "N/A".to_owned(),
    }
}

fn sort_entries(entries: &mut [LeaderboardEntry], modality: WorkoutModality) {
    match modality {
        WorkoutModality::ForTime => {
            entries.sort_by_key(|entry| total_seconds(&entry.result).unwrap_or(u32::MAX));
        }
        WorkoutModality::Amrap | WorkoutModality::Strength => {
            entries.sort_by(|a, b| {
                let a = leading_number(&a.result);
                let b = leading_number(&b.result);
                b.partial_cmp(&a).unwrap_or(Ordering::Equal)
            });
        }
        // Completion boards are not ranked numerically; submission order
        // stands.
        WorkoutModality::Emom => {}
    }
}

/// Parses a `minutes:seconds` result into total seconds. Malformed
/// strings yield `None` and the caller ranks them last.
fn total_seconds(result: &str) -> Option<u32> {
    let (minutes, seconds) = result.split_once(':')?;
    let minutes: u32 = minutes.trim().parse().ok()?;
    let seconds: u32 = seconds.trim().parse().ok()?;
    Some(minutes * 60 + seconds)
}

/// Leading numeric portion of a formatted result: `"5+10"` reads as 5,
/// `"225.5 lbs"` as 225.5. Results without one sort behind everything on
/// a descending board.
fn leading_number(result: &str) -> f64 {
    let digits: String = result
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    digits.parse().unwrap_or(f64::NEG_INFINITY)
}

/// Illustrative board shown until real logs exist for a workout, so the
/// UI always has something to render. Callers that need true empty
/// semantics check the log count instead.
fn placeholder_board() -> Leaderboard {
    let rows: [(&str, &str, bool); 5] = [
        ("Alex Johnson", "8:32", true),
        ("Sarah Miller", "9:15", true),
        ("Mike Davis", "9:48", true),
        ("Emily Chen", "10:22", false),
        ("Chris Wilson", "11:05", true),
    ];

    Leaderboard {
        workout_name: "CrossFit WOD - \"Fran\"".to_owned(),
        workout_details: "21-15-9 reps for time of: Thrusters (95/65 lbs), Pull-ups".to_owned(),
        result_label: WorkoutModality::ForTime.result_label().to_owned(),
        entries: rows
            .iter()
            .enumerate()
            .map(|(index, (athlete, result, is_rx))| LeaderboardEntry {
                rank: (index + 1) as u32,
                athlete_name: (*athlete).to_owned(),
                result: (*result).to_owned(),
                is_rx: *is_rx,
                workout_type: WorkoutModality::ForTime,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScaleTier;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn entry(workout_id: &str, performance: Performance, seq: u64) -> WorkoutLogEntry {
        let modality = match performance {
            Performance::Time { .. } => WorkoutModality::ForTime,
            Performance::Rounds { .. } => WorkoutModality::Amrap,
            Performance::Load { .. } => WorkoutModality::Strength,
            Performance::Completion => WorkoutModality::Emom,
        };
        WorkoutLogEntry {
            entry_id: Uuid::new_v4(),
            workout_id: workout_id.to_owned(),
            workout_name: "CrossFit WOD".to_owned(),
            workout_details: "21-15-9 reps for time".to_owned(),
            instructor: "Sarah Coach".to_owned(),
            modality,
            performance,
            scale: ScaleTier::Rx,
            notes: String::new(),
            seq,
            created_at: Utc::now().naive_utc(),
        }
    }

    fn time(minutes: u32, seconds: u32) -> Performance {
        Performance::Time { minutes, seconds }
    }

    #[test]
    fn timed_board_ranks_fastest_first() {
        let logs = vec![
            entry("mon-1", time(9, 15), 0),
            entry("mon-1", time(8, 32), 1),
            entry("mon-1", time(9, 48), 2),
        ];

        let board = rank(&logs, "mon-1", "You");
        let results: Vec<&str> = board.entries.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["8:32", "9:15", "9:48"]);
        let ranks: Vec<u32> = board.entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn equal_loads_keep_submission_order() {
        let mut first = entry(
            "mon-3",
            Performance::Load {
                weight: Decimal::from(225),
            },
            0,
        );
        first.scale = ScaleTier::Rx;
        let mut second = entry(
            "mon-3",
            Performance::Load {
                weight: Decimal::from(225),
            },
            1,
        );
        second.scale = ScaleTier::Scaled;

        let board = rank(&[first, second], "mon-3", "You");
        assert_eq!(board.entries[0].result, "225 lbs");
        assert_eq!(board.entries[1].result, "225 lbs");
        // The stable sort keeps the earlier submission (the Rx one) on top.
        assert!(board.entries[0].is_rx);
        assert!(!board.entries[1].is_rx);
    }

    #[test]
    fn strength_board_ranks_heaviest_first() {
        let logs = vec![
            entry(
                "mon-3",
                Performance::Load {
                    weight: Decimal::from(185),
                },
                0,
            ),
            entry(
                "mon-3",
                Performance::Load {
                    weight: Decimal::new(2255, 1), // 225.5
                },
                1,
            ),
        ];

        let board = rank(&logs, "mon-3", "You");
        assert_eq!(board.entries[0].result, "225.5 lbs");
        assert_eq!(board.entries[1].result, "185 lbs");
        assert_eq!(board.result_label, "Weight");
    }

    #[test]
    fn amrap_board_ranks_most_rounds_first_and_formats_extra_reps() {
        let logs = vec![
            entry(
                "thu-1",
                Performance::Rounds {
                    rounds: 5,
                    reps: Some(10),
                },
                0,
            ),
            entry(
                "thu-1",
                Performance::Rounds {
                    rounds: 6,
                    reps: None,
                },
                1,
            ),
        ];

        let board = rank(&logs, "thu-1", "You");
        assert_eq!(board.entries[0].result, "6");
        assert_eq!(board.entries[1].result, "5+10");
    }

    #[test]
    fn completion_board_preserves_input_order() {
        let logs = vec![
            entry("wed-2", Performance::Completion, 0),
            entry("wed-2", Performance::Completion, 1),
        ];

        let board = rank(&logs, "wed-2", "You");
        assert_eq!(board.entries.len(), 2);
        assert!(board.entries.iter().all(|e| e.result == "N/A"));
        assert_eq!(board.entries[0].rank, 1);
        assert_eq!(board.entries[1].rank, 2);
    }

    #[test]
    fn unreadable_result_on_a_timed_board_ranks_last() {
        // A completion entry slipped into a set whose latest entry is
        // timed; its "N/A" cannot parse as minutes:seconds.
        let logs = vec![
            entry("mon-1", Performance::Completion, 0),
            entry("mon-1", time(9, 15), 1),
            entry("mon-1", time(8, 32), 2),
        ];

        let board = rank(&logs, "mon-1", "You");
        let results: Vec<&str> = board.entries.iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["8:32", "9:15", "N/A"]);
    }

    #[test]
    fn unknown_workout_gets_the_placeholder_board() {
        let logs = vec![entry("mon-1", time(8, 32), 0)];

        let board = rank(&logs, "does-not-exist", "You");
        assert_eq!(board.workout_name, "CrossFit WOD - \"Fran\"");
        assert_eq!(board.entries.len(), 5);
        assert_eq!(board.entries[0].athlete_name, "Alex Johnson");
        assert_eq!(board.entries[0].result, "8:32");
        assert_eq!(board.entries[0].rank, 1);
        assert!(!board.entries[3].is_rx);
    }

    #[test]
    fn empty_log_gets_the_placeholder_board() {
        let board = rank(&[], "mon-1", "You");
        assert_eq!(board.entries.len(), 5);
    }

    #[test]
    fn total_seconds_parses_and_rejects() {
        assert_eq!(total_seconds("8:32"), Some(512));
        assert_eq!(total_seconds("10:05"), Some(605));
        assert_eq!(total_seconds("N/A"), None);
        assert_eq!(total_seconds("832"), None);
    }
}
