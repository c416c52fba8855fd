use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Scoring modality of a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutModality {
    /// Scored by elapsed time, lower is better.
    ForTime,
    /// As many rounds as possible, higher is better.
    Amrap,
    /// Scored by load lifted, higher is better.
    Strength,
    /// Every minute on the minute, completion only.
    Emom,
}

impl WorkoutModality {
    /// Infers the modality from a class name and workout description.
    ///
    /// Case-insensitive keyword cascade, first match wins. AMRAP beats the
    /// strength keywords on purpose: rounds completed is the primary metric
    /// of an AMRAP format regardless of the movements it contains.
    pub fn classify(name: &str, description: &str) -> Self {
        let name = name.to_lowercase();
        let description = description.to_lowercase();

        if name.contains("amrap") || description.contains("amrap") {
            Self::Amrap
        } else if name.contains("strength")
            || description.contains("strength")
            || name.contains("1rm")
            || description.contains("1rm")
        {
            Self::Strength
        } else if description.contains("emom") {
            Self::Emom
        } else {
            Self::ForTime
        }
    }

    /// Column header shown above the results on a leaderboard.
    pub fn result_label(&self) -> &'static str {
        match self {
            Self::ForTime => "Time",
            Self::Amrap => "Rounds + Reps",
            Self::Strength => "Weight",
            Self::Emom => "Completed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amrap_keyword_wins_over_strength_keywords() {
        let modality = WorkoutModality::classify(
            "CrossFit WOD",
            "12 Min AMRAP: work up to a heavy 1RM, then strength accessories",
        );
        assert_eq!(modality, WorkoutModality::Amrap);
    }

    #[test]
    fn strength_keyword_in_name() {
        assert_eq!(
            WorkoutModality::classify("CrossFit Strength", "3x8 Front Squats at 75%"),
            WorkoutModality::Strength
        );
    }

    #[test]
    fn one_rep_max_counts_as_strength() {
        assert_eq!(
            WorkoutModality::classify("CrossFit WOD", "Work up to a 1RM Back Squat"),
            WorkoutModality::Strength
        );
    }

    #[test]
    fn emom_detected_from_description() {
        assert_eq!(
            WorkoutModality::classify("CrossFit WOD", "EMOM 10: 5 Power Cleans (135/95)"),
            WorkoutModality::Emom
        );
    }

    #[test]
    fn defaults_to_for_time() {
        assert_eq!(
            WorkoutModality::classify(
                "CrossFit WOD",
                "21-15-9 reps for time of: Thrusters (95/65 lbs), Pull-ups"
            ),
            WorkoutModality::ForTime
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            WorkoutModality::classify("Morning Amrap", "5 Pull-ups, 10 Push-ups"),
            WorkoutModality::Amrap
        );
    }
}
