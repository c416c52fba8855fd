use serde::Serialize;
use utoipa::ToSchema;

use crate::models::WorkoutModality;

/// One ranked row, ready for direct rendering.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardEntry {
    /// 1-based; ties are broken by submission order.
    pub rank: u32,
    pub athlete_name: String,
    /// Result formatted for the board: `8:32`, `5+10`, `225 lbs` or `N/A`.
    pub result: String,
    pub is_rx: bool,
    pub workout_type: WorkoutModality,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Leaderboard {
    pub workout_name: String,
    pub workout_details: String,
    /// Column header for the result column, e.g. `Time` or `Weight`.
    pub result_label: String,
    pub entries: Vec<LeaderboardEntry>,
}
