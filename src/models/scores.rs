use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ScoreSubmission {
    pub player_id: String,
    pub display_name: String,
    pub level: i64,
    pub strokes: i64,
}

#[derive(Debug, Serialize)]
pub struct ScoreSubmissionResult {
    pub id: String,
    pub rank: i64,
    pub personal_best: bool,
}

#[derive(Debug, Serialize)]
pub struct PlayerBest {
    pub player_id: String,
    pub level: i64,
    pub strokes: Option<i64>,
}

// Career totals over every attempt, not best-only like the overall board.
#[derive(Debug, Serialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub total_strokes: i64,
    pub levels_completed: i64,
    pub games_played: i64,
}
