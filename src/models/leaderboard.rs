use crate::store::ScoreRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct PerLevelEntry {
    pub player_id: String,
    pub display_name: String,
    pub level: i64,
    pub strokes: i64,
    pub submitted_at: DateTime<Utc>,
}

impl From<ScoreRecord> for PerLevelEntry {
    fn from(record: ScoreRecord) -> Self {
        PerLevelEntry {
            player_id: record.player_id,
            display_name: record.display_name,
            level: record.level,
            strokes: record.strokes,
            submitted_at: record.submitted_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OverallEntry {
    pub player_id: String,
    pub display_name: String,
    pub total_strokes: i64,
    pub levels_completed: i64,
}

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub limit: Option<i64>,
}
