use crate::error::AppError;
use crate::models::scores::{PlayerStats, ScoreSubmission, ScoreSubmissionResult};
use crate::services::leaderboard;
use crate::store::{ScoreRecord, ScoreStore};
use crate::validation;
use chrono::Utc;
use std::collections::HashSet;
use uuid::Uuid;

pub fn submit_score(
    store: &impl ScoreStore,
    req: ScoreSubmission,
) -> Result<ScoreSubmissionResult, AppError> {
    validation::validate_player_id(&req.player_id)?;
    validation::validate_level(req.level)?;
    validation::validate_strokes(req.strokes)?;
    let display_name = validation::validate_display_name(&req.display_name);

    let previous_best = leaderboard::best_for_player_level(store, &req.player_id, req.level)?;

    let record = ScoreRecord {
        id: Uuid::new_v4().to_string(),
        player_id: req.player_id,
        display_name,
        level: req.level,
        strokes: req.strokes,
        submitted_at: Utc::now(),
    };
    store.append(&record)?;

    let attempts = store.records_for_level(record.level)?;
    let rank = leaderboard::rank_within_level(&attempts, &record);

    log::info!(
        "[SCORE] player:{} level:{} strokes:{} rank:{}",
        record.player_id,
        record.level,
        record.strokes,
        rank
    );

    Ok(ScoreSubmissionResult {
        id: record.id,
        rank,
        personal_best: previous_best.map_or(true, |best| record.strokes < best),
    })
}

pub fn player_stats(
    store: &impl ScoreStore,
    player_id: &str,
) -> Result<Option<PlayerStats>, AppError> {
    let records = store.all_records()?;

    let mut total_strokes = 0i64;
    let mut games_played = 0i64;
    let mut levels = HashSet::new();
    for record in records.iter().filter(|r| r.player_id == player_id) {
        total_strokes += record.strokes;
        games_played += 1;
        levels.insert(record.level);
    }

    if games_played == 0 {
        return Ok(None);
    }
    Ok(Some(PlayerStats {
        player_id: player_id.to_string(),
        total_strokes,
        levels_completed: levels.len() as i64,
        games_played,
    }))
}
