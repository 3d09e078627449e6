use crate::error::AppError;
use crate::models::leaderboard::{OverallEntry, PerLevelEntry};
use crate::store::{ScoreRecord, ScoreStore};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

const MAX_LIMIT: i64 = 100;

// Fewer strokes first; equal strokes resolved by earlier submission. Every
// ranking in this module goes through this one comparator.
fn attempt_order(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    a.strokes
        .cmp(&b.strokes)
        .then(a.submitted_at.cmp(&b.submitted_at))
}

pub fn top_for_level(
    store: &impl ScoreStore,
    level: i64,
    limit: i64,
) -> Result<Vec<PerLevelEntry>, AppError> {
    let limit = limit.min(MAX_LIMIT).max(1);
    let records = store.records_for_level(level)?;
    Ok(rank_level(records, limit as usize))
}

pub fn overall_top(store: &impl ScoreStore, limit: i64) -> Result<Vec<OverallEntry>, AppError> {
    let limit = limit.min(MAX_LIMIT).max(1);
    let records = store.all_records()?;
    Ok(rank_overall(records, limit as usize))
}

// Minimum strokes a player has recorded for a level, if any.
pub fn best_for_player_level(
    store: &impl ScoreStore,
    player_id: &str,
    level: i64,
) -> Result<Option<i64>, AppError> {
    let records = store.records_for_level(level)?;
    Ok(records
        .iter()
        .filter(|r| r.player_id == player_id)
        .min_by(|a, b| attempt_order(a, b))
        .map(|r| r.strokes))
}

// 1-based position a record holds among its level's raw attempts.
pub fn rank_within_level(records: &[ScoreRecord], record: &ScoreRecord) -> i64 {
    let better = records
        .iter()
        .filter(|r| r.id != record.id && attempt_order(r, record) == Ordering::Less)
        .count();
    better as i64 + 1
}

// No reconciliation here: a player who re-attempted the level appears once
// per attempt.
pub fn rank_level(mut records: Vec<ScoreRecord>, limit: usize) -> Vec<PerLevelEntry> {
    records.sort_by(attempt_order);
    records.truncate(limit);
    records.into_iter().map(PerLevelEntry::from).collect()
}

struct PlayerAgg {
    display_name: String,
    latest: DateTime<Utc>,
    best_by_level: HashMap<i64, ScoreRecord>,
}

// Each player contributes their best attempt per level; breadth (levels
// completed) outranks efficiency (total strokes).
pub fn rank_overall(records: Vec<ScoreRecord>, limit: usize) -> Vec<OverallEntry> {
    let mut players: HashMap<String, PlayerAgg> = HashMap::new();

    for record in records {
        let agg = players
            .entry(record.player_id.clone())
            .or_insert_with(|| PlayerAgg {
                display_name: record.display_name.clone(),
                latest: record.submitted_at,
                best_by_level: HashMap::new(),
            });

        // A strictly newer submission decides the display name.
        if record.submitted_at > agg.latest {
            agg.latest = record.submitted_at;
            agg.display_name = record.display_name.clone();
        }

        match agg.best_by_level.entry(record.level) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if attempt_order(&record, slot.get()) == Ordering::Less {
                    slot.insert(record);
                }
            }
        }
    }

    let mut rows: Vec<OverallEntry> = players
        .into_iter()
        .map(|(player_id, agg)| OverallEntry {
            player_id,
            display_name: agg.display_name,
            total_strokes: agg.best_by_level.values().map(|r| r.strokes).sum(),
            levels_completed: agg.best_by_level.len() as i64,
        })
        .collect();

    // Order beyond these two keys is unspecified.
    rows.sort_by(|a, b| {
        b.levels_completed
            .cmp(&a.levels_completed)
            .then(a.total_strokes.cmp(&b.total_strokes))
    });
    rows.truncate(limit);
    rows
}
