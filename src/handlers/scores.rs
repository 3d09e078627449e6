use crate::error::AppError;
use crate::models::scores::{PlayerBest, ScoreSubmission};
use crate::services::{leaderboard, scores as service};
use crate::store::SqliteStore;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn submit_score(
    db: web::types::State<Arc<SqliteStore>>,
    body: web::types::Json<ScoreSubmission>,
) -> Result<HttpResponse, AppError> {
    let store: &SqliteStore = &db;
    let result = service::submit_score(store, body.into_inner())?;
    Ok(HttpResponse::Ok().json(&result))
}

pub async fn get_player_best(
    db: web::types::State<Arc<SqliteStore>>,
    path: web::types::Path<(String, i64)>,
) -> Result<HttpResponse, AppError> {
    let (player_id, level) = path.into_inner();
    let store: &SqliteStore = &db;
    let strokes = leaderboard::best_for_player_level(store, &player_id, level)?;
    Ok(HttpResponse::Ok().json(&PlayerBest {
        player_id,
        level,
        strokes,
    }))
}

pub async fn get_player_stats(
    db: web::types::State<Arc<SqliteStore>>,
    path: web::types::Path<String>,
) -> Result<HttpResponse, AppError> {
    let player_id = path.into_inner();
    let store: &SqliteStore = &db;
    match service::player_stats(store, &player_id)? {
        Some(stats) => Ok(HttpResponse::Ok().json(&stats)),
        None => Err(AppError::NotFound(format!(
            "No scores for player {}",
            player_id
        ))),
    }
}
