use crate::error::AppError;
use crate::models::leaderboard::LeaderboardQuery;
use crate::services::leaderboard as service;
use crate::store::SqliteStore;
use ntex::web::{self, HttpResponse};
use std::sync::Arc;

pub async fn get_level_leaderboard(
    db: web::types::State<Arc<SqliteStore>>,
    path: web::types::Path<i64>,
    query: web::types::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AppError> {
    let level = path.into_inner();
    let limit = query.limit.unwrap_or(10);
    let store: &SqliteStore = &db;
    let entries = service::top_for_level(store, level, limit)?;
    Ok(HttpResponse::Ok().json(&entries))
}

pub async fn get_overall_leaderboard(
    db: web::types::State<Arc<SqliteStore>>,
    query: web::types::Query<LeaderboardQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(20);
    let store: &SqliteStore = &db;
    let entries = service::overall_top(store, limit)?;
    Ok(HttpResponse::Ok().json(&entries))
}
