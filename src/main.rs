mod error;
mod handlers;
mod models;
mod services;
mod store;
mod validation;

use ntex::web;
use ntex_cors::Cors;
use std::sync::Arc;
use store::SqliteStore;

#[ntex::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let db_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| "minigolf.db".into());
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3001);

    let db = Arc::new(SqliteStore::open(&db_path).expect("Failed to open score store"));

    log::info!("Minigolf server starting on {}:{}", host, port);

    web::HttpServer::new(move || {
        web::App::new()
            .state(db.clone())
            .wrap(
                Cors::new()
                    .allowed_origin("*")
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type"])
                    .max_age(3600)
                    .finish(),
            )
            // Health check
            .route("/api/health", web::get().to(health))
            // Scores
            .route("/api/scores", web::post().to(handlers::scores::submit_score))
            .route(
                "/api/players/{player_id}/best/{level}",
                web::get().to(handlers::scores::get_player_best),
            )
            .route(
                "/api/players/{player_id}/stats",
                web::get().to(handlers::scores::get_player_stats),
            )
            // Leaderboards
            .route(
                "/api/leaderboard/level/{level}",
                web::get().to(handlers::leaderboard::get_level_leaderboard),
            )
            .route(
                "/api/leaderboard/overall",
                web::get().to(handlers::leaderboard::get_overall_leaderboard),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}

async fn health() -> web::HttpResponse {
    web::HttpResponse::Ok().json(&serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
