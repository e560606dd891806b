//! Liveness endpoint for deploy checks.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub published_posts: usize,
    pub games: usize,
}

/// GET /api/health - reports server status and how much content the store
/// is serving, so a deploy with missing fixtures is visible at a glance.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let published_posts = state
        .blog
        .published_posts()
        .await
        .map(|posts| posts.len())
        .unwrap_or(0);
    let games = state
        .games
        .all_games()
        .await
        .map(|games| games.len())
        .unwrap_or(0);

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        published_posts,
        games,
    })
}
