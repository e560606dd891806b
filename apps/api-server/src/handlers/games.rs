//! Games catalogue read endpoints.

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, internal};
use crate::state::AppState;

/// GET /api/games - the whole catalogue, in insertion order.
pub async fn list_games(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let games = state
        .games
        .all_games()
        .await
        .map_err(internal("Failed to fetch games"))?;

    Ok(HttpResponse::Ok().json(games))
}

/// GET /api/games/featured - the homepage promotion slot.
pub async fn get_featured_game(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let game = state
        .games
        .featured_game()
        .await
        .map_err(internal("Failed to fetch featured game"))?
        .ok_or(AppError::NotFound("No featured game found"))?;

    Ok(HttpResponse::Ok().json(game))
}

/// GET /api/games/{slug}
pub async fn get_game(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let game = state
        .games
        .game_by_slug(&slug)
        .await
        .map_err(internal("Failed to fetch game"))?
        .ok_or(AppError::NotFound("Game not found"))?;

    Ok(HttpResponse::Ok().json(game))
}
