//! Dev-blog read endpoints.

use actix_web::{HttpResponse, web};

use crate::middleware::error::{AppError, AppResult, internal};
use crate::state::AppState;

/// GET /api/blog - published posts, newest first.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state
        .blog
        .published_posts()
        .await
        .map_err(internal("Failed to fetch blog posts"))?;

    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let slug = path.into_inner();
    let post = state
        .blog
        .post_by_slug(&slug)
        .await
        .map_err(internal("Failed to fetch blog post"))?
        .ok_or(AppError::NotFound("Blog post not found"))?;

    Ok(HttpResponse::Ok().json(post))
}
