//! HTTP handlers and route configuration.

mod blog;
mod contact;
mod games;
mod health;
mod newsletter;

#[cfg(test)]
mod tests;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/blog")
                    .route("", web::get().to(blog::list_posts))
                    .route("/{slug}", web::get().to(blog::get_post)),
            )
            .service(
                web::scope("/games")
                    .route("", web::get().to(games::list_games))
                    // The literal segment must be registered ahead of the
                    // slug matcher; actix matches in registration order.
                    .route("/featured", web::get().to(games::get_featured_game))
                    .route("/{slug}", web::get().to(games::get_game)),
            )
            .route("/contact", web::post().to(contact::submit_message))
            .route(
                "/newsletter/subscribe",
                web::post().to(newsletter::subscribe),
            ),
    );
}
