#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use chrono::{DateTime, TimeZone, Utc};
    use serde_json::{Value, json};
    use uuid::Uuid;

    use mahogany_core::domain::{BlogPost, Game, GameStatus};
    use mahogany_infra::InMemoryContentStore;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    macro_rules! test_app {
        ($store:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(AppState::with_store(Arc::new($store))))
                    .configure(configure_routes),
            )
            .await
        };
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn post(slug: &str, published_at: DateTime<Utc>, published: bool) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: slug.to_string(),
            slug: slug.to_string(),
            excerpt: format!("{slug} excerpt"),
            content: format!("# {slug}"),
            category: "Dev Update".to_string(),
            published_at,
            author: "Tai".to_string(),
            read_time: 5,
            published,
        }
    }

    fn game(slug: &str, featured: bool) -> Game {
        Game {
            id: Uuid::new_v4(),
            title: slug.to_string(),
            slug: slug.to_string(),
            description: format!("{slug} description"),
            short_description: format!("{slug} short"),
            category: "Simulation".to_string(),
            status: GameStatus::Active,
            progress: 65,
            engine: "Godot Engine".to_string(),
            featured,
            release_date: None,
            features: vec!["Lo-fi Soundtrack".to_string()],
        }
    }

    #[actix_web::test]
    async fn blog_listing_returns_published_posts_newest_first() {
        let app = test_app!(InMemoryContentStore::with_content(
            vec![
                post("older", date(2024, 11, 28), true),
                post("hidden", date(2024, 12, 20), false),
                post("newer", date(2024, 12, 15), true),
            ],
            Vec::new(),
        ));

        let resp =
            test::call_service(&app, test::TestRequest::get().uri("/api/blog").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let posts = body.as_array().unwrap();
        let slugs: Vec<&str> = posts.iter().map(|p| p["slug"].as_str().unwrap()).collect();
        assert_eq!(slugs, ["newer", "older"]);

        for pair in posts.windows(2) {
            assert!(pair[0]["publishedAt"].as_str() >= pair[1]["publishedAt"].as_str());
        }
    }

    #[actix_web::test]
    async fn blog_post_is_served_by_slug() {
        let app = test_app!(InMemoryContentStore::with_content(
            vec![post("ui-polish", date(2024, 12, 15), true)],
            Vec::new(),
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/blog/ui-polish")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["slug"], "ui-polish");
        assert_eq!(body["author"], "Tai");
    }

    #[actix_web::test]
    async fn unknown_blog_slug_is_not_found() {
        let app = test_app!(InMemoryContentStore::new());

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/blog/unknown-slug")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Blog post not found"}));
    }

    #[actix_web::test]
    async fn games_listing_returns_the_whole_catalogue() {
        let app = test_app!(InMemoryContentStore::with_content(
            Vec::new(),
            vec![game("sip-and-serve", true), game("garden-tales", false)],
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/games").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let slugs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, ["sip-and-serve", "garden-tales"]);
    }

    #[actix_web::test]
    async fn game_is_served_by_slug_with_wire_field_names() {
        let app = test_app!(InMemoryContentStore::with_content(
            Vec::new(),
            vec![game("sip-and-serve", true)],
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/games/sip-and-serve")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "active");
        assert!(body.get("shortDescription").is_some());
        assert_eq!(body["releaseDate"], Value::Null);
    }

    #[actix_web::test]
    async fn unknown_game_slug_is_not_found() {
        let app = test_app!(InMemoryContentStore::new());

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/games/no-such-game")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Game not found"}));
    }

    #[actix_web::test]
    async fn featured_route_returns_the_flagged_game() {
        let app = test_app!(InMemoryContentStore::with_content(
            Vec::new(),
            vec![game("sip-and-serve", true), game("garden-tales", false)],
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/games/featured")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["slug"], "sip-and-serve");
    }

    #[actix_web::test]
    async fn featured_route_is_not_found_without_a_flagged_game() {
        let app = test_app!(InMemoryContentStore::with_content(
            Vec::new(),
            vec![game("garden-tales", false)],
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/games/featured")
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "No featured game found"}));
    }

    #[actix_web::test]
    async fn contact_submission_is_created() {
        let app = test_app!(InMemoryContentStore::new());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(json!({
                    "name": "Rowan",
                    "email": "rowan@example.com",
                    "subject": "Playtest",
                    "message": "Count me in."
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Message sent successfully");
        assert!(body["id"].as_str().is_some());
    }

    #[actix_web::test]
    async fn contact_with_empty_message_reports_the_field() {
        let app = test_app!(InMemoryContentStore::new());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/contact")
                .set_json(json!({
                    "name": "Rowan",
                    "email": "rowan@example.com",
                    "subject": "Playtest",
                    "message": ""
                }))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid form data");
        let fields: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap())
            .collect();
        assert!(fields.contains(&"message"));
    }

    #[actix_web::test]
    async fn subscribing_twice_conflicts_the_second_time() {
        let app = test_app!(InMemoryContentStore::new());

        let subscribe = || {
            test::TestRequest::post()
                .uri("/api/newsletter/subscribe")
                .set_json(json!({"email": "a@b.com"}))
                .to_request()
        };

        let first = test::call_service(&app, subscribe()).await;
        assert_eq!(first.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(first).await;
        assert_eq!(body["message"], "Successfully subscribed to newsletter");

        let second = test::call_service(&app, subscribe()).await;
        assert_eq!(second.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(second).await;
        assert_eq!(body, json!({"message": "Email is already subscribed"}));
    }

    #[actix_web::test]
    async fn subscribing_with_a_malformed_email_is_rejected() {
        let app = test_app!(InMemoryContentStore::new());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/newsletter/subscribe")
                .set_json(json!({"email": "not-an-email"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Invalid email format");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[actix_web::test]
    async fn health_check_reports_loaded_content() {
        let app = test_app!(InMemoryContentStore::with_content(
            vec![
                post("newer", date(2024, 12, 15), true),
                post("hidden", date(2024, 12, 20), false),
            ],
            vec![game("sip-and-serve", true)],
        ));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/api/health").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["publishedPosts"], 1);
        assert_eq!(body["games"], 1);
    }
}
