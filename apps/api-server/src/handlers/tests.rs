#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::{StatusCode, header};
    use actix_web::{App, test, web};

    use blog_core::domain::BlogEntry;
    use blog_infra::InMemoryEntryRepository;
    use blog_shared::dto::CreateEntryRequest;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn test_state() -> AppState {
        AppState {
            entries: Arc::new(InMemoryEntryRepository::new()),
            author: "Test Author".to_string(),
        }
    }

    fn post_entry(text: &str) -> actix_web::test::TestRequest {
        test::TestRequest::post()
            .uri("/api/blogs")
            .set_json(CreateEntryRequest {
                text: text.to_string(),
            })
    }

    #[actix_web::test]
    async fn test_entry_lifecycle() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        // Create the first entry.
        let resp = test::call_service(&app, post_entry("hi").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/api/blogs/1"
        );
        let first: BlogEntry = test::read_body_json(resp).await;
        assert_eq!(first.id, 1);
        assert_eq!(first.text, "hi");
        assert_eq!(first.user_name, "Test Author");

        // Second create gets the next id.
        let second: BlogEntry =
            test::call_and_read_body_json(&app, post_entry("bye").to_request()).await;
        assert_eq!(second.id, 2);

        // Delete the first, then it is gone.
        let req = test::TestRequest::delete().uri("/api/blogs/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/blogs/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        // Only the second entry remains.
        let req = test::TestRequest::get().uri("/api/blogs").to_request();
        let entries: Vec<BlogEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, 2);
    }

    #[actix_web::test]
    async fn test_get_missing_entry_is_404() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/blogs/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_create_with_null_body_is_400() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(header::ContentType::json())
            .set_payload("null")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_update_id_mismatch_is_rejected_before_the_store() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let created: BlogEntry =
            test::call_and_read_body_json(&app, post_entry("original").to_request()).await;

        let mut tampered = created.clone();
        tampered.text = "tampered".to_string();

        // Path id disagrees with body id.
        let req = test::TestRequest::put()
            .uri("/api/blogs/99")
            .set_json(&tampered)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // The stored entry is untouched.
        let req = test::TestRequest::get().uri("/api/blogs/1").to_request();
        let stored: BlogEntry = test::call_and_read_body_json(&app, req).await;
        assert_eq!(stored.text, "original");
    }

    #[actix_web::test]
    async fn test_update_missing_entry_is_404() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let mut ghost = BlogEntry::new("ghost".to_string(), "Test Author".to_string());
        ghost.id = 42;

        let req = test::TestRequest::put()
            .uri("/api/blogs/42")
            .set_json(&ghost)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_replaces_entry() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let created: BlogEntry =
            test::call_and_read_body_json(&app, post_entry("before").to_request()).await;

        let mut replacement = created.clone();
        replacement.text = "after".to_string();

        let req = test::TestRequest::put()
            .uri("/api/blogs/1")
            .set_json(&replacement)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: BlogEntry = test::read_body_json(resp).await;
        assert_eq!(updated, replacement);
    }

    #[actix_web::test]
    async fn test_delete_missing_entry_is_404() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::delete().uri("/api/blogs/7").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_health_reports_ok() {
        let state = test_state();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state.clone()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["entries"], 0);
    }
}
