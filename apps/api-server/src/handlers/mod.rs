//! HTTP handlers and route configuration.

mod auth;
mod health;
mod posts;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post CRUD
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}", web::get().to(posts::get))
                    .route("/{id}", web::patch().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            )
            // Users
            .route("/users", web::get().to(users::list))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test, web};
    use mireddit_shared::dto::{AuthResponse, PostResponse, UserResponse};
    use mireddit_shared::response::ApiResponse;
    use serde_json::json;

    use crate::state::AppState;

    use super::configure_routes;

    macro_rules! test_app {
        () => {{
            let state = AppState::new(None).await;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn create_then_get_post_round_trips() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "first post"}))
            .to_request();
        let created: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        let id = created.data.unwrap().id;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        let fetched: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(fetched.data.unwrap().title, "first post");
    }

    #[actix_web::test]
    async fn get_missing_post_is_404() {
        let app = test_app!();

        let req = test::TestRequest::get().uri("/api/posts/999").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
    }

    #[actix_web::test]
    async fn patch_without_title_leaves_post_unchanged() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "keep me"}))
            .to_request();
        let created: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        let id = created.data.unwrap().id;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/posts/{id}"))
            .set_json(json!({}))
            .to_request();
        let patched: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(patched.data.unwrap().title, "keep me");
    }

    #[actix_web::test]
    async fn delete_missing_post_is_404_existing_is_204() {
        let app = test_app!();

        let req = test::TestRequest::delete().uri("/api/posts/7").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({"title": "doomed"}))
            .to_request();
        let created: ApiResponse<PostResponse> = test::call_and_read_body_json(&app, req).await;
        let id = created.data.unwrap().id;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{id}"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 204);
    }

    #[actix_web::test]
    async fn register_then_login_succeeds() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"username": "ab", "password": "abc"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "ab", "password": "abc"}))
            .to_request();
        let body: AuthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.user.unwrap().username, "ab");
        assert!(body.errors.is_none());
    }

    #[actix_web::test]
    async fn login_with_wrong_password_is_401_on_password_field() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"username": "alice", "password": "secret"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"username": "alice", "password": "wrong"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 401);

        let body: AuthResponse = test::read_body_json(res).await;
        let errors = body.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "password");
    }

    #[actix_web::test]
    async fn register_with_short_username_is_422() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"username": "a", "password": "abc"}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 422);

        let body: AuthResponse = test::read_body_json(res).await;
        assert_eq!(body.errors.unwrap()[0].field, "username");
    }

    #[actix_web::test]
    async fn listed_users_carry_no_password_hash() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({"username": "alice", "password": "secret"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let res = test::call_service(&app, req).await;
        let raw = test::read_body(res).await;
        let raw = std::str::from_utf8(&raw).unwrap();

        assert!(!raw.contains("password"));

        let body: ApiResponse<Vec<UserResponse>> = serde_json::from_str(raw).unwrap();
        assert_eq!(body.data.unwrap()[0].username, "alice");
    }
}
