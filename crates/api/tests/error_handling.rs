//! Error-path tests: 400 on missing/invalid fields, 404 on unknown ids,
//! 409 on duplicates, 405 on read-only resources.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_multipart};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_without_title_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/announcements",
        &[("description", "No title here"), ("date", "2025-03-03")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("title"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_with_bad_date_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/events",
        &[
            ("title", "Bad Date"),
            ("description", "d"),
            ("date", "03/14/2025"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("date"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blank_required_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/seminars",
        &[("title", "   "), ("description", "d"), ("date", "2025-01-01")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_returns_404(pool: PgPool) {
    for uri in [
        "/api/achievements/999999",
        "/api/announcements/999999",
        "/api/events/999999",
        "/api/webinars/999999",
        "/api/site-visits/999999",
        "/api/upcoming-events/999999",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "NOT_FOUND");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_nonexistent_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = common::delete(app, "/api/events/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_achievement_returns_409(pool: PgPool) {
    let fields = [
        ("title", "Twice"),
        ("description", "d"),
        ("awarded_by", "IEEE"),
        ("date", "2025-04-04"),
    ];

    let app = common::build_test_app(pool.clone());
    let response = post_multipart(app, "/api/achievements", &fields).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/achievements", &fields).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_to_read_only_resource_returns_405(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(app, "/api/upcoming-events", &[("title", "Nope")]).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let app = common::build_test_app(pool);
    let response = post_multipart(app, "/api/blogs", &[("title", "Nope")]).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
