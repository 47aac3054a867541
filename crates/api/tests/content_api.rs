//! HTTP-level integration tests for the content API endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener. POSTs send multipart text fields
//! only, so no object-storage request is made.

mod common;

use axum::http::StatusCode;
use chapter_db::models::blog::CreateBlog;
use chapter_db::models::committee::CreateCommitteeImage;
use chapter_db::models::upcoming_event::CreateUpcomingEvent;
use chapter_db::repositories::{BlogRepo, CommitteeRepo, UpcomingEventRepo};
use chrono::NaiveDate;
use common::{body_json, delete, get, post_multipart};
use sqlx::PgPool;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_achievement_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/achievements",
        &[
            ("title", "Best Student Chapter"),
            ("description", "Regional award"),
            ("awarded_by", "IEEE"),
            ("date", "2025-02-10"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Best Student Chapter");
    assert_eq!(json["awarded_by"], "IEEE");
    assert_eq!(json["date"], "2025-02-10");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_achievements_listed_newest_first(pool: PgPool) {
    for (title, on) in [("Older", "2023-05-01"), ("Newer", "2025-05-01")] {
        let app = common::build_test_app(pool.clone());
        let response = post_multipart(
            app,
            "/api/achievements",
            &[
                ("title", title),
                ("description", "d"),
                ("awarded_by", "IEEE"),
                ("date", on),
            ],
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/achievements").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Newer");
    assert_eq!(json[1]["title"], "Older");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_achievement_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(
            app,
            "/api/achievements",
            &[
                ("title", "Fetch Me"),
                ("description", "d"),
                ("awarded_by", "IEEE"),
                ("date", "2025-01-01"),
            ],
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/achievements/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["title"], "Fetch Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_achievement(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_multipart(
            app,
            "/api/achievements",
            &[
                ("title", "Delete Me"),
                ("description", "d"),
                ("awarded_by", "IEEE"),
                ("date", "2025-01-02"),
            ],
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/achievements/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/achievements/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_announcement_with_priority(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/announcements",
        &[
            ("title", "Exam Schedule"),
            ("description", "Midterms moved"),
            ("date", "2025-03-03"),
            ("priority", "true"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["priority"], true);
    assert_eq!(json["image_urls"], serde_json::json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_announcement_priority_defaults_false(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/announcements",
        &[
            ("title", "Plain"),
            ("description", "No flag"),
            ("date", "2025-03-04"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["priority"], false);
}

// ---------------------------------------------------------------------------
// Events / seminars / webinars / site visits
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_event_defaults_status(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/events",
        &[
            ("title", "Robotics Night"),
            ("description", "Annual social"),
            ("date", "2025-08-20"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "upcoming");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/events").await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_seminar_with_speaker(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_multipart(
        app,
        "/api/seminars",
        &[
            ("title", "Embedded Rust"),
            ("description", "Guest talk"),
            ("speaker", "Dr. Rao"),
            ("date", "2025-10-01"),
            ("status", "completed"),
        ],
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["speaker"], "Dr. Rao");
    assert_eq!(json["status"], "completed");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_webinar_alias_paths(pool: PgPool) {
    // Create through the singular alias.
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/webinar",
        &[
            ("title", "Intro to PCB Design"),
            ("description", "Online session"),
            ("presenter", "Alumni Team"),
            ("meeting_link", "https://meet.example.com/pcb"),
            ("date", "2025-11-11"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Read back through the plural path.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/webinars").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Intro to PCB Design");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_site_visit_upload_alias(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_multipart(
        app,
        "/api/site-visits/upload",
        &[
            ("title", "Steel Plant Visit"),
            ("description", "Industrial tour"),
            ("location", "Rourkela"),
            ("date", "2025-12-05"),
        ],
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["location"], "Rourkela");
    let id = json["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/site-visits/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Read-only resources
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_upcoming_events_listed_soonest_first(pool: PgPool) {
    for (title, on) in [("Later", date(2026, 4, 1)), ("Soon", date(2026, 1, 1))] {
        UpcomingEventRepo::create(
            &pool,
            &CreateUpcomingEvent {
                title: title.to_string(),
                description: "Banner item".to_string(),
                date: on,
                registration_link: None,
            },
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/upcoming-events").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Soon");
    assert_eq!(json[1]["title"], "Later");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_committees_filter_and_years(pool: PgPool) {
    for (year, name, position, sort) in [
        ("2024-25", "Asha", "Chair", 0),
        ("2024-25", "Ben", "Treasurer", 1),
        ("2023-24", "Chris", "Chair", 0),
    ] {
        CommitteeRepo::create(
            &pool,
            &CreateCommitteeImage {
                year: year.to_string(),
                member_name: name.to_string(),
                position: position.to_string(),
                image_url: format!("https://example.com/{name}.jpg"),
                sort_order: Some(sort),
            },
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/committees?year=2024-25").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["member_name"], "Asha");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/committees/years").await;
    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!(["2024-25", "2023-24"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_blogs_listed(pool: PgPool) {
    BlogRepo::create(
        &pool,
        &CreateBlog {
            title: "Chapter Recap".to_string(),
            summary: "What we did this year".to_string(),
            author: "Dana".to_string(),
            url: Some("https://medium.com/example".to_string()),
            image_url: None,
            published_on: date(2025, 6, 30),
        },
    )
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/blogs").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Chapter Recap");
    assert_eq!(json[0]["author"], "Dana");
}
