//! HTTP-level integration tests for the RSVP endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, local_app, local_rsvp_path, post_json, post_raw};
use serde_json::json;

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn minimal_submission_is_stored_with_default_guest_count() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        local_app(dir.path()),
        "/api/rsvp",
        json!({"name": "Ana", "attending": true}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "RSVP submitted successfully (local storage)");
    assert_eq!(json["data"]["name"], "Ana");
    assert_eq!(json["data"]["attending"], true);
    assert_eq!(json["data"]["guest_count"], 1);
    assert!(json["data"]["message"].is_null());
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["created_at"].is_string());
}

#[tokio::test]
async fn zero_guest_count_is_treated_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(
        local_app(dir.path()),
        "/api/rsvp",
        json!({"name": "Ana", "attending": false, "guest_count": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["guest_count"], 1);
}

#[tokio::test]
async fn submitted_fields_round_trip_through_listing() {
    let dir = tempfile::tempdir().unwrap();
    let created = body_json(
        post_json(
            local_app(dir.path()),
            "/api/rsvp",
            json!({
                "name": "Ben",
                "attending": true,
                "guest_count": 3,
                "message": "Can't wait!",
            }),
        )
        .await,
    )
    .await;

    let response = get(local_app(dir.path()), "/api/rsvp").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rsvps = json["rsvps"].as_array().unwrap();
    assert_eq!(rsvps.len(), 1);
    assert_eq!(rsvps[0], created["data"]);
    assert_eq!(rsvps[0]["guest_count"], 3);
    assert_eq!(rsvps[0]["message"], "Can't wait!");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

async fn assert_rejected_without_side_effects(body: serde_json::Value) {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(local_app(dir.path()), "/api/rsvp", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].is_string());

    let listed = body_json(get(local_app(dir.path()), "/api/rsvp").await).await;
    assert_eq!(listed["rsvps"], json!([]));
    assert!(!local_rsvp_path(dir.path()).exists());
}

#[tokio::test]
async fn missing_name_is_rejected() {
    assert_rejected_without_side_effects(json!({"attending": true})).await;
}

#[tokio::test]
async fn empty_name_is_rejected() {
    assert_rejected_without_side_effects(json!({"name": "", "attending": true})).await;
}

#[tokio::test]
async fn missing_attending_is_rejected() {
    assert_rejected_without_side_effects(json!({"name": "Ana"})).await;
}

#[tokio::test]
async fn non_boolean_attending_is_rejected() {
    assert_rejected_without_side_effects(json!({"name": "Ana", "attending": "yes"})).await;
}

#[tokio::test]
async fn negative_guest_count_is_rejected() {
    assert_rejected_without_side_effects(
        json!({"name": "Ana", "attending": true, "guest_count": -1}),
    )
    .await;
}

#[tokio::test]
async fn validation_error_uses_validation_code() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_json(local_app(dir.path()), "/api/rsvp", json!({"attending": true})).await;

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Name and attendance status are required");
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let response = post_raw(
        local_app(dir.path()),
        "/api/rsvp",
        "application/json",
        "{\"name\": ".to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fresh_store_lists_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let response = get(local_app(dir.path()), "/api/rsvp").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"rsvps": []}));
}

#[tokio::test]
async fn repeated_listing_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["Ana", "Ben"] {
        post_json(
            local_app(dir.path()),
            "/api/rsvp",
            json!({"name": name, "attending": true}),
        )
        .await;
    }

    let first = body_json(get(local_app(dir.path()), "/api/rsvp").await).await;
    let second = body_json(get(local_app(dir.path()), "/api/rsvp").await).await;

    assert_eq!(first, second);
    assert_eq!(first["rsvps"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn listing_is_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["first", "second", "third"] {
        post_json(
            local_app(dir.path()),
            "/api/rsvp",
            json!({"name": name, "attending": true}),
        )
        .await;
    }

    let json = body_json(get(local_app(dir.path()), "/api/rsvp").await).await;
    let names: Vec<_> = json["rsvps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["third", "second", "first"]);
}

// ---------------------------------------------------------------------------
// Storage failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn corrupt_local_file_yields_generic_500() {
    let dir = tempfile::tempdir().unwrap();
    let path = local_rsvp_path(dir.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json at all").unwrap();

    let response = get(local_app(dir.path()), "/api/rsvp").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to fetch RSVPs");
    assert_eq!(json["code"], "STORAGE_ERROR");

    let response = post_json(
        local_app(dir.path()),
        "/api/rsvp",
        json!({"name": "Ana", "attending": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Failed to submit RSVP");
    assert!(!json.to_string().contains("not json"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_local_submissions_are_all_persisted() {
    const SUBMISSIONS: usize = 20;

    let dir = tempfile::tempdir().unwrap();
    // One app (one store) shared by every request, as in production.
    let app = local_app(dir.path());

    let handles: Vec<_> = (0..SUBMISSIONS)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                post_json(
                    app,
                    "/api/rsvp",
                    json!({"name": format!("guest-{i}"), "attending": true}),
                )
                .await
                .status()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::CREATED);
    }

    let json = body_json(get(app, "/api/rsvp").await).await;
    assert_eq!(json["rsvps"].as_array().unwrap().len(), SUBMISSIONS);
}
