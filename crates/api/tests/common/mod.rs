//! Shared helpers for the API integration tests.
//!
//! Every app is built with [`build_app_router`] so tests exercise the same
//! middleware stack as production.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;
use wedding_api::config::ServerConfig;
use wedding_api::router::build_app_router;
use wedding_api::state::AppState;
use wedding_core::wedding::WeddingConfig;
use wedding_db::{build_store, StorageConfig};

pub const TEST_ANON_KEY: &str = "test-anon-key";

/// A test `ServerConfig` rooted in `dir`, with no remote store configured.
pub fn test_config(dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig::resolve(None, None, local_rsvp_path(dir)),
        wedding_config_path: None,
        public_dir: dir.join("public"),
    }
}

/// Where the local store of [`test_config`] keeps its file.
pub fn local_rsvp_path(dir: &Path) -> PathBuf {
    dir.join("data").join("rsvps.json")
}

/// Build the full application from a config, resolving the store exactly as
/// the binary does.
pub fn build_test_app(config: &ServerConfig) -> Router {
    let store = build_store(&config.storage).unwrap();
    let state = AppState {
        store,
        wedding: Arc::new(WeddingConfig::default()),
    };
    build_app_router(state, config)
}

/// Application using the local file store under `dir`.
pub fn local_app(dir: &Path) -> Router {
    build_test_app(&test_config(dir))
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response {
    app.oneshot(
        Request::post(uri)
            .header("content-type", content_type)
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

// ---------------------------------------------------------------------------
// Fake remote store
// ---------------------------------------------------------------------------

/// Rows received by the fake PostgREST server.
pub type FakeRows = Arc<Mutex<Vec<Value>>>;

/// Start a minimal PostgREST stand-in for the `rsvps` table and return its
/// base URL. When `fail` is set every request answers 503.
pub async fn spawn_fake_remote(fail: bool) -> (String, FakeRows) {
    let rows: FakeRows = Arc::default();

    let insert_rows = {
        let rows = Arc::clone(&rows);
        move |headers: HeaderMap, Json(batch): Json<Vec<Value>>| async move {
            if fail || headers.get("apikey").is_none() {
                return (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response();
            }
            let mut rows = rows.lock().unwrap();
            let mut inserted = Vec::new();
            for mut row in batch {
                row["id"] = json!(rows.len() + 1);
                rows.push(row.clone());
                inserted.push(row);
            }
            (StatusCode::CREATED, Json(inserted)).into_response()
        }
    };
    let select_rows = {
        let rows = Arc::clone(&rows);
        move || async move {
            if fail {
                return (StatusCode::SERVICE_UNAVAILABLE, "unavailable").into_response();
            }
            let mut all = rows.lock().unwrap().clone();
            all.reverse();
            Json(all).into_response()
        }
    };

    let app = Router::new().route(
        "/rest/v1/rsvps",
        routing::get(select_rows).post(insert_rows),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), rows)
}

/// A test config pointing at a remote store, with a local path that must
/// stay untouched.
pub fn remote_config(dir: &Path, url: &str) -> ServerConfig {
    ServerConfig {
        storage: StorageConfig::resolve(
            Some(url.to_string()),
            Some(TEST_ANON_KEY.to_string()),
            local_rsvp_path(dir),
        ),
        ..test_config(dir)
    }
}
