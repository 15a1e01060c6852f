//! Read-only handlers over the wedding configuration.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use wedding_core::countdown::Countdown;
use wedding_core::wedding::{DerivedDetails, WeddingConfig};

use crate::response::DataResponse;
use crate::state::AppState;

/// Configuration document plus the display strings derived from it.
#[derive(Debug, Serialize)]
pub struct WeddingResponse {
    pub data: WeddingConfig,
    pub derived: DerivedDetails,
}

/// GET /api/wedding
pub async fn get_wedding(State(state): State<AppState>) -> impl IntoResponse {
    Json(WeddingResponse {
        derived: state.wedding.derived(),
        data: WeddingConfig::clone(&state.wedding),
    })
}

/// GET /api/wedding/countdown
///
/// Time left until the ceremony starts, relative to the server clock.
pub async fn get_countdown(State(state): State<AppState>) -> impl IntoResponse {
    let countdown = Countdown::until(state.wedding.starts_at_utc(), Utc::now());

    Json(DataResponse { data: countdown })
}
