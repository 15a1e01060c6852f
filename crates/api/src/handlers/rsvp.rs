//! Handlers for guest RSVPs.
//!
//! Submissions are validated in `wedding_core` and persisted through the
//! [`RsvpStore`](wedding_db::RsvpStore) chosen at startup.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use wedding_core::rsvp::{Rsvp, RsvpSubmission};
use wedding_db::StorageBackend;

use crate::error::{AppError, AppResult};
use crate::response::CreatedResponse;
use crate::state::AppState;

const SUBMIT_FAILED: &str = "Failed to submit RSVP";
const LIST_FAILED: &str = "Failed to fetch RSVPs";

/// `{ "rsvps": [...] }` returned by the listing endpoint.
#[derive(Debug, Serialize)]
pub struct RsvpListResponse {
    pub rsvps: Vec<Rsvp>,
}

/// POST /api/rsvp
///
/// Validate and store one guest response. Returns 201 with the stored record.
pub async fn create_rsvp(
    State(state): State<AppState>,
    payload: Result<Json<RsvpSubmission>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(submission) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let new_rsvp = submission.validate()?;

    let backend = state.store.backend();
    let rsvp = state
        .store
        .insert(new_rsvp)
        .await
        .map_err(AppError::storage(SUBMIT_FAILED))?;

    tracing::info!(
        rsvp_id = %rsvp.id,
        attending = rsvp.attending,
        guest_count = rsvp.guest_count,
        %backend,
        "RSVP submitted",
    );

    let message = match backend {
        StorageBackend::Remote => "RSVP submitted successfully",
        StorageBackend::Local => "RSVP submitted successfully (local storage)",
    };

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message,
            data: rsvp,
        }),
    ))
}

/// GET /api/rsvp
///
/// List every stored RSVP, newest first.
pub async fn list_rsvps(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rsvps = state
        .store
        .list()
        .await
        .map_err(AppError::storage(LIST_FAILED))?;

    Ok(Json(RsvpListResponse { rsvps }))
}
