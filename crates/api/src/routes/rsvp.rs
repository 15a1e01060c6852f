use axum::routing::get;
use axum::Router;

use crate::handlers::rsvp;
use crate::state::AppState;

/// RSVP routes mounted at `/rsvp`.
///
/// ```text
/// GET    /    -> list_rsvps
/// POST   /    -> create_rsvp
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(rsvp::list_rsvps).post(rsvp::create_rsvp))
}
