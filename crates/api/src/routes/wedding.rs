use axum::routing::get;
use axum::Router;

use crate::handlers::wedding;
use crate::state::AppState;

/// Wedding configuration routes mounted at `/wedding`.
///
/// ```text
/// GET    /            -> get_wedding
/// GET    /countdown   -> get_countdown
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wedding::get_wedding))
        .route("/countdown", get(wedding::get_countdown))
}
