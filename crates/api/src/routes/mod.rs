pub mod health;
pub mod rsvp;
pub mod wedding;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /rsvp                 submit (POST), list (GET)
/// /wedding              configuration + derived values (GET)
/// /wedding/countdown    time until the ceremony (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rsvp", rsvp::router())
        .nest("/wedding", wedding::router())
}
