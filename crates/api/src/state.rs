use std::sync::Arc;

use wedding_core::wedding::WeddingConfig;
use wedding_db::RsvpStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// The RSVP store chosen at startup. Never swapped while running.
    pub store: Arc<dyn RsvpStore>,
    /// Wedding configuration loaded at startup.
    pub wedding: Arc<WeddingConfig>,
}
