//! RSVP persistence.
//!
//! Two interchangeable [`RsvpStore`] implementations live here: a remote
//! PostgREST table ([`RemoteRsvpStore`]) and a local JSON file
//! ([`FileRsvpStore`]). [`build_store`] picks one from a resolved
//! [`StorageConfig`]; the server holds on to that single store for its
//! whole lifetime.

pub mod error;
pub mod file_store;
pub mod remote_store;
pub mod store;

use std::sync::Arc;

pub use error::StorageError;
pub use file_store::FileRsvpStore;
pub use remote_store::RemoteRsvpStore;
pub use store::{RemoteConfig, RsvpStore, StorageBackend, StorageConfig};

/// Build the store selected by `config`.
///
/// A configured remote wins; otherwise RSVPs go to the local file.
pub fn build_store(config: &StorageConfig) -> Result<Arc<dyn RsvpStore>, StorageError> {
    let store: Arc<dyn RsvpStore> = match &config.remote {
        Some(remote) => {
            tracing::info!(url = %remote.url, "Using remote RSVP store");
            Arc::new(RemoteRsvpStore::new(remote)?)
        }
        None => {
            tracing::info!(
                path = %config.local_path.display(),
                "Remote store not configured, using local RSVP file"
            );
            Arc::new(FileRsvpStore::new(&config.local_path))
        }
    };
    Ok(store)
}
