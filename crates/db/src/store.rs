//! The storage strategy trait and the configuration that selects it.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Serialize;
use wedding_core::rsvp::{NewRsvp, Rsvp};

use crate::error::StorageError;

/// Default location of the local RSVP file, relative to the working directory.
pub const DEFAULT_LOCAL_PATH: &str = "data/rsvps.json";

/// Which backend a store writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Remote,
    Local,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::Remote => "remote",
            StorageBackend::Local => "local",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Append-only RSVP collection.
///
/// Implementations assign the record id and creation time on insert and
/// list records newest first.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    fn backend(&self) -> StorageBackend;

    async fn insert(&self, rsvp: NewRsvp) -> Result<Rsvp, StorageError>;

    async fn list(&self) -> Result<Vec<Rsvp>, StorageError>;
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Connection details for the remote PostgREST store.
#[derive(Clone)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Public (anon) API key sent as both `apikey` and bearer token.
    pub anon_key: String,
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

/// Storage selection, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// `Some` only when both the URL and the key were provided.
    pub remote: Option<RemoteConfig>,
    pub local_path: PathBuf,
}

impl StorageConfig {
    /// Resolve the backend from the raw configuration values.
    ///
    /// Blank values count as absent. If either remote value is missing the
    /// local file is used.
    pub fn resolve(
        url: Option<String>,
        anon_key: Option<String>,
        local_path: impl Into<PathBuf>,
    ) -> Self {
        let present = |v: Option<String>| {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        };

        let remote = match (present(url), present(anon_key)) {
            (Some(url), Some(anon_key)) => Some(RemoteConfig {
                url: url.trim_end_matches('/').to_string(),
                anon_key,
            }),
            _ => None,
        };

        Self {
            remote,
            local_path: local_path.into(),
        }
    }

    pub fn backend(&self) -> StorageBackend {
        if self.remote.is_some() {
            StorageBackend::Remote
        } else {
            StorageBackend::Local
        }
    }
}
