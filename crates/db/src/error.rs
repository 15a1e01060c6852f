use std::path::PathBuf;

/// Errors from either RSVP storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the local RSVP file failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The local RSVP file exists but is not a JSON array of records.
    #[error("Corrupt RSVP file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding records to JSON failed.
    #[error("Failed to serialize RSVPs: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The HTTP request to the remote store failed (network, DNS, TLS, decode).
    #[error("Remote store request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote store returned a non-2xx status code.
    #[error("Remote store error ({status}): {body}")]
    Remote { status: u16, body: String },

    /// The remote store accepted an insert but returned no row.
    #[error("Remote store returned no row for the inserted RSVP")]
    EmptyInsert,
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
