//! Local JSON-file RSVP store.
//!
//! The whole collection lives in one pretty-printed JSON array. Appends are a
//! read-modify-write of that file, serialized by an async mutex, and every
//! write goes to a sibling temp file that is then renamed over the original.

use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;
use wedding_core::rsvp::{sort_newest_first, NewRsvp, Rsvp};

use crate::error::StorageError;
use crate::store::{RsvpStore, StorageBackend};

/// RSVP store backed by a single JSON file.
///
/// Appends rewrite every record through [`Rsvp`], so fields outside that
/// shape in older files are dropped on the first new submission.
pub struct FileRsvpStore {
    path: PathBuf,
    /// Held across the whole read-append-write sequence.
    lock: Mutex<()>,
}

impl FileRsvpStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in file order. A missing file is an empty collection.
    async fn read_all(&self) -> Result<Vec<Rsvp>, StorageError> {
        self.ensure_parent_dir().await?;

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file contents with `records`.
    async fn write_all(&self, records: &[Rsvp]) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_vec_pretty(records).map_err(StorageError::Serialize)?;
        let tmp = temp_path(&self.path);

        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| StorageError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::io(&self.path, e))?;
        Ok(())
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::io(dir, e)),
            _ => Ok(()),
        }
    }
}

/// `data/rsvps.json` -> `data/rsvps.json.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("rsvps.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[async_trait]
impl RsvpStore for FileRsvpStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Local
    }

    async fn insert(&self, rsvp: NewRsvp) -> Result<Rsvp, StorageError> {
        let _guard = self.lock.lock().await;

        let mut records = self.read_all().await?;
        let record = rsvp.into_record(Uuid::now_v7().to_string(), Utc::now());
        records.push(record.clone());
        self.write_all(&records).await?;

        tracing::debug!(
            id = %record.id,
            total = records.len(),
            path = %self.path.display(),
            "RSVP appended to local file"
        );
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Rsvp>, StorageError> {
        let _guard = self.lock.lock().await;

        let mut records = self.read_all().await?;
        sort_newest_first(&mut records);
        Ok(records)
    }
}
