//! Remote RSVP store on a PostgREST (Supabase) table.
//!
//! Inserts one row per submission into `rsvps` and lists the table ordered
//! by `created_at` descending. Failures are returned as-is; nothing is
//! retried.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use wedding_core::rsvp::{NewRsvp, Rsvp};
use wedding_core::types::Timestamp;

use crate::error::StorageError;
use crate::store::{RemoteConfig, RsvpStore, StorageBackend};

/// Table holding one row per RSVP.
pub const RSVP_TABLE: &str = "rsvps";

/// HTTP timeout for a single request to the remote store.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Row payload for inserts. `id` is left to the database.
#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    name: &'a str,
    attending: bool,
    guest_count: i32,
    message: Option<&'a str>,
    created_at: Timestamp,
}

/// RSVP store talking to a PostgREST endpoint.
pub struct RemoteRsvpStore {
    client: reqwest::Client,
    table_url: String,
    anon_key: String,
}

impl RemoteRsvpStore {
    pub fn new(config: &RemoteConfig) -> Result<Self, StorageError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a store reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: &RemoteConfig) -> Self {
        Self {
            client,
            table_url: format!(
                "{}/rest/v1/{RSVP_TABLE}",
                config.url.trim_end_matches('/')
            ),
            anon_key: config.anon_key.clone(),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Turn a non-2xx response into [`StorageError::Remote`].
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, StorageError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(StorageError::Remote {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl RsvpStore for RemoteRsvpStore {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Remote
    }

    async fn insert(&self, rsvp: NewRsvp) -> Result<Rsvp, StorageError> {
        let row = InsertRow {
            name: &rsvp.name,
            attending: rsvp.attending,
            guest_count: rsvp.guest_count,
            message: rsvp.message.as_deref(),
            created_at: Utc::now(),
        };

        let response = self
            .authorized(self.client.post(&self.table_url))
            .header("Prefer", "return=representation")
            .json(&[row])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let mut rows: Vec<Rsvp> = response.json().await?;
        if rows.is_empty() {
            return Err(StorageError::EmptyInsert);
        }
        let record = rows.swap_remove(0);

        tracing::debug!(id = %record.id, "RSVP inserted into remote store");
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Rsvp>, StorageError> {
        let response = self
            .authorized(self.client.get(&self.table_url))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        Ok(response.json().await?)
    }
}
