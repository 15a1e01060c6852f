//! Guest RSVP submissions and stored records.
//!
//! A client sends an [`RsvpSubmission`]; [`RsvpSubmission::validate`] turns it
//! into a [`NewRsvp`] with defaults applied, and a storage backend assigns the
//! id and timestamp to produce an [`Rsvp`].

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::{RecordId, Timestamp};

/// Party size recorded when the guest does not give one.
pub const DEFAULT_GUEST_COUNT: i32 = 1;

// ---------------------------------------------------------------------------
// Wire payload
// ---------------------------------------------------------------------------

/// Body of `POST /api/rsvp`.
///
/// Every field is optional at the wire level so that a missing `name` or
/// `attending` is reported as a validation error instead of a decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RsvpSubmission {
    pub name: Option<String>,
    pub attending: Option<bool>,
    pub guest_count: Option<i64>,
    pub message: Option<String>,
}

impl RsvpSubmission {
    /// Check required fields and apply defaults.
    ///
    /// - `name` must be non-blank; it is stored trimmed.
    /// - `attending` must be present.
    /// - `guest_count` of `None` or `0` becomes [`DEFAULT_GUEST_COUNT`];
    ///   negative counts are rejected.
    /// - A blank `message` is dropped.
    pub fn validate(self) -> Result<NewRsvp, CoreError> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_owned);

        let (name, attending) = match (name, self.attending) {
            (Some(name), Some(attending)) => (name, attending),
            _ => {
                return Err(CoreError::Validation(
                    "Name and attendance status are required".into(),
                ))
            }
        };

        let guest_count = match self.guest_count {
            None | Some(0) => DEFAULT_GUEST_COUNT,
            Some(n) if n < 0 => {
                return Err(CoreError::Validation(format!(
                    "Guest count must be at least 1, got {n}"
                )))
            }
            Some(n) => i32::try_from(n).map_err(|_| {
                CoreError::Validation(format!("Guest count {n} is too large"))
            })?,
        };

        let message = self
            .message
            .filter(|m| !m.trim().is_empty());

        Ok(NewRsvp {
            name,
            attending,
            guest_count,
            message,
        })
    }
}

// ---------------------------------------------------------------------------
// Validated input and stored record
// ---------------------------------------------------------------------------

/// A validated submission that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRsvp {
    pub name: String,
    pub attending: bool,
    pub guest_count: i32,
    pub message: Option<String>,
}

impl NewRsvp {
    /// Attach the identity and creation time assigned by a storage backend.
    pub fn into_record(self, id: RecordId, created_at: Timestamp) -> Rsvp {
        Rsvp {
            id,
            name: self.name,
            attending: self.attending,
            guest_count: self.guest_count,
            message: self.message,
            created_at,
        }
    }
}

/// One guest's stored attendance response. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rsvp {
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: RecordId,
    pub name: String,
    pub attending: bool,
    /// Records written by older versions of the site may omit this or store
    /// `null`/`0`; all of those read as [`DEFAULT_GUEST_COUNT`].
    #[serde(
        default = "default_guest_count",
        deserialize_with = "deserialize_guest_count"
    )]
    pub guest_count: i32,
    #[serde(default)]
    pub message: Option<String>,
    pub created_at: Timestamp,
}

fn default_guest_count() -> i32 {
    DEFAULT_GUEST_COUNT
}

fn deserialize_guest_count<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<i32>::deserialize(deserializer)? {
        None | Some(0) => DEFAULT_GUEST_COUNT,
        Some(n) => n,
    })
}

/// Accept either a JSON string or a JSON integer as the record id.
///
/// Remote tables usually use `bigserial` keys; the local store writes strings.
fn deserialize_record_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Order records newest first.
///
/// Input is assumed to be in append order, so among records sharing a
/// timestamp the one appended last comes first.
pub fn sort_newest_first(records: &mut [Rsvp]) {
    records.reverse();
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
