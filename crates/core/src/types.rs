/// RSVP identifiers are opaque strings (database-generated or UUIDv7).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
