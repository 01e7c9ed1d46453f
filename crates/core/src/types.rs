/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh opaque identifier token.
///
/// Forms, questions, and responses all use random UUID-v4 string tokens as
/// primary identifiers; nothing in the system relies on them being ordered.
pub fn new_token() -> String {
    uuid::Uuid::new_v4().to_string()
}
