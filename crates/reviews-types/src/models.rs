use serde::{Deserialize, Serialize};

/// A persisted review as it appears on the wire.
///
/// `timestamp` and `created_at` are always generated by the server at
/// insert time; no request type carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub name: String,
    pub review: String,
    /// Display string, e.g. "October 16, 2026 at 3:45 PM".
    pub timestamp: String,
    /// Epoch milliseconds. Listing order is descending on this field.
    pub created_at: i64,
}
