//! Shared types passed between pipeline stages.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One image discovered in the resources directory.
///
/// Created by [`scan`](crate::scan::scan) and never mutated afterwards. The
/// serialized form of this type is the in-process shape; the two on-disk
/// shapes live in [`manifest`](crate::manifest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEntry {
    /// Bare filename, unique within one directory listing
    pub filename: String,
    /// Last modification time of the source file
    pub modified_at: DateTime<Utc>,
    /// File size in bytes
    pub size_bytes: u64,
}
