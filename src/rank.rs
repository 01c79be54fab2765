//! Ranking and truncation.
//!
//! Newest first by modification time. Equal timestamps fall back to filename
//! order so repeated runs over the same tree produce the same manifest.
//!
//! The limit applies here, before cross-referencing: an image that ranks
//! inside the limit but is later dropped by [`crossref`](crate::crossref)
//! is not replaced by the next-newest image. A limit of 2 over
//! `[a, b, c]` where `b` has no companions yields `[a]`, not `[a, c]`.

use crate::types::ImageEntry;
use std::num::NonZeroUsize;

/// Sort newest first and keep at most `limit` entries.
pub fn rank(mut entries: Vec<ImageEntry>, limit: NonZeroUsize) -> Vec<ImageEntry> {
    entries.sort_by(|a, b| {
        b.modified_at
            .cmp(&a.modified_at)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    entries.truncate(limit.get());
    entries
}
