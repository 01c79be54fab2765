//! Manifest serialization.
//!
//! The same ranked, filtered entries leave the pipeline in two shapes:
//!
//! | Schema | Written to | Formatting |
//! |--------|-----------|------------|
//! | [`ManifestRecord`] | `gallery-data.json` | pretty, 2-space indent |
//! | [`EmbeddedRecord`] | `index.html` (`const galleryData = …;`) | compact, one line |
//!
//! Both currently serialize as `{"filename", "date", "size"}`. They are kept
//! as separate types because their consumers differ: the JSON file is read
//! by external tooling, the embedded array by the page's own rendering
//! script, and either may change without the other.
//!
//! Timestamps are ISO-8601 UTC with millisecond precision and a `Z` suffix:
//!
//! ```text
//! 2023-11-14T22:13:20.000Z
//! ```

use crate::types::ImageEntry;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One entry of the standalone `gallery-data.json` file.
#[derive(Debug, Serialize)]
pub struct ManifestRecord<'a> {
    pub filename: &'a str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>,
    pub size: u64,
}

impl<'a> From<&'a ImageEntry> for ManifestRecord<'a> {
    fn from(entry: &'a ImageEntry) -> Self {
        Self {
            filename: &entry.filename,
            date: entry.modified_at,
            size: entry.size_bytes,
        }
    }
}

/// One entry of the array embedded in the host page.
#[derive(Debug, Serialize)]
pub struct EmbeddedRecord<'a> {
    pub filename: &'a str,
    #[serde(serialize_with = "serialize_timestamp")]
    pub date: DateTime<Utc>,
    pub size: u64,
}

impl<'a> From<&'a ImageEntry> for EmbeddedRecord<'a> {
    fn from(entry: &'a ImageEntry) -> Self {
        Self {
            filename: &entry.filename,
            date: entry.modified_at,
            size: entry.size_bytes,
        }
    }
}

fn serialize_timestamp<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&format_timestamp(date))
}

/// Render a timestamp the way the manifest stores it.
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Pretty-printed file manifest.
pub fn manifest_json(entries: &[ImageEntry]) -> Result<String, serde_json::Error> {
    let records: Vec<ManifestRecord> = entries.iter().map(ManifestRecord::from).collect();
    serde_json::to_string_pretty(&records)
}

/// Compact array for embedding into the host page.
pub fn embedded_json(entries: &[ImageEntry]) -> Result<String, serde_json::Error> {
    let records: Vec<EmbeddedRecord> = entries.iter().map(EmbeddedRecord::from).collect();
    serde_json::to_string(&records)
}

/// Write the file manifest to `path`, replacing whatever is there.
pub fn write_manifest(path: &Path, entries: &[ImageEntry]) -> Result<(), ManifestError> {
    let json = manifest_json(entries)?;
    std::fs::write(path, json)?;
    Ok(())
}
