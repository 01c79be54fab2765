//! Shared test utilities for the gallery-data test suite.
//!
//! Builds throwaway working trees shaped like a real gallery checkout and
//! provides small extractors for assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let fixture = GalleryFixture::new();
//! fixture.resource("a.png", 30);      // newest
//! fixture.resource("b.jpg", 20);
//! fixture.companion("a.png");         // present in erased/ and output/
//!
//! let entries = generate_gallery_data(&fixture.config(2), None).unwrap();
//! assert_eq!(filenames(&entries), vec!["a.png"]);
//! ```

use chrono::{DateTime, TimeZone, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use crate::config::{self, GalleryConfig};
use crate::types::ImageEntry;

/// Base timestamp for fixtures: 2023-11-14T22:13:20Z.
const BASE_EPOCH_SECS: u64 = 1_700_000_000;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temp working tree with empty `resources/`, `erased/` and `output/`.
pub struct GalleryFixture {
    tmp: TempDir,
}

impl GalleryFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        for dir in [config::RESOURCES_DIR, config::ERASED_DIR, config::OUTPUT_DIR] {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        Self { tmp }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn resources(&self) -> PathBuf {
        self.root().join(config::RESOURCES_DIR)
    }

    pub fn erased(&self) -> PathBuf {
        self.root().join(config::ERASED_DIR)
    }

    pub fn output(&self) -> PathBuf {
        self.root().join(config::OUTPUT_DIR)
    }

    /// Config rooted at the fixture with the given limit.
    pub fn config(&self, limit: usize) -> GalleryConfig {
        GalleryConfig {
            limit: limit.try_into().unwrap(),
            ..GalleryConfig::rooted_at(self.root())
        }
    }

    /// Write a resource image whose mtime is `age` seconds after the base time.
    /// Larger `age` means newer.
    pub fn resource(&self, name: &str, age: u64) {
        self.resource_with_bytes(name, age, b"img");
    }

    pub fn resource_with_bytes(&self, name: &str, age: u64, bytes: &[u8]) {
        let path = self.resources().join(name);
        fs::write(&path, bytes).unwrap();
        set_mtime(&path, age);
    }

    /// Put `name` into both companion directories.
    pub fn companion(&self, name: &str) {
        self.erased_only(name);
        self.output_only(name);
    }

    pub fn erased_only(&self, name: &str) {
        fs::write(self.erased().join(name), b"erased").unwrap();
    }

    pub fn output_only(&self, name: &str) {
        fs::write(self.output().join(name), b"output").unwrap();
    }

    pub fn write_html(&self, content: &str) -> PathBuf {
        let path = self.root().join(config::DEFAULT_HTML);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.root().join(relative)).unwrap()
    }
}

fn set_mtime(path: &Path, age: u64) {
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(BASE_EPOCH_SECS + age))
        .unwrap();
}

/// The timestamp a fixture file written with `age` carries.
pub fn fixture_time(age: u64) -> DateTime<Utc> {
    Utc.timestamp_opt((BASE_EPOCH_SECS + age) as i64, 0).unwrap()
}

/// An in-memory entry for tests that don't touch the filesystem.
pub fn entry(name: &str, age: u64) -> ImageEntry {
    ImageEntry {
        filename: name.to_string(),
        modified_at: fixture_time(age),
        size_bytes: 3,
    }
}

// =========================================================================
// Extractors
// =========================================================================

/// Filenames in sequence order.
pub fn filenames(entries: &[ImageEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.filename.as_str()).collect()
}

/// A minimal host page carrying the untouched placeholder.
pub fn template_html() -> String {
    "<!DOCTYPE html>\n<html>\n<body>\n<div id=\"gallery\"></div>\n<script>\n    \
     const galleryData = GALLERY_DATA_PLACEHOLDER;\n    render(galleryData);\n</script>\n\
     </body>\n</html>\n"
        .to_string()
}
