//! Run configuration.
//!
//! A run is fully described by a [`GalleryConfig`]. The command line supplies
//! at most three positional values; everything else is fixed relative to the
//! working directory:
//!
//! ```text
//! ./
//! ├── resources/           # Primary image source (must exist)
//! ├── erased/              # Companion directory, gates inclusion
//! ├── output/              # Companion directory, gates inclusion
//! ├── gallery-data.json    # Written manifest (default, overridable)
//! └── index.html           # Host page receiving the embedded manifest (default, overridable)
//! ```
//!
//! ## Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `limit` | `100` |
//! | `output_json` | `./gallery-data.json` |
//! | `html` | `./index.html` |
//! | `resources_dir` | `./resources` |
//! | `erased_dir` | `./erased` |
//! | `output_dir` | `./output` |
//!
//! Invalid limits never fail a run: [`parse_limit`] falls back to
//! [`DEFAULT_LIMIT`] for anything that is not a positive integer.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Number of images kept when no usable limit is given.
pub const DEFAULT_LIMIT: NonZeroUsize = NonZeroUsize::MIN.saturating_add(99);

pub const DEFAULT_OUTPUT_JSON: &str = "gallery-data.json";
pub const DEFAULT_HTML: &str = "index.html";
pub const RESOURCES_DIR: &str = "resources";
pub const ERASED_DIR: &str = "erased";
pub const OUTPUT_DIR: &str = "output";

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Maximum number of images kept after ranking (before cross-referencing).
    pub limit: NonZeroUsize,
    /// Where the pretty-printed manifest is written.
    pub output_json: PathBuf,
    /// HTML document that receives the compact manifest.
    pub html: PathBuf,
    /// Primary image directory. Its absence is the only fatal condition.
    pub resources_dir: PathBuf,
    /// First companion directory.
    pub erased_dir: PathBuf,
    /// Second companion directory.
    pub output_dir: PathBuf,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new("."))
    }
}

impl GalleryConfig {
    /// Defaults with every path resolved under `root`.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            output_json: root.join(DEFAULT_OUTPUT_JSON),
            html: root.join(DEFAULT_HTML),
            resources_dir: root.join(RESOURCES_DIR),
            erased_dir: root.join(ERASED_DIR),
            output_dir: root.join(OUTPUT_DIR),
        }
    }

    /// Apply the positional command-line values on top of the defaults.
    ///
    /// Empty strings count as absent, same as omitting the argument.
    pub fn from_args(
        limit: Option<&str>,
        output_json: Option<PathBuf>,
        html: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            limit: parse_limit(limit),
            output_json: non_empty(output_json).unwrap_or(defaults.output_json),
            html: non_empty(html).unwrap_or(defaults.html),
            ..defaults
        }
    }

    /// The directories every kept image must also appear in, in check order.
    pub fn companion_dirs(&self) -> [&Path; 2] {
        [self.erased_dir.as_path(), self.output_dir.as_path()]
    }
}

/// Parse a limit argument, falling back to [`DEFAULT_LIMIT`].
///
/// - `None`, `""`, `"abc"` → 100
/// - `"0"`, `"-5"` → 100 (limits must be positive)
/// - `" 25 "` → 25
pub fn parse_limit(raw: Option<&str>) -> NonZeroUsize {
    raw.and_then(|s| s.trim().parse::<NonZeroUsize>().ok())
        .unwrap_or(DEFAULT_LIMIT)
}

fn non_empty(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
}
