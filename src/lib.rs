//! # Gallery Data
//!
//! Builds the image manifest behind a single-page photo gallery and embeds
//! it into that page.
//!
//! # Pipeline
//!
//! One linear pass, no stage re-entered:
//!
//! ```text
//! 1. Scan       resources/          →  entries          (extension filter + mtime/size)
//! 2. Rank       entries, limit      →  newest N
//! 3. Crossref   erased/, output/    →  entries present in both
//! 4. Write      entries             →  gallery-data.json (pretty)
//! 5. Embed      entries             →  index.html        (compact, in place)
//! ```
//!
//! The limit is applied at stage 2, before cross-referencing, so a run can
//! return fewer than `limit` images even when more qualifying images exist.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Run configuration, defaults, lenient limit parsing |
//! | [`types`] | [`ImageEntry`], shared by every stage |
//! | [`scan`] | Stage 1 — lists the resources directory |
//! | [`rank`] | Stage 2 — newest-first sort and truncation |
//! | [`crossref`] | Stage 3 — companion-directory membership check |
//! | [`manifest`] | Stage 4 — the two JSON schemas and the file writer |
//! | [`embed`] | Stage 5 — rewrites the `galleryData` assignment in the page |
//! | [`pipeline`] | Runs all stages, reports [`GalleryEvent`]s |
//! | [`output`] | CLI formatting of events and errors |
//!
//! # Example
//!
//! ```no_run
//! use gallery_data::{GalleryConfig, generate_gallery_data};
//! use std::path::Path;
//!
//! let config = GalleryConfig::rooted_at(Path::new("/srv/gallery"));
//! let entries = generate_gallery_data(&config, None)?;
//! println!("{} images published", entries.len());
//! # Ok::<(), gallery_data::GalleryError>(())
//! ```

pub mod config;
pub mod crossref;
pub mod embed;
pub mod manifest;
pub mod output;
pub mod pipeline;
pub mod rank;
pub mod scan;
pub mod types;

pub use config::GalleryConfig;
pub use pipeline::{GalleryError, GalleryEvent, generate_gallery_data};
pub use types::ImageEntry;

#[cfg(test)]
pub(crate) mod test_helpers;
