//! The end-to-end run.
//!
//! ```text
//! resources/ ─ scan ─ rank(limit) ─ cross_reference(erased/, output/) ─┬─ gallery-data.json
//!                                                                        └─ index.html
//! ```
//!
//! Stages run strictly in that order. The only fatal condition is a missing
//! resources directory, checked before anything is written. Everything else
//! that can go wrong in normal use (excluded images, a missing, undecodable
//! or unmatched page) is reported as a [`GalleryEvent`] and the run carries on. The JSON
//! manifest is written before embedding is attempted and stays written
//! whatever happens to the page.

use crate::config::GalleryConfig;
use crate::crossref::cross_reference;
use crate::embed::{self, EmbedError, Miss, PageOutcome, StrategyKind};
use crate::manifest::{self, ManifestError};
use crate::rank::rank;
use crate::scan::{self, ScanError};
use crate::types::ImageEntry;
use std::path::PathBuf;
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),
    #[error("Embed error: {0}")]
    Embed(#[from] EmbedError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Progress and warnings emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    Started {
        limit: usize,
    },
    /// Ranked within the limit but absent from a companion directory.
    ImageExcluded {
        filename: String,
    },
    Collected {
        count: usize,
    },
    ManifestWritten {
        path: PathBuf,
    },
    /// A strategy did not match. Emitted for each miss, including the
    /// placeholder miss that precedes a successful fallback.
    EmbedMissed {
        path: PathBuf,
        miss: Miss,
    },
    Embedded {
        path: PathBuf,
        strategy: StrategyKind,
    },
    HtmlNotFound {
        path: PathBuf,
    },
    /// The page exists but is not UTF-8, so it was left alone.
    HtmlNotUtf8 {
        path: PathBuf,
    },
}

impl GalleryEvent {
    /// Whether this event reports a degraded outcome rather than progress.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            GalleryEvent::ImageExcluded { .. }
                | GalleryEvent::EmbedMissed { .. }
                | GalleryEvent::HtmlNotFound { .. }
                | GalleryEvent::HtmlNotUtf8 { .. }
        )
    }
}

/// Run the whole pipeline and return the entries that made it into the manifest.
pub fn generate_gallery_data(
    config: &GalleryConfig,
    events: Option<Sender<GalleryEvent>>,
) -> Result<Vec<ImageEntry>, GalleryError> {
    let emit = |event: GalleryEvent| {
        if let Some(tx) = &events {
            tx.send(event).ok();
        }
    };

    emit(GalleryEvent::Started {
        limit: config.limit.get(),
    });

    let scanned = scan::scan(&config.resources_dir)?;
    let ranked = rank(scanned, config.limit);
    let checked = cross_reference(ranked, &config.companion_dirs());
    for filename in checked.excluded {
        emit(GalleryEvent::ImageExcluded { filename });
    }
    let entries = checked.retained;
    emit(GalleryEvent::Collected {
        count: entries.len(),
    });

    manifest::write_manifest(&config.output_json, &entries)?;
    emit(GalleryEvent::ManifestWritten {
        path: config.output_json.clone(),
    });

    let json = manifest::embedded_json(&entries)?;
    match embed::embed_into(&config.html, &json)? {
        PageOutcome::Missing => emit(GalleryEvent::HtmlNotFound {
            path: config.html.clone(),
        }),
        PageOutcome::NotUtf8 => emit(GalleryEvent::HtmlNotUtf8 {
            path: config.html.clone(),
        }),
        PageOutcome::Processed(embedding) => {
            for miss in embedding.misses {
                emit(GalleryEvent::EmbedMissed {
                    path: config.html.clone(),
                    miss,
                });
            }
            if let Some(strategy) = embedding.applied {
                emit(GalleryEvent::Embedded {
                    path: config.html.clone(),
                    strategy,
                });
            }
        }
    }

    Ok(entries)
}
