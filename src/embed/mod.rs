//! Embedding the manifest into the host page.
//!
//! The host page declares its data as a single JavaScript statement:
//!
//! ```text
//! const galleryData = GALLERY_DATA_PLACEHOLDER;      // fresh template
//! const galleryData = [{"filename":"a.png",...}];    // after a run
//! ```
//!
//! Two [strategies](strategy) are tried in order, first match wins:
//!
//! 1. [`ExactPlaceholder`] replaces the untouched template statement.
//! 2. [`ScriptBlockScan`] finds the first `<script>` block and rewrites the
//!    `galleryData` assignment left there by an earlier run.
//!
//! Re-running over an already embedded page therefore goes through the
//! fallback and replaces the old array instead of stacking a second one.
//!
//! A page that does not exist is skipped (never created). A page that is
//! not UTF-8, or where neither strategy matches, is left byte-for-byte
//! unchanged.

pub mod strategy;

pub use strategy::{
    EmbedStrategy, ExactPlaceholder, Miss, PLACEHOLDER_STATEMENT, STRATEGIES, ScriptBlockScan,
    StrategyKind,
};

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of running the strategies over one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedding {
    /// The rewritten document, if any strategy applied.
    pub document: Option<String>,
    /// The strategy that applied.
    pub applied: Option<StrategyKind>,
    /// Misses from every strategy tried before the winner (or all of them).
    pub misses: Vec<Miss>,
}

impl Embedding {
    pub fn is_embedded(&self) -> bool {
        self.applied.is_some()
    }
}

/// Run [`STRATEGIES`] over `document`, stopping at the first that applies.
pub fn embed_json(document: &str, json: &str) -> Embedding {
    let mut misses = Vec::new();
    for strategy in STRATEGIES {
        match strategy.apply(document, json) {
            Ok(rewritten) => {
                return Embedding {
                    document: Some(rewritten),
                    applied: Some(strategy.kind()),
                    misses,
                };
            }
            Err(miss) => misses.push(miss),
        }
    }
    Embedding {
        document: None,
        applied: None,
        misses,
    }
}

/// What happened to the page at a given path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// No page at that path. Nothing was created.
    Missing,
    /// The page is not valid UTF-8 and was not touched.
    NotUtf8,
    /// The strategies ran. The file was rewritten only if one applied.
    Processed(Embedding),
}

/// Embed `json` into the page at `path`.
///
/// A missing or undecodable page is reported, not raised. Only failures to
/// read or write an existing page are errors.
pub fn embed_into(path: &Path, json: &str) -> Result<PageOutcome, EmbedError> {
    if !path.is_file() {
        return Ok(PageOutcome::Missing);
    }
    let Ok(content) = String::from_utf8(fs::read(path)?) else {
        return Ok(PageOutcome::NotUtf8);
    };
    let embedding = embed_json(&content, json);
    if let Some(rewritten) = &embedding.document {
        fs::write(path, rewritten)?;
    }
    Ok(PageOutcome::Processed(embedding))
}
