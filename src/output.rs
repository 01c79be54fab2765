//! CLI output formatting.
//!
//! The library never prints. Pipeline progress arrives as
//! [`GalleryEvent`]s and is rendered here, one line per event:
//!
//! ```text
//! Generating gallery data with limit: 2
//! Warning: b.jpg is missing from erased or output directory
//! Found 1 images with all three versions
//! Gallery data saved to ./gallery-data.json
//! Gallery data embedded into ./index.html
//! ```
//!
//! Progress goes to stdout, warnings and errors to stderr.
//!
//! # Architecture
//!
//! `format_*` functions are pure (return `String`) for testability;
//! `print_*` wrappers do the writing.

use crate::embed::{Miss, StrategyKind};
use crate::pipeline::{GalleryError, GalleryEvent};
use crate::scan::ScanError;

/// Format a single pipeline event as a display line.
pub fn format_event(event: &GalleryEvent) -> String {
    match event {
        GalleryEvent::Started { limit } => {
            format!("Generating gallery data with limit: {}", limit)
        }
        GalleryEvent::ImageExcluded { filename } => format!(
            "Warning: {} is missing from erased or output directory",
            filename
        ),
        GalleryEvent::Collected { count } => {
            format!("Found {} images with all three versions", count)
        }
        GalleryEvent::ManifestWritten { path } => {
            format!("Gallery data saved to {}", path.display())
        }
        GalleryEvent::EmbedMissed { path, miss } => {
            let what = match miss {
                Miss::NoPlaceholder => "placeholder",
                Miss::NoScriptBlock => "script tag",
                Miss::NoAssignment => "galleryData assignment",
            };
            format!("Warning: Could not find {} in {}", what, path.display())
        }
        GalleryEvent::Embedded { path, strategy } => match strategy {
            StrategyKind::Placeholder => {
                format!("Gallery data embedded into {}", path.display())
            }
            StrategyKind::ScriptBlock => format!(
                "Gallery data embedded into {} using fallback method",
                path.display()
            ),
        },
        GalleryEvent::HtmlNotFound { path } => format!(
            "Warning: HTML file {} not found, skipping embedding",
            path.display()
        ),
        GalleryEvent::HtmlNotUtf8 { path } => format!(
            "Warning: HTML file {} is not valid UTF-8, skipping embedding",
            path.display()
        ),
    }
}

/// Format a fatal error as the final diagnostic line.
pub fn format_error(err: &GalleryError) -> String {
    match err {
        GalleryError::Scan(ScanError::MissingDirectory(_)) => {
            "Error: resources directory not found".to_string()
        }
        other => format!("Error: {}", other),
    }
}

/// Print an event: warnings to stderr, progress to stdout.
pub fn print_event(event: &GalleryEvent) {
    let line = format_event(event);
    if event.is_warning() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Print a fatal error to stderr.
pub fn print_error(err: &GalleryError) {
    eprintln!("{}", format_error(err));
}
