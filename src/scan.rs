//! Image discovery.
//!
//! Stage 1 of the pipeline. Lists the resources directory (non-recursively)
//! and records modification time and size for every image file found.
//!
//! ## What counts as an image
//!
//! A regular file whose extension is one of `jpg`, `jpeg`, `png`, `gif`,
//! compared case-insensitively. Subdirectories are ignored even when their
//! name looks like an image, and a dotfile such as `.png` has no extension.
//! File contents are never opened.
//!
//! ## Errors
//!
//! A missing resources directory is the one hard stop of a run and surfaces
//! as [`ScanError::MissingDirectory`]. Any failure to stat an individual
//! image propagates as [`ScanError::Io`].

use crate::types::ImageEntry;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Image directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// List the images in `dir` with their metadata, in directory order.
pub fn scan(dir: &Path) -> Result<Vec<ImageEntry>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::MissingDirectory(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !is_image(&path) {
            continue;
        }
        let metadata = fs::metadata(&path)?;
        entries.push(ImageEntry {
            filename: entry.file_name().to_string_lossy().into_owned(),
            modified_at: metadata.modified()?.into(),
            size_bytes: metadata.len(),
        });
    }

    Ok(entries)
}

/// True for regular files with an allowed image extension.
pub fn is_image(path: &Path) -> bool {
    path.is_file() && has_image_extension(path)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
