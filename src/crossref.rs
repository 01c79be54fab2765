//! Companion-directory cross-referencing.
//!
//! An image only makes it into the gallery when a file with the same name
//! exists in every companion directory (`erased/` and `output/`). Entries
//! failing the check are dropped and reported by name; the report does not
//! say which directory was missing the file.
//!
//! A companion directory that does not exist at all is not special-cased:
//! every lookup into it fails, so every entry is excluded.

use crate::types::ImageEntry;
use std::path::Path;

/// Outcome of cross-referencing a ranked sequence.
#[derive(Debug, Default)]
pub struct CrossReference {
    /// Entries present everywhere, in their original order.
    pub retained: Vec<ImageEntry>,
    /// Filenames that were dropped, in their original order.
    pub excluded: Vec<String>,
}

/// Split `entries` into those present in all `companions` and those not.
pub fn cross_reference(entries: Vec<ImageEntry>, companions: &[&Path]) -> CrossReference {
    let mut result = CrossReference::default();
    for entry in entries {
        if companions
            .iter()
            .all(|dir| dir.join(&entry.filename).is_file())
        {
            result.retained.push(entry);
        } else {
            result.excluded.push(entry.filename);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::fs;

    fn check(fixture: &GalleryFixture, entries: Vec<ImageEntry>) -> CrossReference {
        let erased = fixture.erased();
        let output = fixture.output();
        cross_reference(entries, &[erased.as_path(), output.as_path()])
    }

    #[test]
    fn keeps_entries_present_in_both() {
        let fixture = GalleryFixture::new();
        fixture.companion("a.png");
        fixture.companion("b.png");

        let result = check(&fixture, vec![entry("a.png", 2), entry("b.png", 1)]);
        assert_eq!(filenames(&result.retained), vec!["a.png", "b.png"]);
        assert!(result.excluded.is_empty());
    }

    #[test]
    fn drops_entry_missing_from_erased() {
        let fixture = GalleryFixture::new();
        fixture.output_only("a.png");

        let result = check(&fixture, vec![entry("a.png", 0)]);
        assert!(result.retained.is_empty());
        assert_eq!(result.excluded, vec!["a.png"]);
    }

    #[test]
    fn drops_entry_missing_from_output() {
        let fixture = GalleryFixture::new();
        fixture.erased_only("a.png");

        let result = check(&fixture, vec![entry("a.png", 0)]);
        assert!(result.retained.is_empty());
        assert_eq!(result.excluded, vec!["a.png"]);
    }

    #[test]
    fn preserves_order_of_both_halves() {
        let fixture = GalleryFixture::new();
        fixture.companion("1.jpg");
        fixture.companion("3.jpg");

        let result = check(
            &fixture,
            vec![
                entry("1.jpg", 4),
                entry("2.jpg", 3),
                entry("3.jpg", 2),
                entry("4.jpg", 1),
            ],
        );
        assert_eq!(filenames(&result.retained), vec!["1.jpg", "3.jpg"]);
        assert_eq!(result.excluded, vec!["2.jpg", "4.jpg"]);
    }

    #[test]
    fn missing_companion_directory_excludes_everything() {
        let fixture = GalleryFixture::new();
        fixture.companion("a.png");
        fs::remove_dir_all(fixture.output()).unwrap();

        let result = check(&fixture, vec![entry("a.png", 0)]);
        assert!(result.retained.is_empty());
        assert_eq!(result.excluded, vec!["a.png"]);
    }

    #[test]
    fn directory_with_matching_name_does_not_count() {
        let fixture = GalleryFixture::new();
        fixture.erased_only("a.png");
        fs::create_dir(fixture.output().join("a.png")).unwrap();

        let result = check(&fixture, vec![entry("a.png", 0)]);
        assert!(result.retained.is_empty());
    }

    #[test]
    fn no_companions_keeps_everything() {
        let result = cross_reference(vec![entry("a.png", 0)], &[]);
        assert_eq!(filenames(&result.retained), vec!["a.png"]);
    }
}
