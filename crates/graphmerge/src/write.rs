use crate::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use graphmerge_core::{pages_to_document, Page};

/// Write merged pages as a bare JSON array and return the absolute output path.
pub fn write_pages(path: &Path, pages: &[Page], pretty: bool) -> Result<PathBuf> {
    let document = pages_to_document(pages).context("Failed to encode merged pages")?;

    let file = File::create(path).with_context(|| f!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut writer, &document)
    } else {
        serde_json::to_writer(&mut writer, &document)
    };
    encoded.with_context(|| f!("Failed to write {}", path.display()))?;

    writer
        .flush()
        .with_context(|| f!("Failed to flush {}", path.display()))?;

    std::fs::canonicalize(path).with_context(|| f!("Failed to resolve {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphmerge_core::Block;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[test]
    fn test_write_pages_produces_bare_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let mut page = Page::new("September 24th, 2023", vec![Block::new("Hello").with_uid("b1")]);
        page.uid = "p1".to_string();

        let written = write_pages(&path, &[page], false).unwrap();

        assert!(written.is_absolute());
        let contents = std::fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(
            value,
            json!([{
                "title": "September 24th, 2023",
                "children": [{ "string": "Hello", "uid": "b1" }],
                "uid": "p1"
            }])
        );
        assert!(!contents.contains('\n'));
    }

    #[test]
    fn test_write_pages_keeps_non_ascii_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");
        let page = Page::new("Café", vec![Block::new("naïve ✓")]);

        write_pages(&path, &[page], false).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("Café"));
        assert!(contents.contains("naïve ✓"));
    }

    #[test]
    fn test_write_pages_pretty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        write_pages(&path, &[Page::new("A", vec![])], true).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("[\n"));
    }

    #[test]
    fn test_write_pages_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");

        assert!(write_pages(&path, &[], false).is_err());
    }
}
