use crate::prelude::*;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use graphmerge_core::{pages_from_document, ExportShape, Page};
use serde_json::Value;

/// File suffix of the export document inside a ZIP archive.
const EXPORT_SUFFIX: &str = ".json";

/// One input export, decoded.
#[derive(Debug)]
pub struct LoadedExport {
    pub path: PathBuf,
    pub shape: ExportShape,
    pub from_archive: bool,
    pub pages: Vec<Page>,
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Read and decode an export from disk.
///
/// `.zip` paths are opened as archives and the first `.json` entry is used;
/// anything else is parsed as JSON directly.
pub fn load_export(path: &Path) -> Result<LoadedExport> {
    let from_archive = is_archive(path);

    let document = if from_archive {
        let file =
            File::open(path).with_context(|| f!("Failed to open archive {}", path.display()))?;
        read_archive_document(BufReader::new(file), path)?
    } else {
        let file = File::open(path).with_context(|| f!("Failed to open {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| f!("Failed to parse {} as JSON", path.display()))?
    };

    let (shape, pages) =
        pages_from_document(document).with_context(|| f!("Failed to load {}", path.display()))?;

    log::debug!(
        "loaded {} ({}{}): {} pages",
        path.display(),
        shape.describe(),
        if from_archive { ", zip" } else { "" },
        pages.len()
    );

    Ok(LoadedExport {
        path: path.to_path_buf(),
        shape,
        from_archive,
        pages,
    })
}

/// Parse the first `.json` entry of a ZIP archive, in archive order.
fn read_archive_document<R: Read + Seek>(reader: R, path: &Path) -> Result<Value> {
    let mut archive = zip::ZipArchive::new(reader)
        .with_context(|| f!("Failed to read {} as a ZIP archive", path.display()))?;

    let mut export_index = None;
    for index in 0..archive.len() {
        let entry = archive
            .by_index(index)
            .with_context(|| f!("Failed to read entry {index} of {}", path.display()))?;
        if entry.name().ends_with(EXPORT_SUFFIX) {
            export_index = Some(index);
            break;
        }
    }

    let index = export_index.ok_or_else(|| Error::EmptyArchive(path.to_path_buf()))?;
    let entry = archive
        .by_index(index)
        .with_context(|| f!("Failed to read entry {index} of {}", path.display()))?;
    let name = entry.name().to_string();

    serde_json::from_reader(entry)
        .with_context(|| f!("Failed to parse {name} in {} as JSON", path.display()))
}
