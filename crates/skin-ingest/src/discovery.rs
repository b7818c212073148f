//! Ontology document discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// File extension of ontology documents (matched case-insensitively).
pub const ONTOLOGY_EXTENSION: &str = "json";

/// Lists all ontology documents directly inside a directory.
///
/// Returns files sorted by filename. Subdirectories are not searched.
pub fn list_ontology_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let is_ontology = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ONTOLOGY_EXTENSION));
        if is_ontology {
            files.push(path);
        }
    }

    // Sorted so that duplicate descriptions resolve the same way on every run.
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
