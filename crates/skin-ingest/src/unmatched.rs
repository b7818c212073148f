//! Unmatched label list output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{IngestError, Result};

/// File name of the unmatched label list inside the output folder.
pub const UNMATCHED_LABELS_FILE: &str = "unmatched_labels.txt";

/// Writes one label per line, each terminated by `\n`, in the given order.
///
/// Labels are written verbatim: empty labels produce empty lines and
/// duplicates are repeated.
pub fn write_unmatched_labels(path: &Path, labels: &[String]) -> Result<()> {
    let write_error = |e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for label in labels {
        writer.write_all(label.as_bytes()).map_err(write_error)?;
        writer.write_all(b"\n").map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_labels_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(UNMATCHED_LABELS_FILE);
        let labels = vec!["psoriasis".to_string(), String::new(), "psoriasis".to_string()];
        write_unmatched_labels(&path, &labels).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "psoriasis\n\npsoriasis\n");
    }

    #[test]
    fn empty_list_writes_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(UNMATCHED_LABELS_FILE);
        write_unmatched_labels(&path, &[]).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }
}
