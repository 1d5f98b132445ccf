//! File-save primitive

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExportError, Result};

/// UTF-8 byte-order mark
///
/// Prepended to CSV output so spreadsheet applications auto-detect
/// the encoding. JSON and HTML documents are saved without it.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Write a text document to disk, optionally prefixed with the UTF-8 BOM
///
/// The write is atomic: content goes to a hidden temp sibling first,
/// then a rename. Consumers never observe a partially written file.
pub fn save_file(path: &Path, content: &str, prepend_bom: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path = temp_path(path);

    {
        let file = fs::File::create(&temp_path).map_err(|e| {
            ExportError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create temp file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        if prepend_bom {
            writer.write_all(&UTF8_BOM)?;
        }
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
    }

    fs::rename(&temp_path, path).map_err(|e| {
        // Clean up temp file on failure
        let _ = fs::remove_file(&temp_path);
        ExportError::Io(std::io::Error::new(
            e.kind(),
            format!("Failed to rename temp file: {}", e),
        ))
    })?;

    debug!("Saved export to {:?}", path);
    Ok(())
}

/// Hidden temp sibling of the target path
fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_without_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");

        save_file(&path, "[]", false).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"[]");
    }

    #[test]
    fn test_save_with_bom() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.csv");

        save_file(&path, "a,b\n", true).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);
        assert_eq!(&bytes[3..], b"a,b\n");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("exports/2024/posts.html");

        save_file(&path, "<html></html>", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.csv");

        save_file(&path, "a\n", true).unwrap();
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("posts.json");

        save_file(&path, "old", false).unwrap();
        save_file(&path, "new", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }
}
