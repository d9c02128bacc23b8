use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::domain::ports::Storage;
use crate::utils::error::{DocError, Result};

/// Filesystem-backed storage for the CLI binary.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    /// Reads the whole file through one scoped handle and decodes it
    /// lossily, so the only failure mode is the open/read itself.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let file = File::open(path).map_err(|source| DocError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;

        let mut buf = Vec::new();
        BufReader::new(file).read_to_end(&mut buf)?;
        let text = String::from_utf8_lossy(&buf);
        Ok(text.lines().map(str::to_string).collect())
    }

    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_lines_splits_on_newlines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.dsv");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        let lines = LocalStorage::new().read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn read_lines_of_missing_file_reports_open_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.dsv");

        let err = LocalStorage::new().read_lines(&path).unwrap_err();
        assert_eq!(err.to_string(), format!("couldn't open {}", path.display()));
    }

    #[test]
    fn write_file_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/out/doc.txt");

        LocalStorage::new().write_file(&path, b"text\n").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"text\n");
    }
}
