//! Rule file reading

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads rule files as UTF-8 text
pub struct FileReader;

impl FileReader {
    /// Read a rule file
    pub fn read_text(path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// File name for banners and messages, falling back to the full path
    pub fn display_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("simple.rules");
        fs::write(&file_path, "A\n-> A\nx\n").unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "A\n-> A\nx\n");
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let result = FileReader::read_text(Path::new("/nonexistent/file.rules"));
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
        assert!(err_msg.contains("file.rules"));
    }

    #[test]
    fn test_read_text_rejects_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.rules");
        fs::write(&file_path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(
            FileReader::display_name(Path::new("rules/uax14.rules")),
            "uax14.rules"
        );
        assert_eq!(FileReader::display_name(Path::new("/")), "/");
    }
}
