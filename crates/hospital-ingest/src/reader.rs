//! Loading the raw export into memory.

use std::fs;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads the whole export and returns its lines.
///
/// A leading UTF-8 BOM is dropped and both `\n` and `\r\n` endings are
/// accepted. Line `n` of the file is at index `n - 1`.
pub fn read_source_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| IngestError::read(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| IngestError::InvalidEncoding {
        path: path.to_path_buf(),
        offset: e.utf8_error().valid_up_to(),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded export");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_lines() {
        let file = create_temp_file(b"header\nrow one\r\nrow two\n");
        let lines = read_source_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["header", "row one", "row two"]);
    }

    #[test]
    fn test_read_lines_strips_bom() {
        let file = create_temp_file("\u{feff}S.No,Hospital Name\n1,A\n".as_bytes());
        let lines = read_source_lines(file.path()).unwrap();
        assert_eq!(lines[0], "S.No,Hospital Name");
    }

    #[test]
    fn test_read_empty_file() {
        let file = create_temp_file(b"");
        assert!(read_source_lines(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let file = create_temp_file(b"ok\n\xff\xfe broken\n");
        let result = read_source_lines(file.path());
        assert!(matches!(
            result,
            Err(IngestError::InvalidEncoding { offset: 3, .. })
        ));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_source_lines(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
