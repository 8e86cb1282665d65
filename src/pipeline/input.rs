//! Input validation and reading.
//!
//! Two layers, matching the batch semantics: [`validate_input`] is the
//! cheap pre-check whose failures become *skips* (wrong extension, missing
//! file — warn and move on), while [`read_markdown`] errors are real
//! per-file *failures* (the file vanished between check and read, is
//! unreadable, or is not valid UTF-8).

use crate::error::Md2PdfError;
use std::path::Path;
use tracing::debug;

/// Whether the path carries a Markdown extension (`.md` / `.markdown`,
/// case-insensitive).
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            ext == "md" || ext == "markdown"
        })
        .unwrap_or(false)
}

/// Pre-check an input path: it must exist and look like Markdown.
pub fn validate_input(path: &Path) -> Result<(), Md2PdfError> {
    if !path.exists() {
        return Err(Md2PdfError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if !is_markdown_path(path) {
        return Err(Md2PdfError::NotMarkdown {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read the Markdown source as UTF-8.
pub fn read_markdown(path: &Path) -> Result<String, Md2PdfError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Md2PdfError::FileNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(Md2PdfError::PermissionDenied {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(Md2PdfError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn markdown_extensions() {
        assert!(is_markdown_path(Path::new("notes.md")));
        assert!(is_markdown_path(Path::new("notes.markdown")));
        assert!(is_markdown_path(Path::new("NOTES.MD")));
        assert!(is_markdown_path(Path::new("dir.md/inner.MARKDOWN")));
        assert!(!is_markdown_path(Path::new("notes.txt")));
        assert!(!is_markdown_path(Path::new("notes")));
        assert!(!is_markdown_path(Path::new("md")));
    }

    #[test]
    fn validate_rejects_missing_file() {
        let result = validate_input(Path::new("/definitely/not/a/real/file.md"));
        assert!(matches!(result, Err(Md2PdfError::FileNotFound { .. })));
    }

    #[test]
    fn validate_rejects_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();
        let result = validate_input(&path);
        assert!(matches!(result, Err(Md2PdfError::NotMarkdown { .. })));
    }

    #[test]
    fn read_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.md");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "# Title").unwrap();
        assert_eq!(read_markdown(&path).unwrap(), "# Title\n");
    }

    #[test]
    fn read_missing_is_file_not_found() {
        let result = read_markdown(&PathBuf::from("/definitely/not/a/real/file.md"));
        assert!(matches!(result, Err(Md2PdfError::FileNotFound { .. })));
    }
}
