//! Error types for the md2pdf library.
//!
//! A single [`Md2PdfError`] covers everything that can go wrong while
//! converting *one* file. Batch processing never propagates these across
//! files: `convert_batch` catches each per-file `Err` and records it as a
//! [`crate::output::FileOutcome::Failed`], so one broken document cannot
//! abort the rest of the batch. The only errors that escape before any file
//! is touched are argument-parsing errors in the binary.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2pdf library.
#[derive(Debug, Error)]
pub enum Md2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Markdown file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists but does not carry a Markdown extension.
    #[error("'{path}' doesn't appear to be a markdown file (expected .md or .markdown)")]
    NotMarkdown { path: PathBuf },

    /// Reading the input failed for some other reason (e.g. invalid UTF-8).
    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Pipeline A (HTML engine) errors ───────────────────────────────────
    /// No HTML-to-PDF engine binary was found on PATH.
    #[error(
        "No HTML-to-PDF engine found on PATH.\n\
Install one of:\n\
  • weasyprint   (pip install weasyprint)\n\
  • wkhtmltopdf  (https://wkhtmltopdf.org)\n\
or use the native renderer with --engine flow."
    )]
    EngineUnavailable,

    /// The engine subprocess exited with a failure status.
    #[error("{engine} failed for '{path}': {detail}")]
    EngineFailed {
        engine: String,
        path: PathBuf,
        detail: String,
    },

    // ── Pipeline B (flow layout) errors ───────────────────────────────────
    /// No usable TrueType font family could be located for the flow renderer.
    #[error(
        "No TrueType fonts found for the flow renderer.\n\
Searched: {searched}\n\
Install the Liberation fonts (e.g. apt install fonts-liberation) or point\n\
MD2PDF_FONT_DIR at a directory containing <Name>-Regular.ttf, <Name>-Bold.ttf,\n\
<Name>-Italic.ttf and <Name>-BoldItalic.ttf (set MD2PDF_FONT_NAME to <Name>)."
    )]
    FontsNotFound { searched: String },

    /// genpdf failed to lay out or write the document.
    #[error("PDF layout failed for '{path}': {detail}")]
    LayoutFailed { path: PathBuf, detail: String },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_not_found_display_names_path() {
        let e = Md2PdfError::FileNotFound {
            path: PathBuf::from("notes.md"),
        };
        assert!(e.to_string().contains("notes.md"));
    }

    #[test]
    fn engine_failed_display() {
        let e = Md2PdfError::EngineFailed {
            engine: "weasyprint".into(),
            path: PathBuf::from("doc.md"),
            detail: "exit status 1".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("weasyprint"));
        assert!(msg.contains("doc.md"));
    }

    #[test]
    fn fonts_not_found_mentions_override_var() {
        let e = Md2PdfError::FontsNotFound {
            searched: "/usr/share/fonts/truetype/liberation".into(),
        };
        assert!(e.to_string().contains("MD2PDF_FONT_DIR"));
    }
}
