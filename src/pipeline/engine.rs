//! External HTML-to-PDF engine invocation.
//!
//! ## Why a subprocess?
//!
//! Rendering HTML+CSS to paginated PDF is a browser-engine-sized problem,
//! so this path delegates to whichever engine is installed: weasyprint
//! (preferred — it honours the `@page` margin rule directly) or
//! wkhtmltopdf. The complete HTML document is written to a managed temp
//! file, the engine is invoked once per document, and the temp file is
//! cleaned up on drop even if the engine fails. When neither binary is on
//! PATH the caller gets [`Md2PdfError::EngineUnavailable`] and can fall
//! back to the flow renderer.

use crate::error::Md2PdfError;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::{debug, warn};

/// An HTML-to-PDF engine binary found on PATH.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlEngine {
    WeasyPrint,
    WkHtmlToPdf,
}

impl HtmlEngine {
    /// The binary name looked up on PATH.
    pub fn binary(self) -> &'static str {
        match self {
            HtmlEngine::WeasyPrint => "weasyprint",
            HtmlEngine::WkHtmlToPdf => "wkhtmltopdf",
        }
    }
}

/// Probe PATH for a usable engine, preferring weasyprint.
pub fn detect_engine() -> Option<HtmlEngine> {
    for engine in [HtmlEngine::WeasyPrint, HtmlEngine::WkHtmlToPdf] {
        if probe(engine.binary()) {
            debug!("Detected HTML engine: {}", engine.binary());
            return Some(engine);
        }
    }
    None
}

/// A binary counts as usable only when `--version` runs and exits zero;
/// a broken install that is on PATH but cannot start must not be selected.
fn probe(binary: &str) -> bool {
    Command::new(binary)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}

/// Render a complete HTML document to a PDF at `output`.
///
/// One atomic engine call per document: the engine either writes a complete
/// PDF or exits non-zero, in which case the captured stderr becomes the
/// error detail.
pub fn render_html(html: &str, output: &Path) -> Result<(), Md2PdfError> {
    let engine = detect_engine().ok_or(Md2PdfError::EngineUnavailable)?;
    render_html_with(engine, html, output)
}

/// Render with a specific engine (detection already done by the caller).
pub fn render_html_with(
    engine: HtmlEngine,
    html: &str,
    output: &Path,
) -> Result<(), Md2PdfError> {
    let mut html_file = tempfile::Builder::new()
        .prefix("md2pdf-")
        .suffix(".html")
        .tempfile()
        .map_err(|e| Md2PdfError::Internal(format!("tempfile: {e}")))?;
    html_file
        .write_all(html.as_bytes())
        .map_err(|e| Md2PdfError::Internal(format!("tempfile write: {e}")))?;
    html_file
        .flush()
        .map_err(|e| Md2PdfError::Internal(format!("tempfile flush: {e}")))?;

    let mut cmd = Command::new(engine.binary());
    match engine {
        HtmlEngine::WeasyPrint => {
            cmd.arg(html_file.path()).arg(output);
        }
        HtmlEngine::WkHtmlToPdf => {
            // wkhtmltopdf ignores @page margins, so they are passed as flags.
            cmd.args(["--quiet", "-T", "20mm", "-B", "20mm", "-L", "20mm", "-R", "20mm"])
                .arg(html_file.path())
                .arg(output);
        }
    }

    debug!("Running {} → {}", engine.binary(), output.display());
    let result = cmd.output().map_err(|e| Md2PdfError::EngineFailed {
        engine: engine.binary().to_string(),
        path: output.to_path_buf(),
        detail: e.to_string(),
    })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        warn!("{} exited with {}", engine.binary(), result.status);
        return Err(Md2PdfError::EngineFailed {
            engine: engine.binary().to_string(),
            path: output.to_path_buf(),
            detail: format!("{}: {}", result.status, stderr.trim()),
        });
    }

    Ok(())
}
