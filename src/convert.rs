//! Conversion entry points: one file, or a whole batch.
//!
//! [`convert_file`] runs a single document through whichever pipeline the
//! config selects and returns a `Result` — one value per conversion attempt,
//! no exceptions crossing file boundaries. [`convert_batch`] folds those
//! results into a [`BatchSummary`], turning pre-check rejections into
//! `Skipped` outcomes and conversion errors into `Failed` ones, and always
//! advances to the next file.

use crate::config::{ConversionConfig, PdfEngine};
use crate::error::Md2PdfError;
use crate::output::{BatchSummary, ConversionStats, FileOutcome};
use crate::pipeline::engine::{self, HtmlEngine};
use crate::pipeline::{flow, input, layout, markdown, template};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

/// The backend a conversion actually runs on, after `Auto` resolution.
enum Backend {
    Html(HtmlEngine),
    Flow,
}

/// Resolve the configured engine against what the host provides.
///
/// `Auto` prefers the HTML engine for its richer styling and falls back to
/// the flow renderer when no engine binary is on PATH.
fn resolve_backend(engine: PdfEngine) -> Result<Backend, Md2PdfError> {
    match engine {
        PdfEngine::Html => engine::detect_engine()
            .map(Backend::Html)
            .ok_or(Md2PdfError::EngineUnavailable),
        PdfEngine::Flow => Ok(Backend::Flow),
        PdfEngine::Auto => Ok(engine::detect_engine()
            .map(Backend::Html)
            .unwrap_or(Backend::Flow)),
    }
}

/// Default output path: the input path with its extension replaced by `.pdf`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Document title: the configured override, or the input filename stem.
fn document_title(input: &Path, config: &ConversionConfig) -> String {
    if let Some(ref title) = config.title {
        return title.clone();
    }
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

/// Convert a single Markdown file to PDF.
///
/// When `output` is `None` the PDF lands next to the input with a `.pdf`
/// extension. An existing file at the output path is overwritten.
pub fn convert_file(
    input_path: &Path,
    output: Option<&Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Md2PdfError> {
    let start = Instant::now();

    let markdown_text = input::read_markdown(input_path)?;
    let html = markdown::to_html(&markdown_text);
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input_path));
    let title = document_title(input_path, config);

    let (engine, element_count) = match resolve_backend(config.engine)? {
        Backend::Html(html_engine) => {
            let document = template::wrap_document(&html, &title);
            engine::render_html_with(html_engine, &document, &output_path)?;
            (PdfEngine::Html, 0)
        }
        Backend::Flow => {
            let elements = flow::transduce(&html, &config.styles);
            layout::render_flow(&elements, &config.styles, &title, &output_path)?;
            (PdfEngine::Flow, elements.len())
        }
    };

    let stats = ConversionStats {
        input: input_path.to_path_buf(),
        output: output_path,
        engine,
        element_count,
        duration_ms: start.elapsed().as_millis() as u64,
    };
    info!(
        "Converted {} → {} in {}ms",
        stats.input.display(),
        stats.output.display(),
        stats.duration_ms
    );
    Ok(stats)
}

/// Convert a batch of files sequentially, in argument order.
///
/// Every input produces exactly one outcome; a failure on one file never
/// stops the rest. `output` only makes sense for single-file batches — the
/// caller (the CLI rejects the combination up front) is responsible for not
/// passing it alongside multiple inputs.
pub fn convert_batch(
    inputs: &[PathBuf],
    output: Option<&Path>,
    config: &ConversionConfig,
) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for input_path in inputs {
        if let Err(e) = input::validate_input(input_path) {
            let reason = match e {
                Md2PdfError::FileNotFound { .. } => {
                    format!("File '{}' does not exist.", input_path.display())
                }
                _ => format!(
                    "'{}' doesn't appear to be a markdown file.",
                    input_path.display()
                ),
            };
            warn!("{reason} Skipping.");
            summary.outcomes.push(FileOutcome::Skipped {
                path: input_path.clone(),
                reason,
            });
            continue;
        }

        match convert_file(input_path, output, config) {
            Ok(stats) => summary.outcomes.push(FileOutcome::Converted(stats)),
            Err(e) => {
                warn!("Error converting '{}': {e}", input_path.display());
                summary.outcomes.push(FileOutcome::Failed {
                    path: input_path.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_replaces_extension() {
        assert_eq!(
            default_output_path(Path::new("dir/notes.md")),
            PathBuf::from("dir/notes.pdf")
        );
        assert_eq!(
            default_output_path(Path::new("notes.markdown")),
            PathBuf::from("notes.pdf")
        );
    }

    #[test]
    fn title_defaults_to_stem() {
        let config = ConversionConfig::default();
        assert_eq!(document_title(Path::new("dir/notes.md"), &config), "notes");
    }

    #[test]
    fn title_override_wins() {
        let config = ConversionConfig::builder().title("Report").build().unwrap();
        assert_eq!(document_title(Path::new("notes.md"), &config), "Report");
    }

    #[test]
    fn missing_file_is_a_conversion_error() {
        let config = ConversionConfig::default();
        let result = convert_file(Path::new("/no/such/file.md"), None, &config);
        assert!(matches!(result, Err(Md2PdfError::FileNotFound { .. })));
    }

    #[test]
    fn batch_skips_invalid_inputs_without_failing_them() {
        let dir = tempfile::tempdir().unwrap();
        let not_markdown = dir.path().join("data.txt");
        std::fs::write(&not_markdown, "x").unwrap();

        let inputs = vec![PathBuf::from("/no/such/file.md"), not_markdown];
        let summary = convert_batch(&inputs, None, &ConversionConfig::default());

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.skipped(), 2);
        assert_eq!(summary.failed(), 0);
        assert!(!summary.is_success());
    }

    #[test]
    fn skip_reasons_name_the_file() {
        let summary = convert_batch(
            &[PathBuf::from("/no/such/file.md")],
            None,
            &ConversionConfig::default(),
        );
        match &summary.outcomes[0] {
            FileOutcome::Skipped { reason, .. } => {
                assert_eq!(reason, "File '/no/such/file.md' does not exist.");
            }
            other => panic!("expected Skipped, got {other:?}"),
        }
    }
}
