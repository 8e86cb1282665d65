//! Batch results: per-file outcomes and the run summary.
//!
//! Every file a batch touches produces exactly one [`FileOutcome`]:
//!
//! * [`FileOutcome::Converted`] — the PDF was written; carries
//!   [`ConversionStats`] for the file.
//! * [`FileOutcome::Skipped`] — the pre-check rejected the path (missing
//!   file or non-Markdown extension). Skips are warnings, not failures.
//! * [`FileOutcome::Failed`] — conversion was attempted and errored.
//!
//! Skipped files still count toward the summary denominator: the summary
//! line reports `succeeded / arguments passed`, so a batch of three paths
//! where one was skipped reads `2/3` even when both real files converted.

use crate::config::PdfEngine;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Statistics for one successfully converted file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStats {
    /// The Markdown input path.
    pub input: PathBuf,
    /// The PDF that was written.
    pub output: PathBuf,
    /// The backend that actually rendered the file (`Auto` resolves before
    /// rendering, so this is always `Html` or `Flow`).
    pub engine: PdfEngine,
    /// Flow elements emitted by the transducer; 0 for the HTML engine path,
    /// which renders the document in a single call.
    pub element_count: usize,
    /// Wall-clock conversion time.
    pub duration_ms: u64,
}

/// The outcome of processing one input path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FileOutcome {
    Converted(ConversionStats),
    Skipped { path: PathBuf, reason: String },
    Failed { path: PathBuf, error: String },
}

impl FileOutcome {
    /// The input path this outcome refers to.
    pub fn path(&self) -> &PathBuf {
        match self {
            FileOutcome::Converted(stats) => &stats.input,
            FileOutcome::Skipped { path, .. } | FileOutcome::Failed { path, .. } => path,
        }
    }
}

/// Result of a whole batch run, one entry per CLI argument in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchSummary {
    /// Number of input paths processed (converted + failed + skipped).
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Converted(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Failed { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Skipped { .. }))
            .count()
    }

    /// A batch succeeds when at least one file converted.
    pub fn is_success(&self) -> bool {
        self.succeeded() > 0
    }

    /// The final summary line printed after a batch.
    pub fn summary_line(&self) -> String {
        format!(
            "Conversion complete: {}/{} files processed successfully.",
            self.succeeded(),
            self.total()
        )
    }
}
