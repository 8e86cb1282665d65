//! # md2pdf
//!
//! Convert Markdown documents to PDF, as a CLI or a library.
//!
//! ## Why two render paths?
//!
//! HTML-to-PDF engines (weasyprint, wkhtmltopdf) produce the best-looking
//! output but drag in a browser-sized system dependency that simply is not
//! installed everywhere. This crate ships both options behind one interface:
//!
//! * **HTML engine** — the Markdown is converted to HTML, wrapped in a
//!   document shell with a fixed stylesheet, and handed to an engine binary
//!   found on PATH.
//! * **Flow renderer** — the same HTML is classified line-by-line into flow
//!   elements (headings, paragraphs, code blocks, quotes, tables, list
//!   items) which genpdf lays out natively on A4 pages. No system
//!   dependencies beyond a TrueType font.
//!
//! The default `Auto` engine uses the HTML engine when one is installed and
//! falls back to the flow renderer otherwise.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Markdown
//!  │
//!  ├─ 1. Input     validate path, read UTF-8 source
//!  ├─ 2. Markdown  convert to HTML (pulldown-cmark; tables, strike, tasks)
//!  ├─ 3a. Template wrap in HTML shell ─▶ engine subprocess ─▶ PDF
//!  └─ 3b. Flow     transduce HTML lines to elements ─▶ genpdf ─▶ PDF
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2pdf::{convert_file, ConversionConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let stats = convert_file(Path::new("notes.md"), None, &config)?;
//!     println!("wrote {}", stats.output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library to avoid pulling in CLI-only deps:
//! ```toml
//! md2pdf = { version = "0.3", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod output;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, PdfEngine, StyleSheet};
pub use convert::{convert_batch, convert_file, default_output_path};
pub use error::Md2PdfError;
pub use output::{BatchSummary, ConversionStats, FileOutcome};
pub use pipeline::engine::detect_engine;
pub use pipeline::flow::{transduce, FlowElement};
pub use pipeline::layout::fonts_available;
pub use pipeline::markdown::to_html;
pub use pipeline::template::wrap_document;
