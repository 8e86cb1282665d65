//! Configuration types for Markdown-to-PDF conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The paragraph styles used by the flow
//! renderer live in one immutable [`StyleSheet`] value that is constructed
//! once and passed by reference through the pipeline — there is no ambient
//! style registry that stages mutate as a side effect.

use crate::error::Md2PdfError;
use serde::{Deserialize, Serialize};

/// Which PDF backend renders the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PdfEngine {
    /// Probe for an HTML engine on PATH; fall back to the flow renderer. (default)
    #[default]
    Auto,
    /// External HTML-to-PDF engine (weasyprint or wkhtmltopdf subprocess).
    Html,
    /// Native flow layout via genpdf. No system dependencies beyond fonts.
    Flow,
}

/// Paragraph styles for the flow renderer.
///
/// Font sizes are in points; vertical gaps (the spacer emitted after each
/// block element) are in points as well, matching the 72-dpi coordinate
/// space the layout engine works in.
///
/// Index 0 of the per-level arrays is `<h1>`, index 5 is `<h6>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    /// Heading font size per level, largest first.
    pub heading_sizes: [u8; 6],
    /// Spacer emitted after a heading, per level.
    pub heading_gaps: [f64; 6],
    /// Body text font size.
    pub body_size: u8,
    /// Monospace font size in code blocks.
    pub code_size: u8,
    /// Spacer after code blocks, quotes and tables.
    pub block_gap: f64,
    /// Spacer after paragraphs and plain text.
    pub paragraph_gap: f64,
    /// Spacer after list items.
    pub list_gap: f64,
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            heading_sizes: [18, 16, 14, 12, 10, 8],
            heading_gaps: [12.0, 10.0, 8.0, 6.0, 4.0, 4.0],
            body_size: 11,
            code_size: 10,
            block_gap: 12.0,
            paragraph_gap: 6.0,
            list_gap: 3.0,
        }
    }
}

impl StyleSheet {
    /// Heading font size for a 1-based level, clamped to the h6 style.
    pub fn heading_size(&self, level: u8) -> u8 {
        self.heading_sizes[usize::from(level.clamp(1, 6)) - 1]
    }

    /// Post-heading spacer for a 1-based level, clamped to the h6 style.
    pub fn heading_gap(&self, level: u8) -> f64 {
        self.heading_gaps[usize::from(level.clamp(1, 6)) - 1]
    }
}

/// Configuration for a Markdown-to-PDF conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use md2pdf::{ConversionConfig, PdfEngine};
///
/// let config = ConversionConfig::builder()
///     .engine(PdfEngine::Flow)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// PDF backend. Default: [`PdfEngine::Auto`].
    pub engine: PdfEngine,

    /// Styles for the flow renderer. Built once, never mutated.
    pub styles: StyleSheet,

    /// Document title override. When `None`, the input filename stem is used.
    pub title: Option<String>,
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn engine(mut self, engine: PdfEngine) -> Self {
        self.config.engine = engine;
        self
    }

    pub fn styles(mut self, styles: StyleSheet) -> Self {
        self.config.styles = styles;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Md2PdfError> {
        let s = &self.config.styles;
        for size in s.heading_sizes.iter().chain([&s.body_size, &s.code_size]) {
            if !(4..=96).contains(size) {
                return Err(Md2PdfError::InvalidConfig(format!(
                    "Font sizes must be 4–96pt, got {size}"
                )));
            }
        }
        let gaps = s.heading_gaps.iter().chain([
            &s.block_gap,
            &s.paragraph_gap,
            &s.list_gap,
        ]);
        for gap in gaps {
            if !gap.is_finite() || *gap < 0.0 {
                return Err(Md2PdfError::InvalidConfig(format!(
                    "Spacer gaps must be non-negative, got {gap}"
                )));
            }
        }
        Ok(self.config)
    }
}
