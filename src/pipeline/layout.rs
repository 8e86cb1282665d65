//! Flow-element layout via genpdf: the native render path.
//!
//! Takes the transducer's element sequence and lays it out on A4 pages with
//! fixed margins. Pagination, line wrapping and text measurement are all
//! genpdf's job; this module only maps each [`FlowElement`] onto the
//! corresponding genpdf element with the styles from the [`StyleSheet`].
//!
//! genpdf embeds TrueType fonts, so a font family must be found on the host
//! first. The Liberation faces are searched in the usual distro locations;
//! `MD2PDF_FONT_DIR`/`MD2PDF_FONT_NAME` override the search for
//! non-standard installs.

use crate::config::StyleSheet;
use crate::error::Md2PdfError;
use crate::pipeline::flow::FlowElement;
use genpdf::elements::{Break, FrameCellDecorator, Paragraph, TableLayout};
use genpdf::fonts::{self, FontData, FontFamily};
use genpdf::style::{Color, Style};
use genpdf::{Element, Margins};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Directories probed for the Liberation font families.
const FONT_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/truetype/liberation2",
    "/usr/share/fonts/liberation",
    "/usr/share/fonts/liberation-fonts",
    "/usr/local/share/fonts/liberation",
];

const DEFAULT_BODY_FONT: &str = "LiberationSans";
const DEFAULT_CODE_FONT: &str = "LiberationMono";

/// Colors ported from the fixed stylesheet of the HTML path.
const HEADING_COLOR: Color = Color::Rgb(44, 62, 80);
const QUOTE_COLOR: Color = Color::Rgb(102, 102, 102);

fn font_search_dirs() -> Vec<PathBuf> {
    font_search_dirs_from(std::env::var("MD2PDF_FONT_DIR").ok().as_deref())
}

/// Search order: the override directory (when set and non-empty) first,
/// then the standard Liberation locations.
fn font_search_dirs_from(override_dir: Option<&str>) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = override_dir {
        if !dir.is_empty() {
            dirs.push(PathBuf::from(dir));
        }
    }
    dirs.extend(FONT_DIRS.iter().map(PathBuf::from));
    dirs
}

fn load_family(name: &str) -> Option<FontFamily<FontData>> {
    for dir in font_search_dirs() {
        if let Ok(family) = fonts::from_files(&dir, name, None) {
            debug!("Loaded font family {name} from {}", dir.display());
            return Some(family);
        }
    }
    None
}

/// Load the body and code font families.
///
/// The code family is optional: when no monospace face is found, code
/// blocks fall back to the body family rather than failing the document.
fn load_fonts() -> Result<(FontFamily<FontData>, Option<FontFamily<FontData>>), Md2PdfError> {
    let body_name =
        std::env::var("MD2PDF_FONT_NAME").unwrap_or_else(|_| DEFAULT_BODY_FONT.to_string());
    let code_name =
        std::env::var("MD2PDF_CODE_FONT_NAME").unwrap_or_else(|_| DEFAULT_CODE_FONT.to_string());

    let body = load_family(&body_name).ok_or_else(|| Md2PdfError::FontsNotFound {
        searched: font_search_dirs()
            .iter()
            .map(|d| d.display().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })?;
    Ok((body, load_family(&code_name)))
}

/// Whether the flow renderer can run on this host.
///
/// Used by engine auto-selection and by tests that need to skip when no
/// usable TrueType family is installed.
pub fn fonts_available() -> bool {
    load_fonts().is_ok()
}

/// Lay out a flow-element sequence and write the PDF to `output`.
pub fn render_flow(
    flow: &[FlowElement],
    styles: &StyleSheet,
    title: &str,
    output: &Path,
) -> Result<(), Md2PdfError> {
    let (body_family, code_family) = load_fonts()?;

    let mut doc = genpdf::Document::new(body_family);
    doc.set_title(title);
    doc.set_paper_size(genpdf::PaperSize::A4);
    doc.set_font_size(styles.body_size);

    let mut decorator = genpdf::SimplePageDecorator::new();
    // 72pt left/right/top, 18pt bottom, expressed in millimetres.
    decorator.set_margins(Margins::trbl(25.4, 25.4, 6.4, 25.4));
    doc.set_page_decorator(decorator);

    let code_style = {
        let mut style = Style::new().with_font_size(styles.code_size);
        if let Some(family) = code_family {
            style = style.with_font_family(doc.add_font_family(family));
        }
        style
    };

    for element in flow {
        match element {
            FlowElement::Heading { level, text } => {
                let style = Style::new()
                    .bold()
                    .with_font_size(styles.heading_size(*level))
                    .with_color(HEADING_COLOR);
                doc.push(Paragraph::new(text.clone()).styled(style));
            }
            FlowElement::Paragraph(text) | FlowElement::PlainText(text) => {
                doc.push(Paragraph::new(text.clone()));
            }
            FlowElement::CodeBlock(text) => {
                // One paragraph per line keeps the block preformatted;
                // genpdf would otherwise re-wrap it as prose.
                for line in text.split('\n') {
                    if line.is_empty() {
                        doc.push(Break::new(1.0));
                    } else {
                        doc.push(
                            Paragraph::new(line)
                                .styled(code_style.clone())
                                .padded(Margins::trbl(0.0, 0.0, 0.0, 7.0)),
                        );
                    }
                }
            }
            FlowElement::QuoteBlock(text) => {
                let style = Style::new().italic().with_color(QUOTE_COLOR);
                doc.push(
                    Paragraph::new(text.clone())
                        .styled(style)
                        .padded(Margins::trbl(0.0, 10.0, 0.0, 10.0)),
                );
            }
            FlowElement::Table(rows) => push_table(&mut doc, rows, output)?,
            FlowElement::ListItem(text) => {
                doc.push(Paragraph::new(format!("• {text}")));
            }
            FlowElement::Spacer(points) => {
                doc.push(Break::new(points / 12.0));
            }
        }
    }

    doc.render_to_file(output)
        .map_err(|e| Md2PdfError::LayoutFailed {
            path: output.to_path_buf(),
            detail: e.to_string(),
        })
}

/// Push a framed table; ragged rows are padded to the widest row.
fn push_table(
    doc: &mut genpdf::Document,
    rows: &[Vec<String>],
    output: &Path,
) -> Result<(), Md2PdfError> {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    if cols == 0 {
        return Ok(());
    }

    let mut table = TableLayout::new(vec![1; cols]);
    table.set_cell_decorator(FrameCellDecorator::new(true, true, false));

    for (row_idx, cells) in rows.iter().enumerate() {
        let mut row = table.row();
        for col in 0..cols {
            let text = cells.get(col).cloned().unwrap_or_default();
            let style = if row_idx == 0 {
                Style::new().bold()
            } else {
                Style::new()
            };
            row.push_element(Paragraph::new(text).styled(style).padded(1));
        }
        row.push().map_err(|e| Md2PdfError::LayoutFailed {
            path: output.to_path_buf(),
            detail: format!("table row {}: {}", row_idx + 1, e),
        })?;
    }

    doc.push(table);
    Ok(())
}
