//! HTML → flow-element transduction: the core of the native render path.
//!
//! ## Why a line scan instead of a DOM?
//!
//! pulldown-cmark emits well-formed HTML with one block construct per line
//! group: headings and paragraphs land on single lines, while code blocks,
//! quotes and tables span a run of consecutive lines between an opening and
//! a closing marker. That guarantee makes a forward scan with a handful of
//! cases sufficient, and spares us a full HTML parser dependency for input
//! we generated ourselves two stages earlier. The cost is fragility against
//! arbitrary hand-written HTML — anything the scan does not recognise
//! degrades to stripped plain text rather than failing the document.
//!
//! Multi-line constructs are consumed by small sub-parsers
//! ([`scan_code_block`], [`scan_quote_block`], [`scan_table`]) that take the
//! opening line's index and return the captured content together with the
//! index of the first unconsumed line. The main loop owns the cursor; no
//! branch mutates it behind the loop's back.
//!
//! A code block or quote whose closing marker never arrives is emitted as
//! the partial capture collected so far. Truncated input produces a
//! truncated block, not an error.

use crate::config::StyleSheet;
use once_cell::sync::Lazy;
use regex::Regex;

/// One renderer-agnostic content block, produced in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowElement {
    /// Heading text at a 1-based level (1–6).
    Heading { level: u8, text: String },
    /// Body paragraph.
    Paragraph(String),
    /// Preformatted text; internal line breaks are significant.
    CodeBlock(String),
    /// Quoted prose, already collapsed to a single line of text.
    QuoteBlock(String),
    /// Table rows of stripped cell text, header row first.
    Table(Vec<Vec<String>>),
    /// Flat bullet item (nesting in the source is not preserved).
    ListItem(String),
    /// Stray inline content that matched no block construct.
    PlainText(String),
    /// Fixed vertical gap in points.
    Spacer(f64),
}

static RE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));
static RE_ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"<tr>(.*?)</tr>").expect("valid regex"));
static RE_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<t[hd][^>]*>(.*?)</t[hd]>").expect("valid regex"));

/// Remove all HTML tags from a line, leaving the text content.
fn strip_tags(line: &str) -> String {
    RE_TAG.replace_all(line, "").into_owned()
}

/// Heading level if the line opens with `<h1>`..`<h6>`.
fn heading_level(line: &str) -> Option<u8> {
    let rest = line.strip_prefix("<h")?;
    let digit = rest.bytes().next()?;
    if (b'1'..=b'6').contains(&digit) && rest.as_bytes().get(1) == Some(&b'>') {
        Some(digit - b'0')
    } else {
        None
    }
}

/// Classify an HTML fragment into a flow-element sequence.
///
/// The scan is single-pass and allocation-light: each line is classified
/// against the stripped form of its text, in priority order, and multi-line
/// constructs advance the cursor past everything they consumed. Spacer gaps
/// come from `styles`; every emitted block is followed by one spacer except
/// blank paragraphs and stray fragments, which are dropped without a spacer.
pub fn transduce(html: &str, styles: &StyleSheet) -> Vec<FlowElement> {
    let lines: Vec<&str> = html.lines().collect();
    let mut elements = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line.is_empty() {
            i += 1;
        } else if let Some(level) = heading_level(line) {
            elements.push(FlowElement::Heading {
                level,
                text: strip_tags(line).trim().to_string(),
            });
            elements.push(FlowElement::Spacer(styles.heading_gap(level)));
            i += 1;
        } else if line.starts_with("<pre><code") {
            let (text, next) = scan_code_block(&lines, i);
            elements.push(FlowElement::CodeBlock(text));
            elements.push(FlowElement::Spacer(styles.block_gap));
            i = next;
        } else if line.starts_with("<blockquote") {
            let (text, next) = scan_quote_block(&lines, i);
            elements.push(FlowElement::QuoteBlock(text));
            elements.push(FlowElement::Spacer(styles.block_gap));
            i = next;
        } else if line.starts_with("<table") {
            let (rows, next) = scan_table(&lines, i);
            // A table whose rows were all dropped emits nothing at all.
            if !rows.is_empty() {
                elements.push(FlowElement::Table(rows));
                elements.push(FlowElement::Spacer(styles.block_gap));
            }
            i = next;
        } else if line.starts_with("<p>") {
            let text = strip_tags(line);
            let text = text.trim();
            if !text.is_empty() {
                elements.push(FlowElement::Paragraph(text.to_string()));
                elements.push(FlowElement::Spacer(styles.paragraph_gap));
            }
            i += 1;
        } else if line.starts_with("<li>") {
            elements.push(FlowElement::ListItem(strip_tags(line).trim().to_string()));
            elements.push(FlowElement::Spacer(styles.list_gap));
            i += 1;
        } else {
            // Stray tags, closing tags, inline-only fragments.
            let text = strip_tags(line);
            let text = text.trim();
            if !text.is_empty() {
                elements.push(FlowElement::PlainText(text.to_string()));
                elements.push(FlowElement::Spacer(styles.paragraph_gap));
            }
            i += 1;
        }
    }

    elements
}

/// Capture a `<pre><code>` block starting at `start`.
///
/// Interior lines are kept raw — preformatted text owns its indentation and
/// its blank lines. Only the opening and closing marker lines are stripped.
/// Returns the joined text and the index of the first unconsumed line.
fn scan_code_block(lines: &[&str], start: usize) -> (String, usize) {
    let first = lines[start].trim();

    // Single-line block: `<pre><code>x = 1</code></pre>`.
    if first.ends_with("</code></pre>") {
        return (strip_tags(first), start + 1);
    }

    let mut captured = vec![strip_tags(first)];
    let mut idx = start + 1;
    while idx < lines.len() && !lines[idx].trim().ends_with("</code></pre>") {
        captured.push(lines[idx].to_string());
        idx += 1;
    }
    if idx < lines.len() {
        // The closing line usually strips to nothing; keep it only when the
        // last code line and the closing tag share a line.
        let tail = strip_tags(lines[idx].trim());
        if !tail.is_empty() {
            captured.push(tail);
        }
        idx += 1;
    }
    (captured.join("\n"), idx)
}

/// Capture a `<blockquote>` block starting at `start`.
///
/// Quotes are prose, not preformatted text: each line is stripped and the
/// non-empty pieces are joined with a single space.
fn scan_quote_block(lines: &[&str], start: usize) -> (String, usize) {
    let first = lines[start].trim();

    if first.ends_with("</blockquote>") && first.len() > "</blockquote>".len() {
        return (strip_tags(first).trim().to_string(), start + 1);
    }

    let mut parts: Vec<String> = Vec::new();
    let mut push_stripped = |line: &str| {
        let text = strip_tags(line);
        let text = text.trim();
        if !text.is_empty() {
            parts.push(text.to_string());
        }
    };

    push_stripped(first);
    let mut idx = start + 1;
    while idx < lines.len() && !lines[idx].trim().ends_with("</blockquote>") {
        push_stripped(lines[idx]);
        idx += 1;
    }
    if idx < lines.len() {
        push_stripped(lines[idx]);
        idx += 1;
    }
    (parts.join(" "), idx)
}

/// Capture a `<table>` block starting at `start`.
///
/// Rows are recognised wherever `<tr>…</tr>` appears, including on the
/// opening line — pulldown-cmark puts the whole `<thead>` on the same line
/// as `<table>`. Cell text comes from non-greedy `<th>`/`<td>` matches;
/// rows that yield zero cells are dropped.
fn scan_table(lines: &[&str], start: usize) -> (Vec<Vec<String>>, usize) {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut idx = start;

    while idx < lines.len() {
        let line = lines[idx];
        for row in RE_ROW.captures_iter(line) {
            let cells: Vec<String> = RE_CELL
                .captures_iter(&row[1])
                .map(|c| strip_tags(&c[1]).trim().to_string())
                .collect();
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        let closed = line.contains("</table>");
        idx += 1;
        if closed {
            break;
        }
    }

    (rows, idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::markdown::to_html;

    fn flow(markdown: &str) -> Vec<FlowElement> {
        transduce(&to_html(markdown), &StyleSheet::default())
    }

    /// Block elements only, spacers filtered out.
    fn blocks(markdown: &str) -> Vec<FlowElement> {
        flow(markdown)
            .into_iter()
            .filter(|e| !matches!(e, FlowElement::Spacer(_)))
            .collect()
    }

    #[test]
    fn strip_tags_removes_all_markup() {
        assert_eq!(strip_tags("<h1>Title</h1>"), "Title");
        assert_eq!(strip_tags("<p>a <em>b</em> c</p>"), "a b c");
        assert_eq!(strip_tags("no tags here"), "no tags here");
    }

    #[test]
    fn heading_level_detection() {
        assert_eq!(heading_level("<h1>x</h1>"), Some(1));
        assert_eq!(heading_level("<h6>x</h6>"), Some(6));
        assert_eq!(heading_level("<h7>x</h7>"), None);
        assert_eq!(heading_level("<hr />"), None);
        assert_eq!(heading_level("<p>x</p>"), None);
    }

    #[test]
    fn first_element_of_titled_doc_is_h1() {
        let elements = blocks("# Title\n\nBody text.");
        assert_eq!(
            elements[0],
            FlowElement::Heading {
                level: 1,
                text: "Title".into()
            }
        );
    }

    #[test]
    fn heading_spacer_shrinks_with_depth() {
        let elements = flow("# One\n\n###### Six");
        let gaps: Vec<f64> = elements
            .iter()
            .filter_map(|e| match e {
                FlowElement::Spacer(g) => Some(*g),
                _ => None,
            })
            .collect();
        assert_eq!(gaps, vec![12.0, 4.0]);
    }

    #[test]
    fn three_line_fence_is_one_code_block_with_three_lines() {
        let elements = blocks("```\nline one\nline two\nline three\n```");
        assert_eq!(elements.len(), 1);
        match &elements[0] {
            FlowElement::CodeBlock(text) => {
                let lines: Vec<&str> = text.split('\n').collect();
                assert_eq!(lines, vec!["line one", "line two", "line three"]);
            }
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn code_block_keeps_blank_interior_lines() {
        let elements = blocks("```\nfirst\n\nlast\n```");
        match &elements[0] {
            FlowElement::CodeBlock(text) => {
                assert_eq!(text.split('\n').count(), 3);
            }
            other => panic!("expected CodeBlock, got {other:?}"),
        }
    }

    #[test]
    fn single_line_code_block() {
        let styles = StyleSheet::default();
        let elements = transduce("<pre><code>x = 1</code></pre>", &styles);
        assert_eq!(elements[0], FlowElement::CodeBlock("x = 1".into()));
    }

    #[test]
    fn unterminated_code_block_emits_partial_capture() {
        let styles = StyleSheet::default();
        let html = "<pre><code>first\nsecond";
        let elements = transduce(html, &styles);
        assert_eq!(elements[0], FlowElement::CodeBlock("first\nsecond".into()));
    }

    #[test]
    fn unterminated_quote_block_emits_partial_capture() {
        let styles = StyleSheet::default();
        let html = "<blockquote>\n<p>only half";
        let elements = transduce(html, &styles);
        assert_eq!(elements[0], FlowElement::QuoteBlock("only half".into()));
    }

    #[test]
    fn quote_lines_join_with_spaces() {
        let elements = blocks("> quoted prose\n> over two lines");
        assert_eq!(
            elements[0],
            FlowElement::QuoteBlock("quoted prose over two lines".into())
        );
    }

    #[test]
    fn table_keeps_header_and_data_rows() {
        let elements = blocks(
            "| Name | Age |\n\
             | --- | --- |\n\
             | Ada | 36 |\n\
             | Alan | 41 |",
        );
        assert_eq!(elements.len(), 1);
        match &elements[0] {
            FlowElement::Table(rows) => {
                assert_eq!(rows.len(), 3);
                assert!(rows.iter().all(|r| r.len() == rows[0].len()));
                assert_eq!(rows[0], vec!["Name", "Age"]);
                assert_eq!(rows[2], vec!["Alan", "41"]);
            }
            other => panic!("expected Table, got {other:?}"),
        }
    }

    #[test]
    fn rowless_table_emits_nothing() {
        let styles = StyleSheet::default();
        let elements = transduce("<table>\n</table>", &styles);
        assert!(elements.is_empty());
    }

    #[test]
    fn whitespace_paragraph_is_dropped_without_spacer() {
        let styles = StyleSheet::default();
        let elements = transduce("<p>   </p>", &styles);
        assert!(elements.is_empty());
    }

    #[test]
    fn list_items_are_flat() {
        let elements = blocks("- alpha\n- beta");
        assert_eq!(
            elements,
            vec![
                FlowElement::ListItem("alpha".into()),
                FlowElement::ListItem("beta".into()),
            ]
        );
    }

    #[test]
    fn stray_closing_tags_are_dropped() {
        let styles = StyleSheet::default();
        let elements = transduce("</ul>\n</div>", &styles);
        assert!(elements.is_empty());
    }

    #[test]
    fn inline_fragment_degrades_to_plain_text() {
        let styles = StyleSheet::default();
        let elements = transduce("<em>just emphasis</em>", &styles);
        assert_eq!(elements[0], FlowElement::PlainText("just emphasis".into()));
    }

    #[test]
    fn empty_document_emits_no_elements() {
        assert!(flow("").is_empty());
    }

    #[test]
    fn every_block_is_followed_by_a_spacer() {
        let elements = flow("# Title\n\nA paragraph.\n\n- item");
        assert_eq!(elements.len() % 2, 0);
        for pair in elements.chunks(2) {
            assert!(!matches!(pair[0], FlowElement::Spacer(_)));
            assert!(matches!(pair[1], FlowElement::Spacer(_)));
        }
    }

    #[test]
    fn document_order_is_preserved() {
        let elements = blocks("# H\n\npara\n\n```\ncode\n```");
        assert!(matches!(elements[0], FlowElement::Heading { .. }));
        assert!(matches!(elements[1], FlowElement::Paragraph(_)));
        assert!(matches!(elements[2], FlowElement::CodeBlock(_)));
    }
}
