//! Markdown → HTML conversion via pulldown-cmark.
//!
//! The extensions match what the rest of the pipeline is written against:
//! tables, strikethrough and task lists. Fenced code blocks are core
//! CommonMark and need no opt-in. Conversion is total over valid UTF-8 —
//! pulldown-cmark has no error path, malformed constructs simply parse as
//! literal text.

use pulldown_cmark::{html, Options, Parser};

/// Convert a Markdown document to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_and_paragraph() {
        let html = to_html("# Title\n\nSome text.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Some text.</p>"));
    }

    #[test]
    fn fenced_code_block() {
        let html = to_html("```\nlet x = 1;\n```");
        assert!(html.contains("<pre><code>"));
        assert!(html.contains("let x = 1;"));
    }

    #[test]
    fn tables_enabled() {
        let html = to_html("| A | B |\n| --- | --- |\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn strikethrough_enabled() {
        let html = to_html("~~gone~~");
        assert!(html.contains("<del>gone</del>"));
    }

    #[test]
    fn tasklists_enabled() {
        let html = to_html("- [x] done\n- [ ] todo");
        assert!(html.contains("type=\"checkbox\""));
    }

    #[test]
    fn empty_input_produces_empty_html() {
        assert!(to_html("").trim().is_empty());
    }
}
