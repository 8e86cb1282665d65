//! HTML document assembly for the HTML-engine render path.
//!
//! The engine receives one complete, self-contained HTML document: doctype,
//! head with the fixed embedded stylesheet, and the converted fragment as
//! the body. There is no CSS cascade to resolve — the stylesheet below is
//! the whole style story, including the 2 cm page margin the engine applies
//! via the `@page` rule.

/// Fixed stylesheet embedded in every generated document.
const STYLESHEET: &str = r#"
        @page { margin: 2cm; }
        body {
            font-family: 'Arial', sans-serif;
            line-height: 1.6;
            margin: 40px;
            color: #333;
        }
        h1, h2, h3, h4, h5, h6 {
            color: #2c3e50;
            margin-top: 24px;
            margin-bottom: 16px;
        }
        h1 { font-size: 2em; border-bottom: 2px solid #3498db; padding-bottom: 10px; }
        h2 { font-size: 1.5em; border-bottom: 1px solid #bdc3c7; padding-bottom: 8px; }
        code {
            background-color: #f8f9fa;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: 'Courier New', monospace;
        }
        pre {
            background-color: #f8f9fa;
            padding: 16px;
            border-radius: 6px;
            overflow-x: auto;
            border-left: 4px solid #3498db;
        }
        pre code {
            background-color: transparent;
            padding: 0;
        }
        table {
            border-collapse: collapse;
            width: 100%;
            margin: 16px 0;
        }
        th, td {
            border: 1px solid #ddd;
            padding: 12px;
            text-align: left;
        }
        th {
            background-color: #f2f2f2;
            font-weight: bold;
        }
        blockquote {
            border-left: 4px solid #3498db;
            margin: 16px 0;
            padding-left: 16px;
            color: #666;
        }
        ul, ol {
            padding-left: 24px;
        }
        li {
            margin-bottom: 4px;
        }
"#;

/// Wrap an HTML fragment in a complete document shell.
///
/// `title` is typically the input filename stem; it is escaped so path
/// characters cannot break out of the `<title>` element.
pub fn wrap_document(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n\
         {}\n\
         </body>\n\
         </html>\n",
        escape_text(title),
        STYLESHEET,
        fragment
    )
}

/// Minimal HTML text escaping for the title element.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_shell_is_complete() {
        let doc = wrap_document("<p>hello</p>", "notes");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>notes</title>"));
        assert!(doc.contains("<p>hello</p>"));
        assert!(doc.contains("@page { margin: 2cm; }"));
        assert!(doc.trim_end().ends_with("</html>"));
    }

    #[test]
    fn title_is_escaped() {
        let doc = wrap_document("", "a<b>&c");
        assert!(doc.contains("<title>a&lt;b&gt;&amp;c</title>"));
    }

    #[test]
    fn fragment_is_embedded_verbatim() {
        let fragment = "<h1>T</h1>\n<pre><code>x &lt; y</code></pre>";
        let doc = wrap_document(fragment, "t");
        assert!(doc.contains(fragment));
    }
}
