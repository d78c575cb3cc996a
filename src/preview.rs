// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Plan and template previews
//!
//! Markdown rendering is an outside concern: anything implementing
//! [`Formatter`] can be plugged in. The built-in [`EscapedTextFormatter`]
//! shows the source verbatim. [`render_page`] wraps the formatted body in a
//! standalone HTML document suitable for opening in a browser.

/// Turns Markdown source into an HTML fragment
pub trait Formatter {
    fn to_html(&self, markdown: &str) -> String;
}

/// Shows the Markdown source as preformatted text
#[derive(Debug, Default, Clone, Copy)]
pub struct EscapedTextFormatter;

impl Formatter for EscapedTextFormatter {
    fn to_html(&self, markdown: &str) -> String {
        format!("<pre>{}</pre>", escape_html(markdown))
    }
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_STYLE: &str = "\
body { font-family: Arial; margin: 20px; }
h1 { color: #333; }
ul, ol { margin-left: 20px; }
code { background: #f0f0f0; padding: 2px 5px; }
pre { background: #f0f0f0; padding: 10px; }";

/// A complete HTML page around an already formatted body
pub fn render_page(title: &str, body_html: &str) -> String {
    let title = escape_html(title);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{PAGE_STYLE}\n</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body_html}\n</body>\n</html>\n"
    )
}

/// Format `markdown` and wrap it in a page
pub fn preview_page(formatter: &dyn Formatter, title: &str, markdown: &str) -> String {
    render_page(title, &formatter.to_html(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Formatter for Upper {
        fn to_html(&self, markdown: &str) -> String {
            markdown.to_uppercase()
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escaped_text_formatter() {
        assert_eq!(
            EscapedTextFormatter.to_html("# <Title>"),
            "<pre># &lt;Title&gt;</pre>"
        );
    }

    #[test]
    fn test_render_page_contains_body_and_style() {
        let page = render_page("2024-01-01 <plan>", "<p>hi</p>");
        assert!(page.contains("<title>2024-01-01 &lt;plan&gt;</title>"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.contains("font-family: Arial"));
        assert!(page.contains("charset=\"utf-8\""));
    }

    #[test]
    fn test_preview_page_uses_formatter() {
        let page = preview_page(&Upper, "t", "buy milk");
        assert!(page.contains("BUY MILK"));
    }
}
