//! Visible-text extraction from the fetched HTML page.
//!
//! The parser downstream only understands plain text lines, so the whole
//! document is reduced to the text nodes under `<body>`, one per line.
//! No filtering happens here; the line classifier tolerates noise.

use scraper::{Html, Selector};

/// Extract the visible text of an HTML document.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let body = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next());

    let segments: Vec<&str> = match body {
        Some(body) => body.text().collect(),
        // Fragment without a body; take every text node in the tree.
        None => document.root_element().text().collect(),
    };

    segments
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
