//! Rendering seam over the pinned markup dependency.
//!
//! The renderer version is exact-pinned in Cargo.toml and locked in
//! Cargo.lock, so a redeployed fixture must produce byte-identical
//! HTML for the same source or the pin was not honored.

use pulldown_cmark::{html, Parser};

/// Render Markdown source to an HTML string.
pub fn render_markup(source: &str) -> String {
    let parser = Parser::new(source);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
