//! Visible-text extraction from HTML
//!
//! Turns a raw page into the `(title, content)` pair that gets indexed:
//! script, style, and noscript subtrees are removed outright so their text
//! never reaches the index, remaining text runs are trimmed and joined with
//! single spaces, and the result is capped at [`MAX_CONTENT_CHARS`]
//! characters.

use crate::models::PageText;
use ego_tree::iter::Edge;
use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};
use std::sync::LazyLock;

/// Maximum number of characters kept in a document's content
pub const MAX_CONTENT_CHARS: usize = 50_000;

/// Elements whose entire subtree is invisible noise
const NOISE_TAGS: [&str; 3] = ["script", "style", "noscript"];

// Helper macro to parse selectors safely at compile time
macro_rules! parse_selector {
    ($s:expr) => {
        Selector::parse($s).expect(concat!("Invalid CSS selector: ", $s))
    };
}

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector!("title"));

static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse_selector!("body"));

/// Extracts indexable text from HTML pages
///
/// Parsing follows the HTML5 recovery rules, so malformed markup degrades
/// into a best-effort tree instead of an error; extraction is total.
#[derive(Debug, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract the page title and visible content
    ///
    /// The title is the trimmed text of the `<title>` element, or empty
    /// when the element is missing or blank after trimming. Content comes
    /// from the body subtree; documents without a body (framesets) fall
    /// back to the whole tree.
    pub fn extract(&self, html: &str) -> PageText {
        let document = Html::parse_document(html);

        let title = document
            .select(&TITLE_SELECTOR)
            .next()
            .map(|element| element.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let fragments = match document.select(&BODY_SELECTOR).next() {
            Some(body) => visible_fragments(*body),
            None => visible_fragments(document.tree.root()),
        };

        let content = bound_chars(fragments.join(" "), MAX_CONTENT_CHARS);

        PageText { title, content }
    }
}

/// Collect trimmed, non-empty text runs under `root` in document order,
/// skipping everything inside noise subtrees.
///
/// The traversal counts open/close edges of noise elements so nested
/// occurrences (a style inside a noscript) stay excluded until the
/// outermost one closes.
fn visible_fragments(root: NodeRef<'_, Node>) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut noise_depth = 0usize;

    for edge in root.traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(element) if NOISE_TAGS.contains(&element.name()) => {
                    noise_depth += 1;
                }
                Node::Text(text) if noise_depth == 0 => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        fragments.push(trimmed.to_string());
                    }
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    if NOISE_TAGS.contains(&element.name()) {
                        noise_depth -= 1;
                    }
                }
            }
        }
    }

    fragments
}

/// Cap `text` at `max_chars` characters with a plain prefix cut
///
/// The cap counts characters, not bytes, so multi-byte pages keep the same
/// number of characters as ASCII ones. Not word-boundary aware.
fn bound_chars(mut text: String, max_chars: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max_chars) {
        text.truncate(idx);
    }
    text
}
