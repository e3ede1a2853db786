//! # snippet-extract
//!
//! Finds the readable main content of a fetched web page and turns it into
//! clean paragraphs suitable for a search-result snippet.
//!
//! ## Quick Start
//!
//! ```rust
//! use snippet_extract::extract_main_content;
//!
//! let para = "The council approved the budget after a long debate. Spending on parks rises next year.";
//! let html = format!(
//!     "<html><body><nav>Home News</nav><article><p>{para}</p><p>{para}</p></article></body></html>"
//! );
//!
//! let paragraphs = extract_main_content(html.as_bytes())?;
//! assert_eq!(paragraphs, vec![para, para]);
//! # Ok::<(), snippet_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Load**: parse into a node arena and drop `script`, `style`, `a`,
//!   `iframe` and `noscript` subtrees.
//! - **Select**: gather likely containers (`article`, `main`, `.content`, ...).
//! - **Score**: text density, punctuation, CJK share, headings and
//!   paragraphs, minus spacing; class/id names of page chrome veto to zero.
//! - **Locate**: best candidate, full-tree fallback, then promotion to
//!   parents that clearly score higher.
//! - **Segment**: normalize the winner's text and keep well-formed paragraphs.
//!
//! Extraction is synchronous and deterministic: the same bytes always give
//! the same paragraphs.

mod error;
mod options;
mod patterns;
mod result;

/// Node arena built from parsed HTML.
pub mod dom;

/// Charset sniffing and transcoding of page bytes.
pub mod encoding;

/// Candidate selectors and the full-tree fallback scan.
pub mod selector;

/// Heuristic content score.
pub mod scoring;

/// Selector pass, fallback pass and ancestor promotion.
pub mod locator;

/// Text normalization and paragraph segmentation.
pub mod text;

/// Search-result kinds and snippet overlay.
pub mod overlay;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, ScoringWeights};
pub use result::{ExtractResult, Winner};

use dom::Document;

/// Extracts the main-content paragraphs from page bytes using default options.
///
/// An empty vector means nothing passed the paragraph filters; it is not an
/// error.
pub fn extract_main_content(html: &[u8]) -> Result<Vec<String>> {
    extract_main_content_with_options(html, &Options::default()).map(|r| r.paragraphs)
}

/// Extracts main content from page bytes with custom options.
///
/// The charset is sniffed from `<meta>` declarations; undecodable bytes are
/// replaced rather than rejected.
pub fn extract_main_content_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let text = encoding::decode_html(html);
    extract_str(&text, options)
}

/// Extracts main content from an already-decoded HTML string.
///
/// # Example
///
/// ```rust
/// use snippet_extract::{extract_str, Options};
///
/// let result = extract_str("<p>tiny</p>", &Options::default())?;
/// assert!(result.is_empty());
/// assert!(result.winner.is_none());
/// # Ok::<(), snippet_extract::Error>(())
/// ```
pub fn extract_str(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = Document::load(html)?;
    let located = locator::locate(&doc, options);

    let winner = (located.score > 0.0).then(|| {
        let node = doc.node(located.node);
        Winner {
            tag: node.tag().to_string(),
            class: node.attr("class").map(str::to_string),
            id: node.attr("id").map(str::to_string),
            score: located.score,
        }
    });

    let paragraphs = text::paragraphs(&doc, located.node, options);
    tracing::debug!(
        html_len = html.len(),
        winner = winner.as_ref().map_or("body", |w| w.tag.as_str()),
        score = located.score,
        paragraphs = paragraphs.len(),
        "extraction complete"
    );

    Ok(ExtractResult { paragraphs, winner })
}
