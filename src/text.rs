//! Text normalization and paragraph segmentation.
//!
//! Turns the winning node into clean, quality-filtered paragraphs:
//! flatten text, collapse whitespace, strip zero-width characters and
//! boilerplate phrases, split on paragraph breaks, then filter by length
//! and punctuation.

use crate::dom::{Document, Edge, NodeId};
use crate::options::Options;
use crate::patterns::{
    BARE_ALNUM, BLOCK_TAGS, PARAGRAPH_BREAK, PARAGRAPH_TERMINALS, WHITESPACE_RUN, ZERO_WIDTH,
};

/// Canonical paragraph separator after whitespace collapsing.
const BREAK: &str = "\n\n";

/// Runs all steps on `node` and returns the surviving paragraphs in document order.
#[must_use]
pub fn paragraphs(doc: &Document, node: NodeId, options: &Options) -> Vec<String> {
    let flat = flatten(doc, node);
    segment(&normalize(&flat, options), options)
}

/// Descendant text in document order. Block-level elements are surrounded
/// by blank lines and `br` contributes a newline, so paragraph structure
/// survives even in minified markup.
#[must_use]
pub fn flatten(doc: &Document, node: NodeId) -> String {
    let mut out = String::new();
    for edge in doc.traverse(node) {
        match edge {
            Edge::Open(n) => match doc.node(n).text() {
                Some(text) => out.push_str(text),
                None if doc.tag(n) == "br" => out.push('\n'),
                None if BLOCK_TAGS.contains(&doc.tag(n)) => out.push_str(BREAK),
                None => {}
            },
            Edge::Close(n) if BLOCK_TAGS.contains(&doc.tag(n)) => out.push_str(BREAK),
            Edge::Close(_) => {}
        }
    }
    out
}

/// Collapses whitespace, then deletes zero-width characters and boilerplate phrases.
///
/// A whitespace run becomes a paragraph break when it holds two or more
/// newlines, or four or more characters on one line; any other run becomes
/// a single space.
///
/// # Example
///
/// ```rust
/// use snippet_extract::text::normalize;
/// use snippet_extract::Options;
///
/// let out = normalize("one\u{200B}  two\n\n\tthree\u{3000}\u{3000}\u{3000}\u{3000}four", &Options::default());
/// assert_eq!(out, "one two\n\nthree\n\nfour");
/// ```
#[must_use]
pub fn normalize(text: &str, options: &Options) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(text, |caps: &regex::Captures<'_>| {
        if is_break(&caps[0]) {
            BREAK
        } else {
            " "
        }
    });
    let mut cleaned = ZERO_WIDTH.replace_all(&collapsed, "").into_owned();
    for phrase in options.boilerplate_phrases.iter().filter(|p| !p.is_empty()) {
        if cleaned.contains(phrase.as_str()) {
            cleaned = cleaned.replace(phrase.as_str(), "");
        }
    }
    cleaned
}

fn is_break(run: &str) -> bool {
    let newlines = run.matches('\n').count();
    newlines >= 2 || (newlines == 0 && run.chars().count() >= 4)
}

/// Splits normalized text on paragraph breaks and keeps the paragraphs
/// that pass [`is_quality_paragraph`].
#[must_use]
pub fn segment(text: &str, options: &Options) -> Vec<String> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|candidate| {
            candidate.chars().count() >= options.min_candidate_len && !BARE_ALNUM.is_match(candidate)
        })
        .filter(|candidate| is_quality_paragraph(candidate, options))
        .map(str::to_string)
        .collect()
}

/// More than one terminal mark and strictly longer than `min_paragraph_len`.
#[must_use]
pub fn is_quality_paragraph(paragraph: &str, options: &Options) -> bool {
    let terminals = paragraph
        .chars()
        .filter(|c| PARAGRAPH_TERMINALS.contains(c))
        .count();
    terminals > 1 && paragraph.chars().count() > options.min_paragraph_len
}

/// Joins paragraphs with a space and cuts the result to `budget` characters,
/// ending with an ellipsis when anything was dropped.
#[must_use]
pub fn truncate_chars(paragraphs: &[String], budget: usize) -> String {
    let joined = paragraphs.join(" ");
    if joined.chars().count() <= budget {
        return joined;
    }
    let mut cut: String = joined.chars().take(budget.saturating_sub(1)).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}
