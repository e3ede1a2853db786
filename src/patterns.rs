//! Compiled regex patterns and character classes for content extraction.
//!
//! All patterns are compiled once at first use via `LazyLock`.
//! Patterns are organized by the pipeline stage that consumes them.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Scoring Patterns
// =============================================================================

/// Matches concatenated class+id values of navigation, chrome and ad blocks.
///
/// Applied to `class + id` with no separator, so substrings such as
/// `main-navfooter-widget` still hit.
pub static NEGATIVE_CLASS_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)footer|header|nav|menu|sidebar|comment|广告")
        .expect("NEGATIVE_CLASS_ID regex")
});

/// Any whitespace run, removed when measuring markup weight.
pub static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_RUN regex")
});

/// Whitespace runs of two or more characters in raw inner markup.
pub static WIDE_WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s{2,}").expect("WIDE_WHITESPACE regex")
});

/// Sentence-terminal marks counted by the punctuation density term.
pub const SCORING_TERMINALS: &[char] = &['。', '.', '?', '!', '；', ';'];

/// Tags earning the semantic bonus.
pub const SEMANTIC_TAGS: &[&str] = &["article", "main", "content"];

/// Heading tags counted by the heading term.
pub const HEADING_TAGS: &[&str] = &["h1", "h2", "h3"];

/// Returns true for characters in the CJK Unified Ideographs block.
#[inline]
#[must_use]
pub fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// A paragraph break: two or more newlines, or four or more in-line
/// whitespace characters (spaces, `&nbsp;`, U+3000 ideographic spaces).
pub static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n[^\S\n]*\n\s*|[^\S\n]{4,}").expect("PARAGRAPH_BREAK regex")
});

/// Zero-width space, non-joiner, joiner and the byte-order mark.
pub static ZERO_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{200B}-\u{200D}\u{FEFF}]").expect("ZERO_WIDTH regex")
});

/// A bare alphanumeric token (stray labels, ids, numbers).
pub static BARE_ALNUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z]+$").expect("BARE_ALNUM regex")
});

/// Terminal marks a paragraph needs more than one of to be kept.
pub const PARAGRAPH_TERMINALS: &[char] = &['.', '!', '?', '。', '；'];

// =============================================================================
// DOM Tag Sets
// =============================================================================

/// Element kinds removed with their subtrees right after loading.
pub const NOISE_TAGS: &[&str] = &["script", "style", "a", "iframe", "noscript"];

/// Subtrees skipped by the full-tree fallback scan.
pub const FALLBACK_SKIP_TAGS: &[&str] = &["style", "script", "svg"];

/// Void elements: serialized without a closing tag.
pub const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Block-level elements whose text is separated by a paragraph break
/// when the winning node is flattened for segmentation.
pub const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "div", "dl", "dt",
    "figcaption", "figure", "footer", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section",
    "table", "tr", "td", "th", "ul",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_pattern_matches_chrome_classes() {
        assert!(NEGATIVE_CLASS_ID.is_match("main-nav footer-widget"));
        assert!(NEGATIVE_CLASS_ID.is_match("SiteHeader"));
        assert!(NEGATIVE_CLASS_ID.is_match("left-sidebar"));
        assert!(NEGATIVE_CLASS_ID.is_match("顶部广告"));
        assert!(!NEGATIVE_CLASS_ID.is_match("article-body"));
    }

    #[test]
    fn paragraph_break_matches_blank_lines_and_wide_runs() {
        assert!(PARAGRAPH_BREAK.is_match("a\n\nb"));
        assert!(PARAGRAPH_BREAK.is_match("a\n  \n b"));
        assert!(PARAGRAPH_BREAK.is_match("a    b"));
        assert!(PARAGRAPH_BREAK.is_match("a\u{3000}\u{3000}\u{3000}\u{3000}b"));
        assert!(!PARAGRAPH_BREAK.is_match("a\nb"));
        assert!(!PARAGRAPH_BREAK.is_match("a   b"));
    }

    #[test]
    fn bare_alnum_rejects_mixed_tokens() {
        assert!(BARE_ALNUM.is_match("ABC123"));
        assert!(!BARE_ALNUM.is_match("ABC 123"));
        assert!(!BARE_ALNUM.is_match("done."));
    }

    #[test]
    fn cjk_range_bounds() {
        assert!(is_cjk_ideograph('中'));
        assert!(is_cjk_ideograph('\u{4E00}'));
        assert!(is_cjk_ideograph('\u{9FFF}'));
        assert!(!is_cjk_ideograph('。'));
        assert!(!is_cjk_ideograph('a'));
    }
}
