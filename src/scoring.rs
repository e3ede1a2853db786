//! Content scoring.
//!
//! A pure heuristic estimating how much a node looks like readable main
//! content, from text and markup statistics only. Every term is kept in a
//! [`ScoreBreakdown`] so a selection can be explained after the fact.

use crate::dom::{Document, NodeId};
use crate::options::{Options, ScoringWeights};
use crate::patterns::{
    is_cjk_ideograph, HEADING_TAGS, NEGATIVE_CLASS_ID, SCORING_TERMINALS, SEMANTIC_TAGS,
    WHITESPACE_RUN, WIDE_WHITESPACE,
};

/// Individual terms of a node's score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    /// Trimmed text length in characters.
    pub text_len: usize,
    pub text_density: f64,
    pub space_ratio: f64,
    pub link_density: f64,
    pub semantic_bonus: f64,
    pub cjk_ratio: f64,
    pub punctuation_density: f64,
    pub heading_score: f64,
    pub paragraph_score: f64,
    /// The class+id veto fired.
    pub vetoed: bool,
    /// Final score; `0.0` when the text floor or the veto short-circuited.
    pub total: f64,
}

/// Scores a node with the given options.
#[must_use]
pub fn score(doc: &Document, node: NodeId, options: &Options) -> f64 {
    score_breakdown(doc, node, options).total
}

/// Scores a node and returns every term.
///
/// # Example
///
/// ```rust
/// use snippet_extract::dom::Document;
/// use snippet_extract::scoring::score_breakdown;
/// use snippet_extract::Options;
///
/// let doc = Document::load("<div class='menu'><p>A long enough paragraph of text that clears the floor.</p></div>")?;
/// let div = doc.elements_by_tag("div")[0];
/// let b = score_breakdown(&doc, div, &Options::default());
/// assert!(b.vetoed);
/// assert_eq!(b.total, 0.0);
/// # Ok::<(), snippet_extract::Error>(())
/// ```
#[must_use]
pub fn score_breakdown(doc: &Document, node: NodeId, options: &Options) -> ScoreBreakdown {
    let raw_text = doc.text_content(node);
    let text = raw_text.trim();
    let text_len = text.chars().count();

    let mut b = ScoreBreakdown {
        text_len,
        ..ScoreBreakdown::default()
    };
    if text_len < options.min_text_len {
        return b;
    }
    let text_len_f = text_len as f64;

    let inner = doc.inner_html(node);
    let html_len = WHITESPACE_RUN.replace_all(&inner, "").chars().count().max(1);
    b.text_density = text_len_f / html_len as f64;

    let spacing: usize = WIDE_WHITESPACE
        .find_iter(&inner)
        .map(|m| m.as_str().chars().count())
        .sum();
    b.space_ratio = spacing as f64 / text_len_f;

    // Anchors are stripped at load, so this stays 0 on the normal path.
    let link_len: usize = doc
        .descendant_elements(node)
        .filter(|&n| doc.tag(n) == "a")
        .map(|n| doc.text_content(n).trim().chars().count())
        .sum();
    b.link_density = link_len as f64 / text_len_f;

    let weights = &options.weights;
    let element = doc.node(node);
    if SEMANTIC_TAGS.contains(&element.tag()) {
        b.semantic_bonus = weights.semantic_bonus;
    }

    let class_id = format!(
        "{}{}",
        element.attr("class").unwrap_or_default(),
        element.attr("id").unwrap_or_default()
    );
    if NEGATIVE_CLASS_ID.is_match(&class_id) {
        b.vetoed = true;
        return b;
    }

    let (cjk, terminals) = text.chars().fold((0usize, 0usize), |(cjk, term), c| {
        (
            cjk + usize::from(is_cjk_ideograph(c)),
            term + usize::from(SCORING_TERMINALS.contains(&c)),
        )
    });
    b.cjk_ratio = cjk as f64 / text_len_f;
    b.punctuation_density = terminals as f64 / text_len_f;

    let headings = doc.count_descendants(node, HEADING_TAGS) as f64;
    b.heading_score = (weights.heading_step * headings).min(weights.heading_cap);
    let paragraphs = doc.count_descendants(node, &["p"]) as f64;
    b.paragraph_score = (weights.paragraph_step * paragraphs).min(weights.paragraph_cap);

    b.total = combine(&b, weights);
    b
}

fn combine(b: &ScoreBreakdown, w: &ScoringWeights) -> f64 {
    w.text_density * b.text_density + w.cjk_ratio * b.cjk_ratio
        + w.punctuation_density * b.punctuation_density
        - w.link_density * b.link_density
        + b.semantic_bonus
        + b.heading_score
        + b.paragraph_score
        - w.space_ratio * b.space_ratio
}
