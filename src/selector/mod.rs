//! Candidate Selection
//!
//! Enumerates elements that plausibly hold the main content. Selectors are
//! a small closed set of rule shapes rather than a CSS engine: a tag, a
//! class, an id, a tag plus class, or a tag plus exact attribute value.

use std::fmt;

use crate::dom::{Document, Edge, Node, NodeId};
use crate::patterns::FALLBACK_SKIP_TAGS;

/// One selector from the candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRule {
    /// `article`
    Tag(&'static str),
    /// `.content`
    Class(&'static str),
    /// `#content`
    Id(&'static str),
    /// `div.content`
    TagClass(&'static str, &'static str),
    /// `div[itemprop="articleBody"]`
    TagAttr(&'static str, &'static str, &'static str),
}

impl SelectorRule {
    /// Tests a node against this rule. Text nodes never match.
    #[must_use]
    pub fn matches(&self, node: &Node) -> bool {
        if !node.is_element() {
            return false;
        }
        match *self {
            Self::Tag(tag) => node.tag() == tag,
            Self::Class(class) => node.classes().any(|c| c == class),
            Self::Id(id) => node.attr("id") == Some(id),
            Self::TagClass(tag, class) => {
                node.tag() == tag && node.classes().any(|c| c == class)
            }
            Self::TagAttr(tag, name, value) => node.tag() == tag && node.attr(name) == Some(value),
        }
    }
}

impl fmt::Display for SelectorRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tag(tag) => write!(f, "{tag}"),
            Self::Class(class) => write!(f, ".{class}"),
            Self::Id(id) => write!(f, "#{id}"),
            Self::TagClass(tag, class) => write!(f, "{tag}.{class}"),
            Self::TagAttr(tag, name, value) => write!(f, "{tag}[{name}=\"{value}\"]"),
        }
    }
}

/// Containers that commonly wrap article bodies.
pub static CANDIDATE_RULES: &[SelectorRule] = &[
    SelectorRule::Tag("article"),
    SelectorRule::Tag("main"),
    SelectorRule::Tag("section"),
    SelectorRule::Class("content"),
    SelectorRule::Id("content"),
    SelectorRule::TagClass("div", "content"),
    SelectorRule::TagClass("div", "post"),
    SelectorRule::TagAttr("div", "itemprop", "articleBody"),
];

/// Elements matching any rule, in document order, each listed once.
///
/// # Example
///
/// ```rust
/// use snippet_extract::dom::Document;
/// use snippet_extract::selector::{select_candidates, CANDIDATE_RULES};
///
/// let doc = Document::parse(r#"<main><div class="content"></div><p></p></main>"#)?;
/// let found = select_candidates(&doc, CANDIDATE_RULES);
/// let tags: Vec<_> = found.iter().map(|&n| doc.tag(n)).collect();
/// assert_eq!(tags, vec!["main", "div"]);
/// # Ok::<(), snippet_extract::Error>(())
/// ```
#[must_use]
pub fn select_candidates(doc: &Document, rules: &[SelectorRule]) -> Vec<NodeId> {
    doc.descendant_elements(doc.root())
        .filter(|&n| {
            let node = doc.node(n);
            rules.iter().any(|rule| rule.matches(node))
        })
        .collect()
}

/// Every element below the body, skipping `style`, `script` and `svg` subtrees.
///
/// `body` itself is left out, as are `html` and `head`: the locator already
/// starts from the body, and nothing in `head` is readable content. A tree
/// without a body is scanned from the root.
#[must_use]
pub fn select_all(doc: &Document) -> Vec<NodeId> {
    let scope = doc.body_or_root();
    let mut out = Vec::new();
    let mut skipping: Option<NodeId> = None;

    for edge in doc.traverse(scope) {
        match (edge, skipping) {
            (Edge::Close(n), Some(skip)) if n == skip => skipping = None,
            (_, Some(_)) => {}
            (Edge::Open(n), None) if n != scope && doc.node(n).is_element() => {
                if FALLBACK_SKIP_TAGS.contains(&doc.tag(n)) {
                    skipping = Some(n);
                } else {
                    out.push(n);
                }
            }
            _ => {}
        }
    }
    out
}
