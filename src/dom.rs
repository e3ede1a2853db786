//! Document Tree
//!
//! An arena of nodes addressed by [`NodeId`]. Each node stores its tag
//! (empty for text nodes), attributes, ordered child ids and a non-owning
//! parent id, so the tree has no reference cycles and parent navigation is
//! an index lookup.
//!
//! Parsing is delegated to `dom_query` (html5ever); the parsed tree is
//! copied into the arena once and the `dom_query` document is dropped.
//! Comments, doctypes and processing instructions are not copied.
//!
//! The only mutation is [`Document::detach`], used by noise removal. A
//! detached subtree stays in the arena but is unreachable from the root.

use crate::error::{Error, Result};
use crate::patterns::{NOISE_TAGS, VOID_TAGS};

/// Stable index of a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One element or text node.
#[derive(Debug, Clone, Default)]
pub struct Node {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    text: Option<String>,
}

impl Node {
    /// Lowercase tag name, empty for text nodes.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Text payload of a text node.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    #[must_use]
    pub fn is_element(&self) -> bool {
        self.text.is_none()
    }

    /// Attribute value by (lowercase) name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whitespace-separated class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    /// Ordered child ids.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// A traversal event: entering a node, or leaving an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Open(NodeId),
    Close(NodeId),
}

/// Depth-first walk over a subtree, yielding [`Edge`] events in document order.
///
/// Uses an explicit stack, so nesting depth does not consume call stack.
pub struct Traverse<'a> {
    doc: &'a Document,
    stack: Vec<Edge>,
}

impl Iterator for Traverse<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let edge = self.stack.pop()?;
        if let Edge::Open(id) = edge {
            let node = self.doc.node(id);
            if node.is_element() {
                self.stack.push(Edge::Close(id));
                self.stack
                    .extend(node.children.iter().rev().map(|&c| Edge::Open(c)));
            }
        }
        Some(edge)
    }
}

/// Parsed HTML document.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Parses HTML into a node arena.
    ///
    /// The html5ever tree builder recovers from nearly any input, so this
    /// only fails when no root element comes out of the parser.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snippet_extract::dom::Document;
    ///
    /// let doc = Document::parse("<p class='lead'>Hello</p>")?;
    /// let p = doc.elements_by_tag("p")[0];
    /// assert_eq!(doc.node(p).attr("class"), Some("lead"));
    /// assert_eq!(doc.text_content(p), "Hello");
    /// # Ok::<(), snippet_extract::Error>(())
    /// ```
    pub fn parse(html: &str) -> Result<Self> {
        let parsed = dom_query::Document::from(html);
        let html_sel = parsed.select("html");
        let Some(&root) = html_sel.nodes().first() else {
            return Err(Error::ParseError("parser produced no root element".to_string()));
        };

        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };

        let mut pending = vec![(root, None)];
        while let Some((source, parent)) = pending.pop() {
            let node = if source.is_element() {
                Node {
                    tag: source
                        .node_name()
                        .map(|t| t.to_ascii_lowercase())
                        .unwrap_or_default(),
                    attrs: source
                        .attrs()
                        .iter()
                        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                        .collect(),
                    ..Node::default()
                }
            } else if source.is_text() {
                Node {
                    text: Some(source.text().to_string()),
                    ..Node::default()
                }
            } else {
                continue;
            };

            let id = doc.push(node, parent);
            if doc.node(id).is_element() {
                pending.extend(source.children().into_iter().rev().map(|c| (c, Some(id))));
            }
        }

        tracing::trace!(nodes = doc.nodes.len(), "document loaded");
        Ok(doc)
    }

    /// Parses HTML and immediately strips noise elements.
    pub fn load(html: &str) -> Result<Self> {
        let mut doc = Self::parse(html)?;
        doc.remove_noise();
        Ok(doc)
    }

    fn push(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    /// The `html` element.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `body` element, if the document has one.
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        self.node(self.root)
            .children
            .iter()
            .copied()
            .find(|&c| self.tag(c) == "body")
    }

    /// The body, or the root for documents without one.
    #[must_use]
    pub fn body_or_root(&self) -> NodeId {
        self.body().unwrap_or(self.root)
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// Walks the subtree rooted at `id`, including `id` itself.
    #[must_use]
    pub fn traverse(&self, id: NodeId) -> Traverse<'_> {
        Traverse {
            doc: self,
            stack: vec![Edge::Open(id)],
        }
    }

    /// Element descendants of `id` in document order, excluding `id`.
    pub fn descendant_elements(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.traverse(id).filter_map(move |edge| match edge {
            Edge::Open(n) if n != id && self.node(n).is_element() => Some(n),
            _ => None,
        })
    }

    /// Every reachable element with the given tag, in document order.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.traverse(self.root)
            .filter_map(|edge| match edge {
                Edge::Open(n) if self.tag(n) == tag => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Number of element descendants whose tag is in `tags`.
    #[must_use]
    pub fn count_descendants(&self, id: NodeId, tags: &[&str]) -> usize {
        self.descendant_elements(id)
            .filter(|&n| tags.contains(&self.tag(n)))
            .count()
    }

    /// Concatenated text of all descendant text nodes, untrimmed.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        for edge in self.traverse(id) {
            if let Edge::Open(n) = edge {
                if let Some(text) = self.node(n).text() {
                    out.push_str(text);
                }
            }
        }
        out
    }

    /// Serializes the children of `id` as HTML.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for edge in self.traverse(id) {
            match edge {
                Edge::Open(n) if n == id => {}
                Edge::Close(n) if n == id => {}
                Edge::Open(n) => {
                    let node = self.node(n);
                    if let Some(text) = node.text() {
                        escape_into(&mut out, text, false);
                    } else {
                        out.push('<');
                        out.push_str(&node.tag);
                        for (name, value) in &node.attrs {
                            out.push(' ');
                            out.push_str(name);
                            out.push_str("=\"");
                            escape_into(&mut out, value, true);
                            out.push('"');
                        }
                        out.push('>');
                    }
                }
                Edge::Close(n) => {
                    let tag = self.tag(n);
                    if !VOID_TAGS.contains(&tag) {
                        out.push_str("</");
                        out.push_str(tag);
                        out.push('>');
                    }
                }
            }
        }
        out
    }

    /// Unlinks `id` and its subtree from the tree.
    pub fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != id);
        }
    }

    /// Detaches every `script`, `style`, `a`, `iframe` and `noscript` subtree.
    ///
    /// Anchors go too, so link text never reaches scoring.
    pub fn remove_noise(&mut self) {
        let noisy: Vec<NodeId> = self
            .traverse(self.root)
            .filter_map(|edge| match edge {
                Edge::Open(n) if NOISE_TAGS.contains(&self.tag(n)) => Some(n),
                _ => None,
            })
            .collect();
        // Nested noise goes with its ancestor; detaching it again is harmless.
        for id in &noisy {
            self.detach(*id);
        }
        tracing::trace!(removed = noisy.len(), "noise elements detached");
    }
}

fn escape_into(out: &mut String, text: &str, attr_mode: bool) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{A0}' => out.push_str("&nbsp;"),
            '"' if attr_mode => out.push_str("&quot;"),
            '<' if !attr_mode => out.push_str("&lt;"),
            '>' if !attr_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(doc: &Document, tag: &str) -> NodeId {
        doc.elements_by_tag(tag)[0]
    }

    #[test]
    fn test_parse_builds_single_rooted_tree() {
        let doc = Document::parse("<div><p>one</p><p>two</p></div>").unwrap();
        assert_eq!(doc.tag(doc.root()), "html");
        assert!(doc.parent(doc.root()).is_none());
        assert!(doc.body().is_some());

        let div = first(&doc, "div");
        let ps = doc.elements_by_tag("p");
        assert_eq!(ps.len(), 2);
        for p in ps {
            assert_eq!(doc.parent(p), Some(div));
        }
    }

    #[test]
    fn test_every_child_points_back_to_its_parent() {
        let doc = Document::parse(
            "<article><h1>T</h1><section><p>a<b>b</b></p></section></article>",
        )
        .unwrap();
        for edge in doc.traverse(doc.root()) {
            if let Edge::Open(n) = edge {
                for &c in doc.node(n).children() {
                    assert_eq!(doc.parent(c), Some(n));
                }
            }
        }
    }

    #[test]
    fn test_attributes_and_classes() {
        let doc = Document::parse(r#"<div class=" a  b " id="x" itemprop="articleBody"></div>"#)
            .unwrap();
        let div = first(&doc, "div");
        let node = doc.node(div);
        assert_eq!(node.attr("id"), Some("x"));
        assert_eq!(node.attr("itemprop"), Some("articleBody"));
        assert_eq!(node.classes().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(node.attr("missing"), None);
    }

    #[test]
    fn test_text_content_in_document_order() {
        let doc = Document::parse("<div>Hello <b>big</b> world<!-- hidden --></div>").unwrap();
        assert_eq!(doc.text_content(first(&doc, "div")), "Hello big world");
    }

    #[test]
    fn test_inner_html_serializes_children_only() {
        let doc = Document::parse(r#"<div><p class="x">a &amp; b</p><br><img src="i.png"></div>"#)
            .unwrap();
        assert_eq!(
            doc.inner_html(first(&doc, "div")),
            r#"<p class="x">a &amp; b</p><br><img src="i.png">"#
        );
    }

    #[test]
    fn test_remove_noise_detaches_subtrees() {
        let mut doc = Document::parse(
            "<div>keep<script>var x;</script><a href='#'>link <b>bold</b></a>\
             <style>p{}</style><iframe></iframe><noscript>ns</noscript></div>",
        )
        .unwrap();
        doc.remove_noise();
        let div = first(&doc, "div");
        assert_eq!(doc.text_content(div), "keep");
        for tag in NOISE_TAGS {
            assert!(doc.elements_by_tag(tag).is_empty(), "{tag} survived");
        }
        assert!(doc.elements_by_tag("b").is_empty());
    }

    #[test]
    fn test_count_descendants_excludes_self() {
        let doc = Document::parse("<div><div><p>a</p></div><p>b</p></div>").unwrap();
        let outer = first(&doc, "div");
        assert_eq!(doc.count_descendants(outer, &["div"]), 1);
        assert_eq!(doc.count_descendants(outer, &["p"]), 2);
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let html = format!("{}text{}", "<div>".repeat(5_000), "</div>".repeat(5_000));
        let doc = Document::parse(&html).unwrap();
        assert_eq!(doc.text_content(doc.root()), "text");
    }
}
