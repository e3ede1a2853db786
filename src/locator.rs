//! Main content location.
//!
//! Picks the single node most likely to hold the readable content:
//! a pass over the candidate selectors, a full-tree fallback when nothing
//! scored well, then a climb toward the body while parents clearly beat
//! the current winner.

use crate::dom::{Document, NodeId};
use crate::options::Options;
use crate::scoring::score;
use crate::selector::{select_all, select_candidates, CANDIDATE_RULES};

/// The winning node and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    pub node: NodeId,
    pub score: f64,
}

impl Located {
    /// Replaces the current best when `candidate` scores strictly higher.
    fn offer(&mut self, doc: &Document, candidate: NodeId, options: &Options) {
        let s = score(doc, candidate, options);
        tracing::trace!(node = candidate.index(), tag = doc.tag(candidate), score = s, "scored");
        if s > self.score {
            self.node = candidate;
            self.score = s;
        }
    }
}

/// Finds the main content node. Never fails: the worst case is the body
/// (or the root, for a body-less tree) with score `0.0`.
#[must_use]
pub fn locate(doc: &Document, options: &Options) -> Located {
    let body = doc.body_or_root();
    let mut best = Located {
        node: body,
        score: 0.0,
    };

    for candidate in select_candidates(doc, CANDIDATE_RULES) {
        best.offer(doc, candidate, options);
    }
    tracing::debug!(node = best.node.index(), score = best.score, "selector pass done");

    if best.score < options.fallback_threshold {
        for candidate in select_all(doc) {
            best.offer(doc, candidate, options);
        }
        tracing::debug!(node = best.node.index(), score = best.score, "fallback pass done");
    }

    promote(doc, best, body, options)
}

/// Climbs from the winner toward `body`, stopping at the first parent that
/// does not beat `best × promotion_factor`. Never leaves the body.
fn promote(doc: &Document, mut best: Located, body: NodeId, options: &Options) -> Located {
    while best.node != body {
        let Some(parent) = doc.parent(best.node) else {
            break;
        };
        if parent == body || parent == doc.root() {
            break;
        }
        let parent_score = score(doc, parent, options);
        if parent_score <= best.score * options.promotion_factor {
            break;
        }
        tracing::debug!(
            from = best.node.index(),
            to = parent.index(),
            score = parent_score,
            "promoted to parent"
        );
        best = Located {
            node: parent,
            score: parent_score,
        };
    }
    best
}
