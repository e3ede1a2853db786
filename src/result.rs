//! Result types for extraction output.

use serde::Serialize;

/// Description of the node chosen as main content.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Winner {
    /// Tag name of the selected element.
    pub tag: String,

    /// `class` attribute, if present.
    pub class: Option<String>,

    /// `id` attribute, if present.
    pub id: Option<String>,

    /// Content score the locator assigned to it.
    pub score: f64,
}

/// Result of main-content extraction from one HTML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExtractResult {
    /// Quality-filtered paragraphs in document order. May be empty.
    pub paragraphs: Vec<String>,

    /// The selected node; `None` when the locator fell back to the bare
    /// body with a zero score.
    pub winner: Option<Winner>,
}

impl ExtractResult {
    /// True when no paragraph survived filtering.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
