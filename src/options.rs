//! Configuration options for content extraction.
//!
//! `Options` carries the thresholds used by the locator and segmenter;
//! `ScoringWeights` carries the coefficients of the content score so they
//! can be tuned without touching traversal code.

/// Coefficients and caps of the content score.
///
/// The total is
/// `text_density·td + cjk·cjk_ratio + punctuation·pd − link_density·ld
///  + semantic_bonus + headings + paragraphs − space_ratio·sr`.
///
/// # Example
///
/// ```rust
/// use snippet_extract::ScoringWeights;
///
/// let weights = ScoringWeights {
///     cjk_ratio: 1.0,
///     ..ScoringWeights::default()
/// };
/// assert_eq!(weights.text_density, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Multiplier of text length over whitespace-stripped markup length.
    ///
    /// Default: `3.0`
    pub text_density: f64,

    /// Multiplier of the CJK ideograph fraction.
    ///
    /// Default: `0.5`
    pub cjk_ratio: f64,

    /// Multiplier of the sentence-terminal punctuation fraction.
    ///
    /// Default: `2.0`
    pub punctuation_density: f64,

    /// Penalty multiplier of anchor text over total text.
    ///
    /// Default: `2.0`
    pub link_density: f64,

    /// Flat bonus for `article`, `main` and `content` elements.
    ///
    /// Default: `0.2`
    pub semantic_bonus: f64,

    /// Bonus per descendant `h1`-`h3`.
    ///
    /// Default: `0.1`
    pub heading_step: f64,

    /// Upper bound of the heading term.
    ///
    /// Default: `0.3`
    pub heading_cap: f64,

    /// Bonus per descendant `p`.
    ///
    /// Default: `0.05`
    pub paragraph_step: f64,

    /// Upper bound of the paragraph term.
    ///
    /// Default: `0.2`
    pub paragraph_cap: f64,

    /// Penalty multiplier of wide whitespace runs over text length.
    ///
    /// Default: `2.0`
    pub space_ratio: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            text_density: 3.0,
            cjk_ratio: 0.5,
            punctuation_density: 2.0,
            link_density: 2.0,
            semantic_bonus: 0.2,
            heading_step: 0.1,
            heading_cap: 0.3,
            paragraph_step: 0.05,
            paragraph_cap: 0.2,
            space_ratio: 2.0,
        }
    }
}

/// Configuration options for content extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use snippet_extract::Options;
///
/// let mut options = Options::default();
/// options.boilerplate_phrases.push("Lire dans l'application".to_string());
/// assert_eq!(options.min_paragraph_len, 80);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Score coefficients.
    pub weights: ScoringWeights,

    /// Blocks with less trimmed text than this (characters) score zero.
    ///
    /// Default: `50`
    pub min_text_len: usize,

    /// The full-tree scan runs only when the selector pass scored below this.
    ///
    /// Default: `1.0`
    pub fallback_threshold: f64,

    /// A parent replaces the current winner only when it scores strictly
    /// more than `best × promotion_factor`.
    ///
    /// Default: `1.1`
    pub promotion_factor: f64,

    /// Raw paragraph candidates shorter than this (characters) are dropped.
    ///
    /// Default: `50`
    pub min_candidate_len: usize,

    /// Paragraphs must be strictly longer than this (characters) to be kept.
    ///
    /// Default: `80`
    pub min_paragraph_len: usize,

    /// Phrases deleted from the text before segmentation.
    ///
    /// Default: a "copy this content" and an "open in app" phrase.
    pub boilerplate_phrases: Vec<String>,

    /// Character budget when paragraphs are overlaid onto a snippet.
    ///
    /// Default: `300`
    pub snippet_budget: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            min_text_len: 50,
            fallback_threshold: 1.0,
            promotion_factor: 1.1,
            min_candidate_len: 50,
            min_paragraph_len: 80,
            boilerplate_phrases: vec!["复制本文内容".to_string(), "在App中打开".to_string()],
            snippet_budget: 300,
        }
    }
}
