//! Search-result kinds and snippet overlay.
//!
//! Upstream search results come in several shapes. Each is reduced to a
//! uniform [`Snippet`] by an exhaustive match, and only simple link results
//! have their description replaced with extracted page content.

use std::fmt::Display;

use serde::Serialize;
use url::Url;

use crate::options::Options;
use crate::text::truncate_chars;

/// Base of the search URL used for results that have no page of their own.
const SEARCH_BASE: &str = "https://www.google.com/search";

/// A label/value row of a knowledge panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub label: String,
    pub value: String,
}

/// One result from the upstream search provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// A plain link to a third-party page.
    Organic {
        title: String,
        url: String,
        description: String,
    },
    /// A dictionary definition panel.
    Dictionary {
        word: String,
        phonetic: String,
        meanings: Vec<String>,
    },
    /// A local time panel.
    Time {
        time: String,
        time_in_words: String,
        location: String,
    },
    /// An entity knowledge panel.
    KnowledgePanel {
        title: String,
        description: String,
        label: String,
        metadata: Vec<PanelEntry>,
    },
}

/// Uniform output record for every result kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SearchResult {
    /// Only organic results point at a page worth extracting.
    #[must_use]
    pub fn wants_page_content(&self) -> bool {
        matches!(self, Self::Organic { .. })
    }

    /// The page to fetch for this result, if any.
    #[must_use]
    pub fn page_url(&self) -> Option<&str> {
        match self {
            Self::Organic { url, .. } => Some(url.as_str()),
            Self::Dictionary { .. } | Self::Time { .. } | Self::KnowledgePanel { .. } => None,
        }
    }

    /// Reduces the result to a snippet; panels link back to a search for `keyword`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use snippet_extract::overlay::SearchResult;
    ///
    /// let result = SearchResult::Time {
    ///     time: "10:42".into(),
    ///     time_in_words: "Sunday, October 18".into(),
    ///     location: "Time in Oslo".into(),
    /// };
    /// let snippet = result.to_snippet("time oslo");
    /// assert_eq!(snippet.title, "time oslo");
    /// assert_eq!(snippet.url, "https://www.google.com/search?q=time+oslo");
    /// assert_eq!(snippet.description, "10:42 Sunday, October 18 Time in Oslo");
    /// ```
    #[must_use]
    pub fn to_snippet(&self, keyword: &str) -> Snippet {
        match self {
            Self::Organic {
                title,
                url,
                description,
            } => Snippet {
                title: title.clone(),
                url: url.clone(),
                description: description.clone(),
            },
            Self::Dictionary {
                word,
                phonetic,
                meanings,
            } => Snippet {
                title: word.clone(),
                url: search_url(keyword),
                description: format!("{phonetic} {}", meanings.join(" ")),
            },
            Self::Time {
                time,
                time_in_words,
                location,
            } => Snippet {
                title: keyword.to_string(),
                url: search_url(keyword),
                description: format!("{time} {time_in_words} {location}"),
            },
            Self::KnowledgePanel {
                title,
                description,
                label,
                metadata,
            } => {
                let rows: Vec<String> = metadata
                    .iter()
                    .map(|m| format!("{}: {}", m.label, m.value))
                    .collect();
                Snippet {
                    title: title.clone(),
                    url: search_url(keyword),
                    description: [description.as_str(), label.as_str(), rows.join("\n").as_str()].join("\n"),
                }
            }
        }
    }
}

fn search_url(keyword: &str) -> String {
    match Url::parse_with_params(SEARCH_BASE, &[("q", keyword)]) {
        Ok(url) => url.into(),
        Err(_) => SEARCH_BASE.to_string(),
    }
}

/// Replaces the snippet description with page paragraphs cut to `budget`
/// characters. An empty paragraph list keeps the upstream description.
pub fn overlay_description(snippet: &mut Snippet, paragraphs: &[String], budget: usize) {
    if paragraphs.is_empty() {
        return;
    }
    snippet.description = truncate_chars(paragraphs, budget);
}

/// Runs extraction on a fetch outcome, downgrading any failure to an empty
/// paragraph list so one bad page never sinks a batch.
pub fn extract_or_empty<E: Display>(page: std::result::Result<Vec<u8>, E>, options: &Options) -> Vec<String> {
    let bytes = match page {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = %err, "page fetch failed; using upstream description");
            return Vec::new();
        }
    };
    match crate::extract_main_content_with_options(&bytes, options) {
        Ok(result) => result.paragraphs,
        Err(err) => {
            tracing::warn!(error = %err, "page extraction failed; using upstream description");
            Vec::new()
        }
    }
}

/// Builds snippets for a batch of results.
///
/// `fetch` is called once per organic result with its URL; its outcome is
/// extracted and overlaid. Other kinds are never fetched.
pub fn build_snippets<F, E>(results: &[SearchResult], keyword: &str, options: &Options, mut fetch: F) -> Vec<Snippet>
where
    F: FnMut(&str) -> std::result::Result<Vec<u8>, E>,
    E: Display,
{
    results
        .iter()
        .map(|result| {
            let mut snippet = result.to_snippet(keyword);
            if let Some(url) = result.page_url() {
                let paragraphs = extract_or_empty(fetch(url), options);
                overlay_description(&mut snippet, &paragraphs, options.snippet_budget);
            }
            snippet
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organic() -> SearchResult {
        SearchResult::Organic {
            title: "Levee plans".into(),
            url: "https://example.com/levee".into(),
            description: "Upstream description".into(),
        }
    }

    #[test]
    fn only_organic_wants_content() {
        assert!(organic().wants_page_content());
        let dict = SearchResult::Dictionary {
            word: "levee".into(),
            phonetic: "/ˈlɛvi/".into(),
            meanings: vec!["an embankment".into(), "a reception".into()],
        };
        assert!(!dict.wants_page_content());
        assert_eq!(dict.page_url(), None);
    }

    #[test]
    fn dictionary_snippet_joins_meanings() {
        let dict = SearchResult::Dictionary {
            word: "levee".into(),
            phonetic: "/ˈlɛvi/".into(),
            meanings: vec!["an embankment".into(), "a reception".into()],
        };
        let s = dict.to_snippet("levee meaning");
        assert_eq!(s.title, "levee");
        assert_eq!(s.url, "https://www.google.com/search?q=levee+meaning");
        assert_eq!(s.description, "/ˈlɛvi/ an embankment a reception");
    }

    #[test]
    fn knowledge_panel_lists_metadata_rows() {
        let panel = SearchResult::KnowledgePanel {
            title: "Oslo".into(),
            description: "Capital of Norway".into(),
            label: "City".into(),
            metadata: vec![
                PanelEntry { label: "Population".into(), value: "709,000".into() },
                PanelEntry { label: "Area".into(), value: "454 km²".into() },
            ],
        };
        let s = panel.to_snippet("oslo & norway");
        assert_eq!(s.url, "https://www.google.com/search?q=oslo+%26+norway");
        assert_eq!(s.description, "Capital of Norway\nCity\nPopulation: 709,000\nArea: 454 km²");
    }

    #[test]
    fn overlay_keeps_upstream_when_nothing_extracted() {
        let mut s = organic().to_snippet("levee");
        overlay_description(&mut s, &[], 300);
        assert_eq!(s.description, "Upstream description");

        overlay_description(&mut s, &["Fresh page text.".to_string()], 300);
        assert_eq!(s.description, "Fresh page text.");
    }

    #[test]
    fn failed_fetch_downgrades_to_empty() {
        let out = extract_or_empty::<String>(Err("timed out".into()), &Options::default());
        assert!(out.is_empty());
    }

    #[test]
    fn build_snippets_fetches_only_organic() {
        let results = vec![
            organic(),
            SearchResult::Time {
                time: "10:42".into(),
                time_in_words: "Sunday".into(),
                location: "Oslo".into(),
            },
        ];
        let mut fetched = Vec::new();
        let snippets = build_snippets(&results, "levee", &Options::default(), |url| {
            fetched.push(url.to_string());
            Err::<Vec<u8>, _>("offline")
        });
        assert_eq!(fetched, vec!["https://example.com/levee"]);
        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].description, "Upstream description");
        assert_eq!(snippets[1].title, "levee");
    }
}
