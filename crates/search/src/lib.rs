//! Text matching for mural lookup.
//!
//! This crate provides:
//! - Multi-level relevance scoring
//! - Levenshtein edit distance
//! - Unicode-aware word splitting, so Assamese titles match by word too

mod relevance;
mod fuzzy;
mod error;

pub use relevance::{calculate_relevance, RelevanceScore};
pub use fuzzy::{fuzzy_match, levenshtein_distance};
pub use error::{SearchError, Result};

/// Search result with relevance score.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SearchResult<T> {
    /// The matched item
    pub item: T,
    /// Relevance score (higher is better)
    pub score: u32,
}

/// Score every item against `query` and return the matches, best first.
///
/// Items scoring below `min_score` are dropped. Equal scores keep input order.
///
/// # Example
/// ```
/// use muralmap_search::{search, RelevanceScore};
///
/// let names = ["Mayabini Mural", "The Discography Wall", "Rockstar Zubeen da"];
/// let hits = search(&names, "discography", RelevanceScore::Contains, |n| *n).unwrap();
/// assert_eq!(*hits[0].item, "The Discography Wall");
/// ```
pub fn search<'a, T, F>(items: &'a [T], query: &str, min_score: RelevanceScore, key: F) -> Result<Vec<SearchResult<&'a T>>>
where
    F: Fn(&T) -> &str,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let mut results: Vec<SearchResult<&T>> = items
        .iter()
        .map(|item| SearchResult {
            score: calculate_relevance(key(item), query),
            item,
        })
        .filter(|r| r.score >= min_score as u32 && r.score > 0)
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(results)
}

/// The single best match for `query`, if any reaches `min_score`.
pub fn best_match<'a, T, F>(items: &'a [T], query: &str, min_score: RelevanceScore, key: F) -> Result<Option<SearchResult<&'a T>>>
where
    F: Fn(&T) -> &str,
{
    Ok(search(items, query, min_score, key)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 4] = [
        "Zubeen Da Mural",
        "Mayabini Mural",
        "The Gaze of the Bard: Zubeen Da",
        "মন যায় mural",
    ];

    #[test]
    fn test_search_orders_by_score() {
        let hits = search(&NAMES, "mayabini mural", RelevanceScore::Fuzzy, |n| *n).unwrap();
        assert_eq!(*hits[0].item, "Mayabini Mural");
        assert_eq!(hits[0].score, RelevanceScore::Exact as u32);
    }

    #[test]
    fn test_search_respects_min_score() {
        let hits = search(&NAMES, "bard", RelevanceScore::WordBoundary, |n| *n).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(*hits[0].item, "The Gaze of the Bard: Zubeen Da");
    }

    #[test]
    fn test_search_unicode_words() {
        let hit = best_match(&NAMES, "যায়", RelevanceScore::WordBoundary, |n| *n).unwrap();
        assert_eq!(hit.map(|h| *h.item), Some("মন যায় mural"));
    }

    #[test]
    fn test_equal_scores_keep_order() {
        let hits = search(&NAMES, "mural", RelevanceScore::WordBoundary, |n| *n).unwrap();
        let items: Vec<_> = hits.iter().map(|h| *h.item).collect();
        assert_eq!(items, vec!["Zubeen Da Mural", "Mayabini Mural", "মন যায় mural"]);
    }

    #[test]
    fn test_empty_query_is_error() {
        assert_eq!(search(&NAMES, "   ", RelevanceScore::Fuzzy, |n| *n), Err(SearchError::EmptyQuery));
    }

    #[test]
    fn test_no_match() {
        let hit = best_match(&NAMES, "tezpur", RelevanceScore::Contains, |n| *n).unwrap();
        assert!(hit.is_none());
    }
}
