//! Relevance scoring for search results.

use unicode_segmentation::UnicodeSegmentation;

/// Relevance score levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RelevanceScore {
    /// No match
    None = 0,
    /// Fuzzy match
    Fuzzy = 10,
    /// Contains substring
    Contains = 20,
    /// Word boundary match
    WordBoundary = 30,
    /// Starts with query
    StartsWith = 40,
    /// Exact match
    Exact = 50,
}

/// Calculate relevance score for a text against a query.
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// Relevance score (higher is better)
pub fn calculate_relevance(text: &str, query: &str) -> u32 {
    let text_lower = text.trim().to_lowercase();
    let query_lower = query.trim().to_lowercase();

    if query_lower.is_empty() {
        return RelevanceScore::None as u32;
    }

    if text_lower == query_lower {
        return RelevanceScore::Exact as u32;
    }

    if text_lower.starts_with(&query_lower) {
        return RelevanceScore::StartsWith as u32;
    }

    if text_lower.unicode_words().any(|word| word.starts_with(&query_lower)) {
        return RelevanceScore::WordBoundary as u32;
    }

    if text_lower.contains(&query_lower) {
        return RelevanceScore::Contains as u32;
    }

    if crate::fuzzy_match(&text_lower, &query_lower) {
        return RelevanceScore::Fuzzy as u32;
    }

    RelevanceScore::None as u32
}
