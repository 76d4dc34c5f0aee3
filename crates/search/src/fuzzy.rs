//! Fuzzy matching algorithms.

/// Calculate Levenshtein edit distance between two strings.
///
/// Operates on `char`s, so multi-byte scripts count one edit per character.
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows are enough
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Check if text contains all characters of query in order.
///
/// The characters need not be consecutive.
pub fn fuzzy_match(text: &str, query: &str) -> bool {
    let mut text_chars = text.chars();
    query.chars().all(|query_char| text_chars.any(|c| c == query_char))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("jorhat", "jorhat"), 0);
    }

    #[test]
    fn test_levenshtein_substitution() {
        assert_eq!(levenshtein_distance("laximpur", "lakhimpur"), 2);
    }

    #[test]
    fn test_levenshtein_insert_and_delete() {
        assert_eq!(levenshtein_distance("tezpr", "tezpur"), 1);
        assert_eq!(levenshtein_distance("dhemajii", "dhemaji"), 1);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein_distance("", "nazira"), 6);
        assert_eq!(levenshtein_distance("nazira", ""), 6);
    }

    #[test]
    fn test_fuzzy_match_true() {
        assert!(fuzzy_match("north lakhimpur", "nlkp"));
    }

    #[test]
    fn test_fuzzy_match_false() {
        assert!(!fuzzy_match("jorhat", "thor"));
    }

    #[test]
    fn test_fuzzy_match_exact() {
        assert!(fuzzy_match("tezpur", "tezpur"));
    }

    proptest! {
        #[test]
        fn prop_levenshtein_symmetric(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            prop_assert_eq!(levenshtein_distance(&a, &b), levenshtein_distance(&b, &a));
        }
    }
}
