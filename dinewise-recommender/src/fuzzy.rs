//! Token-order-insensitive fuzzy matching of free text against a vocabulary.
//!
//! Both sides are reduced to lowercase ASCII word tokens, sorted and joined,
//! then compared with the indel similarity ratio: twice the longest common
//! subsequence divided by the combined length, scaled to `0..=100`.

use log::warn;

/// Minimum score for resolving a city, or flagging a category as city-like.
pub const SINGLE_MATCH_THRESHOLD: u8 = 75;
/// Minimum score for a dataset category to match the requested one.
pub const CATEGORY_CUTOFF: u8 = 65;
/// Maximum number of dataset categories accepted for one request.
pub const CATEGORY_LIMIT: usize = 3;

/// A candidate paired with its similarity to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch<'a> {
    /// The matching candidate, as supplied.
    pub candidate: &'a str,
    /// Similarity in `0..=100`.
    pub score: u8,
}

/// Similarity of `left` and `right` in `0..=100`, ignoring token order,
/// case and punctuation.
///
/// Text that reduces to nothing scores `0` against everything. Scores that
/// fall exactly halfway round to the even neighbour, so `12.5` becomes `12`
/// and `37.5` becomes `38`.
///
/// # Examples
/// ```
/// use dinewise_recommender::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("New York", "york new"), 100);
/// assert_eq!(token_sort_ratio("Santa Barbra", "santa barbara"), 96);
/// assert_eq!(token_sort_ratio("!!!", "anything"), 0);
/// ```
#[must_use]
pub fn token_sort_ratio(left: &str, right: &str) -> u8 {
    SortedTokens::new(left).ratio(&SortedTokens::new(right))
}

/// Resolve `query` to its single best candidate.
///
/// Ties go to the candidate seen first. Returns `None` only when there are
/// no candidates; callers apply their own acceptance threshold.
pub fn resolve_single<'a, I, S>(query: &str, candidates: I) -> Option<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let query = SortedTokens::for_query(query);
    candidates
        .into_iter()
        .map(|candidate| score_candidate(&query, candidate.as_ref()))
        .fold(None, |best: Option<FuzzyMatch<'a>>, current| match best {
            Some(leader) if leader.score >= current.score => Some(leader),
            _ => Some(current),
        })
}

/// Resolve `query` to at most `limit` candidates scoring at least `cutoff`.
///
/// Matches are ordered by descending score; equal scores keep candidate
/// order.
pub fn resolve_top<'a, I, S>(
    query: &str,
    candidates: I,
    cutoff: u8,
    limit: usize,
) -> Vec<FuzzyMatch<'a>>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<str> + ?Sized + 'a,
{
    let query = SortedTokens::for_query(query);
    let mut matches: Vec<FuzzyMatch<'a>> = candidates
        .into_iter()
        .map(|candidate| score_candidate(&query, candidate.as_ref()))
        .filter(|found| found.score >= cutoff)
        .collect();
    matches.sort_by(|left, right| right.score.cmp(&left.score));
    matches.truncate(limit);
    matches
}

fn score_candidate<'a>(query: &SortedTokens, candidate: &'a str) -> FuzzyMatch<'a> {
    FuzzyMatch {
        candidate,
        score: query.ratio(&SortedTokens::new(candidate)),
    }
}

/// Normalised text: ASCII word tokens, lowercased, sorted and space-joined.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortedTokens(String);

impl SortedTokens {
    fn new(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .filter(char::is_ascii)
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || ch == '_' {
                    ch.to_ascii_lowercase()
                } else {
                    ' '
                }
            })
            .collect();
        let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
        tokens.sort_unstable();
        Self(tokens.join(" "))
    }

    fn for_query(text: &str) -> Self {
        let tokens = Self::new(text);
        if tokens.0.is_empty() {
            warn!("query {text:?} has no comparable characters; every candidate scores 0");
        }
        tokens
    }

    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "exact rounding of a rational ratio"
    )]
    fn ratio(&self, other: &Self) -> u8 {
        let total = self.0.len() + other.0.len();
        if self.0.is_empty() || other.0.is_empty() {
            return 0;
        }
        let common = longest_common_subsequence(self.0.as_bytes(), other.0.as_bytes());
        let numerator = 200 * common;
        let (quotient, remainder) = (numerator / total, numerator % total);
        // Ties round to the even neighbour.
        let scaled = match (2 * remainder).cmp(&total) {
            std::cmp::Ordering::Less => quotient,
            std::cmp::Ordering::Greater => quotient + 1,
            std::cmp::Ordering::Equal => quotient + quotient % 2,
        };
        u8::try_from(scaled).unwrap_or(100)
    }
}

fn longest_common_subsequence(left: &[u8], right: &[u8]) -> usize {
    let mut row = vec![0_usize; right.len()];
    for &byte in left {
        let mut diagonal = 0;
        let mut previous = 0;
        for (cell, &other) in row.iter_mut().zip(right) {
            let above = *cell;
            let value = if byte == other {
                diagonal + 1
            } else {
                above.max(previous)
            };
            diagonal = above;
            *cell = value;
            previous = value;
        }
    }
    row.last().copied().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("new york", "new york", 100)]
    #[case("New York", "york new", 100)]
    #[case("Santa Barbra", "santa barbara", 96)]
    #[case("philly", "philadelphia", 56)]
    #[case("Sushi", "Sushi Bars", 67)]
    #[case("sushi bars", "santa barbara", 43)]
    #[case("Pizza", "Italian", 33)]
    #[case("Italian", "Japanese", 40)]
    #[case("abc", "", 0)]
    #[case("!!!", "abc", 0)]
    fn scores_known_pairs(#[case] left: &str, #[case] right: &str, #[case] expected: u8) {
        assert_eq!(token_sort_ratio(left, right), expected);
    }

    #[rstest]
    #[case("a", "abcdefghijklmno", 12)]
    #[case("abc", "abcdefghijklm", 38)]
    fn halfway_scores_round_to_even(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: u8,
    ) {
        assert_eq!(token_sort_ratio(left, right), expected);
    }

    #[rstest]
    fn drops_non_ascii_and_punctuation() {
        assert_eq!(
            SortedTokens::new("  Café-Bar, São Paulo!! "),
            SortedTokens("bar caf paulo so".to_owned())
        );
    }

    #[rstest]
    fn subsequence_lengths() {
        assert_eq!(longest_common_subsequence(b"abcde", b"ace"), 3);
        assert_eq!(longest_common_subsequence(b"abc", b"def"), 0);
        assert_eq!(longest_common_subsequence(b"", b"abc"), 0);
    }

    #[rstest]
    fn single_resolution_prefers_the_first_of_equal_scores() {
        let cities = ["reno", "Reno", "boise"];
        let best = resolve_single("RENO", &cities);
        assert_eq!(
            best,
            Some(FuzzyMatch {
                candidate: "reno",
                score: 100
            })
        );
    }

    #[rstest]
    fn single_resolution_without_candidates_is_none() {
        let cities: [&str; 0] = [];
        assert_eq!(resolve_single("reno", &cities), None);
    }

    #[rstest]
    fn single_resolution_still_reports_low_scores() {
        let cities = vec!["philadelphia".to_owned(), "tucson".to_owned()];
        let best = resolve_single("atlantis", &cities);
        assert_eq!(
            best,
            Some(FuzzyMatch {
                candidate: "philadelphia",
                score: 30
            })
        );
    }

    #[rstest]
    fn top_resolution_applies_cutoff_order_and_limit() {
        let categories = [
            "Italian",
            "Sushi Bars",
            "Sushi",
            "Bars Sushi",
            "Japanese",
            "sushi bars",
        ];
        let matches = resolve_top("Sushi Bars", &categories, CATEGORY_CUTOFF, CATEGORY_LIMIT);
        let found: Vec<_> = matches.iter().map(|m| (m.candidate, m.score)).collect();
        assert_eq!(
            found,
            [("Sushi Bars", 100), ("Bars Sushi", 100), ("sushi bars", 100)]
        );
    }

    #[rstest]
    fn top_resolution_can_be_empty() {
        let categories = ["Italian", "Japanese"];
        assert!(resolve_top("Pizza", &categories, CATEGORY_CUTOFF, CATEGORY_LIMIT).is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn ratio_is_symmetric_and_bounded(left in ".{0,24}", right in ".{0,24}") {
            let forward = token_sort_ratio(&left, &right);
            prop_assert_eq!(forward, token_sort_ratio(&right, &left));
            prop_assert!(forward <= 100);
        }

        #[test]
        fn reordered_words_match_exactly(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
            let forward = words.join(" ");
            let mut reversed = words.clone();
            reversed.reverse();
            prop_assert_eq!(token_sort_ratio(&forward, &reversed.join(", ")), 100);
        }
    }
}
