//! Fuzzy matching algorithms and implementations.
//!
//! The combobox ranks names with [`ranking::RankingMatcher`], a tiered matcher that
//! prefers exact and prefix matches over substring, acronym and in-order character
//! matches.

/// Tiered ranking matcher
pub mod ranking;
mod util;

pub(crate) type IndexType = usize;
/// Score of a match, higher is better
pub type ScoreType = i64;

/// Character indices of the matched characters in the choice
pub type MatchIndices = Vec<IndexType>;

/// Trait for fuzzy matching text patterns against choices
pub trait FuzzyMatcher: Send + Sync {
    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)>;

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }
}
