//! Tiered ranking of a query against a name.
//!
//! Both texts are compared case-insensitively with diacritics removed. A match falls
//! in exactly one [`MatchTier`]; the score is the tier scaled by [`TIER_SCALE`], and
//! in-order character matches get an extra closeness bonus of `TIER_SCALE / spread`.

use super::util::{Folded, find};
use super::{FuzzyMatcher, MatchIndices, ScoreType};

/// Distance between two consecutive tiers in a score
pub const TIER_SCALE: ScoreType = 1_000_000;

/// How well a query matched, worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchTier {
    /// All query characters appear in order
    Matches = 1,
    /// The query is part of the initials of the words
    Acronym = 2,
    /// The query appears anywhere
    Contains = 3,
    /// A word (after a space) starts with the query
    WordStartsWith = 4,
    /// The name starts with the query
    StartsWith = 5,
    /// Equal, ignoring case and accents
    Equal = 6,
    /// Byte-for-byte equal
    CaseSensitiveEqual = 7,
}

impl MatchTier {
    /// Base score of the tier
    pub fn score(self) -> ScoreType {
        self as ScoreType * TIER_SCALE
    }
}

/// Detailed outcome of ranking a choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked {
    /// Tier the match fell into
    pub tier: MatchTier,
    /// Score, comparable across choices for the same query
    pub score: ScoreType,
    /// Matched char indices in the choice
    pub indices: MatchIndices,
}

/// Matcher ranking choices by [`MatchTier`]
#[derive(Debug, Default, Clone, Copy)]
pub struct RankingMatcher;

impl RankingMatcher {
    /// Ranks `choice` against a non-empty `pattern`, `None` when they do not match
    pub fn rank(&self, choice: &str, pattern: &str) -> Option<Ranked> {
        let name = Folded::new(choice);
        let query = Folded::new(pattern);
        let qlen = query.len();

        if qlen == 0 || qlen > name.len() {
            return None;
        }

        let all = || name.original_indices(0..name.len());
        let span = |start: usize| name.original_indices(start..start + qlen);

        if choice == pattern {
            return Some(Ranked::new(MatchTier::CaseSensitiveEqual, all()));
        }
        if name.chars == query.chars {
            return Some(Ranked::new(MatchTier::Equal, all()));
        }
        if name.chars.starts_with(&query.chars) {
            return Some(Ranked::new(MatchTier::StartsWith, span(0)));
        }

        let mut word_start = Vec::with_capacity(qlen + 1);
        word_start.push(' ');
        word_start.extend_from_slice(&query.chars);
        if let Some(pos) = find(&name.chars, &word_start) {
            return Some(Ranked::new(MatchTier::WordStartsWith, span(pos + 1)));
        }
        if let Some(pos) = find(&name.chars, &query.chars) {
            return Some(Ranked::new(MatchTier::Contains, span(pos)));
        }

        // a single character that is not contained cannot match otherwise
        if qlen == 1 {
            return None;
        }

        let initials = acronym(&name.chars);
        let letters: Vec<char> = initials.iter().map(|&i| name.chars[i]).collect();
        if let Some(pos) = find(&letters, &query.chars) {
            let indices = name.original_indices(initials[pos..pos + qlen].iter().copied());
            return Some(Ranked::new(MatchTier::Acronym, indices));
        }

        let positions = in_order(&name.chars, &query.chars)?;
        let spread = (positions[positions.len() - 1] - positions[0]) as ScoreType;
        let score = MatchTier::Matches.score() + TIER_SCALE / spread.max(1);
        trace!("in-order match of {pattern:?} in {choice:?}, spread {spread}");
        Some(Ranked {
            tier: MatchTier::Matches,
            score,
            indices: name.original_indices(positions),
        })
    }
}

impl Ranked {
    fn new(tier: MatchTier, indices: MatchIndices) -> Self {
        Self {
            tier,
            score: tier.score(),
            indices,
        }
    }
}

impl FuzzyMatcher for RankingMatcher {
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        self.rank(choice, pattern).map(|r| (r.score, r.indices))
    }
}

/// Positions of the first letter of each word, words being split on spaces and hyphens
fn acronym(chars: &[char]) -> Vec<usize> {
    let is_sep = |c: char| c == ' ' || c == '-';
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| !is_sep(c) && (i == 0 || is_sep(chars[i - 1])))
        .map(|(i, _)| i)
        .collect()
}

/// Leftmost positions at which every query char is found in order
fn in_order(name: &[char], query: &[char]) -> Option<Vec<usize>> {
    let mut positions = Vec::with_capacity(query.len());
    let mut from = 0;
    for q in query {
        let pos = from + name[from..].iter().position(|c| c == q)?;
        positions.push(pos);
        from = pos + 1;
    }
    Some(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy_matcher::util::wrap_matches;

    fn tier(choice: &str, pattern: &str) -> Option<MatchTier> {
        RankingMatcher.rank(choice, pattern).map(|r| r.tier)
    }

    fn wrapped(choice: &str, pattern: &str) -> Option<String> {
        let (_, indices) = RankingMatcher.fuzzy_indices(choice, pattern)?;
        Some(wrap_matches(choice, &indices))
    }

    #[test]
    fn tiers() {
        assert_eq!(tier("Yoda", "Yoda"), Some(MatchTier::CaseSensitiveEqual));
        assert_eq!(tier("Yoda", "yoda"), Some(MatchTier::Equal));
        assert_eq!(tier("Yoda", "yo"), Some(MatchTier::StartsWith));
        assert_eq!(tier("Han Solo", "so"), Some(MatchTier::WordStartsWith));
        assert_eq!(tier("Han Solo", "ol"), Some(MatchTier::Contains));
        assert_eq!(tier("Obi-Wan Kenobi", "owk"), Some(MatchTier::Acronym));
        assert_eq!(tier("Luke Skywalker", "la"), Some(MatchTier::Matches));
        assert_eq!(tier("Han Solo", "la"), None);
    }

    #[test]
    fn no_match() {
        assert_eq!(tier("Yoda", "yodas"), None);
        assert_eq!(tier("Yoda", "x"), None);
        assert_eq!(tier("Yoda", ""), None);
        assert_eq!(tier("", "a"), None);
    }

    #[test]
    fn accents_are_ignored() {
        assert_eq!(tier("Padmé Amidala", "padme"), Some(MatchTier::StartsWith));
        assert_eq!(wrapped("Padmé Amidala", "dme").unwrap(), "Pa[d][m][é] Amidala");
    }

    #[test]
    fn closeness_prefers_tight_matches() {
        let tight = RankingMatcher.fuzzy_match("Leia Organa", "la").unwrap();
        let loose = RankingMatcher.fuzzy_match("Luke Skywalker", "la").unwrap();
        assert!(tight > loose);
        assert!(loose > MatchTier::Matches.score());
        assert!(tight < MatchTier::Contains.score());
    }

    #[test]
    fn match_indices() {
        assert_eq!(wrapped("Han Solo", "so").unwrap(), "Han [S][o]lo");
        assert_eq!(wrapped("Obi-Wan Kenobi", "owk").unwrap(), "[O]bi-[W]an [K]enobi");
        assert_eq!(wrapped("Luke Skywalker", "la").unwrap(), "[L]uke Skyw[a]lker");
    }
}
