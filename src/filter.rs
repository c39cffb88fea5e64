//! Narrowing the item source down to the items matching a query.

use std::cmp::Reverse;

use crate::fuzzy_matcher::ranking::RankingMatcher;
use crate::fuzzy_matcher::{FuzzyMatcher, MatchIndices, ScoreType};
use crate::item::Item;

/// An item that survived filtering, with how it matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedItem {
    /// The matched item
    pub item: Item,
    /// Match score, 0 when the query was empty
    pub score: ScoreType,
    /// Matched char indices in the item's name
    pub indices: MatchIndices,
}

/// Filters `items` by `query` using the default [`RankingMatcher`].
///
/// An empty query returns the items unchanged; otherwise only the items whose name
/// matches are kept, best match first, ties keeping their original order.
pub fn filter(items: &[Item], query: &str) -> Vec<Item> {
    filter_with(&RankingMatcher, items, query)
        .into_iter()
        .map(|m| m.item)
        .collect()
}

/// Filters `items` by `query` with a custom matcher, keeping match details
pub fn filter_with(matcher: &dyn FuzzyMatcher, items: &[Item], query: &str) -> Vec<MatchedItem> {
    if query.is_empty() {
        return items
            .iter()
            .map(|item| MatchedItem {
                item: item.clone(),
                score: 0,
                indices: MatchIndices::new(),
            })
            .collect();
    }

    let mut matched: Vec<MatchedItem> = items
        .iter()
        .filter_map(|item| {
            matcher
                .fuzzy_indices(&item.name, query)
                .map(|(score, indices)| MatchedItem {
                    item: item.clone(),
                    score,
                    indices,
                })
        })
        .collect();
    // sort_by_key is stable: equal scores keep source order
    matched.sort_by_key(|m| Reverse(m.score));
    debug!("filter {query:?}: {}/{} items matched", matched.len(), items.len());
    matched
}
