//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! combobox types and traits with a single `use combobox::prelude::*;` statement.

pub use crate::combobox::{ComboboxState, Dispatch, StateChangeType, StateChanges};
pub use crate::controller::Controller;
pub use crate::filter::{MatchedItem, filter, filter_with};
pub use crate::fuzzy_matcher::{FuzzyMatcher, ranking::RankingMatcher};
pub use crate::item::{ITEMS, Item, item_to_string};
pub use crate::options::{ComboboxOptions, ComboboxOptionsBuilder};
pub use crate::output::ComboboxOutput;
pub use crate::session::Session;
pub use crate::tui::{Event, event::Action};
pub use std::sync::Arc;
