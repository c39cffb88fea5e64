//! Application state: whether the menu is open and which items it shows.

use std::sync::Arc;

use crate::combobox::{ComboboxState, StateChangeType, StateChanges};
use crate::filter::filter;
use crate::item::{ITEMS, Item};

/// Owns the open state and the displayed items, and decides how interactions
/// update them.
///
/// Two update paths touch the same fields with different policies: state changes
/// reported by the combobox refilter by the current query, while a click on the
/// external toggle button always resets to the whole source.
#[derive(Debug, Clone)]
pub struct Controller {
    source: Arc<[Item]>,
    /// Whether the menu is shown
    pub is_open: bool,
    /// Items currently offered in the menu
    pub items_to_show: Vec<Item>,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(ITEMS.clone())
    }
}

impl Controller {
    /// A closed controller with nothing displayed yet
    pub fn new(source: Arc<[Item]>) -> Self {
        Self {
            source,
            is_open: false,
            items_to_show: Vec::new(),
        }
    }

    /// The full item source
    pub fn source(&self) -> &[Item] {
        &self.source
    }

    /// Reacts to changes reported by the combobox.
    ///
    /// A pointer release outside the combobox never changes the open state. When
    /// the menu is (still) open, the displayed items are refiltered by the query in
    /// `state`; a closing menu keeps its previous items.
    pub fn handle_state_change(&mut self, changes: &StateChanges, state: &ComboboxState) {
        if let Some(requested) = changes.is_open {
            if changes.kind == StateChangeType::MouseUp {
                debug!("ignoring open={requested} from {}", changes.kind);
            } else {
                self.is_open = requested;
            }
            if self.is_open {
                self.items_to_show = self.items_for(&state.input_value);
            }
        } else if changes.input_value.is_some() {
            self.items_to_show = self.items_for(&state.input_value);
        }
    }

    /// Called when the selected item changes
    pub fn handle_change(&mut self, _selected: Option<&Item>, _state: &ComboboxState) {}

    /// The external toggle button was clicked
    pub fn handle_toggle_button_click(&mut self) {
        self.is_open = !self.is_open;
        self.items_to_show = self.source.to_vec();
        debug!("toggle button: open={}", self.is_open);
    }

    fn items_for(&self, query: &str) -> Vec<Item> {
        filter(&self.source, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> Controller {
        Controller::new(Item::from_names(&["Luke Skywalker", "Leia Organa", "Han Solo"]))
    }

    fn open_request(kind: StateChangeType, is_open: bool) -> StateChanges {
        StateChanges {
            is_open: Some(is_open),
            ..StateChanges::new(kind)
        }
    }

    fn input_change(value: &str) -> StateChanges {
        StateChanges {
            input_value: Some(value.to_string()),
            ..StateChanges::new(StateChangeType::ChangeInput)
        }
    }

    #[test]
    fn starts_closed_and_empty() {
        let c = controller();
        assert!(!c.is_open);
        assert!(c.items_to_show.is_empty());
    }

    #[test]
    fn opening_filters_by_query() {
        let mut c = controller();
        let state = ComboboxState::with_input_value("la");
        c.handle_state_change(&open_request(StateChangeType::ChangeInput, true), &state);
        assert!(c.is_open);
        let names: Vec<_> = c.items_to_show.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Leia Organa", "Luke Skywalker"]);
    }

    #[test]
    fn closing_keeps_stale_items() {
        let mut c = controller();
        c.handle_state_change(
            &open_request(StateChangeType::ClickButton, true),
            &ComboboxState::with_input_value("han"),
        );
        assert_eq!(c.items_to_show, vec![Item::new("Han Solo")]);
        c.handle_state_change(
            &open_request(StateChangeType::KeyDownEscape, false),
            &ComboboxState::default(),
        );
        assert!(!c.is_open);
        assert_eq!(c.items_to_show, vec![Item::new("Han Solo")]);
    }

    #[test]
    fn mouse_up_never_changes_open_state() {
        for initial in [false, true] {
            for requested in [false, true] {
                let mut c = controller();
                c.is_open = initial;
                c.handle_state_change(
                    &open_request(StateChangeType::MouseUp, requested),
                    &ComboboxState::default(),
                );
                assert_eq!(c.is_open, initial);
            }
        }
    }

    #[test]
    fn mouse_up_while_open_refilters() {
        let mut c = controller();
        c.is_open = true;
        c.handle_state_change(
            &open_request(StateChangeType::MouseUp, false),
            &ComboboxState::with_input_value("solo"),
        );
        assert!(c.is_open);
        assert_eq!(c.items_to_show, vec![Item::new("Han Solo")]);
    }

    #[test]
    fn query_change_never_changes_open_state() {
        for initial in [false, true] {
            let mut c = controller();
            c.is_open = initial;
            c.handle_state_change(&input_change("xyz123"), &ComboboxState::with_input_value("xyz123"));
            assert_eq!(c.is_open, initial);
            assert!(c.items_to_show.is_empty());
        }
    }

    #[test]
    fn toggle_button_resets_to_full_source() {
        let mut c = controller();
        c.handle_state_change(&input_change("han"), &ComboboxState::with_input_value("han"));
        assert_eq!(c.items_to_show.len(), 1);

        c.handle_toggle_button_click();
        assert!(c.is_open);
        assert_eq!(c.items_to_show, c.source().to_vec());

        c.handle_toggle_button_click();
        assert!(!c.is_open);
        assert_eq!(c.items_to_show, c.source().to_vec());
    }

    #[test]
    fn selection_hook_changes_nothing() {
        let mut c = controller();
        c.handle_toggle_button_click();
        let before = c.clone();
        let item = Item::new("Han Solo");
        c.handle_change(Some(&item), &ComboboxState::default());
        assert_eq!(c.is_open, before.is_open);
        assert_eq!(c.items_to_show, before.items_to_show);
    }
}
