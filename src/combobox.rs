//! Combobox interaction state.
//!
//! [`ComboboxState`] owns the query text, the highlighted row and the selected item.
//! Whether the menu is open is *controlled*: it is passed in by the owner of the
//! state and never stored here. Every interaction proposes a set of changes; the
//! fields that actually differ are applied and reported back as [`StateChanges`],
//! tagged with the [`StateChangeType`] that caused them, so that the owner decides
//! what to do with the open state.

use derive_more::Display;

use crate::item::{Item, item_to_string};

/// The user action behind a state change
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChangeType {
    /// Programmatic change
    Unknown,
    /// The pointer was released outside of the combobox
    MouseUp,
    /// The pointer moved over an item
    ItemMouseEnter,
    /// Arrow up in the input
    KeyDownArrowUp,
    /// Arrow down in the input
    KeyDownArrowDown,
    /// Escape in the input
    KeyDownEscape,
    /// Enter in the input
    KeyDownEnter,
    /// An item was clicked
    ClickItem,
    /// The query text was edited
    ChangeInput,
    /// The toggle control was clicked
    ClickButton,
}

/// Fields changed by one interaction, `None` meaning unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateChanges {
    /// What caused the change
    pub kind: StateChangeType,
    /// Requested open state
    pub is_open: Option<bool>,
    /// New query text
    pub input_value: Option<String>,
    /// New highlighted row
    pub highlighted_index: Option<Option<usize>>,
    /// New selected item
    pub selected_item: Option<Option<Item>>,
}

impl StateChanges {
    /// An empty set of changes caused by `kind`
    pub fn new(kind: StateChangeType) -> Self {
        Self {
            kind,
            is_open: None,
            input_value: None,
            highlighted_index: None,
            selected_item: None,
        }
    }

    fn open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    fn input(mut self, value: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        self
    }

    fn highlight(mut self, index: Option<usize>) -> Self {
        self.highlighted_index = Some(index);
        self
    }

    fn select(mut self, item: Option<Item>) -> Self {
        self.selected_item = Some(item);
        self
    }

    /// Whether nothing changed
    pub fn is_empty(&self) -> bool {
        self.is_open.is_none()
            && self.input_value.is_none()
            && self.highlighted_index.is_none()
            && self.selected_item.is_none()
    }
}

/// Outcome of an interaction, to be delivered to the state owner
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Dispatch {
    /// Changes to report, if anything changed
    pub changes: Option<StateChanges>,
    /// Whether the selected item changed
    pub selection_changed: bool,
}

/// Uncontrolled combobox state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComboboxState {
    /// Current query text
    pub input_value: String,
    /// Row highlighted for keyboard selection
    pub highlighted_index: Option<usize>,
    /// Item chosen by the user
    pub selected_item: Option<Item>,
}

impl ComboboxState {
    /// A state starting with the given query
    pub fn with_input_value(value: impl Into<String>) -> Self {
        Self {
            input_value: value.into(),
            ..Default::default()
        }
    }

    /// Applies the fields of `proposed` that differ from the current state
    fn set_state(&mut self, proposed: StateChanges, is_open: bool) -> Dispatch {
        let mut diff = StateChanges::new(proposed.kind);
        if let Some(open) = proposed.is_open
            && open != is_open
        {
            diff.is_open = Some(open);
        }
        if let Some(value) = proposed.input_value
            && value != self.input_value
        {
            self.input_value.clone_from(&value);
            diff.input_value = Some(value);
        }
        if let Some(index) = proposed.highlighted_index
            && index != self.highlighted_index
        {
            self.highlighted_index = index;
            diff.highlighted_index = Some(index);
        }
        let mut selection_changed = false;
        if let Some(item) = proposed.selected_item
            && item != self.selected_item
        {
            self.selected_item.clone_from(&item);
            diff.selected_item = Some(item);
            selection_changed = true;
        }

        if diff.is_empty() {
            trace!("{} changed nothing", proposed.kind);
            return Dispatch::default();
        }
        debug!("state change: {diff:?}");
        Dispatch {
            changes: Some(diff),
            selection_changed,
        }
    }

    /// The query text was edited
    pub fn change_input(&mut self, value: impl Into<String>, is_open: bool) -> Dispatch {
        let proposed = StateChanges::new(StateChangeType::ChangeInput)
            .open(true)
            .input(value)
            .highlight(None);
        self.set_state(proposed, is_open)
    }

    /// Moves the highlight by `amount` rows, wrapping around, or opens a closed menu
    pub fn move_highlight(&mut self, amount: i32, item_count: usize, is_open: bool) -> Dispatch {
        let kind = if amount < 0 {
            StateChangeType::KeyDownArrowUp
        } else {
            StateChangeType::KeyDownArrowDown
        };
        if !is_open {
            return self.set_state(StateChanges::new(kind).open(true), is_open);
        }
        if item_count == 0 {
            return Dispatch::default();
        }
        let count = item_count as i64;
        let next = match self.highlighted_index {
            Some(current) => (current as i64 + amount as i64).rem_euclid(count),
            None if amount < 0 => (count + amount as i64).rem_euclid(count),
            None => (amount as i64 - 1).rem_euclid(count),
        };
        self.set_state(StateChanges::new(kind).highlight(Some(next as usize)), is_open)
    }

    /// Selects the highlighted item, if the menu is open and a row is highlighted
    pub fn select_highlighted(&mut self, items: &[Item], is_open: bool) -> Dispatch {
        if !is_open {
            return Dispatch::default();
        }
        match self.highlighted_index.and_then(|i| items.get(i)) {
            Some(item) => self.select_item(item.clone(), StateChangeType::KeyDownEnter, is_open),
            None => Dispatch::default(),
        }
    }

    /// Selects `item` and closes the menu
    pub fn select_item(&mut self, item: Item, kind: StateChangeType, is_open: bool) -> Dispatch {
        let value = item_to_string(Some(&item)).into_owned();
        let proposed = StateChanges::new(kind)
            .open(false)
            .highlight(None)
            .select(Some(item))
            .input(value);
        self.set_state(proposed, is_open)
    }

    /// Closes the menu and restores the query to the selected item
    pub fn reset(&mut self, kind: StateChangeType, is_open: bool) -> Dispatch {
        let value = item_to_string(self.selected_item.as_ref()).into_owned();
        let proposed = StateChanges::new(kind).open(false).highlight(None).input(value);
        self.set_state(proposed, is_open)
    }

    /// The pointer was released outside of the combobox
    pub fn outer_click(&mut self, is_open: bool) -> Dispatch {
        if !is_open {
            return Dispatch::default();
        }
        self.reset(StateChangeType::MouseUp, is_open)
    }

    /// The toggle control was clicked
    pub fn toggle_menu(&mut self, is_open: bool) -> Dispatch {
        let proposed = StateChanges::new(StateChangeType::ClickButton)
            .open(!is_open)
            .highlight(None);
        self.set_state(proposed, is_open)
    }

    /// Drops the selection and the query, closing the menu
    pub fn clear_selection(&mut self, is_open: bool) -> Dispatch {
        let proposed = StateChanges::new(StateChangeType::Unknown)
            .select(None)
            .input("")
            .open(false);
        self.set_state(proposed, is_open)
    }

    /// The pointer moved over the item at `index`
    pub fn highlight_index(&mut self, index: usize, is_open: bool) -> Dispatch {
        let proposed = StateChanges::new(StateChangeType::ItemMouseEnter).highlight(Some(index));
        self.set_state(proposed, is_open)
    }
}
