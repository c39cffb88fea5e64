use crate::item::Item;

/// Result of running the combobox
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxOutput {
    /// The query in the input when quitting
    pub query: String,
    /// The item chosen by the user, if any
    pub selected_item: Option<Item>,
    /// Whether the menu was open when quitting
    pub is_open: bool,
    /// Whether the user quit without accepting
    pub is_abort: bool,
}

impl ComboboxOutput {
    /// Process exit code: 130 on abort, 0 with a selection, 1 without
    pub fn exit_code(&self) -> i32 {
        match (self.is_abort, &self.selected_item) {
            (true, _) => 130,
            (false, Some(_)) => 0,
            (false, None) => 1,
        }
    }
}
