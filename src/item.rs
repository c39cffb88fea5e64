//! Items offered by the combobox and the process-wide item source.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use crate::names::STAR_WARS_NAMES;

/// The full item source, built once from the compiled-in name list
pub static ITEMS: LazyLock<Arc<[Item]>> = LazyLock::new(|| Item::from_names(STAR_WARS_NAMES));

/// A selectable entry: a display name and its lowercased identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Name shown in the menu and matched against the query
    pub name: String,
    /// Lowercased name, unique within a source
    pub id: String,
}

impl Item {
    /// Creates an item, deriving its id from the name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let id = name.to_lowercase();
        Self { name, id }
    }

    /// Builds an item source from a list of names, keeping their order
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Arc<[Item]> {
        let items: Arc<[Item]> = names.iter().map(|n| Item::new(n.as_ref())).collect();
        debug!("built item source with {} items", items.len());
        items
    }
}

impl From<&str> for Item {
    fn from(name: &str) -> Self {
        Item::new(name)
    }
}

/// Renders an item for display, or an empty string when there is none
pub fn item_to_string(item: Option<&Item>) -> Cow<'_, str> {
    match item {
        Some(i) => Cow::Borrowed(i.name.as_str()),
        None => Cow::Borrowed(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_lowercased_name() {
        let item = Item::new("Luke Skywalker");
        assert_eq!(item.name, "Luke Skywalker");
        assert_eq!(item.id, "luke skywalker");
    }

    #[test]
    fn source_keeps_name_order() {
        assert_eq!(ITEMS.len(), STAR_WARS_NAMES.len());
        for (item, name) in ITEMS.iter().zip(STAR_WARS_NAMES) {
            assert_eq!(&item.name, name);
        }
    }

    #[test]
    fn missing_item_renders_empty() {
        assert_eq!(item_to_string(None), "");
        let item = Item::new("Yoda");
        assert_eq!(item_to_string(Some(&item)), "Yoda");
    }
}
