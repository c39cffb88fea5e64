use std::borrow::Cow;
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::combobox::ComboboxState;
use crate::item::Item;
use crate::options::ComboboxOptions;
use crate::theme::ColorTheme;

/// What a widget needs to know about the combobox to draw itself
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Whether the menu is open
    pub is_open: bool,
    /// Items offered in the menu
    pub items: &'a [Item],
    /// Query, highlight and selection
    pub state: &'a ComboboxState,
    /// How items are turned into text
    pub item_to_string: fn(Option<&Item>) -> Cow<'_, str>,
}

/// Trait for combobox TUI widgets
pub trait ComboboxWidget: Sized {
    /// Create a widget from options and theme
    fn from_options(options: &ComboboxOptions, theme: Arc<ColorTheme>) -> Self;

    /// Render the widget to the buffer
    fn render(&mut self, ctx: RenderContext<'_>, area: Rect, buf: &mut Buffer);
}
