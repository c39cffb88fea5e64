//! Header display widget.
//!
//! Draws the page title, the external toggle button and whether the menu is open.
use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Widget;
use unicode_display_width::width as display_width;

use crate::options::ComboboxOptions;
use crate::theme::ColorTheme;
use crate::tui::widget::{ComboboxWidget, RenderContext};

/// Title above the toggle button
pub const TITLE: &str = "controlling isOpen";
/// Label of the external toggle button
pub const BUTTON: &str = "[ Toggle isOpen ]";

/// Header widget: title, toggle button and open state
#[derive(Clone)]
pub struct Header {
    theme: Arc<ColorTheme>,
    /// Area of the toggle button, as of the last render
    pub button_area: Rect,
}

impl Header {
    /// Number of lines the header takes
    pub const HEIGHT: u16 = 3;

    /// Status line for the given open state
    pub fn status(is_open: bool) -> String {
        format!("The menu is {}", if is_open { "open" } else { "closed" })
    }
}

impl ComboboxWidget for Header {
    fn from_options(_options: &ComboboxOptions, theme: Arc<ColorTheme>) -> Self {
        Self {
            theme,
            button_area: Rect::default(),
        }
    }

    fn render(&mut self, ctx: RenderContext<'_>, area: Rect, buf: &mut Buffer) {
        let rows = [
            Line::styled(TITLE, self.theme.title),
            Line::styled(BUTTON, self.theme.button),
            Line::styled(Header::status(ctx.is_open), self.theme.status),
        ];
        for (y, line) in (area.y..area.bottom()).zip(rows) {
            line.render(Rect { y, height: 1, ..area }, buf);
        }

        let button_width = u16::try_from(display_width(BUTTON)).unwrap_or(u16::MAX);
        self.button_area = Rect {
            y: area.y + 1,
            width: button_width,
            height: 1,
            ..area
        }
        .intersection(area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combobox::ComboboxState;
    use crate::item::item_to_string;
    use ratatui::layout::Position;

    fn draw(is_open: bool) -> (Header, Vec<String>) {
        let mut header = Header::from_options(&ComboboxOptions::default(), Arc::new(ColorTheme::default()));
        let area = Rect::new(2, 0, 20, Header::HEIGHT);
        let mut buf = Buffer::empty(area);
        let state = ComboboxState::default();
        let ctx = RenderContext {
            is_open,
            items: &[],
            state: &state,
            item_to_string,
        };
        header.render(ctx, area, &mut buf);
        let rows = (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        (header, rows)
    }

    #[test]
    fn shows_closed_then_open() {
        let (_, rows) = draw(false);
        assert_eq!(rows, vec![TITLE, BUTTON, "The menu is closed"]);
        let (_, rows) = draw(true);
        assert_eq!(rows[2], "The menu is open");
    }

    #[test]
    fn button_area_covers_the_label() {
        let (header, _) = draw(false);
        assert_eq!(header.button_area, Rect::new(2, 1, 17, 1));
        assert!(header.button_area.contains(Position { x: 18, y: 1 }));
        assert!(!header.button_area.contains(Position { x: 19, y: 1 }));
    }
}
