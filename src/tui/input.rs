use std::ops::Deref;
use std::sync::Arc;

use ratatui::layout::Position;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use ratatui::{buffer::Buffer, layout::Rect};
use unicode_display_width::width as display_width;

use crate::options::ComboboxOptions;
use crate::theme::ColorTheme;
use crate::tui::widget::{ComboboxWidget, RenderContext};

/// Shown when the menu is closed
pub const CONTROL_CLOSED: &str = "▾";
/// Shown when the menu is open
pub const CONTROL_OPEN: &str = "▴";
/// Shown when an item is selected, clears the selection
pub const CONTROL_CLEAR: &str = "✕";

/// Query input, with the toggle/clear control on its right edge
pub struct Input {
    /// Current query text, mirrors the combobox input value
    pub value: String,
    /// Cursor position, as a byte offset into `value`
    pub cursor_pos: u16,
    /// Text shown while the query is empty
    pub placeholder: String,
    /// Color theme
    pub theme: Arc<ColorTheme>,
    /// Area of the whole input, border included, as of the last render
    pub area: Rect,
    /// Area of the control, as of the last render
    pub control_area: Rect,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            value: String::default(),
            cursor_pos: 0,
            placeholder: String::default(),
            theme: Arc::new(ColorTheme::default()),
            area: Rect::default(),
            control_area: Rect::default(),
        }
    }
}

impl Input {
    /// Inserts a char at the cursor
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor_pos.into(), c);
        self.cursor_pos += c.len_utf8() as u16;
    }

    /// Deletes the char before the cursor when `backward`, or under it otherwise
    pub fn delete(&mut self, backward: bool) -> Option<char> {
        let pos = if backward {
            self.prev_boundary()?
        } else if (self.cursor_pos as usize) < self.value.len() {
            self.cursor_pos as usize
        } else {
            return None;
        };
        let ch = self.value.remove(pos);
        self.cursor_pos = pos as u16;
        Some(ch)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor_pos as usize]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor_pos as usize..]
            .chars()
            .next()
            .map(|c| self.cursor_pos as usize + c.len_utf8())
    }

    /// Moves the cursor by one char
    pub fn move_cursor(&mut self, forward: bool) {
        let target = if forward {
            self.next_boundary()
        } else {
            self.prev_boundary()
        };
        if let Some(pos) = target {
            self.cursor_pos = pos as u16;
        }
    }

    /// Moves the cursor to a byte offset, if it is a char boundary
    pub fn move_cursor_to(&mut self, pos: u16) {
        if self.value.is_char_boundary(pos as usize) {
            self.cursor_pos = pos;
        } else {
            warn!("Invalid cursor pos {pos}");
        }
    }

    /// Moves the cursor past the last char
    pub fn move_to_end(&mut self) {
        self.cursor_pos = self.value.len() as u16;
    }

    /// Replaces the whole value, leaving the cursor at its end
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.move_to_end();
        }
    }

    /// Unix word rubout: deletes back to the previous whitespace
    pub fn delete_backward_to_whitespace(&mut self) -> String {
        let head = &self.value[..self.cursor_pos as usize];
        let trimmed = head.trim_end_matches(char::is_whitespace);
        let start = trimmed.rfind(char::is_whitespace).map_or(0, |i| {
            // rfind gives the start of the whitespace char, keep it
            i + trimmed[i..].chars().next().map_or(0, char::len_utf8)
        });
        let deleted: String = self.value.drain(start..self.cursor_pos as usize).collect();
        self.cursor_pos = start as u16;
        deleted
    }

    /// Deletes from the cursor to the beginning of the line
    pub fn delete_to_beginning(&mut self) -> String {
        let deleted: String = self.value.drain(..self.cursor_pos as usize).collect();
        self.cursor_pos = 0;
        deleted
    }

    /// Terminal position of the cursor, as of the last render
    pub fn cursor_pos(&self) -> Position {
        let offset: u16 = display_width(&self.value[..(self.cursor_pos as usize)])
            .try_into()
            .unwrap_or(u16::MAX);
        Position {
            x: self.area.x.saturating_add(1).saturating_add(offset),
            y: self.area.y.saturating_add(1),
        }
    }
}

impl ComboboxWidget for Input {
    fn from_options(options: &ComboboxOptions, theme: Arc<ColorTheme>) -> Self {
        let value = options.query.clone().unwrap_or_default();
        Self {
            cursor_pos: value.len() as u16,
            value,
            placeholder: options.placeholder.clone(),
            theme,
            ..Default::default()
        }
    }

    fn render(&mut self, ctx: RenderContext<'_>, area: Rect, buf: &mut Buffer) {
        self.area = area;
        let block = Block::bordered().border_style(self.theme.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let control = if ctx.state.selected_item.is_some() {
            CONTROL_CLEAR
        } else if ctx.is_open {
            CONTROL_OPEN
        } else {
            CONTROL_CLOSED
        };
        self.control_area = Rect::new(inner.right().saturating_sub(1), inner.y, inner.width.min(1), inner.height.min(1));
        let text_area = Rect {
            width: inner.width.saturating_sub(2),
            ..inner
        };

        let line = if self.value.is_empty() {
            Line::from(Span::styled(&self.placeholder, self.theme.placeholder))
        } else {
            Line::from(Span::styled(&self.value, self.theme.query))
        };
        Paragraph::new(line).style(self.theme.normal).render(text_area, buf);
        Span::styled(control, self.theme.control).render(self.control_area, buf);
    }
}

impl Deref for Input {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}
