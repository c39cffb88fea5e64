use std::sync::Arc;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Widget};

use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::ranking::RankingMatcher;
use crate::options::ComboboxOptions;
use crate::theme::ColorTheme;
use crate::tui::widget::{ComboboxWidget, RenderContext};

const POINTER: &str = "> ";
const MARKER: &str = "* ";
const BLANK: &str = "  ";

/// The dropdown listing the displayed items
pub struct Menu {
    /// Maximum number of rows shown at once
    pub max_rows: u16,
    /// Index of the first visible row
    pub offset: usize,
    /// Area of the whole menu, as of the last render
    pub area: Rect,
    inner: Rect,
    len: usize,
    matcher: RankingMatcher,
    theme: Arc<ColorTheme>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            max_rows: 10,
            offset: 0,
            area: Rect::default(),
            inner: Rect::default(),
            len: 0,
            matcher: RankingMatcher,
            theme: Arc::new(ColorTheme::default()),
        }
    }
}

impl Menu {
    /// Height of the menu for `count` items, borders included
    pub fn height(&self, count: usize) -> u16 {
        count.min(self.max_rows as usize) as u16 + 2
    }

    /// Forgets the drawn area, the menu being hidden
    pub fn hide(&mut self) {
        self.area = Rect::default();
        self.inner = Rect::default();
        self.len = 0;
    }

    /// Index of the item drawn at `pos`, if any
    pub fn item_at(&self, pos: Position) -> Option<usize> {
        if !self.inner.contains(pos) {
            return None;
        }
        let index = self.offset + (pos.y - self.inner.y) as usize;
        (index < self.len).then_some(index)
    }

    fn scroll_to(&mut self, current: Option<usize>, rows: usize) {
        if self.offset >= self.len {
            self.offset = 0;
        }
        let Some(current) = current else {
            return;
        };
        if current < self.offset {
            self.offset = current;
        } else if rows > 0 && self.offset + rows <= current {
            self.offset = current + 1 - rows;
        }
    }
}

/// Splits `text` into spans, styling the chars at `indices` with `matched`
fn highlight(text: &str, indices: &[usize], base: Style, matched: Style) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut chars = text.chars();
    let mut prev = 0;
    for &index in indices {
        let before: String = chars.by_ref().take(index - prev).collect();
        if !before.is_empty() {
            spans.push(Span::styled(before, base));
        }
        if let Some(c) = chars.next() {
            spans.push(Span::styled(c.to_string(), base.patch(matched)));
        }
        prev = index + 1;
    }
    let rest: String = chars.collect();
    if !rest.is_empty() {
        spans.push(Span::styled(rest, base));
    }
    spans
}

impl ComboboxWidget for Menu {
    fn from_options(options: &ComboboxOptions, theme: Arc<ColorTheme>) -> Self {
        Self {
            max_rows: options.menu_height,
            theme,
            ..Default::default()
        }
    }

    fn render(&mut self, ctx: RenderContext<'_>, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().border_style(self.theme.border);
        self.area = area;
        self.inner = block.inner(area);
        self.len = ctx.items.len();
        let current = ctx.state.highlighted_index.filter(|&i| i < self.len);
        self.scroll_to(current, self.inner.height as usize);

        let theme = &self.theme;
        let query = ctx.state.input_value.as_str();
        let rows = ctx
            .items
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.inner.height as usize)
            .map(|(index, item)| {
                let is_current = current == Some(index);
                let is_selected = ctx.state.selected_item.as_ref() == Some(item);
                let text = (ctx.item_to_string)(Some(item));
                let indices = if query.is_empty() {
                    Vec::new()
                } else {
                    self.matcher
                        .fuzzy_indices(&text, query)
                        .map(|(_, indices)| indices)
                        .unwrap_or_default()
                };
                let (base, matched) = if is_current {
                    (theme.current, theme.current_match)
                } else {
                    (theme.normal, theme.matched)
                };
                let prefix = if is_current {
                    Span::styled(POINTER, theme.cursor)
                } else if is_selected {
                    Span::styled(MARKER, theme.selected)
                } else {
                    Span::raw(BLANK)
                };
                let mut spans = vec![prefix];
                spans.extend(highlight(&text, &indices, base, matched));
                ListItem::new(Line::from(spans)).style(base)
            })
            .collect::<Vec<ListItem>>();

        block.render(area, buf);
        List::new(rows).style(theme.normal).render(self.inner, buf);
    }
}
