use std::sync::Arc;

use color_eyre::eyre::{Result, bail};
use crossterm::event::{KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::KeyCode::Char;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::prelude::Backend;
use ratatui::widgets::Widget;

use crate::combobox::{ComboboxState, Dispatch, StateChangeType};
use crate::controller::Controller;
use crate::item::{Item, item_to_string};
use crate::options::ComboboxOptions;
use crate::output::ComboboxOutput;
use crate::theme::ColorTheme;
use crate::tui::widget::{ComboboxWidget, RenderContext};

use super::Event;
use super::Tui;
use super::event::Action;
use super::header::Header;
use super::input::Input;
use super::menu::Menu;

const INPUT_HEIGHT: u16 = 3;

/// Application state for the combobox TUI
pub struct App {
    /// Open state and displayed items
    pub controller: Controller,
    /// Query, highlight and selection
    pub state: ComboboxState,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Whether the user quit without accepting
    pub is_abort: bool,
    /// Current cursor position
    pub cursor_pos: Position,

    /// Input field widget
    pub input: Input,
    /// Menu widget
    pub menu: Menu,
    /// Header widget
    pub header: Header,
    /// Color theme
    pub theme: Arc<ColorTheme>,

    /// The options used to build the app
    pub options: ComboboxOptions,
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.options.width.min(area.width);
        let column = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let is_open = self.controller.is_open;
        let menu_height = if is_open {
            self.menu.height(self.controller.items_to_show.len())
        } else {
            0
        };
        let [header_area, input_area, menu_area, _] = Layout::vertical([
            Constraint::Length(Header::HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(menu_height),
            Constraint::Fill(1),
        ])
        .areas(column);

        let ctx = RenderContext {
            is_open,
            items: &self.controller.items_to_show,
            state: &self.state,
            item_to_string,
        };
        self.header.render(ctx, header_area, buf);
        self.input.render(ctx, input_area, buf);
        if is_open {
            self.menu.render(ctx, menu_area, buf);
        } else {
            self.menu.hide();
        }
        self.cursor_pos = self.input.cursor_pos();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::from_options(ComboboxOptions::default(), Arc::new(ColorTheme::default()))
    }
}

impl App {
    /// Creates a new App from options and theme, offering the compiled-in items
    pub fn from_options(options: ComboboxOptions, theme: Arc<ColorTheme>) -> Self {
        Self::with_controller(options, theme, Controller::default())
    }

    /// Creates a new App offering the items of `source`
    pub fn with_source(options: ComboboxOptions, theme: Arc<ColorTheme>, source: Arc<[Item]>) -> Self {
        Self::with_controller(options, theme, Controller::new(source))
    }

    fn with_controller(options: ComboboxOptions, theme: Arc<ColorTheme>, controller: Controller) -> Self {
        let state = ComboboxState::with_input_value(options.query.clone().unwrap_or_default());
        Self {
            controller,
            state,
            should_quit: false,
            is_abort: false,
            cursor_pos: Position::default(),
            input: Input::from_options(&options, theme.clone()),
            menu: Menu::from_options(&options, theme.clone()),
            header: Header::from_options(&options, theme.clone()),
            theme,
            options,
        }
    }

    /// Handles a TUI event and updates application state
    pub fn handle_event<B: Backend>(&mut self, tui: &mut Tui<B>, event: &Event) -> Result<()>
    where
        B::Error: Send + Sync + 'static,
    {
        let events = match event {
            Event::Render => {
                tui.draw(|f| {
                    f.render_widget(&mut *self, f.area());
                    f.set_cursor_position(self.cursor_pos);
                })?;
                vec![]
            }
            Event::Quit => {
                tui.exit()?;
                self.should_quit = true;
                vec![]
            }
            Event::Error(msg) => {
                tui.exit()?;
                bail!(msg.to_owned());
            }
            Event::Action(act) => self.handle_action(act),
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            Event::Redraw => {
                tui.clear()?;
                vec![Event::Render]
            }
            Event::Resize => vec![Event::Render],
        };
        for evt in events {
            tui.event_tx.send(evt)?;
        }
        Ok(())
    }

    /// Maps a key to the events it triggers
    pub fn handle_key(&mut self, key: &KeyEvent) -> Vec<Event> {
        debug!("key event: {:?}", key);

        if let Some(act) = self.options.keymap.get(key) {
            debug!("{act:?}");
            return act.iter().map(|a| Event::Action(a.clone())).collect();
        }
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, Char(c)) => vec![Event::Action(Action::AddChar(c))],
            (KeyModifiers::SHIFT, Char(c)) => {
                vec![Event::Action(Action::AddChar(c.to_uppercase().next().unwrap_or(c)))]
            }
            _ => vec![],
        }
    }

    /// Applies an action, returning the follow-up events
    pub fn handle_action(&mut self, act: &Action) -> Vec<Event> {
        use Action::*;
        let is_open = self.controller.is_open;
        match act {
            Abort => {
                self.should_quit = true;
                self.is_abort = true;
            }
            Accept => {
                self.should_quit = true;
                self.is_abort = false;
            }
            AddChar(c) => {
                self.input.insert(*c);
                return self.on_input_changed();
            }
            BackwardChar => self.input.move_cursor(false),
            BackwardDeleteChar => {
                if self.input.delete(true).is_some() {
                    return self.on_input_changed();
                }
            }
            BeginningOfLine => self.input.move_cursor_to(0),
            ClearScreen => return vec![Event::Redraw],
            ClearSelection => {
                let dispatch = self.state.clear_selection(is_open);
                return self.dispatch(dispatch);
            }
            DeleteChar => {
                if self.input.delete(false).is_some() {
                    return self.on_input_changed();
                }
            }
            Down(n) => {
                let count = self.controller.items_to_show.len();
                let dispatch = self.state.move_highlight(i32::from(*n), count, is_open);
                return self.dispatch(dispatch);
            }
            EndOfLine => self.input.move_to_end(),
            ForwardChar => self.input.move_cursor(true),
            Ignore => (),
            Reset => {
                let dispatch = self.state.reset(StateChangeType::KeyDownEscape, is_open);
                return self.dispatch(dispatch);
            }
            Select => {
                let dispatch = self.state.select_highlighted(&self.controller.items_to_show, is_open);
                return self.dispatch(dispatch);
            }
            ToggleIsOpen => self.controller.handle_toggle_button_click(),
            ToggleMenu => {
                let dispatch = if self.state.selected_item.is_some() {
                    self.state.clear_selection(is_open)
                } else {
                    self.state.toggle_menu(is_open)
                };
                return self.dispatch(dispatch);
            }
            UnixLineDiscard => {
                if !self.input.delete_to_beginning().is_empty() {
                    return self.on_input_changed();
                }
            }
            UnixWordRubout => {
                if !self.input.delete_backward_to_whitespace().is_empty() {
                    return self.on_input_changed();
                }
            }
            Up(n) => {
                let count = self.controller.items_to_show.len();
                let dispatch = self.state.move_highlight(-i32::from(*n), count, is_open);
                return self.dispatch(dispatch);
            }
        }
        vec![]
    }

    /// Handles mouse events
    pub fn handle_mouse(&mut self, mouse_event: &MouseEvent) -> Vec<Event> {
        let pos = Position {
            x: mouse_event.column,
            y: mouse_event.row,
        };
        let is_open = self.controller.is_open;

        match mouse_event.kind {
            MouseEventKind::Up(MouseButton::Left) => {
                let mut events = Vec::new();
                let inside = self.input.area.contains(pos) || self.menu.area.contains(pos);
                if !inside {
                    let dispatch = self.state.outer_click(is_open);
                    events.extend(self.dispatch(dispatch));
                }
                // The outer click has been handled, the open state may have changed
                let is_open = self.controller.is_open;
                if self.header.button_area.contains(pos) {
                    events.extend(self.handle_action(&Action::ToggleIsOpen));
                } else if self.input.control_area.contains(pos) {
                    events.extend(self.handle_action(&Action::ToggleMenu));
                } else if let Some(item) = self
                    .menu
                    .item_at(pos)
                    .and_then(|i| self.controller.items_to_show.get(i))
                    .cloned()
                {
                    let dispatch = self.state.select_item(item, StateChangeType::ClickItem, is_open);
                    events.extend(self.dispatch(dispatch));
                }
                events
            }
            MouseEventKind::Moved => match self.menu.item_at(pos) {
                Some(index) => {
                    let dispatch = self.state.highlight_index(index, is_open);
                    self.dispatch(dispatch)
                }
                None => vec![],
            },
            MouseEventKind::ScrollUp if is_open => self.handle_action(&Action::Up(1)),
            MouseEventKind::ScrollDown if is_open => self.handle_action(&Action::Down(1)),
            _ => vec![],
        }
    }

    fn on_input_changed(&mut self) -> Vec<Event> {
        let dispatch = self.state.change_input(self.input.value.clone(), self.controller.is_open);
        self.dispatch(dispatch)
    }

    /// Delivers the outcome of a combobox interaction to the controller
    fn dispatch(&mut self, dispatch: Dispatch) -> Vec<Event> {
        let Some(changes) = dispatch.changes else {
            return vec![];
        };
        self.controller.handle_state_change(&changes, &self.state);
        if dispatch.selection_changed {
            self.controller
                .handle_change(self.state.selected_item.as_ref(), &self.state);
        }
        if changes.input_value.is_some() {
            self.input.set_value(&self.state.input_value);
        }
        vec![]
    }

    /// The final state of the combobox
    pub fn output(&self) -> ComboboxOutput {
        ComboboxOutput {
            query: self.state.input_value.clone(),
            selected_item: self.state.selected_item.clone(),
            is_open: self.controller.is_open,
            is_abort: self.is_abort,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn app() -> App {
        let source = Item::from_names(&["Luke Skywalker", "Leia Organa", "Han Solo", "Padmé Amidala"]);
        App::with_source(ComboboxOptions::default(), Arc::new(ColorTheme::default()), source)
    }

    fn run(app: &mut App, events: Vec<Event>) {
        let mut queue = events;
        while !queue.is_empty() {
            let mut next = Vec::new();
            for event in queue {
                next.extend(match event {
                    Event::Action(act) => app.handle_action(&act),
                    Event::Key(key) => app.handle_key(&key),
                    Event::Mouse(mouse) => app.handle_mouse(&mouse),
                    _ => vec![],
                });
            }
            queue = next;
        }
    }

    fn type_str(app: &mut App, s: &str) {
        let events = s.chars().map(|c| Event::Action(Action::AddChar(c))).collect();
        run(app, events);
    }

    fn names(app: &App) -> Vec<&str> {
        app.controller.items_to_show.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn typing_opens_and_filters() {
        let mut app = app();
        type_str(&mut app, "la");
        assert!(app.controller.is_open);
        assert_eq!(app.state.input_value, "la");
        assert_eq!(names(&app), vec!["Padmé Amidala", "Leia Organa", "Luke Skywalker"]);
    }

    #[test]
    fn keys_map_to_actions() {
        let mut app = app();
        let ctrl_t = KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(&ctrl_t), vec![Event::Action(Action::ToggleIsOpen)]);
        let shift_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::SHIFT);
        assert_eq!(app.handle_key(&shift_a), vec![Event::Action(Action::AddChar('A'))]);
        let f12 = KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE);
        assert!(app.handle_key(&f12).is_empty());
    }

    #[test]
    fn arrows_and_enter_select() {
        let mut app = app();
        type_str(&mut app, "han");
        run(&mut app, vec![Event::Action(Action::Down(1)), Event::Action(Action::Select)]);
        assert!(!app.controller.is_open);
        assert_eq!(app.state.selected_item, Some(Item::new("Han Solo")));
        assert_eq!(app.input.value, "Han Solo");
        assert_eq!(app.input.cursor_pos, 8);
    }

    #[test]
    fn escape_restores_selection_text() {
        let mut app = app();
        type_str(&mut app, "leia");
        run(&mut app, vec![Event::Action(Action::Down(1)), Event::Action(Action::Select)]);
        type_str(&mut app, "xx");
        assert!(app.controller.is_open);
        run(&mut app, vec![Event::Action(Action::Reset)]);
        assert!(!app.controller.is_open);
        assert_eq!(app.input.value, "Leia Organa");
    }

    #[test]
    fn control_clears_a_selection() {
        let mut app = app();
        type_str(&mut app, "solo");
        run(&mut app, vec![Event::Action(Action::Down(1)), Event::Action(Action::Select)]);
        assert!(app.state.selected_item.is_some());
        run(&mut app, vec![Event::Action(Action::ToggleMenu)]);
        assert_eq!(app.state.selected_item, None);
        assert_eq!(app.input.value, "");
        assert!(!app.controller.is_open);
    }

    #[test]
    fn control_toggles_without_selection() {
        let mut app = app();
        run(&mut app, vec![Event::Action(Action::ToggleMenu)]);
        assert!(app.controller.is_open);
        assert_eq!(names(&app).len(), 4);
        run(&mut app, vec![Event::Action(Action::ToggleMenu)]);
        assert!(!app.controller.is_open);
    }

    #[test]
    fn accept_and_abort() {
        let mut app = app();
        run(&mut app, vec![Event::Action(Action::Accept)]);
        assert!(app.should_quit);
        assert!(!app.output().is_abort);

        let mut app = self::app();
        run(&mut app, vec![Event::Action(Action::Abort)]);
        assert!(app.should_quit);
        assert!(app.output().is_abort);
    }
}
