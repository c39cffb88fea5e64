use color_eyre::Result;
use combobox::prelude::*;
use combobox::tui::{App, Tui};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Position;

pub const WIDTH: u16 = 40;
pub const HEIGHT: u16 = 20;

/// Row of the status line
pub const STATUS_ROW: usize = 2;
/// Row of the query line, inside the input border
pub const INPUT_ROW: usize = 4;
/// Row of the menu's top border
pub const MENU_TOP_ROW: usize = 6;

/// A test harness driving a [`Session<TestBackend>`].
///
/// Events go through the same channel and `App::handle_event` as in the real event
/// loop; the screen is redrawn after every batch so that mouse positions resolve
/// against what was last drawn.
pub struct TestHarness {
    pub session: Session<TestBackend>,
}

impl TestHarness {
    pub fn new() -> Result<Self> {
        Self::with_options(ComboboxOptionsBuilder::default().build()?)
    }

    pub fn with_options(options: ComboboxOptions) -> Result<Self> {
        let mut session = Session::init(options)?;
        session.init_tui_with(Tui::new(TestBackend::new(WIDTH, HEIGHT))?);
        let mut harness = Self { session };
        harness.render()?;
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        self.session.app()
    }

    /// Process all pending events, then redraw
    pub fn tick(&mut self) -> Result<()> {
        loop {
            let mut events = Vec::new();
            while let Ok(event) = self.session.tui_mut()?.event_rx.try_recv() {
                events.push(event);
            }
            if events.is_empty() {
                break;
            }
            for event in events {
                let (app, tui) = self.session.app_and_tui()?;
                app.handle_event(tui, &event)?;
            }
        }
        self.render()
    }

    pub fn send(&mut self, event: Event) -> Result<()> {
        self.session.tui_mut()?.event_tx.send(event)?;
        Ok(())
    }

    pub fn key(&mut self, key: KeyEvent) -> Result<()> {
        self.send(Event::Key(key))?;
        self.tick()
    }

    pub fn press(&mut self, code: KeyCode) -> Result<()> {
        self.key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    pub fn ctrl(&mut self, c: char) -> Result<()> {
        self.key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    pub fn type_str(&mut self, s: &str) -> Result<()> {
        for c in s.chars() {
            self.press(KeyCode::Char(c))?;
        }
        Ok(())
    }

    pub fn action(&mut self, action: Action) -> Result<()> {
        self.send(Event::Action(action))?;
        self.tick()
    }

    fn mouse(&mut self, kind: MouseEventKind, pos: Position) -> Result<()> {
        self.send(Event::Mouse(MouseEvent {
            kind,
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        }))?;
        self.tick()
    }

    /// Left button released at `pos`
    pub fn click(&mut self, x: u16, y: u16) -> Result<()> {
        self.mouse(MouseEventKind::Up(MouseButton::Left), Position { x, y })
    }

    pub fn hover(&mut self, x: u16, y: u16) -> Result<()> {
        self.mouse(MouseEventKind::Moved, Position { x, y })
    }

    pub fn render(&mut self) -> Result<()> {
        let (app, tui) = self.session.app_and_tui()?;
        tui.draw(|frame| {
            frame.render_widget(&mut *app, frame.area());
        })?;
        Ok(())
    }

    /// The screen, one string per row, trailing blanks removed
    pub fn rows(&self) -> Vec<String> {
        let tui = self.session.tui_ref().expect("harness always has a TUI");
        let buf = tui.backend().buffer();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    pub fn is_open(&self) -> bool {
        self.app().controller.is_open
    }

    pub fn shown(&self) -> Vec<&str> {
        self.app()
            .controller
            .items_to_show
            .iter()
            .map(|i| i.name.as_str())
            .collect()
    }
}
