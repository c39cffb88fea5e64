use std::ops::{Deref, DerefMut};
use std::sync::Once;

use color_eyre::eyre::{OptionExt, Result};
use crossterm::event::KeyEventKind;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{self, cursor};
use futures::{FutureExt as _, StreamExt as _};
use ratatui::layout::Rect;
use ratatui::prelude::Backend;
use ratatui::{TerminalOptions, Viewport};
use tokio::sync::mpsc::unbounded_channel;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use super::{Event, Size};

const FRAME_RATE: f64 = 30.;
static PANIC_HOOK_SET: Once = Once::new();

/// Terminal user interface handler for the combobox
pub struct Tui<B: Backend = ratatui::backend::CrosstermBackend<std::io::Stderr>> {
    /// The ratatui terminal instance
    pub terminal: ratatui::Terminal<B>,
    /// Background task handle for event polling
    pub task: Option<JoinHandle<()>>,
    /// Receiver for TUI events
    pub event_rx: UnboundedReceiver<Event>,
    /// Sender for TUI events
    pub event_tx: UnboundedSender<Event>,
    /// Frame rate for rendering (frames per second)
    pub frame_rate: f64,
    /// Token for cancelling background tasks
    pub cancellation_token: CancellationToken,
    /// Whether running in fullscreen mode
    pub is_fullscreen: bool,
}

impl<B: Backend> Tui<B>
where
    B::Error: Send + Sync + 'static,
{
    /// Creates a fullscreen TUI over the given backend
    pub fn new(backend: B) -> Result<Self> {
        Self::with_viewport(backend, Viewport::Fullscreen)
    }

    /// Creates a new TUI with the specified backend and height.
    ///
    /// Anything short of 100% is drawn inline below the cursor, scrolling the
    /// terminal up when there is not enough room left.
    pub fn new_with_height(backend: B, height: Size) -> Result<Self> {
        let term_height = backend.size()?.height;
        let lines = match height {
            Size::Percent(100) => None,
            Size::Fixed(lines) => Some(lines),
            Size::Percent(p) => Some(term_height * p / 100),
        };

        let Some(height) = lines else {
            return Self::new(backend);
        };
        let height = height.min(term_height);
        let (_, cursor_row) = cursor::position()?;
        let mut y = cursor_row;
        let room = term_height.saturating_sub(cursor_row);
        if room < height {
            let to_scroll = height - room;
            crossterm::execute!(std::io::stderr(), crossterm::terminal::ScrollUp(to_scroll))?;
            y = y.saturating_sub(to_scroll);
        }
        let width = backend.size()?.width;
        Self::with_viewport(backend, Viewport::Fixed(Rect::new(0, y, width, height)))
    }

    fn with_viewport(backend: B, viewport: Viewport) -> Result<Self> {
        let (event_tx, event_rx) = unbounded_channel();
        let is_fullscreen = matches!(viewport, Viewport::Fullscreen);
        set_panic_hook();
        Ok(Self {
            terminal: ratatui::Terminal::with_options(backend, TerminalOptions { viewport })?,
            task: None,
            event_rx,
            event_tx,
            frame_rate: FRAME_RATE,
            cancellation_token: CancellationToken::default(),
            is_fullscreen,
        })
    }

    /// Enters the TUI by enabling raw mode and starting event handling
    pub fn enter(&mut self, mouse: bool) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        if mouse {
            crossterm::execute!(std::io::stderr(), EnableMouseCapture)?;
        }
        if self.is_fullscreen {
            crossterm::execute!(std::io::stderr(), EnterAlternateScreen)?;
        }
        self.start();
        Ok(())
    }

    /// Exits the TUI by stopping event handling and disabling raw mode
    pub fn exit(&mut self) -> Result<()> {
        self.stop();
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(
                std::io::stderr(),
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        // Inline: leave the cursor at the top of the drawing area
        if !self.is_fullscreen {
            let area = self.get_frame().area();
            let orig = ratatui::layout::Position { x: area.x, y: area.y };
            self.set_cursor_position(orig)?;
        };
        Ok(())
    }

    /// Stops the TUI event loop
    pub fn stop(&self) {
        self.cancellation_token.cancel();
    }

    /// Starts the event loop forwarding terminal and render events
    pub fn start(&mut self) {
        let render_delay = std::time::Duration::from_secs_f64(1.0 / self.frame_rate);
        let event_tx_clone = self.event_tx.clone();
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.cancellation_token = CancellationToken::new();
        let cancellation_token_clone = self.cancellation_token.clone();
        self.task = Some(tokio::spawn(async move {
            let mut reader = crossterm::event::EventStream::new();
            let mut render_interval = tokio::time::interval(render_delay);
            loop {
                let render_delay = render_interval.tick();
                let crossterm_event = reader.next().fuse();
                tokio::select! {
                    _ = cancellation_token_clone.cancelled() => {
                        break;
                    }
                    maybe_event = crossterm_event => {
                      match maybe_event {
                        Some(Ok(crossterm::event::Event::Key(key))) => {
                          if key.kind == KeyEventKind::Press {
                            _ = event_tx_clone.send(Event::Key(key));
                          }
                        }
                        Some(Ok(crossterm::event::Event::Mouse(mouse))) => {
                          _ = event_tx_clone.send(Event::Mouse(mouse));
                        }
                        Some(Ok(crossterm::event::Event::Resize(_, _))) => {
                          _ = event_tx_clone.send(Event::Resize);
                        }
                        Some(Err(e)) => {
                          _ = event_tx_clone.send(Event::Error(e.to_string()));
                        }
                        None => break,
                        Some(Ok(_)) => {},
                      }
                    },
                    _ = render_delay => {
                        _ = event_tx_clone.send(Event::Render);
                    },
                }
            }
        }));
    }

    /// Gets the next event from the event queue
    pub async fn next(&mut self) -> Result<Event> {
        self.event_rx.recv().await.ok_or_eyre("Event channel closed")
    }
}

impl<B: Backend> Deref for Tui<B> {
    type Target = ratatui::Terminal<B>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl<B: Backend> DerefMut for Tui<B> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        self.cancellation_token.cancel();
        if let Some(t) = self.task.take() {
            t.abort();
        }
        if crossterm::terminal::is_raw_mode_enabled().unwrap_or(false) {
            let _ = crossterm::execute!(
                std::io::stderr(),
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            );
            let _ = crossterm::terminal::disable_raw_mode();
        }
    }
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            ratatui::restore(); // ignore any errors as we are already failing
            hook(panic_info);
        }));
    });
}
