use std::sync::Arc;

use color_eyre::eyre::{self, OptionExt, Result};
use ratatui::prelude::CrosstermBackend;

use crate::item::{ITEMS, Item};
use crate::options::ComboboxOptions;
use crate::output::ComboboxOutput;
use crate::theme::ColorTheme;
use crate::tui::{App, Size, Tui};

/// A running combobox: the application state and the terminal it draws to
pub struct Session<Backend = CrosstermBackend<std::io::Stderr>>
where
    Backend: ratatui::backend::Backend,
{
    app: App,
    height: Size,
    tui: Option<Tui<Backend>>,
}

impl Session {
    /// Runs the combobox until the user accepts or aborts.
    ///
    /// Builds its own single-threaded tokio runtime and draws to stderr, so that
    /// stdout stays free for the output.
    pub fn run_with(options: ComboboxOptions) -> Result<ComboboxOutput> {
        trace!("running combobox");
        let mut session = Self::init(options)?;
        session.init_tui()?;

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(async {
            session.enter()?;
            session.run().await?;
            eyre::Ok(())
        })?;

        let output = session.output()?;
        debug!("output: {output:?}");
        Ok(output)
    }

    /// Initialize the TUI with the default crossterm backend, but do not enter it yet
    pub fn init_tui(&mut self) -> Result<()> {
        let backend = CrosstermBackend::new(std::io::stderr());
        self.tui = Some(Tui::new_with_height(backend, self.height)?);
        Ok(())
    }
}

impl<Backend: ratatui::backend::Backend + 'static> Session<Backend>
where
    Backend::Error: Send + Sync + 'static,
{
    /// Initialize the session over the compiled-in items, without starting anything yet
    pub fn init(options: ComboboxOptions) -> Result<Self> {
        Self::init_with_source(options, ITEMS.clone())
    }

    /// Initialize the session over the given items
    pub fn init_with_source(options: ComboboxOptions, source: Arc<[Item]>) -> Result<Self> {
        let height = Size::try_from(options.height.as_str())?;
        let theme = Arc::new(ColorTheme::init_from_options(&options));
        Ok(Self {
            app: App::with_source(options, theme, source),
            height,
            tui: None,
        })
    }

    /// Use an already built TUI, e.g. over a test backend
    pub fn init_tui_with(&mut self, tui: Tui<Backend>) {
        self.tui = Some(tui);
    }

    /// The application state
    pub fn app(&self) -> &App {
        &self.app
    }

    /// The application state, mutably
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }

    /// The TUI, if initialized
    pub fn tui_ref(&self) -> Option<&Tui<Backend>> {
        self.tui.as_ref()
    }

    /// The TUI, mutably
    pub fn tui_mut(&mut self) -> Result<&mut Tui<Backend>> {
        self.tui.as_mut().ok_or_eyre("TUI is not initialized")
    }

    /// Both the application state and the TUI, for driving events by hand
    pub fn app_and_tui(&mut self) -> Result<(&mut App, &mut Tui<Backend>)> {
        let tui = self.tui.as_mut().ok_or_eyre("TUI is not initialized")?;
        Ok((&mut self.app, tui))
    }

    /// Takes over the terminal and starts listening to it
    pub fn enter(&mut self) -> Result<()> {
        let mouse = !self.app.options.no_mouse;
        self.tui_mut()?.enter(mouse)
    }

    /// Returns true once the user accepted or aborted
    pub fn should_quit(&self) -> bool {
        self.app.should_quit
    }

    /// Process a single event.
    ///
    /// Returns `Ok(true)` if the combobox should quit, `Ok(false)` to continue.
    pub async fn tick(&mut self) -> Result<bool> {
        let (app, tui) = self.app_and_tui()?;
        let event = tui.next().await?;
        trace!("event: {event:?}");
        app.handle_event(tui, &event)?;
        Ok(self.app.should_quit)
    }

    /// Run the event loop until the combobox quits
    pub async fn run(&mut self) -> Result<()> {
        trace!("Starting event loop");
        loop {
            if self.tick().await? {
                break Ok(());
            }
        }
    }

    /// Leaves the terminal and extracts the output
    pub fn output(mut self) -> Result<ComboboxOutput> {
        if let Some(mut tui) = self.tui.take() {
            tui.exit()?;
        }
        Ok(self.app.output())
    }
}
