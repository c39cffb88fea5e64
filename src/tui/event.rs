use crossterm::event::{KeyEvent, MouseEvent};

/// Events driving the combobox
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// An error occurred
    Error(String),
    /// Render the UI
    Render,
    /// A key was pressed
    Key(KeyEvent),
    /// A mouse event occurred
    Mouse(MouseEvent),
    /// An action was triggered
    Action(Action),
    /// Redraw the screen
    Redraw,
    /// The terminal was resized
    Resize,
}

/// Actions that can be bound to keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit without accepting
    Abort,
    /// Quit, keeping the selected item
    Accept,
    /// Add a character to the query
    AddChar(char),
    /// Move cursor backward one character
    BackwardChar,
    /// Delete character before cursor
    BackwardDeleteChar,
    /// Move cursor to beginning of line
    BeginningOfLine,
    /// Clear the screen
    ClearScreen,
    /// Drop the selected item and the query
    ClearSelection,
    /// Delete character under cursor
    DeleteChar,
    /// Move the highlight down by N items
    Down(u16),
    /// Move cursor to end of line
    EndOfLine,
    /// Move cursor forward one character
    ForwardChar,
    /// Do nothing
    Ignore,
    /// Close the menu and restore the query to the selected item
    Reset,
    /// Select the highlighted item
    Select,
    /// Click the external "Toggle isOpen" button
    ToggleIsOpen,
    /// Click the combobox's toggle control
    ToggleMenu,
    /// Delete from the cursor to the beginning of the line
    UnixLineDiscard,
    /// Delete the word before the cursor
    UnixWordRubout,
    /// Move the highlight up by N items
    Up(u16),
}

/// Parses an action string into an Action enum
pub fn parse_action(raw_action: &str) -> Option<Action> {
    use Action::*;

    let (action, arg) = match raw_action.split_once([':', '(']) {
        None => (raw_action, None),
        Some((act, "")) => (act, None),
        Some((act, a)) => (act, Some(a.trim_end_matches(')'))),
    };
    debug!("parse_action: action={action}, arg={arg:?}");
    let count = || arg.and_then(|s| s.parse().ok()).unwrap_or(1);

    match action {
        "abort" => Some(Abort),
        "accept" => Some(Accept),
        "add-char" => arg.and_then(|a| a.chars().next()).map(AddChar),
        "backward-char" => Some(BackwardChar),
        "backward-delete-char" => Some(BackwardDeleteChar),
        "beginning-of-line" => Some(BeginningOfLine),
        "clear-screen" => Some(ClearScreen),
        "clear-selection" => Some(ClearSelection),
        "delete-char" => Some(DeleteChar),
        "down" => Some(Down(count())),
        "end-of-line" => Some(EndOfLine),
        "forward-char" => Some(ForwardChar),
        "ignore" => Some(Ignore),
        "reset" => Some(Reset),
        "select" => Some(Select),
        "toggle-is-open" => Some(ToggleIsOpen),
        "toggle-menu" => Some(ToggleMenu),
        "unix-line-discard" => Some(UnixLineDiscard),
        "unix-word-rubout" => Some(UnixWordRubout),
        "up" => Some(Up(count())),
        _ => None,
    }
}
