//! Message system for the menu controller.
//!
//! Key presses are first translated into a [`Message`], then applied to the
//! menu state in one place. This keeps the key map separate from the
//! navigation rules and lets both be tested on their own.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Direction for list selection movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMove {
    Next,
    Prev,
    PageDown,
    PageUp,
    First,
    Last,
}

impl SelectionMove {
    /// New selected position for a list of `len` items, clamped to its bounds.
    #[must_use]
    pub fn apply(self, selected: usize, len: usize, page: usize) -> usize {
        let last = len.saturating_sub(1);
        match self {
            Self::Next => (selected + 1).min(last),
            Self::Prev => selected.saturating_sub(1),
            Self::PageDown => (selected + page).min(last),
            Self::PageUp => selected.saturating_sub(page),
            Self::First => 0,
            Self::Last => last,
        }
    }
}

/// Everything a key press can ask the menu to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move the selection within the filtered list
    Move(SelectionMove),
    /// Open the search modal
    OpenSearch,
    /// Clear the active query, or leave the menu when there is none
    Back,
    /// Commit the selected option
    Select,
    /// Leave the menu
    Quit,
    /// Ctrl-C: abandon the whole run
    Interrupt,
}

impl Message {
    /// Whether this message is still honored while the filter matches nothing.
    #[must_use]
    pub const fn allowed_without_matches(self) -> bool {
        matches!(self, Self::Quit | Self::Interrupt | Self::OpenSearch | Self::Back)
    }

    /// Whether this message is honored while the terminal is below minimum size.
    #[must_use]
    pub const fn allowed_when_too_small(self) -> bool {
        matches!(self, Self::Quit | Self::Interrupt)
    }
}

/// Translate a key press into a message. Unbound keys yield `None`.
#[must_use]
pub fn message_for_key(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return (key.code == KeyCode::Char('c')).then_some(Message::Interrupt);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Message::Move(SelectionMove::Prev),
        KeyCode::Down | KeyCode::Char('j') => Message::Move(SelectionMove::Next),
        KeyCode::PageUp => Message::Move(SelectionMove::PageUp),
        KeyCode::PageDown => Message::Move(SelectionMove::PageDown),
        KeyCode::Home => Message::Move(SelectionMove::First),
        KeyCode::End => Message::Move(SelectionMove::Last),
        KeyCode::Enter => Message::Select,
        KeyCode::Char('/') => Message::OpenSearch,
        KeyCode::Esc => Message::Back,
        KeyCode::Char('q' | 'Q') => Message::Quit,
        _ => return None,
    };
    Some(msg)
}
