//! Color and style definitions for the menu screens.
//!
//! Colors keep the cyan accent palette; every state that matters (the
//! selected row) is also carried by a modifier so it survives monochrome
//! terminals.

use ratatui::style::{Color, Modifier, Style};

// === Palette ===

/// Primary cyan accent - main highlight color.
pub const CYAN_PRIMARY: Color = Color::Rgb(6, 182, 212);
/// Lighter cyan for highlights.
pub const CYAN_LIGHT: Color = Color::Rgb(34, 211, 238);
/// Warning amber.
pub const AMBER: Color = Color::Rgb(245, 158, 11);
/// Coral red - errors.
pub const CORAL_RED: Color = Color::Rgb(239, 68, 68);
/// Muted gray text.
pub const TEXT_MUTED: Color = Color::Rgb(148, 163, 184);

// === Semantic Styles ===

/// Menu title row.
pub fn title() -> Style {
    Style::default()
        .fg(CYAN_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

/// Unselected option.
pub fn option() -> Style {
    Style::default()
}

/// Selected option: inverted.
pub fn option_selected() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Search prompt label and query.
pub fn search() -> Style {
    Style::default().fg(CYAN_LIGHT)
}

/// Hint shown when no query is active.
pub fn hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Scroll indicators and position counter.
pub fn indicator() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Footer key bindings.
pub fn footer() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// "No matches" and "too small" notices.
pub fn warning() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// Fatal notices (profiles directory unreadable).
pub fn error() -> Style {
    Style::default()
        .fg(CORAL_RED)
        .add_modifier(Modifier::BOLD)
}
