//! Full-screen notices that need a key press before the program exits.

use std::path::Path;

use ratatui::{
    layout::{Alignment, Constraint, Layout},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::constants::{MSG_LIST_FAILED, MSG_NO_PROFILES, MSG_PRESS_ANY_KEY};
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The directory was read but holds no usable profiles.
    Empty,
    /// The directory could not be listed.
    Error,
}

/// A message shown alone on screen until acknowledged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn no_profiles(dir: &Path) -> Self {
        Self {
            kind: NoticeKind::Empty,
            message: format!("{MSG_NO_PROFILES}{}", dir.display()),
        }
    }

    pub fn list_failed(dir: &Path, err: &std::io::Error) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: format!("{MSG_LIST_FAILED}{}: {err}", dir.display()),
        }
    }

    /// Process exit status once the notice is acknowledged.
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            NoticeKind::Empty => 0,
            NoticeKind::Error => 1,
        }
    }
}

/// Draw the notice centered, wrapping long paths.
pub fn render(frame: &mut Frame, notice: &Notice) {
    let style = match notice.kind {
        NoticeKind::Empty => theme::warning(),
        NoticeKind::Error => theme::error(),
    };

    let text = vec![
        Line::styled(notice.message.as_str(), style),
        Line::from(""),
        Line::styled(MSG_PRESS_ANY_KEY, theme::hint()),
    ];

    let [_, body, _] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(5),
        Constraint::Min(0),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body,
    );
}
