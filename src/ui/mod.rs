//! TUI rendering.
//!
//! - `menu`: projection of a [`MenuState`](crate::state::MenuState) onto the screen
//! - `search`: the search input strip drawn over the menu
//! - `notice`: full-screen acknowledgement notices
//! - `widgets`: shared pieces (footer)

pub mod menu;
pub mod notice;
pub mod search;
pub mod widgets;

use ratatui::{layout::Rect, text::Line, Frame};

/// Draw a single line at `(x, y)`, clipped to the frame.
///
/// Anything outside the frame is dropped, so a layout computed for a larger
/// terminal never panics after a resize.
pub fn put(frame: &mut Frame, x: u16, y: u16, line: Line<'_>) {
    let width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    let target = Rect::new(x, y, width, 1).intersection(frame.area());
    if target.is_empty() {
        return;
    }
    frame.render_widget(line, target);
}
