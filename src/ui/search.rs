//! Search input strip.
//!
//! While the modal is open the menu is drawn live-filtered by the query being
//! typed, and the search line becomes an input strip with the cursor at its end.

use ratatui::{layout::Rect, text::Line, widgets::Clear, Frame};

use crate::constants::{
    LABEL_SEARCH, MIN_SEARCH_STRIP_WIDTH, SEARCH_PROMPT_X, SEARCH_ROW, SEARCH_STRIP_MARGIN,
    SEARCH_STRIP_X,
};
use crate::theme;
use crate::ui::menu::{self, MenuView};
use crate::ui::put;
use crate::utils::{display_width, truncate_left};

/// Width of the input strip on a terminal `width` columns wide, or `None`
/// when it would be too narrow to type into.
#[must_use]
pub fn strip_width(width: u16) -> Option<u16> {
    let strip = width.saturating_sub(SEARCH_STRIP_X + SEARCH_STRIP_MARGIN);
    (strip >= MIN_SEARCH_STRIP_WIDTH).then_some(strip)
}

/// Draw `view` with the input strip holding `query` over its search line.
pub fn render(frame: &mut Frame, view: &MenuView, query: &str) {
    menu::render(frame, view);

    let MenuView::Menu(layout) = view else {
        return;
    };
    let Some(strip) = strip_width(layout.width) else {
        return;
    };

    let row = Rect::new(0, SEARCH_ROW, layout.width, 1).intersection(frame.area());
    frame.render_widget(Clear, row);

    // One cell stays free for the cursor.
    let shown = truncate_left(query, usize::from(strip.saturating_sub(1)));
    let cursor_x = SEARCH_STRIP_X + u16::try_from(display_width(&shown)).unwrap_or(strip);

    put(
        frame,
        SEARCH_PROMPT_X,
        SEARCH_ROW,
        Line::styled(LABEL_SEARCH, theme::search()),
    );
    put(
        frame,
        SEARCH_STRIP_X,
        SEARCH_ROW,
        Line::styled(shown, theme::search()),
    );

    let area = frame.area();
    if cursor_x < area.right() && SEARCH_ROW < area.bottom() {
        frame.set_cursor_position((cursor_x, SEARCH_ROW));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MenuState;
    use crate::ui::test_support::rows;
    use ratatui::{backend::TestBackend, layout::Position, Terminal};

    fn draw(width: u16, query: &str) -> Terminal<TestBackend> {
        let mut state = MenuState::new(
            "Select a Country",
            vec!["France".to_string(), "USA".to_string()],
        );
        state.query = query.to_string();
        let view = menu::project(width, 12, &state);
        let mut terminal = Terminal::new(TestBackend::new(width, 12)).unwrap();
        terminal.draw(|frame| render(frame, &view, query)).unwrap();
        terminal
    }

    #[test]
    fn test_strip_width_thresholds() {
        assert_eq!(strip_width(80), Some(68));
        assert_eq!(strip_width(20), Some(8));
        assert_eq!(strip_width(19), None);
        assert_eq!(strip_width(0), None);
    }

    #[test]
    fn test_strip_shows_query_and_places_cursor() {
        let mut terminal = draw(40, "fra");
        let rows = rows(terminal.backend().buffer());
        assert_eq!(rows[2].trim_end(), "  Search: fra");
        assert_eq!(rows[4].trim(), "France");
        assert!(!rows.iter().any(|r| r.contains("USA")));
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(13, 2));
    }

    #[test]
    fn test_strip_keeps_end_of_long_query() {
        let query = "abcdefghijklmnopqrstuvwxyz0123456789";
        let terminal = draw(40, query);
        let rows = rows(terminal.backend().buffer());
        // 28 column strip, one cell kept for the cursor.
        assert_eq!(rows[2].trim_end(), format!("  Search: ...{}", &query[12..]));
    }

    #[test]
    fn test_empty_query_shows_empty_strip() {
        let mut terminal = draw(40, "");
        let rows = rows(terminal.backend().buffer());
        assert_eq!(rows[2].trim_end(), "  Search:");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(10, 2));
    }
}
