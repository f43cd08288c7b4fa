//! Menu screen.
//!
//! [`project`] turns a menu state and the terminal size into a [`MenuView`]
//! without touching the terminal; [`render`] draws that view. The controller
//! writes the clamped selection and scroll offset back into the state.
//!
//! Rows, top to bottom: blank, title, search line, up-indicator, options,
//! down-indicator with position counter, instructions, blank.

use ratatui::{text::Line, Frame};

use crate::constants::{
    FOOTER_LINES, HEADER_LINES, HINT_SEARCH, INDICATOR_DOWN, INDICATOR_UP,
    LABEL_SEARCH, MIN_TERMINAL_HEIGHT, MIN_TERMINAL_WIDTH, MSG_NO_MATCHES, MSG_TOO_SMALL,
    MSG_TOO_SMALL_HINT, SEARCH_PROMPT_X, SEARCH_ROW, TITLE_DECORATION, TITLE_ROW,
    UP_INDICATOR_ROW,
};
use crate::state::MenuState;
use crate::theme;
use crate::ui::{put, widgets::footer};
use crate::utils::{centered_x, display_width, truncate, truncate_left};

/// One visible option, already fitted to the screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionRow {
    pub y: u16,
    pub x: u16,
    pub text: String,
    pub selected: bool,
}

/// Contents of the search line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchLine {
    /// No query: show how to start one.
    Hint,
    /// Active query, already fitted after the label.
    Query(String),
}

/// Everything needed to draw a usable menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuLayout {
    pub width: u16,
    pub height: u16,
    /// Decorated and fitted title.
    pub title: String,
    pub search_line: SearchLine,
    /// Selected position, clamped into the filtered options.
    pub selected: usize,
    /// First visible position, adjusted so the selection is on screen.
    pub scroll_offset: usize,
    pub rows: Vec<OptionRow>,
    /// The query filtered every option out.
    pub no_matches: bool,
    pub more_above: bool,
    pub more_below: bool,
    /// `(current/total)`, present when the list scrolls and the counter fits.
    pub counter: Option<String>,
    pub footer: &'static str,
}

/// What one render pass shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuView {
    /// Below minimum size; only a notice is drawn.
    TooSmall { width: u16, height: u16 },
    Menu(MenuLayout),
}

impl MenuView {
    pub const fn is_too_small(&self) -> bool {
        matches!(self, Self::TooSmall { .. })
    }
}

/// Option rows available on a terminal `height` rows tall.
#[must_use]
pub fn available_lines(height: u16) -> usize {
    usize::from(height.saturating_sub(HEADER_LINES + FOOTER_LINES)).max(1)
}

/// Scroll offset that keeps `selected` inside a window of `available` rows
/// over a list of `len` items, moving `offset` as little as possible.
#[must_use]
pub fn fit_scroll(selected: usize, offset: usize, available: usize, len: usize) -> usize {
    let mut offset = offset;
    if selected < offset {
        offset = selected;
    } else if selected >= offset + available {
        offset = selected + 1 - available;
    }
    offset.min(len.saturating_sub(available))
}

/// Lay out `menu` for a `width` x `height` terminal.
///
/// Pure: the same inputs always give the same view.
#[must_use]
pub fn project(width: u16, height: u16, menu: &MenuState) -> MenuView {
    if height < MIN_TERMINAL_HEIGHT || width < MIN_TERMINAL_WIDTH {
        return MenuView::TooSmall { width, height };
    }

    let available = available_lines(height);
    let filtered: Vec<String> = menu.filtered().into_iter().map(str::to_string).collect();
    let len = filtered.len();

    let (selected, scroll_offset) = if filtered.is_empty() {
        (0, 0)
    } else {
        let selected = menu.selected.min(len - 1);
        (
            selected,
            fit_scroll(selected, menu.scroll_offset, available, len),
        )
    };

    // One column of margin on each side.
    let text_width = usize::from(width.saturating_sub(2));

    let rows = filtered
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(available)
        .zip(HEADER_LINES..)
        .map(|((pos, option), y)| {
            let text = truncate(option, text_width);
            OptionRow {
                y,
                x: to_col(centered_x(usize::from(width), display_width(&text))),
                text,
                selected: pos == selected,
            }
        })
        .collect();

    let scrolls = len > available;
    let more_above = scrolls && scroll_offset > 0;
    let more_below = scrolls && scroll_offset + available < len;
    let counter = scrolls
        .then(|| format!("({}/{len})", selected + 1))
        // Must stay clear of the centered down-indicator.
        .filter(|c| display_width(c) + 2 < usize::from(width) / 2);

    let title = truncate(
        &format!("{TITLE_DECORATION} {} {TITLE_DECORATION}", menu.title),
        text_width,
    );

    let search_line = if menu.query.is_empty() {
        SearchLine::Hint
    } else {
        let room = usize::from(width)
            .saturating_sub(usize::from(SEARCH_PROMPT_X) + display_width(LABEL_SEARCH) + 1);
        SearchLine::Query(truncate_left(&menu.query, room))
    };

    MenuView::Menu(MenuLayout {
        width,
        height,
        title,
        search_line,
        no_matches: filtered.is_empty() && !menu.options().is_empty(),
        selected,
        scroll_offset,
        rows,
        more_above,
        more_below,
        counter,
        footer: footer::instructions(width),
    })
}

/// Draw a projected view.
pub fn render(frame: &mut Frame, view: &MenuView) {
    match view {
        MenuView::TooSmall { width, height } => render_too_small(frame, *width, *height),
        MenuView::Menu(layout) => render_layout(frame, layout),
    }
}

fn render_layout(frame: &mut Frame, layout: &MenuLayout) {
    let width = usize::from(layout.width);
    let bottom = layout.height;

    put(
        frame,
        to_col(centered_x(width, display_width(&layout.title))),
        TITLE_ROW,
        Line::styled(layout.title.as_str(), theme::title()),
    );

    match &layout.search_line {
        SearchLine::Hint => put(
            frame,
            SEARCH_PROMPT_X,
            SEARCH_ROW,
            Line::styled(HINT_SEARCH, theme::hint()),
        ),
        SearchLine::Query(query) => put(
            frame,
            SEARCH_PROMPT_X,
            SEARCH_ROW,
            Line::styled(format!("{LABEL_SEARCH}{query}"), theme::search()),
        ),
    }

    if layout.more_above {
        put(
            frame,
            to_col(centered_x(width, display_width(INDICATOR_UP))),
            UP_INDICATOR_ROW,
            Line::styled(INDICATOR_UP, theme::indicator()),
        );
    }

    if layout.no_matches {
        put(
            frame,
            to_col(centered_x(width, display_width(MSG_NO_MATCHES))),
            HEADER_LINES,
            Line::styled(MSG_NO_MATCHES, theme::warning()),
        );
    }

    for row in &layout.rows {
        let style = if row.selected {
            theme::option_selected()
        } else {
            theme::option()
        };
        put(frame, row.x, row.y, Line::styled(row.text.as_str(), style));
    }

    let status_row = bottom.saturating_sub(FOOTER_LINES);
    if layout.more_below {
        put(
            frame,
            to_col(centered_x(width, display_width(INDICATOR_DOWN))),
            status_row,
            Line::styled(INDICATOR_DOWN, theme::indicator()),
        );
    }
    if let Some(counter) = &layout.counter {
        let x = width.saturating_sub(display_width(counter) + 2);
        put(
            frame,
            to_col(x),
            status_row,
            Line::styled(counter.as_str(), theme::indicator()),
        );
    }

    footer::render(frame, bottom.saturating_sub(2), layout.footer);
}

fn render_too_small(frame: &mut Frame, width: u16, height: u16) {
    let max = usize::from(width);
    let middle = height / 2;
    for (y, text) in [
        (middle.saturating_sub(1), MSG_TOO_SMALL),
        (middle, MSG_TOO_SMALL_HINT),
    ] {
        let text = truncate(text, max);
        put(
            frame,
            to_col(centered_x(max, display_width(&text))),
            y,
            Line::styled(text, theme::warning()),
        );
    }
}

fn to_col(x: usize) -> u16 {
    u16::try_from(x).unwrap_or(u16::MAX)
}
