//! Footer widget with width-adaptive keybinding hints

use ratatui::{text::Line, Frame};

use crate::constants::{
    FOOTER_COMPACT, FOOTER_FULL, FOOTER_FULL_WIDTH, FOOTER_MEDIUM, FOOTER_MEDIUM_WIDTH,
};
use crate::theme;
use crate::utils;

/// Instruction text for a terminal `width` columns wide.
pub fn instructions(width: u16) -> &'static str {
    if width >= FOOTER_FULL_WIDTH {
        FOOTER_FULL
    } else if width >= FOOTER_MEDIUM_WIDTH {
        FOOTER_MEDIUM
    } else {
        FOOTER_COMPACT
    }
}

/// Draw the hints centered on row `y`, truncated to leave a one-column margin.
pub fn render(frame: &mut Frame, y: u16, text: &str) {
    let width = frame.area().width;
    let text = utils::truncate(text, usize::from(width.saturating_sub(2)));
    let x = utils::centered_x(usize::from(width), utils::display_width(&text));
    crate::ui::put(
        frame,
        u16::try_from(x).unwrap_or(u16::MAX),
        y,
        Line::styled(text, theme::footer()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_tiers() {
        assert_eq!(instructions(120), FOOTER_FULL);
        assert_eq!(instructions(80), FOOTER_FULL);
        assert_eq!(instructions(79), FOOTER_MEDIUM);
        assert_eq!(instructions(60), FOOTER_MEDIUM);
        assert_eq!(instructions(59), FOOTER_COMPACT);
        assert_eq!(instructions(30), FOOTER_COMPACT);
    }

    #[test]
    fn test_each_tier_fits_its_narrowest_width() {
        assert!(utils::display_width(FOOTER_FULL) <= usize::from(FOOTER_FULL_WIDTH - 2));
        assert!(utils::display_width(FOOTER_MEDIUM) <= usize::from(FOOTER_MEDIUM_WIDTH - 2));
        assert!(
            utils::display_width(FOOTER_COMPACT)
                <= usize::from(crate::constants::MIN_TERMINAL_WIDTH - 2)
        );
    }
}
