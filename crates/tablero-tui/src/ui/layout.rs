// Layout constants and helpers shared by all dashboard regions

use ratatui::layout::Rect;

// =============================================================================
// CHROME
// =============================================================================

/// Title line plus "Updated ..." line
pub const HEADER_HEIGHT: u16 = 2;

/// Bordered metric tiles
pub const METRICS_HEIGHT: u16 = 4;

/// Category tabs and search field
pub const FILTER_BAR_HEIGHT: u16 = 1;

/// Status bar height (single line at very bottom of app)
pub const STATUSBAR_HEIGHT: u16 = 1;

/// Horizontal padding for the main content (left + right)
pub const CONTENT_PADDING_H: u16 = 1;

// =============================================================================
// AGENT GRID
// =============================================================================

/// Card width including borders
pub const CARD_WIDTH: u16 = 36;

/// Borders plus three content lines
pub const CARD_HEIGHT: u16 = 5;

/// Detail panel width when an agent is selected
pub const DETAIL_PANEL_WIDTH: u16 = 46;

/// Grid columns that fit in `width`, never zero
pub fn grid_columns(width: u16) -> usize {
    (width / CARD_WIDTH).max(1) as usize
}

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(0), 1);
        assert_eq!(grid_columns(CARD_WIDTH - 1), 1);
        assert_eq!(grid_columns(CARD_WIDTH * 3), 3);
        assert_eq!(grid_columns(CARD_WIDTH * 3 + 10), 3);
    }

    #[test]
    fn test_padding_saturates() {
        let area = Rect::new(0, 0, 1, 5);
        assert_eq!(with_content_padding(area).width, 0);
    }
}
