// Status bar at the very bottom of the screen
// Fetch error (or quit warning) on the left, key hints on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::format::{single_line, truncate_with_ellipsis};
use crate::ui::theme;

const HINTS_NORMAL: &str = "1-5 filter · / search · ⏎ detail · r refresh · q quit ";
const HINTS_EDITING: &str = "⏎/Esc done · ⌫ delete ";
const QUIT_WARNING: &str = "Press Ctrl+C again to quit";

pub fn render_statusbar(
    f: &mut Frame,
    area: Rect,
    error: Option<&str>,
    pending_quit: bool,
    editing: bool,
) {
    let hints = if editing { HINTS_EDITING } else { HINTS_NORMAL };
    let chunks = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(hints.width() as u16),
    ])
    .split(area);

    let message_area = chunks[0];
    let available = (message_area.width as usize).saturating_sub(3);

    let message = if pending_quit {
        Line::from(vec![
            Span::styled(" \u{26A0} ", theme::status_warning()),
            Span::styled(QUIT_WARNING, theme::status_warning()),
        ])
    } else if let Some(error) = error {
        // Stale data stays on screen; the error explains why it is not updating
        Line::from(vec![
            Span::styled(" \u{2717} ", theme::status_error()),
            Span::styled(
                truncate_with_ellipsis(&single_line(error), available),
                theme::status_error(),
            ),
        ])
    } else {
        Line::from("")
    };

    f.render_widget(
        Paragraph::new(message).style(Style::default().bg(theme::BG_SIDEBAR)),
        message_area,
    );
    f.render_widget(
        Paragraph::new(Span::styled(hints, theme::text_dim()))
            .style(Style::default().bg(theme::BG_SIDEBAR)),
        chunks[1],
    );
}
