use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tablero_core::render_model::AgentCard;

use crate::ui::format::{spread, truncate_with_ellipsis};
use crate::ui::layout::{CARD_HEIGHT, CARD_WIDTH};
use crate::ui::theme;

pub const EMPTY_STATE: &str = "No agents in this status";

/// Cards laid out row by row, scrolled so the cursor row stays visible
pub fn render_agent_grid(
    f: &mut Frame,
    cards: &[AgentCard],
    cursor: usize,
    columns: usize,
    area: Rect,
) {
    if cards.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_STATE, theme::text_muted()))
            .alignment(Alignment::Center);
        let middle = Rect {
            y: area.y + area.height / 2,
            height: area.height.min(1),
            ..area
        };
        f.render_widget(empty, middle);
        return;
    }

    let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
    let cursor_row = cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    for (index, card) in cards.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= visible_rows {
            break;
        }
        let col = index % columns;

        let x = area.x + col as u16 * CARD_WIDTH;
        let y = area.y + row as u16 * CARD_HEIGHT;
        let rect = Rect {
            x,
            y,
            width: CARD_WIDTH.min(area.right().saturating_sub(x)),
            height: CARD_HEIGHT.min(area.bottom().saturating_sub(y)),
        };
        if rect.width > 2 && rect.height > 2 {
            render_card(f, card, index == cursor, rect);
        }
    }
}

fn render_card(f: &mut Frame, card: &AgentCard, is_cursor: bool, area: Rect) {
    let status = card.agent.status;
    let border_style = if is_cursor {
        theme::border_focused()
    } else if card.selected {
        Style::default().fg(theme::status_color(status))
    } else {
        theme::border_inactive()
    };
    let bg = if is_cursor { theme::BG_SELECTED } else { theme::BG_CARD };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(Style::default().bg(bg));

    let inner_width = area.width.saturating_sub(2) as usize;
    let badge = card.ticket_badge().unwrap_or_default();
    let (name, badge) = spread(
        &format!("{} {}", status.icon(), card.agent.name),
        &badge,
        inner_width,
    );

    let mut name_style = theme::text_bold();
    if card.selected {
        name_style = name_style.add_modifier(Modifier::UNDERLINED);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(name, name_style),
            Span::styled(badge, theme::status_warning()),
        ]),
        Line::from(Span::styled(
            truncate_with_ellipsis(status.label(), inner_width),
            theme::status_style(status),
        )),
        Line::from(Span::styled(
            truncate_with_ellipsis(&card.meta_line(), inner_width),
            theme::text_dim(),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
