//! Header and headline metric tiles.

use chrono::Local;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tablero_core::models::STATUS_ORDER;
use tablero_core::render_model::RenderModel;
use tablero_core::store::Metrics;

use crate::ui::theme;

/// Title, refresh indicator and "Updated HH:MM:SS · auto-refresh every Ns"
pub fn render_header(f: &mut Frame, model: &RenderModel, area: Rect) {
    let mut title = vec![Span::styled("Agent status", theme::text_bold())];
    if model.refreshing {
        title.push(Span::styled("  ● refreshing", theme::status_warning()));
    }

    let updated = match model.updated_at {
        Some(at) => format!(
            "Updated {} · auto-refresh every {}s",
            at.with_timezone(&Local).format("%H:%M:%S"),
            model.refresh_interval_secs
        ),
        None => "Loading agents…".to_string(),
    };

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(updated, theme::text_muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

/// ACTIVE tile followed by one tile per status
pub fn render_metrics(f: &mut Frame, metrics: &Metrics, area: Rect) {
    let tiles = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(area);

    render_tile(f, "ACTIVE", metrics.active_ratio(), theme::ACCENT_SUCCESS, tiles[0]);
    for (status, tile) in STATUS_ORDER.iter().zip(tiles.iter().skip(1)) {
        render_tile(
            f,
            status.metric_label(),
            metrics.count(*status).to_string(),
            theme::status_color(*status),
            *tile,
        );
    }
}

fn render_tile(f: &mut Frame, label: &str, value: String, color: Color, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_inactive())
        .title(Span::styled(format!(" {label} "), theme::text_muted()))
        .style(Style::default().bg(theme::BG_CARD));

    let value = Paragraph::new(Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .block(block);
    f.render_widget(value, area);
}
