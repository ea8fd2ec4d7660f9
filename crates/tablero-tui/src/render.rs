use chrono::Utc;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::render_statusbar;
use crate::ui::{layout, theme, views, App, InputMode};

pub(crate) fn render(f: &mut Frame, app: &mut App) {
    // Fill entire frame with app background (pure black)
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let model = app.dashboard.render_model(Utc::now());
    let editing = app.input_mode == InputMode::Editing;

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::METRICS_HEIGHT),
        Constraint::Length(layout::FILTER_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .split(f.area());

    views::render_header(f, &model, layout::with_content_padding(chunks[0]));
    views::render_metrics(f, &model.metrics, chunks[1]);
    views::render_filter_bar(f, &model.filter, editing, chunks[2]);

    let body = layout::with_content_padding(chunks[3]);
    let (grid_area, detail_area) = match &model.selection {
        Some(_) => {
            let split = Layout::horizontal([
                Constraint::Min(0),
                Constraint::Length(layout::DETAIL_PANEL_WIDTH),
            ])
            .split(body);
            (split[0], Some(split[1]))
        }
        None => (body, None),
    };

    let columns = layout::grid_columns(grid_area.width);
    app.set_grid_columns(columns);
    views::render_agent_grid(f, &model.agent_cards, app.card_cursor(), columns, grid_area);

    if let (Some(detail), Some(area)) = (&model.selection, detail_area) {
        views::render_detail(f, detail, area);
    }

    render_statusbar(
        f,
        chunks[4],
        model.error.as_deref(),
        app.pending_quit,
        editing,
    );
}
