use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tablero_core::models::StatusCategory;
use tablero_core::store::FilterState;

use crate::ui::theme;

const SEARCH_PLACEHOLDER: &str = "/ search name or email";

/// Numbered category tabs, then the search field
pub fn render_filter_bar(f: &mut Frame, filter: &FilterState, editing: bool, area: Rect) {
    let mut spans = Vec::new();

    for (index, category) in StatusCategory::ALL_OPTIONS.iter().enumerate() {
        let text = format!(" {} {} ", index + 1, category.label());
        let style = if *category == filter.category {
            theme::interactive_selected().bg(theme::BG_SELECTED)
        } else {
            theme::text_muted()
        };
        spans.push(Span::styled(text, style));
    }

    spans.push(Span::raw("   "));
    if editing {
        spans.push(Span::styled("/ ", theme::border_focused()));
        spans.push(Span::styled(
            format!("{}▏", filter.search_text),
            theme::text_primary().bg(theme::BG_INPUT),
        ));
    } else if filter.search_text.is_empty() {
        spans.push(Span::styled(SEARCH_PLACEHOLDER, theme::text_dim()));
    } else {
        spans.push(Span::styled("/ ", theme::text_dim()));
        spans.push(Span::styled(filter.search_text.clone(), theme::text_primary()));
    }

    let bar = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::BG_SIDEBAR));
    f.render_widget(bar, area);
}
