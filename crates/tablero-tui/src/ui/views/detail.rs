use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tablero_core::render_model::{AgentDetail, TicketRow};

use crate::ui::format::truncate_with_ellipsis;
use crate::ui::theme;

pub const NO_TICKETS: &str = "No active tickets";
pub const NO_EMAIL: &str = "no email on file";

/// Side panel for the selected agent
pub fn render_detail(f: &mut Frame, detail: &AgentDetail, area: Rect) {
    let status = detail.agent.status;
    let width = area.width.saturating_sub(4) as usize;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::status_color(status)))
        .title(Span::styled(
            format!(" {} ", truncate_with_ellipsis(&detail.agent.name, width)),
            theme::text_bold(),
        ))
        .title_bottom(Span::styled(" Esc close ", theme::text_dim()))
        .style(Style::default().bg(theme::BG_CARD));

    let email = if detail.agent.email.is_empty() {
        NO_EMAIL
    } else {
        detail.agent.email.as_str()
    };

    let mut lines = vec![
        Line::from(Span::styled(truncate_with_ellipsis(email, width), theme::text_muted())),
        Line::from(Span::styled(
            format!("{} {}", status.icon(), detail.status_heading),
            theme::status_style(status),
        )),
        Line::from(""),
        labelled("Last active", &detail.formatted_last_active),
        labelled("Available since", &detail.formatted_available_since),
        labelled("Open tickets", &detail.agent.open_tickets_count.to_string()),
        Line::from(""),
        Line::from(Span::styled("TICKETS", theme::text_bold())),
    ];

    if detail.tickets.is_empty() {
        lines.push(Line::from(Span::styled(NO_TICKETS, theme::text_dim())));
    } else {
        for ticket in &detail.tickets {
            lines.extend(ticket_lines(ticket, width));
        }
    }

    let content = Paragraph::new(lines).block(block);
    f.render_widget(content, area);
}

fn labelled(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::text_muted()),
        Span::styled(value.to_string(), theme::text_primary()),
    ])
}

fn ticket_lines(ticket: &TicketRow, width: usize) -> [Line<'static>; 2] {
    let type_color = if ticket.is_call {
        theme::STATUS_ON_CALL
    } else {
        theme::ACCENT_PRIMARY
    };

    [
        Line::from(vec![
            Span::styled(ticket.type_label.clone(), Style::default().fg(type_color)),
            Span::styled(format!("  #{}", ticket.id), theme::text_muted()),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_with_ellipsis(&ticket.subject, width.saturating_sub(2))),
            theme::text_primary(),
        )),
    ]
}
