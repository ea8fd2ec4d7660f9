// Centralized theme for the dashboard
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};
use tablero_core::models::AgentStatus;

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background - pure black for contrast
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Card background - very subtle lift from black
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Card under the cursor
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Status bar and filter bar background
pub const BG_SIDEBAR: Color = Color::Rgb(12, 12, 12);

/// Search field background
pub const BG_INPUT: Color = Color::Rgb(18, 18, 18);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Hints, placeholders
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Interactive elements, focus
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

pub const ACCENT_SUCCESS: Color = Color::Rgb(106, 153, 85);

pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

pub const ACCENT_SPECIAL: Color = Color::Rgb(169, 154, 203);

// -----------------------------------------------------------------------------
// Border Color
// -----------------------------------------------------------------------------

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// -----------------------------------------------------------------------------
// Status Colors
// -----------------------------------------------------------------------------

pub const STATUS_AVAILABLE: Color = ACCENT_SUCCESS;

pub const STATUS_ON_CALL: Color = ACCENT_SPECIAL;

pub const STATUS_BUSY: Color = ACCENT_PRIMARY;

pub const STATUS_AWAY: Color = ACCENT_ERROR;

pub fn status_color(status: AgentStatus) -> Color {
    match status {
        AgentStatus::Available => STATUS_AVAILABLE,
        AgentStatus::OnCall => STATUS_ON_CALL,
        AgentStatus::Busy => STATUS_BUSY,
        AgentStatus::Away => STATUS_AWAY,
    }
}

// =============================================================================
// STYLE FUNCTIONS
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn text_bold() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn border_focused() -> Style {
    Style::default().fg(ACCENT_PRIMARY)
}

pub fn interactive_selected() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn status_error() -> Style {
    Style::default().fg(ACCENT_ERROR)
}

pub fn status_warning() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

/// Bold foreground in the status color
pub fn status_style(status: AgentStatus) -> Style {
    Style::default()
        .fg(status_color(status))
        .add_modifier(Modifier::BOLD)
}
