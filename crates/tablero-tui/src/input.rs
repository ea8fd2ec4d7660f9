use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tablero_core::models::StatusCategory;

use crate::ui::{App, InputMode};

/// Apply one key press. Ctrl+C is handled by the event loop before this is called.
pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    match app.input_mode {
        InputMode::Editing => handle_search_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('r') => app.request_refresh(),
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Tab => app.next_category(),
        KeyCode::BackTab => app.prev_category(),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(category) = StatusCategory::from_index(index) {
                app.select_category(category);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => app.move_cursor_left(),
        KeyCode::Right | KeyCode::Char('l') => app.move_cursor_right(),
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor_down(),
        KeyCode::Enter => app.toggle_detail(),
        KeyCode::Esc => app.close_detail(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.stop_search(),
        KeyCode::Backspace => app.delete_search_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.enter_search_char(c)
        }
        _ => {}
    }
}
