use tablero_core::events::CoreEvent;
use tablero_core::models::StatusCategory;
use tablero_core::runtime::SchedulerHandle;
use tablero_core::store::Dashboard;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the search field
    Editing,
}

/// Terminal-side state around the core [`Dashboard`].
///
/// The card cursor lives here, not in the core: it is a keyboard affordance and is
/// clamped to the visible list whenever that list changes.
pub struct App {
    pub dashboard: Dashboard,
    pub input_mode: InputMode,
    pub running: bool,
    /// First Ctrl+C pressed, waiting for the second
    pub pending_quit: bool,
    card_cursor: usize,
    grid_columns: usize,
    scheduler: Option<SchedulerHandle>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard,
            input_mode: InputMode::Normal,
            running: true,
            pending_quit: false,
            card_cursor: 0,
            grid_columns: 1,
            scheduler: None,
        }
    }

    pub fn set_scheduler(&mut self, handle: SchedulerHandle) {
        self.scheduler = Some(handle);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn handle_core_event(&mut self, event: CoreEvent) {
        self.dashboard.handle_event(event);
        self.clamp_cursor();
    }

    pub fn request_refresh(&mut self) {
        let Some(scheduler) = &self.scheduler else {
            return;
        };
        if let Err(e) = scheduler.refresh() {
            warn!(error = %e, "refresh scheduler is gone");
        }
    }

    pub fn card_cursor(&self) -> usize {
        self.card_cursor
    }

    /// Recorded by the renderer so vertical moves jump a full row
    pub fn set_grid_columns(&mut self, columns: usize) {
        self.grid_columns = columns.max(1);
    }

    // ===== Filters =====

    pub fn select_category(&mut self, category: StatusCategory) {
        self.dashboard.set_category(category);
        self.clamp_cursor();
    }

    pub fn next_category(&mut self) {
        let next = self.dashboard.filter().category.next();
        self.select_category(next);
    }

    pub fn prev_category(&mut self) {
        let prev = self.dashboard.filter().category.prev();
        self.select_category(prev);
    }

    pub fn start_search(&mut self) {
        self.input_mode = InputMode::Editing;
    }

    pub fn stop_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn enter_search_char(&mut self, c: char) {
        self.dashboard.push_search_char(c);
        self.clamp_cursor();
    }

    pub fn delete_search_char(&mut self) {
        self.dashboard.pop_search_char();
        self.clamp_cursor();
    }

    // ===== Cursor and selection =====

    pub fn move_cursor_left(&mut self) {
        self.card_cursor = self.card_cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.card_cursor += 1;
        self.clamp_cursor();
    }

    pub fn move_cursor_up(&mut self) {
        self.card_cursor = self.card_cursor.saturating_sub(self.grid_columns);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.dashboard.visible_agents().len();
        if self.card_cursor + self.grid_columns < len {
            self.card_cursor += self.grid_columns;
        }
    }

    /// Open or close the detail panel for the card under the cursor
    pub fn toggle_detail(&mut self) {
        let key = self
            .dashboard
            .visible_agents()
            .get(self.card_cursor)
            .map(|agent| agent.key());
        if let Some(key) = key {
            self.dashboard.toggle_selection(key);
        }
    }

    pub fn close_detail(&mut self) {
        self.dashboard.clear_selection();
    }

    fn clamp_cursor(&mut self) {
        let len = self.dashboard.visible_agents().len();
        self.card_cursor = self.card_cursor.min(len.saturating_sub(1));
    }
}
