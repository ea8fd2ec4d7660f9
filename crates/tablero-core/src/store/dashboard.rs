use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::events::{CoreEvent, CycleOutcome};
use crate::models::{Agent, AgentKey, StatusCategory};
use crate::render_model::{AgentCard, AgentDetail, RenderModel};
use crate::store::aggregator::{aggregate, Metrics};
use crate::store::filter::{apply, FilterState};
use crate::store::selection::SelectionState;

/// Presentation state threaded through refresh cycles and user input.
///
/// Holds the latest agent snapshot and its metrics next to the user's filter and
/// selection. Snapshots are replaced whole, never edited in place.
#[derive(Debug, Clone)]
pub struct Dashboard {
    agents: Arc<[Agent]>,
    metrics: Metrics,
    error: Option<String>,
    filter: FilterState,
    selection: SelectionState,
    updated_at: Option<DateTime<Utc>>,
    refreshing: bool,
    refresh_interval: Duration,
}

impl Dashboard {
    pub fn new(refresh_interval: Duration) -> Self {
        Self {
            agents: Arc::from(Vec::new()),
            metrics: Metrics::default(),
            error: None,
            filter: FilterState::default(),
            selection: SelectionState::default(),
            updated_at: None,
            refreshing: false,
            refresh_interval,
        }
    }

    pub fn handle_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::RefreshStarted { .. } => self.refreshing = true,
            CoreEvent::RefreshCompleted(outcome) => self.apply_outcome(outcome),
        }
    }

    /// Swap in the snapshot from a finished cycle and recompute metrics.
    pub fn apply_outcome(&mut self, outcome: CycleOutcome) {
        debug!(
            generation = outcome.generation,
            agents = outcome.agents.len(),
            failed = outcome.error.is_some(),
            "applying refresh cycle"
        );
        self.metrics = aggregate(&outcome.agents);
        self.agents = outcome.agents;
        self.error = outcome.error.map(|e| e.to_string());
        // A cached replay carries no newer data
        if !outcome.from_cache || self.updated_at.is_none() {
            self.updated_at = Some(outcome.completed_at);
        }
        self.refreshing = false;
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn set_category(&mut self, category: StatusCategory) {
        self.filter = std::mem::take(&mut self.filter).with_category(category);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter = std::mem::take(&mut self.filter).with_search(text);
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search_text.push(c);
    }

    pub fn pop_search_char(&mut self) {
        self.filter.search_text.pop();
    }

    /// Open or close the detail panel for `key`
    pub fn toggle_selection(&mut self, key: AgentKey) {
        self.selection = std::mem::take(&mut self.selection).select(key);
    }

    pub fn clear_selection(&mut self) {
        self.selection = std::mem::take(&mut self.selection).clear();
    }

    /// Agents passing the current filter, in canonical order
    pub fn visible_agents(&self) -> Vec<&Agent> {
        apply(&self.agents, &self.filter)
    }

    pub fn render_model(&self, now: DateTime<Utc>) -> RenderModel {
        let agent_cards = self
            .visible_agents()
            .into_iter()
            .map(|agent| {
                let selected = self.selection.is_selected(&agent.key());
                AgentCard::new(agent, selected, now)
            })
            .collect();

        RenderModel {
            metrics: self.metrics.clone(),
            error: self.error.clone(),
            agent_cards,
            filter: self.filter.clone(),
            selection: self
                .selection
                .resolve(&self.agents)
                .map(|agent| AgentDetail::new(agent, now)),
            updated_at: self.updated_at,
            refresh_interval_secs: self.refresh_interval.as_secs(),
            refreshing: self.refreshing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::RefreshTrigger;
    use crate::feed::FeedError;
    use crate::models::agent::fixtures::agent;

    fn outcome(agents: Vec<Agent>, error: Option<FeedError>) -> CycleOutcome {
        CycleOutcome {
            generation: 1,
            trigger: RefreshTrigger::Timer,
            agents: Arc::from(agents),
            error,
            from_cache: false,
            completed_at: Utc::now(),
        }
    }

    fn dashboard_with(agents: Vec<Agent>) -> Dashboard {
        let mut dashboard = Dashboard::new(Duration::from_secs(60));
        dashboard.apply_outcome(outcome(agents, None));
        dashboard
    }

    #[test]
    fn test_empty_dashboard_renders() {
        let model = Dashboard::new(Duration::from_secs(60)).render_model(Utc::now());
        assert_eq!(model.metrics.total, 0);
        assert!(model.agent_cards.is_empty());
        assert!(model.selection.is_none());
        assert!(model.updated_at.is_none());
        assert_eq!(model.refresh_interval_secs, 60);
    }

    #[test]
    fn test_outcome_updates_metrics_and_cards() {
        let dashboard = dashboard_with(vec![
            agent("Ana", "a@x.com", "on_call"),
            agent("Bo", "b@x.com", "away"),
        ]);
        let model = dashboard.render_model(Utc::now());
        assert_eq!(model.metrics.active_ratio(), "1/2");
        assert_eq!(model.agent_cards.len(), 2);
        assert!(model.error.is_none());
    }

    #[test]
    fn test_failed_cycle_keeps_agents_and_surfaces_error() {
        let mut dashboard = dashboard_with(vec![agent("Ana", "a@x.com", "busy")]);
        let stale: Vec<Agent> = dashboard.agents().to_vec();
        dashboard.apply_outcome(outcome(stale, Some(FeedError::Timeout(10))));

        let model = dashboard.render_model(Utc::now());
        assert_eq!(model.agent_cards.len(), 1);
        assert_eq!(model.error.as_deref(), Some("request timed out after 10s"));
    }

    #[test]
    fn test_cached_cycle_keeps_updated_time() {
        let mut dashboard = dashboard_with(vec![agent("Ana", "a@x.com", "busy")]);
        let fetched_at = dashboard.render_model(Utc::now()).updated_at;

        let mut cached = outcome(vec![agent("Ana", "a@x.com", "busy")], None);
        cached.from_cache = true;
        cached.completed_at = Utc::now() + chrono::Duration::seconds(30);
        dashboard.apply_outcome(cached);

        assert_eq!(dashboard.render_model(Utc::now()).updated_at, fetched_at);
        assert!(!dashboard.is_refreshing());
    }

    #[test]
    fn test_filter_narrows_cards() {
        let mut dashboard = dashboard_with(vec![
            agent("Ana", "a@x.com", "on_call"),
            agent("Bo", "b@x.com", "away"),
        ]);
        dashboard.set_category(StatusCategory::Away);
        let model = dashboard.render_model(Utc::now());
        assert_eq!(model.agent_cards.len(), 1);
        assert_eq!(model.agent_cards[0].agent.name, "Bo");
        // Metrics always cover the full snapshot
        assert_eq!(model.metrics.total, 2);

        dashboard.set_category(StatusCategory::All);
        dashboard.push_search_char('A');
        dashboard.push_search_char('n');
        assert_eq!(dashboard.visible_agents().len(), 1);
        dashboard.pop_search_char();
        dashboard.pop_search_char();
        assert_eq!(dashboard.visible_agents().len(), 2);
    }

    #[test]
    fn test_selection_survives_refresh_and_goes_dark_when_agent_leaves() {
        let mut dashboard = dashboard_with(vec![
            agent("Ana", "a@x.com", "available"),
            agent("Bo", "b@x.com", "away"),
        ]);
        dashboard.toggle_selection(AgentKey::from("a@x.com"));

        let model = dashboard.render_model(Utc::now());
        assert_eq!(model.selection.as_ref().map(|d| d.agent.name.as_str()), Some("Ana"));
        assert_eq!(model.selected_card_index(), Some(0));

        // Ana changes status on the next cycle
        dashboard.apply_outcome(outcome(
            vec![agent("Ana", "a@x.com", "on_call"), agent("Bo", "b@x.com", "away")],
            None,
        ));
        let model = dashboard.render_model(Utc::now());
        assert_eq!(model.selection.as_ref().unwrap().status_heading, "ON CALL");

        // Ana disappears: nothing is shown, no panic
        dashboard.apply_outcome(outcome(vec![agent("Bo", "b@x.com", "away")], None));
        let model = dashboard.render_model(Utc::now());
        assert!(model.selection.is_none());
        assert!(model.selected_card_index().is_none());
    }

    #[test]
    fn test_toggle_and_clear_selection() {
        let mut dashboard = dashboard_with(vec![agent("Ana", "a@x.com", "busy")]);
        dashboard.toggle_selection(AgentKey::from("a@x.com"));
        dashboard.toggle_selection(AgentKey::from("a@x.com"));
        assert_eq!(dashboard.selection(), &SelectionState::NoSelection);

        dashboard.toggle_selection(AgentKey::from("a@x.com"));
        dashboard.clear_selection();
        assert_eq!(dashboard.selection(), &SelectionState::NoSelection);
    }

    #[test]
    fn test_refreshing_flag_follows_events() {
        let mut dashboard = Dashboard::new(Duration::from_secs(60));
        dashboard.handle_event(CoreEvent::RefreshStarted {
            generation: 1,
            trigger: RefreshTrigger::Startup,
        });
        assert!(dashboard.is_refreshing());

        dashboard.handle_event(CoreEvent::RefreshCompleted(outcome(Vec::new(), None)));
        assert!(!dashboard.is_refreshing());
    }
}
