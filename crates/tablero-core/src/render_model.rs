//! Per-cycle view data handed to the presentation layer.
//!
//! Everything here is derived: the renderer lays it out and styles it, nothing more.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Agent, AgentKey, Ticket};
use crate::store::{FilterState, Metrics};
use crate::time_format::time_since;

#[derive(Debug, Clone, Serialize)]
pub struct RenderModel {
    pub metrics: Metrics,
    /// User-visible fetch error, shown alongside the last good data
    pub error: Option<String>,
    pub agent_cards: Vec<AgentCard>,
    pub filter: FilterState,
    /// Resolved detail panel, `None` when nothing is selected or the selection is gone
    pub selection: Option<AgentDetail>,
    pub updated_at: Option<DateTime<Utc>>,
    pub refresh_interval_secs: u64,
    pub refreshing: bool,
}

impl RenderModel {
    /// Position of the selected agent among the visible cards
    pub fn selected_card_index(&self) -> Option<usize> {
        self.agent_cards.iter().position(|card| card.selected)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentCard {
    pub key: AgentKey,
    pub agent: Agent,
    pub formatted_last_active: String,
    /// Only present when the feed reported `available_since`
    pub formatted_available_since: Option<String>,
    pub selected: bool,
}

impl AgentCard {
    pub fn new(agent: &Agent, selected: bool, now: DateTime<Utc>) -> Self {
        Self {
            key: agent.key(),
            agent: agent.clone(),
            formatted_last_active: time_since(agent.last_active_at.as_deref(), now),
            formatted_available_since: agent
                .available_since
                .as_deref()
                .map(|since| time_since(Some(since), now)),
            selected,
        }
    }

    /// "N tkt", only when the agent has open tickets
    pub fn ticket_badge(&self) -> Option<String> {
        (self.agent.open_tickets_count > 0).then(|| format!("{} tkt", self.agent.open_tickets_count))
    }

    /// "ACTIVE 5m · SINCE 2m"
    pub fn meta_line(&self) -> String {
        match &self.formatted_available_since {
            Some(since) => format!("ACTIVE {} · SINCE {}", self.formatted_last_active, since),
            None => format!("ACTIVE {}", self.formatted_last_active),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AgentDetail {
    pub key: AgentKey,
    pub agent: Agent,
    /// Upper-cased status label
    pub status_heading: String,
    pub formatted_last_active: String,
    pub formatted_available_since: String,
    pub tickets: Vec<TicketRow>,
}

impl AgentDetail {
    pub fn new(agent: &Agent, now: DateTime<Utc>) -> Self {
        Self {
            key: agent.key(),
            agent: agent.clone(),
            status_heading: agent.status.label().to_uppercase(),
            formatted_last_active: time_since(agent.last_active_at.as_deref(), now),
            formatted_available_since: time_since(agent.available_since.as_deref(), now),
            tickets: agent.open_tickets.iter().map(TicketRow::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketRow {
    pub id: String,
    pub type_label: String,
    pub subject: String,
    pub is_call: bool,
}

impl From<&Ticket> for TicketRow {
    fn from(ticket: &Ticket) -> Self {
        Self {
            id: ticket.id.clone(),
            type_label: ticket.type_label(),
            subject: ticket.subject.clone(),
            is_call: ticket.is_call(),
        }
    }
}
