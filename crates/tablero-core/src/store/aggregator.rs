//! Headline counts over one agent snapshot.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Agent, AgentStatus, STATUS_ORDER};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    /// Always holds all four statuses, zero when absent
    pub per_status: BTreeMap<AgentStatus, usize>,
    /// on_call + busy + available
    pub active: usize,
    pub total: usize,
}

impl Default for Metrics {
    fn default() -> Self {
        aggregate(&[])
    }
}

impl Metrics {
    pub fn count(&self, status: AgentStatus) -> usize {
        self.per_status.get(&status).copied().unwrap_or(0)
    }

    /// "active/total" as shown on the first tile
    pub fn active_ratio(&self) -> String {
        format!("{}/{}", self.active, self.total)
    }
}

/// Count agents per status. Order-independent; empty input yields all zeros.
pub fn aggregate(agents: &[Agent]) -> Metrics {
    let mut per_status: BTreeMap<AgentStatus, usize> =
        STATUS_ORDER.iter().map(|status| (*status, 0)).collect();

    for agent in agents {
        *per_status.entry(agent.status).or_insert(0) += 1;
    }

    let active = per_status
        .iter()
        .filter(|(status, _)| status.is_active())
        .map(|(_, count)| count)
        .sum();

    Metrics {
        per_status,
        active,
        total: agents.len(),
    }
}
