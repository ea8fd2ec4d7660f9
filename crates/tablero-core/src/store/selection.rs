//! Which single agent, if any, is expanded into the detail panel.

use crate::models::{Agent, AgentKey};

/// The selection is a soft reference: the key is looked up in each new snapshot and
/// simply resolves to nothing when the agent has disappeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    NoSelection,
    Selected(AgentKey),
}

impl SelectionState {
    /// Open the detail for `key`, or close it if `key` is already open.
    pub fn select(self, key: AgentKey) -> Self {
        match self {
            Self::Selected(current) if current == key => Self::NoSelection,
            _ => Self::Selected(key),
        }
    }

    pub fn clear(self) -> Self {
        Self::NoSelection
    }

    pub fn key(&self) -> Option<&AgentKey> {
        match self {
            Self::NoSelection => None,
            Self::Selected(key) => Some(key),
        }
    }

    pub fn is_selected(&self, key: &AgentKey) -> bool {
        self.key() == Some(key)
    }

    /// The selected agent in `agents`, or `None` when nothing is selected or the
    /// key is absent from this snapshot.
    pub fn resolve<'a>(&self, agents: &'a [Agent]) -> Option<&'a Agent> {
        let key = self.key()?;
        agents.iter().find(|agent| &agent.key() == key)
    }
}
