use serde::{Deserialize, Serialize};

/// Presence of an agent as reported by the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    Available,
    OnCall,
    Busy,
    Away,
}

/// Canonical display order. Statuses the feed did not recognize sort after the last entry.
pub const STATUS_ORDER: [AgentStatus; 4] = [
    AgentStatus::OnCall,
    AgentStatus::Busy,
    AgentStatus::Available,
    AgentStatus::Away,
];

impl AgentStatus {
    /// Parse a wire value. Returns `None` for anything outside the four known statuses.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "available" => Some(Self::Available),
            "on_call" => Some(Self::OnCall),
            "busy" => Some(Self::Busy),
            "away" => Some(Self::Away),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnCall => "on_call",
            Self::Busy => "busy",
            Self::Away => "away",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnCall => "On call",
            Self::Busy => "Handling ticket",
            Self::Away => "Away from desk",
        }
    }

    /// Label used on metric tiles
    pub fn metric_label(&self) -> &'static str {
        match self {
            Self::Available => "AVAILABLE",
            Self::OnCall => "ON CALL",
            Self::Busy => "ON TICKET",
            Self::Away => "AWAY",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Available => "🟢",
            Self::OnCall => "📞",
            Self::Busy => "🔵",
            Self::Away => "🔴",
        }
    }

    /// Position in [`STATUS_ORDER`]
    pub fn rank(&self) -> usize {
        match self {
            Self::OnCall => 0,
            Self::Busy => 1,
            Self::Available => 2,
            Self::Away => 3,
        }
    }

    /// Whether the agent counts towards the "active" metric
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Away)
    }
}

/// Status filter offered to the user. `All` disables status filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusCategory {
    #[default]
    All,
    OnCall,
    Busy,
    Available,
    Away,
}

impl StatusCategory {
    /// Options in the order they are offered
    pub const ALL_OPTIONS: [StatusCategory; 5] = [
        Self::All,
        Self::OnCall,
        Self::Busy,
        Self::Available,
        Self::Away,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::OnCall => "On call",
            Self::Busy => "On ticket",
            Self::Available => "Available",
            Self::Away => "Away",
        }
    }

    /// The single status this category admits, or `None` for `All`
    pub fn status(&self) -> Option<AgentStatus> {
        match self {
            Self::All => None,
            Self::OnCall => Some(AgentStatus::OnCall),
            Self::Busy => Some(AgentStatus::Busy),
            Self::Available => Some(AgentStatus::Available),
            Self::Away => Some(AgentStatus::Away),
        }
    }

    pub fn admits(&self, status: AgentStatus) -> bool {
        self.status().map_or(true, |wanted| wanted == status)
    }

    fn position(&self) -> usize {
        Self::ALL_OPTIONS
            .iter()
            .position(|option| option == self)
            .unwrap_or(0)
    }

    /// Option at `index` in [`Self::ALL_OPTIONS`] (0-based)
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL_OPTIONS.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL_OPTIONS[(self.position() + 1) % Self::ALL_OPTIONS.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL_OPTIONS.len();
        Self::ALL_OPTIONS[(self.position() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(AgentStatus::parse("available"), Some(AgentStatus::Available));
        assert_eq!(AgentStatus::parse("on_call"), Some(AgentStatus::OnCall));
        assert_eq!(AgentStatus::parse(" Busy "), Some(AgentStatus::Busy));
        assert_eq!(AgentStatus::parse("away"), Some(AgentStatus::Away));
        assert_eq!(AgentStatus::parse("lunch"), None);
        assert_eq!(AgentStatus::parse(""), None);
    }

    #[test]
    fn test_rank_matches_status_order() {
        for (index, status) in STATUS_ORDER.iter().enumerate() {
            assert_eq!(status.rank(), index);
        }
    }

    #[test]
    fn test_category_cycles_through_all_options() {
        let mut category = StatusCategory::All;
        for _ in 0..StatusCategory::ALL_OPTIONS.len() {
            category = category.next();
        }
        assert_eq!(category, StatusCategory::All);
        assert_eq!(StatusCategory::All.prev(), StatusCategory::Away);
        assert_eq!(StatusCategory::Away.next(), StatusCategory::All);
    }

    #[test]
    fn test_category_admits() {
        assert!(StatusCategory::All.admits(AgentStatus::Away));
        assert!(StatusCategory::Busy.admits(AgentStatus::Busy));
        assert!(!StatusCategory::Busy.admits(AgentStatus::OnCall));
    }
}
