//! Status-category and free-text narrowing of the agent list.

use serde::Serialize;

use crate::models::{Agent, StatusCategory};

/// User-controlled filter. Only ever changed by user input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub category: StatusCategory,
    pub search_text: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(self, category: StatusCategory) -> Self {
        Self { category, ..self }
    }

    pub fn with_search(self, search_text: impl Into<String>) -> Self {
        Self {
            search_text: search_text.into(),
            ..self
        }
    }

    /// Whether every agent passes
    pub fn is_passthrough(&self) -> bool {
        self.category == StatusCategory::All && self.search_text.trim().is_empty()
    }
}

/// Agents passing both the category and the search filter, in input order.
///
/// Search is a case-insensitive substring match on name or email; surrounding
/// whitespace in the search text is ignored.
pub fn apply<'a>(agents: &'a [Agent], filter: &FilterState) -> Vec<&'a Agent> {
    let needle = filter.search_text.trim().to_lowercase();
    agents
        .iter()
        .filter(|agent| filter.category.admits(agent.status))
        .filter(|agent| agent.matches_lowercase(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::agent::fixtures::agent;

    fn roster() -> Vec<Agent> {
        vec![
            agent("Ana López", "ana@cemaco.com", "on_call"),
            agent("Bruno", "bruno@cemaco.com", "busy"),
            agent("Carla", "carla@other.com", "available"),
            agent("Dan", "dan@cemaco.com", "on_call"),
            agent("Eva", "", "away"),
        ]
    }

    fn names(agents: &[&Agent]) -> Vec<String> {
        agents.iter().map(|a| a.name.clone()).collect()
    }

    #[test]
    fn test_passthrough_is_identity() {
        let agents = roster();
        let filter = FilterState::new();
        assert!(filter.is_passthrough());

        let result = apply(&agents, &filter);
        let expected: Vec<&Agent> = agents.iter().collect();
        assert_eq!(result, expected);
    }

    #[test]
    fn test_category_only() {
        let agents = roster();
        let filter = FilterState::new().with_category(StatusCategory::OnCall);
        assert_eq!(names(&apply(&agents, &filter)), vec!["Ana López", "Dan"]);
    }

    #[test]
    fn test_search_matches_name_or_email_case_insensitive() {
        let agents = roster();

        let by_name = FilterState::new().with_search("LÓPEZ");
        assert_eq!(names(&apply(&agents, &by_name)), vec!["Ana López"]);

        let by_email = FilterState::new().with_search("other.com");
        assert_eq!(names(&apply(&agents, &by_email)), vec!["Carla"]);

        let blank = FilterState::new().with_search("   ");
        assert_eq!(apply(&agents, &blank).len(), agents.len());
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let agents = roster();
        let filter = FilterState::new()
            .with_category(StatusCategory::OnCall)
            .with_search("cemaco");
        assert_eq!(names(&apply(&agents, &filter)), vec!["Ana López", "Dan"]);

        let none = FilterState::new()
            .with_category(StatusCategory::Busy)
            .with_search("carla");
        assert!(apply(&agents, &none).is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let agents = roster();
        let filters = [
            FilterState::new(),
            FilterState::new().with_category(StatusCategory::Away),
            FilterState::new().with_search("a"),
            FilterState::new()
                .with_category(StatusCategory::OnCall)
                .with_search("dan"),
        ];

        for filter in filters {
            let once: Vec<Agent> = apply(&agents, &filter).into_iter().cloned().collect();
            let twice: Vec<Agent> = apply(&once, &filter).into_iter().cloned().collect();
            assert_eq!(once, twice);
        }
    }
}
