use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::feed::FeedError;
use crate::models::Agent;

/// What started a refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshTrigger {
    Startup,
    Timer,
    Manual,
}

/// Result of one refresh cycle as seen by the presentation layer
#[derive(Debug, Clone)]
pub struct CycleOutcome {
    pub generation: u64,
    pub trigger: RefreshTrigger,
    /// The fetched list, or the last good list when the fetch failed
    pub agents: Arc<[Agent]>,
    pub error: Option<FeedError>,
    /// Served from the cache without a network call
    pub from_cache: bool,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub enum CoreEvent {
    /// A network fetch is in flight
    RefreshStarted {
        generation: u64,
        trigger: RefreshTrigger,
    },
    RefreshCompleted(CycleOutcome),
}
