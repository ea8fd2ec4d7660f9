//! Time-boxed cache of the last successful fetch.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::feed::FetchResult;
use crate::models::Agent;

#[derive(Debug, Clone)]
struct CacheEntry {
    agents: Arc<[Agent]>,
    stored_at: Instant,
    invalidated: bool,
}

/// Holds the most recent successful agent list.
///
/// Freshness expires after `ttl` or on [`FeedCache::invalidate`]; the data itself is kept
/// so callers can keep showing it while later fetches fail.
#[derive(Debug, Clone)]
pub struct FeedCache {
    ttl: Duration,
    entry: Option<CacheEntry>,
}

impl FeedCache {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached list, if it was stored less than `ttl` before `now` and not invalidated
    pub fn fresh(&self, now: Instant) -> Option<Arc<[Agent]>> {
        let entry = self.entry.as_ref()?;
        if entry.invalidated {
            return None;
        }
        let age = now.saturating_duration_since(entry.stored_at);
        (age < self.ttl).then(|| Arc::clone(&entry.agents))
    }

    /// Last successful list regardless of freshness
    pub fn last_good(&self) -> Option<Arc<[Agent]>> {
        self.entry.as_ref().map(|entry| Arc::clone(&entry.agents))
    }

    pub fn store(&mut self, agents: Arc<[Agent]>, now: Instant) {
        self.entry = Some(CacheEntry {
            agents,
            stored_at: now,
            invalidated: false,
        });
    }

    /// Force the next lookup to miss. Stale data stays available through `last_good`.
    pub fn invalidate(&mut self) {
        if let Some(entry) = self.entry.as_mut() {
            entry.invalidated = true;
        }
    }

    /// Return the fresh list, or run `fetch` and cache its result on success.
    pub async fn get_or_fetch<F, Fut>(&mut self, now: Instant, fetch: F) -> FetchResult
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = FetchResult>,
    {
        if let Some(agents) = self.fresh(now) {
            debug!(agents = agents.len(), "feed cache hit");
            return Ok(agents);
        }

        let result = fetch().await;
        if let Ok(agents) = &result {
            self.store(Arc::clone(agents), now);
        }
        result
    }
}
