use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::feed::cache::FeedCache;
use crate::feed::parse::parse_feed;
use crate::feed::transport::{FeedResponse, FeedTransport};
use crate::feed::{excerpt, FeedError, FetchResult};
use crate::models::Agent;

/// Fetches, validates and caches the agent list.
///
/// The transport is shared so a request can run detached from the client; the cache is
/// owned and only touched through `&mut self`.
pub struct AgentFeedClient<T> {
    transport: Arc<T>,
    cache: FeedCache,
}

impl<T: FeedTransport> AgentFeedClient<T> {
    /// `ttl` should equal the refresh interval
    pub fn new(transport: T, ttl: Duration) -> Self {
        Self {
            transport: Arc::new(transport),
            cache: FeedCache::new(ttl),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Agent list for `now`: cached within the TTL window, fetched otherwise.
    pub async fn fetch_agents(&mut self, now: Instant) -> FetchResult {
        let transport = Arc::clone(&self.transport);
        let result = self.cache.get_or_fetch(now, || request(transport)).await;
        log_result(&result);
        result
    }

    /// Bypass and invalidate the cache, then fetch.
    pub async fn refresh(&mut self, now: Instant) -> FetchResult {
        self.invalidate();
        self.fetch_agents(now).await
    }

    pub fn invalidate(&mut self) {
        debug!("feed cache invalidated");
        self.cache.invalidate();
    }

    /// Fresh cached list, if any
    pub fn cached(&self, now: Instant) -> Option<Arc<[Agent]>> {
        self.cache.fresh(now)
    }

    /// Last successful list, kept for display while fetches fail
    pub fn last_good(&self) -> Option<Arc<[Agent]>> {
        self.cache.last_good()
    }

    /// A network fetch that does not borrow the client. Pair with [`Self::complete`].
    pub fn request(&self) -> impl Future<Output = FetchResult> + Send + 'static {
        request(Arc::clone(&self.transport))
    }

    /// Record the outcome of a detached [`Self::request`].
    pub fn complete(&mut self, result: FetchResult, now: Instant) -> FetchResult {
        if let Ok(agents) = &result {
            self.cache.store(Arc::clone(agents), now);
        }
        log_result(&result);
        result
    }
}

async fn request<T: FeedTransport>(transport: Arc<T>) -> FetchResult {
    let response = transport.get().await?;
    interpret(response)
}

/// Turn a raw response into agents. Non-2xx statuses fail before any parsing.
pub fn interpret(response: FeedResponse) -> FetchResult {
    if !response.is_success() {
        return Err(FeedError::Status {
            status: response.status,
            excerpt: excerpt(&response.body),
        });
    }

    let parsed = parse_feed(&response.body)?;
    if parsed.dropped > 0 {
        warn!(dropped = parsed.dropped, "dropped malformed or duplicate agent records");
    }
    Ok(Arc::from(parsed.agents))
}

fn log_result(result: &FetchResult) {
    match result {
        Ok(agents) => info!(agents = agents.len(), "agent feed loaded"),
        Err(e) => warn!(kind = ?e.kind(), error = %e, "agent feed fetch failed"),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{ok, ScriptedTransport};
    use super::*;
    use serde_json::json;

    const TTL: Duration = Duration::from_secs(60);

    fn roster() -> serde_json::Value {
        json!([
            { "name": "Ana", "email": "ana@x.com", "status": "available" },
            { "name": "Bo", "email": "bo@x.com", "status": "on_call" }
        ])
    }

    #[tokio::test]
    async fn test_fetch_parses_and_sorts() {
        let mut client = AgentFeedClient::new(ScriptedTransport::new().then(ok(roster())), TTL);
        let agents = client.fetch_agents(Instant::now()).await.unwrap();
        assert_eq!(agents[0].name, "Bo");
        assert_eq!(agents[1].name, "Ana");
    }

    #[tokio::test]
    async fn test_repeat_within_ttl_hits_cache() {
        let transport = ScriptedTransport::new().then(ok(roster())).then(ok(json!([])));
        let mut client = AgentFeedClient::new(transport, TTL);
        let start = Instant::now();

        client.fetch_agents(start).await.unwrap();
        let again = client.fetch_agents(start + Duration::from_secs(30)).await.unwrap();

        assert_eq!(again.len(), 2);
        assert_eq!(client.transport().calls(), 1);
    }

    #[tokio::test]
    async fn test_fetch_after_ttl_goes_to_network() {
        let transport = ScriptedTransport::new().then(ok(roster())).then(ok(json!([])));
        let mut client = AgentFeedClient::new(transport, TTL);
        let start = Instant::now();

        client.fetch_agents(start).await.unwrap();
        let later = client.fetch_agents(start + TTL).await.unwrap();

        assert!(later.is_empty());
        assert_eq!(client.transport().calls(), 2);
    }

    #[tokio::test]
    async fn test_manual_refresh_bypasses_ttl() {
        let transport = ScriptedTransport::new().then(ok(roster())).then(ok(json!([])));
        let mut client = AgentFeedClient::new(transport, TTL);
        let start = Instant::now();

        client.fetch_agents(start).await.unwrap();
        let refreshed = client.refresh(start + Duration::from_millis(1)).await.unwrap();

        assert!(refreshed.is_empty());
        assert_eq!(client.transport().calls(), 2);
    }

    #[tokio::test]
    async fn test_non_2xx_keeps_previous_result() {
        let transport = ScriptedTransport::new()
            .then(ok(roster()))
            .then(Ok(FeedResponse::new(500, "internal error")));
        let mut client = AgentFeedClient::new(transport, TTL);
        let start = Instant::now();

        client.fetch_agents(start).await.unwrap();
        let err = client.refresh(start).await.unwrap_err();

        assert_eq!(
            err,
            FeedError::Status { status: 500, excerpt: "internal error".to_string() }
        );
        assert_eq!(client.last_good().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_transport_error_is_reported() {
        let transport = ScriptedTransport::new().then(Err(FeedError::Timeout(10)));
        let mut client = AgentFeedClient::new(transport, TTL);

        let err = client.fetch_agents(Instant::now()).await.unwrap_err();
        assert_eq!(err, FeedError::Timeout(10));
        assert!(client.last_good().is_none());
    }

    #[tokio::test]
    async fn test_detached_request_then_complete() {
        let mut client = AgentFeedClient::new(ScriptedTransport::new().then(ok(roster())), TTL);
        let now = Instant::now();

        let result = tokio::spawn(client.request()).await.unwrap();
        assert!(client.cached(now).is_none());

        client.complete(result, now).unwrap();
        assert_eq!(client.cached(now).unwrap().len(), 2);
    }

    #[test]
    fn test_interpret_rejects_non_success_before_parsing() {
        let err = interpret(FeedResponse::new(404, "{\"agents\": []}")).unwrap_err();
        assert!(matches!(err, FeedError::Status { status: 404, .. }));
    }
}
