//! Agent status feed: HTTP transport, response parsing, caching.

pub mod cache;
pub mod client;
pub mod error;
pub mod parse;
pub mod transport;

use std::sync::Arc;

use crate::models::Agent;

pub use cache::FeedCache;
pub use client::{interpret, AgentFeedClient};
pub use error::{excerpt, FeedError, FeedErrorKind};
pub use parse::{parse_feed, sort_by_status, ParsedFeed};
pub use transport::{FeedResponse, FeedTransport, HttpTransport};

/// Outcome of one fetch: the sorted agent list or the reason there is none
pub type FetchResult = Result<Arc<[Agent]>, FeedError>;
