//! Application-wide constants
//!
//! Centralized location for defaults and fixed values that are used across
//! multiple modules.

use std::time::Duration;

/// Default agent status feed endpoint
pub const DEFAULT_FEED_URL: &str = "https://jcdcemaco.app.n8n.cloud/webhook/agent-status";

/// Default refresh period. The cache TTL always equals this value.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Default upper bound for a single feed request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Shown in place of a duration when a timestamp is missing or unparsable
pub const TIME_PLACEHOLDER: &str = "—";

/// Maximum number of characters of a raw response quoted in an error message
pub const MAX_ERROR_EXCERPT_CHARS: usize = 200;

/// Ticket type used by the contact center for phone calls
pub const CALL_TICKET_TYPE: &str = "Llamadas";

/// Fallback label for tickets without a type
pub const DEFAULT_TICKET_TYPE: &str = "TICKET";

/// Object fields checked first when the feed wraps the agent list in an object
pub const PREFERRED_LIST_FIELDS: [&str; 4] = ["agents", "data", "items", "results"];

/// User agent sent with feed requests
pub const USER_AGENT: &str = concat!("tablero/", env!("CARGO_PKG_VERSION"));

// Environment variables
pub mod env {
    pub const FEED_URL: &str = "TABLERO_FEED_URL";
    pub const REFRESH_SECS: &str = "TABLERO_REFRESH_SECS";
    pub const TIMEOUT_SECS: &str = "TABLERO_TIMEOUT_SECS";
    /// Log filter directive (falls back to RUST_LOG)
    pub const LOG_FILTER: &str = "TABLERO_LOG";
    /// Path of the log file used by the interactive dashboard
    pub const LOG_FILE: &str = "TABLERO_LOG_FILE";
}
