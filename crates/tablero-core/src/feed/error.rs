use crate::constants::MAX_ERROR_EXCERPT_CHARS;

/// Broad class of a feed failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// Timeout, connection failure or non-2xx status
    Network,
    /// Invalid JSON or an unrecognized top-level shape
    Parse,
}

/// Why a fetch produced no agent list. The `Display` output is the message shown to users.
///
/// Malformed individual records are not errors: the parser drops them and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("feed returned HTTP {status}: {excerpt}")]
    Status { status: u16, excerpt: String },

    #[error("invalid JSON ({message}): {excerpt}")]
    InvalidJson { message: String, excerpt: String },

    #[error("unrecognized response shape ({found}): {excerpt}")]
    UnrecognizedShape { found: &'static str, excerpt: String },
}

impl FeedError {
    pub fn kind(&self) -> FeedErrorKind {
        match self {
            Self::Timeout(_) | Self::Connection(_) | Self::Status { .. } => FeedErrorKind::Network,
            Self::InvalidJson { .. } | Self::UnrecognizedShape { .. } => FeedErrorKind::Parse,
        }
    }
}

/// Quote at most [`MAX_ERROR_EXCERPT_CHARS`] characters of a raw response.
pub fn excerpt(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "<empty body>".to_string();
    }

    if raw.chars().count() <= MAX_ERROR_EXCERPT_CHARS {
        return raw.to_string();
    }

    let mut truncated: String = raw.chars().take(MAX_ERROR_EXCERPT_CHARS).collect();
    truncated.push('…');
    truncated
}
