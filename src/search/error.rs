//! Failure kinds of a single provider round-trip.

use thiserror::Error;

/// Why a provider request produced no listings.
///
/// These never leave the search client; [`super::ShoppingSearch::search`]
/// degrades every variant to an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("provider returned HTTP {0}")]
    Status(u16),

    #[error("malformed provider response: {0}")]
    Decode(String),

    #[error("provider task failed with status {code}: {message}")]
    Provider { code: u32, message: String },
}

impl SearchError {
    /// Transport, timeout and HTTP-status failures are worth one more attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout | Self::Status(_))
    }
}

impl From<wreq::Error> for SearchError {
    fn from(err: wreq::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}
