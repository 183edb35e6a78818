//! Upstream failure types.
//!
//! None of these ever reach an HTTP caller: the fact handler absorbs every
//! variant and serves the fallback fact instead. They exist so the reason can be
//! logged and classified.

use std::fmt;
use std::time::Duration;

use http::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Upstream did not respond within {0:?}")]
    Timeout(Duration),

    #[error("Upstream returned HTTP {0}")]
    Status(StatusCode),

    #[error("Upstream payload malformed: {0}")]
    Malformed(String),
}

/// Coarse failure category used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connection refused, DNS failure, timeout or non-2xx status
    Unavailable,
    /// 2xx response without a usable `fact` field
    Malformed,
}

impl UpstreamError {
    pub fn kind(&self) -> FailureKind {
        match self {
            UpstreamError::Malformed(_) => FailureKind::Malformed,
            UpstreamError::Request(_) | UpstreamError::Timeout(_) | UpstreamError::Status(_) => {
                FailureKind::Unavailable
            }
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Unavailable => f.write_str("unavailable"),
            FailureKind::Malformed => f.write_str("malformed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert_eq!(
            UpstreamError::Timeout(Duration::from_millis(5000)).kind(),
            FailureKind::Unavailable
        );
        assert_eq!(
            UpstreamError::Status(StatusCode::BAD_GATEWAY).kind(),
            FailureKind::Unavailable
        );
        assert_eq!(
            UpstreamError::Malformed("missing `fact`".into()).kind(),
            FailureKind::Malformed
        );
    }

    #[test]
    fn messages_carry_the_reason() {
        let err = UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_string(), "Upstream returned HTTP 503 Service Unavailable");
        assert_eq!(FailureKind::Malformed.to_string(), "malformed");
    }
}
