//! Worker gate: a shared-secret header check in front of every non-diagnostic route.

use std::fmt;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;

/// Header carrying the worker key.
pub const WORKER_KEY_HEADER: &str = "x-worker-key";

/// Operational diagnostics root; everything below it bypasses the gate.
pub const DIAGNOSTICS_PREFIX: &str = "/actuator";

/// Store liveness path left open so external probes can reach it without the key.
pub const OPEN_PING_PATH: &str = "/mongo/ping";

/// The configured gate secret.
///
/// Immutable once built. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct GateKey(Arc<str>);

impl GateKey {
    /// Wraps `secret`, returning `None` if it is empty.
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return None;
        }
        Some(Self(secret.into()))
    }

    /// Byte-for-byte equality against a presented header value.
    ///
    /// Runs in time independent of where the first mismatch occurs.
    pub fn matches(&self, candidate: &[u8]) -> bool {
        let expected = self.0.as_bytes();
        if expected.len() != candidate.len() {
            return false;
        }
        expected
            .iter()
            .zip(candidate)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl fmt::Debug for GateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GateKey(***)")
    }
}

/// Returns true if `path` skips the key check.
pub fn is_exempt(path: &str) -> bool {
    path.starts_with(DIAGNOSTICS_PREFIX) || path == OPEN_PING_PATH
}

/// Middleware that rejects non-exempt requests lacking the configured key with 403.
pub async fn require_worker_key(
    State(key): State<GateKey>,
    req: Request,
    next: Next,
) -> Response {
    let path = req.uri().path();
    if is_exempt(path) {
        return next.run(req).await;
    }

    let authorized = req
        .headers()
        .get(WORKER_KEY_HEADER)
        .is_some_and(|value| key.matches(value.as_bytes()));

    if !authorized {
        tracing::debug!(%path, "worker gate rejected request");
        metrics::counter!("gate_rejections_total").increment(1);
        return ApiError::Forbidden.into_response();
    }

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_key_is_rejected() {
        assert!(GateKey::new("").is_none());
        assert!(GateKey::new("secret").is_some());
    }

    #[test]
    fn test_matches_exact_value_only() {
        let key = GateKey::new("s3cret").unwrap();
        assert!(key.matches(b"s3cret"));
        assert!(!key.matches(b"S3CRET"));
        assert!(!key.matches(b"s3cre"));
        assert!(!key.matches(b"s3cret "));
        assert!(!key.matches(b""));
    }

    #[test]
    fn test_debug_hides_secret() {
        let key = GateKey::new("s3cret").unwrap();
        assert_eq!(format!("{key:?}"), "GateKey(***)");
    }

    #[test]
    fn test_exempt_paths() {
        assert!(is_exempt("/actuator"));
        assert!(is_exempt("/actuator/health"));
        assert!(is_exempt("/actuator/prometheus"));
        assert!(is_exempt("/mongo/ping"));
    }

    #[test]
    fn test_gated_paths() {
        assert!(!is_exempt("/gate/test"));
        assert!(!is_exempt("/ping"));
        assert!(!is_exempt("/query"));
        assert!(!is_exempt("/mongo/query"));
        assert!(!is_exempt("/mongo/ping/"));
        assert!(!is_exempt("/"));
    }
}
