use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// HTTP methods the governance API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        };
        write!(f, "{}", name)
    }
}

/// Provider API failure taxonomy.
///
/// `RateLimited` is retried inside the adapter and only surfaces after
/// retry exhaustion. `NotFound` doubles as "absence" for callers with
/// optional-get semantics, and `Conflict` as "already exists" for
/// idempotent creates; both carry enough context for diagnostics when a
/// caller does treat them as failures.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("authentication failed: {body}")]
    Auth { body: String },

    #[error("not found: {path}")]
    NotFound { path: String },

    #[error("conflict: {body}")]
    Conflict { body: String },

    #[error("rate limited and retries exhausted")]
    RateLimited,

    #[error("server error {status}: {body}")]
    Server { status: u16, body: String },

    #[error("network error: {details}")]
    Network { details: String },

    #[error("unexpected status {status}: {body}")]
    Unexpected { status: u16, body: String },
}

impl ApiError {
    /// True for a 404, which optional lookups treat as a valid "absent".
    pub fn is_absence(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }

    /// True for a 409 on create, which idempotent callers treat as
    /// "already exists".
    pub fn is_conflict(&self) -> bool {
        matches!(self, ApiError::Conflict { .. })
    }
}

/// Outbound port for the governance API.
///
/// One call, one request: retries and rate-limit waits happen inside the
/// implementation, so callers see either a parsed 2xx body (empty bodies
/// normalize to JSON null) or one terminal `ApiError`.
pub trait ApiTransport {
    fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<&Value>,
    ) -> Result<Value, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }

    #[test]
    fn test_absence_and_conflict_predicates() {
        let not_found = ApiError::NotFound {
            path: "/governance/api/v1/labels/x".to_string(),
        };
        assert!(not_found.is_absence());
        assert!(!not_found.is_conflict());

        let conflict = ApiError::Conflict {
            body: "label exists".to_string(),
        };
        assert!(conflict.is_conflict());
        assert!(!conflict.is_absence());
    }
}
