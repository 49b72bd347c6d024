use thiserror::Error;

use super::Envelope;

/// Errors surfaced to callers of the blog API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The server answered with a well-formed envelope whose code is not success.
    #[error("Request rejected (code {}): {}", .0.code, .0.msg.as_deref().unwrap_or("no message"))]
    Business(Envelope),

    /// HTTP 401 from the server.
    #[error("Unauthorized - token may be expired")]
    Unauthorized { message: Option<String> },

    /// No response, or a response that did not carry a usable envelope.
    #[error("Transport error{}: {message}", status_suffix(.status))]
    Transport { status: Option<u16>, message: String },

    /// The outgoing request could not be built; nothing was sent.
    #[error("Invalid request: {0}")]
    Request(String),

    /// A successful envelope whose payload does not match the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Failure classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Business,
    Transport,
    Auth,
    /// Nothing was sent.
    Request,
    /// The exchange succeeded but the payload had the wrong shape.
    InvalidResponse,
}

impl FailureKind {
    /// Whether the client's notifier already reported this failure.
    pub fn is_notified(self) -> bool {
        matches!(self, FailureKind::Business | FailureKind::Transport | FailureKind::Auth)
    }
}

/// Errors raised by a `Transport` before any response is available.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (status {})", s)).unwrap_or_default()
}

impl ApiError {
    /// Truncate a response body to avoid logging excessive data
    pub(crate) fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Business(_) => FailureKind::Business,
            ApiError::Unauthorized { .. } => FailureKind::Auth,
            ApiError::Transport { .. } => FailureKind::Transport,
            ApiError::Request(_) => FailureKind::Request,
            ApiError::InvalidResponse(_) => FailureKind::InvalidResponse,
        }
    }

    /// HTTP status of the failed exchange, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// The envelope of a business failure.
    pub fn envelope(&self) -> Option<&Envelope> {
        match self {
            ApiError::Business(envelope) => Some(envelope),
            _ => None,
        }
    }

    /// Server-provided message, if the failure carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Business(envelope) => envelope.msg.as_deref(),
            ApiError::Unauthorized { message } => message.as_deref(),
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        ApiError::Transport {
            status: None,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};

    #[test]
    fn test_truncate_body() {
        assert_eq!(ApiError::truncate_body("short"), "short");

        let long = "x".repeat(MAX_ERROR_BODY_LENGTH + 10);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
        assert!(truncated.ends_with("(truncated, 510 total bytes)"));
    }

    #[test]
    fn test_truncate_body_multibyte() {
        // 3-byte characters never line up with the limit
        let long = "€".repeat(MAX_ERROR_BODY_LENGTH);
        let truncated = ApiError::truncate_body(&long);
        assert!(truncated.contains("(truncated"));
    }

    #[test]
    fn test_kind_and_status() {
        let business = ApiError::Business(Envelope {
            code: 0,
            msg: Some("Article not found".to_string()),
            data: Value::Null,
            extra: Map::new(),
        });
        assert_eq!(business.kind(), FailureKind::Business);
        assert_eq!(business.status(), None);
        assert_eq!(business.server_message(), Some("Article not found"));
        assert_eq!(
            business.to_string(),
            "Request rejected (code 0): Article not found"
        );

        let auth = ApiError::Unauthorized { message: None };
        assert_eq!(auth.kind(), FailureKind::Auth);
        assert_eq!(auth.status(), Some(401));
        assert!(auth.is_auth_failure());

        let transport = ApiError::Transport {
            status: Some(502),
            message: "Bad gateway".to_string(),
        };
        assert_eq!(transport.kind(), FailureKind::Transport);
        assert_eq!(transport.status(), Some(502));
        assert_eq!(transport.to_string(), "Transport error (status 502): Bad gateway");
    }

    #[test]
    fn test_invalid_response_is_its_own_kind() {
        let err = ApiError::InvalidResponse("Login response carried no token".to_string());
        assert_eq!(err.kind(), FailureKind::InvalidResponse);
        assert_eq!(err.status(), None);
        assert!(!err.kind().is_notified());

        assert!(!ApiError::Request("bad header".to_string()).kind().is_notified());
        assert!(ApiError::Unauthorized { message: None }.kind().is_notified());
        let timeout: ApiError = TransportError::Timeout.into();
        assert!(timeout.kind().is_notified());
    }

    #[test]
    fn test_from_transport_error() {
        let err: ApiError = TransportError::Timeout.into();
        assert_eq!(err.kind(), FailureKind::Transport);
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Transport error: Request timed out");
    }
}
