//! Request-scoped relay errors.
//!
//! Every variant keeps its detail for logging and is rendered to a
//! plain-text body with its status code only when it becomes a response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Reasons a single relay exchange can fail.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller's `Origin` is not on the allow-list.
    #[error("Origin not allowed")]
    OriginRejected { origin: String },

    /// The `url` parameter is not an absolute, forwardable URL.
    #[error("Invalid target URL")]
    InvalidTargetUrl { target: String, reason: String },

    /// The upstream request could not be assembled.
    #[error("Failed to create proxy request")]
    RequestConstructionFailed(String),

    /// The upstream exchange failed (network, TLS, timeout).
    #[error("Proxy error: {0}")]
    UpstreamCallFailed(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::OriginRejected { .. } => StatusCode::FORBIDDEN,
            RelayError::InvalidTargetUrl { .. } => StatusCode::BAD_REQUEST,
            RelayError::RequestConstructionFailed(_) | RelayError::UpstreamCallFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::OriginRejected { .. } => "origin_rejected",
            RelayError::InvalidTargetUrl { .. } => "invalid_target",
            RelayError::RequestConstructionFailed(_) => "construction_failed",
            RelayError::UpstreamCallFailed(_) => "upstream_error",
        }
    }

    /// Build an upstream failure from a client error, keeping its whole cause chain.
    pub fn upstream(err: &reqwest::Error) -> Self {
        RelayError::UpstreamCallFailed(describe_chain(err))
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// `err: cause: cause` so timeouts and connection errors stay visible.
fn describe_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[derive(Debug, Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, Error)]
    #[error("inner")]
    struct Inner;

    async fn render(err: RelayError) -> (StatusCode, String) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_origin_rejected() {
        let (status, body) = render(RelayError::OriginRejected {
            origin: "https://evil.example".into(),
        })
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body, "Origin not allowed");
    }

    #[tokio::test]
    async fn test_invalid_target_hides_reason() {
        let (status, body) = render(RelayError::InvalidTargetUrl {
            target: "://bad".into(),
            reason: "relative URL without a base".into(),
        })
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Invalid target URL");
    }

    #[tokio::test]
    async fn test_upstream_failure_embeds_detail() {
        let (status, body) =
            render(RelayError::UpstreamCallFailed("connection refused".into())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, "Proxy error: connection refused");
    }

    #[test]
    fn test_plain_text_content_type() {
        let response = RelayError::RequestConstructionFailed("bad".into()).into_response();
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain; charset=utf-8"
        );
    }

    #[test]
    fn test_describe_chain() {
        assert_eq!(describe_chain(&Outer(Inner)), "outer: inner");
    }
}
