//! The forwarding handler.
//!
//! Every inbound request lands here and is answered as one of:
//! - a CORS preflight (`OPTIONS`)
//! - the demo page (no `url` parameter)
//! - a forwarded exchange with the upstream named by `url`

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Method, Request, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::config::RelayConfig;
use crate::cors::headers::apply_preflight_headers;
use crate::cors::AllowList;
use crate::http::demo::DEMO_HTML;
use crate::http::error::RelayError;
use crate::http::request::{build_upstream_request, parse_target, target_param};
use crate::http::response::relay_response;
use crate::observability::metrics::record_request;

/// Everything a relay exchange needs, shared read-only by all requests.
#[derive(Clone)]
pub struct RelayState {
    allow_list: Arc<AllowList>,
    client: reqwest::Client,
}

impl RelayState {
    pub fn new(allow_list: AllowList, client: reqwest::Client) -> Self {
        Self {
            allow_list: Arc::new(allow_list),
            client,
        }
    }

    /// Build the allow-list and a timeout-bound upstream client from config.
    pub fn from_config(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = upstream_client(Duration::from_secs(config.timeouts.upstream_secs))?;
        let allow_list = AllowList::new(config.cors.allowed_origins.iter().cloned());
        Ok(Self::new(allow_list, client))
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    fn allow_origin(&self, origin: &str) -> HeaderValue {
        HeaderValue::from_str(self.allow_list.allow_origin_value(origin))
            .unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}

/// Upstream client whose `timeout` covers the whole exchange, body included.
pub fn upstream_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Main relay handler.
pub async fn relay_handler(State(state): State<RelayState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let origin = origin_of(request.headers());

    if method == Method::OPTIONS {
        return preflight(&state, &origin, request.headers(), start);
    }

    let Some(target) = target_param(request.uri()) else {
        tracing::debug!(method = %method, "No target given, serving demo page");
        record_request(method.as_str(), "demo", StatusCode::OK.as_u16(), start);
        return (StatusCode::OK, Html(DEMO_HTML)).into_response();
    };

    tracing::debug!(method = %method, origin = %origin, url = %target, "Relaying request");

    match forward(&state, &origin, &target, request).await {
        Ok(upstream) => {
            let status = upstream.status();
            tracing::debug!(url = %target, status = %status, "Upstream responded");
            record_request(method.as_str(), "forwarded", status.as_u16(), start);
            relay_response(upstream, state.allow_origin(&origin))
        }
        Err(err) => {
            let status = err.status();
            match &err {
                RelayError::OriginRejected { origin } => {
                    tracing::warn!(origin = %origin, "Origin not allowed");
                }
                RelayError::InvalidTargetUrl { target, reason } => {
                    tracing::warn!(url = %target, reason = %reason, "Invalid target URL");
                }
                RelayError::RequestConstructionFailed(detail) => {
                    tracing::error!(url = %target, error = %detail, "Failed to build upstream request");
                }
                RelayError::UpstreamCallFailed(detail) => {
                    tracing::error!(url = %target, error = %detail, "Upstream error");
                }
            }
            record_request(method.as_str(), err.kind(), status.as_u16(), start);

            let attach_origin = matches!(err, RelayError::UpstreamCallFailed(_));
            let mut response = err.into_response();
            if attach_origin {
                response
                    .headers_mut()
                    .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, state.allow_origin(&origin));
            }
            response
        }
    }
}

/// Check the origin, rebuild the request and send it upstream.
async fn forward(
    state: &RelayState,
    origin: &str,
    target: &str,
    request: Request<Body>,
) -> Result<reqwest::Response, RelayError> {
    if !state.allow_list.is_allowed(origin) {
        return Err(RelayError::OriginRejected {
            origin: origin.to_string(),
        });
    }

    let url = parse_target(target)?;
    let (parts, body) = request.into_parts();
    let upstream_request =
        build_upstream_request(&state.client, parts.method, url, &parts.headers, body)?;

    state
        .client
        .execute(upstream_request)
        .await
        .map_err(|e| RelayError::upstream(&e))
}

/// Answer a CORS preflight without contacting any upstream.
fn preflight(state: &RelayState, origin: &str, headers: &HeaderMap, start: Instant) -> Response {
    if !state.allow_list.is_allowed(origin) {
        tracing::warn!(origin = %origin, "Preflight from disallowed origin");
        record_request("OPTIONS", "preflight_rejected", 403, start);
        return StatusCode::FORBIDDEN.into_response();
    }

    let request_headers = headers
        .get(header::ACCESS_CONTROL_REQUEST_HEADERS)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static(""));

    let mut response = StatusCode::NO_CONTENT.into_response();
    apply_preflight_headers(
        response.headers_mut(),
        state.allow_origin(origin),
        request_headers,
    );

    tracing::debug!(origin = %origin, "Preflight accepted");
    record_request("OPTIONS", "preflight", 204, start);
    response
}

/// The caller's `Origin`, or empty when absent.
fn origin_of(headers: &HeaderMap) -> String {
    headers
        .get(header::ORIGIN)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}
