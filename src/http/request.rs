//! Upstream request construction.
//!
//! # Responsibilities
//! - Extract the `url` target from the inbound query string
//! - Parse it as an absolute URL and refuse schemes other than http(s)
//! - Rebuild the inbound request against the target, minus `Host`
//!
//! # Design Decisions
//! - The inbound body is streamed through, never buffered
//! - Header order and multiplicity are preserved

use axum::{
    body::{Body, HttpBody},
    http::{header, HeaderMap, Method, Uri},
};
use url::Url;

use crate::http::error::RelayError;

/// Query parameter naming the upstream target.
pub const TARGET_PARAM: &str = "url";

/// First `url` query value, decoded.
///
/// An empty value counts as absent.
pub fn target_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TARGET_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Parse the target as an absolute URL the relay can reach.
///
/// A target that does not parse is the caller's mistake. One that parses
/// with a scheme other than http(s) fails as an upstream call would.
pub fn parse_target(raw: &str) -> Result<Url, RelayError> {
    let url = Url::parse(raw).map_err(|e| RelayError::InvalidTargetUrl {
        target: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(RelayError::UpstreamCallFailed(format!(
            "unsupported protocol scheme \"{}\"",
            other
        ))),
    }
}

/// Inbound headers minus `Host`, values kept in order.
pub fn forwarded_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(inbound.len());
    for (name, value) in inbound {
        if *name == header::HOST {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }
    headers
}

/// Assemble the upstream request for `target` from the inbound parts.
pub fn build_upstream_request(
    client: &reqwest::Client,
    method: Method,
    target: Url,
    inbound_headers: &HeaderMap,
    body: Body,
) -> Result<reqwest::Request, RelayError> {
    let mut builder = client.request(method, target);
    if !body.is_end_stream() {
        builder = builder.body(reqwest::Body::wrap_stream(body.into_data_stream()));
    }

    let mut request = builder
        .build()
        .map_err(|e| RelayError::RequestConstructionFailed(e.to_string()))?;
    *request.headers_mut() = forwarded_headers(inbound_headers);
    Ok(request)
}
