//! Response rewriting.
//!
//! # Responsibilities
//! - Carry the upstream status and headers to the client
//! - Replace upstream `Access-Control-*` headers with the relay's own
//! - Stream the upstream body through untouched
//!
//! # Design Decisions
//! - The upstream response is moved into the outbound body stream, so its
//!   connection is released when the client finishes or goes away

use axum::{
    body::Body,
    http::{HeaderMap, HeaderValue},
    response::Response,
};

use crate::cors::headers::{apply_forward_headers, copy_without_access_control};

/// Turn an upstream response into the client response.
pub fn relay_response(upstream: reqwest::Response, allow_origin: HeaderValue) -> Response {
    let status = upstream.status();

    let mut headers = HeaderMap::with_capacity(upstream.headers().len() + 3);
    copy_without_access_control(upstream.headers(), &mut headers);
    apply_forward_headers(&mut headers, allow_origin);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
