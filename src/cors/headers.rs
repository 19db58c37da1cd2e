//! CORS header names, fixed values, and rewriting helpers.

use axum::http::{header, HeaderMap, HeaderName, HeaderValue};

/// Methods advertised to browsers on every successful answer.
pub const ALLOWED_METHODS: &str = "GET,HEAD,POST,PUT,DELETE,PATCH,OPTIONS";

/// Preflight cache lifetime in seconds.
pub const PREFLIGHT_MAX_AGE: &str = "86400";

const ACCESS_CONTROL_PREFIX: &str = "access-control-";

/// Whether a header belongs to the `Access-Control-*` family.
///
/// `HeaderName` is always lowercase, so a plain prefix test is case-insensitive.
pub fn is_access_control(name: &HeaderName) -> bool {
    name.as_str().starts_with(ACCESS_CONTROL_PREFIX)
}

/// Copy `source` into `target`, skipping `Access-Control-*` headers.
///
/// Multi-valued headers keep every value in order.
pub fn copy_without_access_control(source: &HeaderMap, target: &mut HeaderMap) {
    for (name, value) in source {
        if is_access_control(name) {
            continue;
        }
        target.append(name.clone(), value.clone());
    }
}

/// Stamp the relay's CORS headers onto a forwarded response.
pub fn apply_forward_headers(headers: &mut HeaderMap, allow_origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
}

/// Stamp the preflight answer headers.
///
/// `request_headers` is the caller's `Access-Control-Request-Headers`, mirrored verbatim.
pub fn apply_preflight_headers(
    headers: &mut HeaderMap,
    allow_origin: HeaderValue,
    request_headers: HeaderValue,
) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, request_headers);
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
}
