//! Configuration validation.
//!
//! Serde handles syntax; this module checks the values make sense before the
//! config is accepted. All problems are reported, not just the first.

use std::net::SocketAddr;

use crate::config::schema::RelayConfig;
use crate::cors::WILDCARD;

/// Origin sent by sandboxed frames and `file://` pages.
const OPAQUE_ORIGIN: &str = "null";

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `listener.bind_address` is not a socket address.
    InvalidBindAddress(String),
    /// An allow-list entry is not `*` or a `scheme://host[:port]` origin.
    InvalidOrigin(String),
    /// `timeouts.upstream_secs` is zero.
    ZeroUpstreamTimeout,
    /// Metrics are enabled but `observability.metrics_address` does not parse.
    InvalidMetricsAddress(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::InvalidOrigin(origin) => {
                write!(f, "invalid allowed origin '{}'", origin)
            }
            ValidationError::ZeroUpstreamTimeout => {
                write!(f, "upstream timeout must be greater than zero")
            }
            ValidationError::InvalidMetricsAddress(addr) => {
                write!(f, "invalid metrics address '{}'", addr)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    for origin in &config.cors.allowed_origins {
        if !is_valid_origin_entry(origin) {
            errors.push(ValidationError::InvalidOrigin(origin.clone()));
        }
    }

    if config.timeouts.upstream_secs == 0 {
        errors.push(ValidationError::ZeroUpstreamTimeout);
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Browsers send origins as `scheme://host[:port]` with no path, or the
/// opaque `null`, so an entry carrying anything else can never match.
fn is_valid_origin_entry(entry: &str) -> bool {
    if entry == WILDCARD || entry == OPAQUE_ORIGIN {
        return true;
    }
    if entry.trim().is_empty() || entry.ends_with('/') {
        return false;
    }
    match url::Url::parse(entry) {
        Ok(url) => {
            url.has_host()
                && url.path() == "/"
                && url.query().is_none()
                && url.fragment().is_none()
                && url.username().is_empty()
        }
        Err(_) => false,
    }
}
