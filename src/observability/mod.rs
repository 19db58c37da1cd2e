//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! relay handler
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histograms)
//!     → http_trace.rs (per-request spans from tower-http)
//!
//! Consumers:
//!     → stdout (fmt layer, filtered by RUST_LOG or config)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod http_trace;
pub mod logging;
pub mod metrics;
