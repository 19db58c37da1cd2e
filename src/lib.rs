//! Cross-origin forwarding relay library.

pub mod config;
pub mod cors;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::RelayConfig;
pub use cors::AllowList;
pub use http::{HttpServer, RelayError, RelayState};
pub use lifecycle::Shutdown;
