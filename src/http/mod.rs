//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, tracing layer)
//!     → relay.rs (preflight / demo / forward decision)
//!     → request.rs (target parse, upstream request rebuild)
//!     → upstream exchange (reqwest, total timeout)
//!     → response.rs (strip upstream CORS, stamp ours, stream body)
//!     → Send to client
//! ```

pub mod demo;
pub mod error;
pub mod relay;
pub mod request;
pub mod response;
pub mod server;

pub use error::RelayError;
pub use relay::{relay_handler, upstream_client, RelayState};
pub use server::{build_router, HttpServer};
