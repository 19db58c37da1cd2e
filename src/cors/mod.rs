//! Cross-origin policy.
//!
//! # Data Flow
//! ```text
//! Origin header
//!     → allow_list.rs (is the caller permitted? which Allow-Origin to answer?)
//!     → headers.rs (strip upstream CORS headers, stamp the relay's own)
//! ```
//!
//! # Design Decisions
//! - The allow-list is built once and never mutated; handlers share it via Arc
//! - An empty or absent Origin is always permitted (non-browser callers)

pub mod allow_list;
pub mod headers;

pub use allow_list::{AllowList, WILDCARD};
