//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validated config → metrics → relay state → bind listener → serve
//!
//! Signals (signals.rs):
//!     SIGINT / SIGTERM → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     trigger → server stops accepting → in-flight exchanges finish → exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error (including bind failure) is fatal
//! - The listener binds last, so traffic only arrives once the relay is ready

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
