//! cors-relay
//!
//! Forwards browser requests to third-party APIs that do not grant
//! cross-origin access, and answers with permissive CORS headers.
//!
//! ```text
//!   Browser ──OPTIONS──▶ relay ──204 + CORS headers
//!
//!   Browser ──GET /?url=https://api.example/x──▶ relay ──▶ api.example
//!      ▲                                                        │
//!      └──── upstream status + body, Access-Control-* rewritten ┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use cors_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use cors_relay::lifecycle::startup;
use cors_relay::observability::logging;

#[derive(Parser)]
#[command(name = "cors-relay")]
#[command(about = "Cross-origin forwarding relay", long_about = None)]
struct Cli {
    /// TOML configuration file. Compiled-in defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, overriding the configuration.
    #[arg(short, long)]
    bind: Option<String>,

    /// Allowed origin (repeatable). Replaces the configured allow-list.
    #[arg(long = "allow-origin")]
    allow_origins: Vec<String>,
}

impl Cli {
    fn into_config(self) -> Result<RelayConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelayConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if !self.allow_origins.is_empty() {
            config.cors.allowed_origins = self.allow_origins;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability);

    tracing::info!("cors-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        allowed_origins = ?config.cors.allowed_origins,
        upstream_timeout_secs = config.timeouts.upstream_secs,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
