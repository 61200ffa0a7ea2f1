//! Process-wide `tracing` subscriber.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "info,server=debug,tower_http=info";

/// Install the global subscriber. `RUST_LOG` overrides the default filter;
/// `json` switches the output to one JSON object per line.
pub fn init_logging(json: bool) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if json {
            registry
                .with(fmt::layer().json().with_target(true).with_current_span(true))
                .try_init()
        } else {
            registry.with(fmt::layer().with_target(true)).try_init()
        };

        // A subscriber may already be installed (tests, embedding binaries).
        if result.is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::info!(json, version = env!("CARGO_PKG_VERSION"), "Logging initialized");
    });
}
