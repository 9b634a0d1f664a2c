//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` wins when set;
//! otherwise the filter comes from `LoggingConfig`, or debug directives in
//! developer mode.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directives used when `RUST_LOG` is not set
pub fn default_directives(logging: &LoggingConfig, debug: bool) -> String {
    if debug {
        "envdash=debug,tower_http=debug".to_string()
    } else {
        format!("envdash={},tower_http=info", logging.level)
    }
}

/// Install the global subscriber (pretty or JSON lines)
pub fn init(logging: &LoggingConfig, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(logging, debug)));

    let registry = tracing_subscriber::registry().with(filter);
    if logging.is_json() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
