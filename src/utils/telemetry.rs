//! # Logging Setup
//!
//! Installs the global `tracing` subscriber used by the binary: an
//! [`EnvFilter`] driven by `RUST_LOG`, and bunyan-formatted JSON lines.

use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Builds a subscriber writing bunyan JSON to stdout.
///
/// # Arguments
///
/// * `name` - Application name stamped on every record
/// * `default_filter` - Filter used when `RUST_LOG` is unset or invalid
pub fn get_subscriber(name: &str, default_filter: &str) -> impl Subscriber + Send + Sync {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let formatting_layer = BunyanFormattingLayer::new(name.to_string(), std::io::stdout);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Registers `subscriber` as the global default. Call once, at startup.
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber)
}
