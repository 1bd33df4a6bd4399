//! # Oracle Telemetry
//!
//! Diagnostic-stream setup for the signing-oracle bridge.
//!
//! Host processes call [`init_telemetry`] once at startup. Events at warn
//! level and above go to stderr (the error stream), everything below goes
//! to stdout (the informational stream); the bridge's status reporter maps
//! its "unusual" threshold onto exactly that split.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;

pub use config::TelemetryConfig;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The configured filter directive could not be parsed
    #[error("Invalid log filter: {0}")]
    Config(String),

    /// A global subscriber was already installed
    #[error("Failed to install subscriber: {0}")]
    Init(String),
}

/// Initialize the diagnostic streams.
///
/// Installs the process-global `tracing` subscriber. Call once from the
/// host before bootstrapping the bridge; a second call fails with
/// [`TelemetryError::Init`].
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| TelemetryError::Config(e.to_string()))?;

    // Warn and above to stderr, the rest to stdout.
    let writer = std::io::stderr
        .with_max_level(Level::WARN)
        .or_else(std::io::stdout);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(config.with_targets)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}
