//! Telemetry configuration.

/// Configuration for the diagnostic streams.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// `tracing` env-filter directive, e.g. `info` or `oracle_bridge=debug`
    pub log_filter: String,
    /// Include event targets in log lines
    pub with_targets: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            with_targets: false,
        }
    }
}

impl TelemetryConfig {
    /// Build a configuration from the environment.
    ///
    /// | Variable | Default | Description |
    /// |----------|---------|-------------|
    /// | `ORACLE_LOG` | `info` | Log level filter |
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(filter) = std::env::var("ORACLE_LOG") {
            if !filter.is_empty() {
                config.log_filter = filter;
            }
        }
        config
    }
}
