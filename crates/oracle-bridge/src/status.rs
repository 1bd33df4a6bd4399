//! # Status Reporting
//!
//! The three diagnostic channels the bridge offers the signing core:
//!
//! - [`bad_request`]: recoverable, scoped to the current operation only.
//! - [`logf`]: leveled diagnostics; levels below [`LogLevel::Unusual`] go to
//!   the informational stream, `Unusual` and above to the error stream (the
//!   stdout/stderr split is configured by `oracle-telemetry`).
//! - [`terminate`]: the fail-stop channel. Library code never calls it; it
//!   propagates [`BridgeError::Fatal`] to the host, whose single top-level
//!   handler terminates the process with `0x80 | reason`.

use crate::domain::errors::{BridgeError, FailReason};
use crate::domain::identity::{ClientIdentity, PeerId};

/// Diagnostic severity levels.
///
/// Ordered: everything below `Unusual` is routine, `Unusual` and `Broken`
/// indicate conditions an operator should see.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum LogLevel {
    /// Raw wire traffic
    Io,
    /// Developer diagnostics
    Debug,
    /// Routine operational events
    Info,
    /// Unexpected but survivable conditions
    Unusual,
    /// Invariant violations
    Broken,
}

impl LogLevel {
    /// True for levels routed to the error stream.
    pub fn is_unusual(self) -> bool {
        self >= LogLevel::Unusual
    }
}

/// Write one leveled diagnostic line, prefixed with the peer's hex-encoded
/// identifier when one is supplied.
pub fn logf(level: LogLevel, peer: Option<&PeerId>, message: &str) {
    match (level, peer) {
        (LogLevel::Io, Some(p)) => tracing::trace!(peer_id = %p, "{message}"),
        (LogLevel::Io, None) => tracing::trace!("{message}"),
        (LogLevel::Debug, Some(p)) => tracing::debug!(peer_id = %p, "{message}"),
        (LogLevel::Debug, None) => tracing::debug!("{message}"),
        (LogLevel::Info, Some(p)) => tracing::info!(peer_id = %p, "{message}"),
        (LogLevel::Info, None) => tracing::info!("{message}"),
        (LogLevel::Unusual, Some(p)) => tracing::warn!(peer_id = %p, "{message}"),
        (LogLevel::Unusual, None) => tracing::warn!("{message}"),
        (LogLevel::Broken, Some(p)) => tracing::error!(peer_id = %p, "{message}"),
        (LogLevel::Broken, None) => tracing::error!("{message}"),
    }
}

/// Report a rejected request.
///
/// Logs the error text against the requesting client and returns the
/// recoverable error for the current operation. Other in-flight and future
/// operations are unaffected.
pub fn bad_request(client: &ClientIdentity, request: &[u8], error: &str) -> BridgeError {
    logf(LogLevel::Unusual, client.peer.as_ref(), error);
    tracing::debug!(
        request_len = request.len(),
        scope_id = client.scope_id,
        "Rejected request payload"
    );
    BridgeError::BadRequest(error.to_string())
}

/// Terminate the process after an unrecoverable signing-core failure.
///
/// This is the host's single top-level handler for [`BridgeError::Fatal`].
/// It writes the diagnostic and exits with status `0x80 | reason`; control
/// never returns to the caller. Deliberately fail-stop: running on after a
/// security-relevant invariant violation is worse than crashing.
pub fn terminate(reason: FailReason, message: &str) -> ! {
    tracing::error!(?reason, "{message}");
    std::process::exit(reason.exit_status());
}
