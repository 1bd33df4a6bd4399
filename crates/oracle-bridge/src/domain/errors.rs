//! # Bridge Errors
//!
//! Two-tier error taxonomy for the dispatch bridge.
//!
//! Recoverable variants report a failed bootstrap or a failed request to the
//! immediate caller and leave all other state untouched. The `Fatal` variant
//! models a security-relevant invariant violation inside the signing core: it
//! must propagate untouched to the host's top-level handler (see
//! [`crate::status::terminate`]), because after such a violation continuing
//! to serve requests is more dangerous than stopping.

use thiserror::Error;

/// Reason codes for unrecoverable failures reported by the signing core.
///
/// Encoded into the process exit status as `0x80 | code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum FailReason {
    /// Lost or corrupted channel to the supervising daemon
    MasterIo = 0,
    /// Secret store could not be read or written
    SecretStoreIo = 1,
    /// A client violated the request protocol
    ProtocolError = 2,
    /// Internal invariant violation inside the signing core
    InternalError = 3,
}

impl FailReason {
    /// Encode this reason into a process exit status.
    pub fn exit_status(self) -> i32 {
        0x80 | (self as i32 & 0xFF)
    }
}

/// Errors surfaced by the dispatch bridge.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// The cryptographic library context could not be acquired
    #[error("Crypto context unavailable: {0}")]
    CryptoInitUnavailable(String),

    /// No chain parameters are registered for the requested network
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Peer identifier buffer is not exactly the fixed wire width
    #[error("Malformed peer id: expected {expected} bytes, got {actual}")]
    MalformedPeerId {
        /// Fixed wire width of a peer identifier
        expected: usize,
        /// Length actually supplied by the caller
        actual: usize,
    },

    /// The signing core rejected the request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// `initialize` was called on an already-initialized bridge
    #[error("Bridge is already initialized")]
    AlreadyInitialized,

    /// `handle` was called before a successful `initialize`
    #[error("Bridge is not initialized")]
    NotInitialized,

    /// The signing core reported an unrecoverable invariant violation
    #[error("Fatal signing-core failure ({reason:?}): {message}")]
    Fatal {
        /// Reason code, encoded into the exit status by the host
        reason: FailReason,
        /// Diagnostic text produced by the core
        message: String,
    },
}

impl BridgeError {
    /// True for the divergent tier: the host must stop the process.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BridgeError::Fatal { .. })
    }
}
