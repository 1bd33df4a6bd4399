//! # Outbound Ports (Driven Ports)
//!
//! The signing core consumed by the bridge. The core performs the actual
//! key derivation and signing; the bridge only carries requests across the
//! trust boundary and maps the core's failures onto its two error tiers.

use crate::context::ProcessContext;
use crate::domain::chainparams::ChainParams;
use crate::domain::errors::FailReason;
use crate::domain::identity::ClientIdentity;
use crate::domain::secret::SECRET_LEN;

/// Failures reported by the signing core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The request was rejected; only the current operation is affected
    BadRequest(String),
    /// Security-relevant invariant violation; the host must stop the process
    Fatal {
        /// Reason code encoded into the exit status
        reason: FailReason,
        /// Diagnostic text
        message: String,
    },
}

/// The external signing core.
///
/// Whether concurrent `handle_client_message` calls are safe is a property
/// of the implementation, inherited by the bridge rather than guaranteed
/// by it.
pub trait SigningCore: Send + Sync {
    /// Bootstrap the core with the master secret and the network's
    /// key-version prefixes, producing the initial response message.
    ///
    /// The secret reference is only valid for the duration of this call;
    /// implementations must derive what they need and not retain it.
    fn init(&self, secret: &[u8; SECRET_LEN], chain: &ChainParams) -> Result<Vec<u8>, CoreError>;

    /// Handle one client request, enforcing the client's capabilities.
    fn handle_client_message(
        &self,
        ctx: &ProcessContext,
        client: &ClientIdentity,
        request: &[u8],
    ) -> Result<Vec<u8>, CoreError>;
}
