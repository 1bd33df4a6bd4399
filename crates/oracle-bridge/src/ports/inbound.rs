//! # Inbound Ports (Driving Ports / API)
//!
//! The caller-facing boundary of the dispatch bridge.

use crate::domain::errors::BridgeError;
use crate::domain::identity::Capabilities;
use crate::domain::secret::MasterSecret;

/// Signing-oracle dispatch API.
///
/// `initialize` must complete before any `handle` call; establishing that
/// ordering (single caller during bootstrap) is the host's responsibility.
/// Each `handle` call is a stateless transaction layered on the persistent
/// initialized context.
pub trait SigningOracleApi: Send + Sync {
    /// Bootstrap the oracle with the 32-byte master secret and a network
    /// name, returning the core's initial response.
    ///
    /// The secret never outlives this call: it is held in a pinned scope
    /// and zeroed before return on every exit path. A second call on an
    /// initialized bridge is rejected with
    /// [`BridgeError::AlreadyInitialized`].
    fn initialize(&mut self, secret: &MasterSecret, network: &str) -> Result<Vec<u8>, BridgeError>;

    /// Dispatch one request to the signing core on behalf of a client.
    ///
    /// `peer_id` is an optional fixed-width identifier; `None` (or an empty
    /// buffer) resolves a host-internal main-scoped identity. The returned
    /// bytes are exactly what the core produced, with sole ownership
    /// transferred to the caller.
    fn handle(
        &self,
        capabilities: Capabilities,
        scope_id: u64,
        peer_id: Option<&[u8]>,
        request: &[u8],
    ) -> Result<Vec<u8>, BridgeError>;
}
