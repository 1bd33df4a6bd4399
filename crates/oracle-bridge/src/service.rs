//! # Oracle Bridge Service
//!
//! Application service that implements the [`SigningOracleApi`] port and
//! orchestrates each request: copy the inbound buffer into a call-scoped
//! arena, decode the optional peer identifier, resolve a client identity,
//! delegate to the signing core, and hand the response back untouched.
//!
//! The bridge is fully synchronous. Bootstrap runs exactly once and
//! establishes the read-only [`ProcessContext`] every later call shares;
//! each `handle` call is an independent transaction on top of it.

use crate::context::{CryptoContext, ProcessContext};
use crate::domain::chainparams::ChainParams;
use crate::domain::errors::BridgeError;
use crate::domain::identity::{Capabilities, ClientIdentity};
use crate::domain::secret::{MasterSecret, PinnedSecret};
use crate::domain::wire;
use crate::ports::inbound::SigningOracleApi;
use crate::ports::outbound::{CoreError, SigningCore};
use crate::status::{self, LogLevel};

/// Bridge lifecycle.
///
/// `Uninitialized → Initialized` on the first successful bootstrap, then
/// `Initialized` for the process lifetime. A failed bootstrap moves to
/// `Failed`; whether to retry with a fresh bridge is the host's policy.
enum BridgeState {
    Uninitialized,
    Initialized(ProcessContext),
    Failed,
}

/// The dispatch bridge in front of a signing core.
pub struct OracleBridge<C: SigningCore> {
    core: C,
    state: BridgeState,
}

impl<C: SigningCore> OracleBridge<C> {
    /// Create an uninitialized bridge around `core`.
    pub fn new(core: C) -> Self {
        Self {
            core,
            state: BridgeState::Uninitialized,
        }
    }

    /// True once a bootstrap has succeeded.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, BridgeState::Initialized(_))
    }

    /// Borrow the wrapped signing core.
    pub fn core(&self) -> &C {
        &self.core
    }

    /// Map a core failure onto the bridge's error tiers, logging it.
    fn report_core_error(client: &ClientIdentity, request: &[u8], err: CoreError) -> BridgeError {
        match err {
            CoreError::BadRequest(text) => status::bad_request(client, request, &text),
            CoreError::Fatal { reason, message } => {
                status::logf(LogLevel::Broken, client.peer.as_ref(), &message);
                BridgeError::Fatal { reason, message }
            }
        }
    }
}

impl<C: SigningCore> SigningOracleApi for OracleBridge<C> {
    fn initialize(&mut self, secret: &MasterSecret, network: &str) -> Result<Vec<u8>, BridgeError> {
        if self.is_initialized() {
            return Err(BridgeError::AlreadyInitialized);
        }

        let crypto = match CryptoContext::acquire() {
            Ok(ctx) => ctx,
            Err(e) => {
                status::logf(LogLevel::Unusual, None, &e.to_string());
                self.state = BridgeState::Failed;
                return Err(e);
            }
        };

        let chain = match ChainParams::for_network(network) {
            Some(params) => params,
            None => {
                let e = BridgeError::UnknownNetwork(network.to_string());
                status::logf(LogLevel::Unusual, None, &e.to_string());
                self.state = BridgeState::Failed;
                return Err(e);
            }
        };

        // The pinned copy lives exactly as long as the core's init call;
        // the guard zeroes and unpins it on success and failure alike.
        let result = {
            let pinned = PinnedSecret::new(secret.as_bytes());
            self.core.init(pinned.as_bytes(), chain)
        };

        match result {
            Ok(response) => {
                self.state = BridgeState::Initialized(ProcessContext { chain, crypto });
                status::logf(
                    LogLevel::Info,
                    None,
                    &format!("Signing oracle initialized for network {network}"),
                );
                Ok(response)
            }
            Err(err) => {
                self.state = BridgeState::Failed;
                let client = ClientIdentity::new_main(0, 0);
                Err(Self::report_core_error(&client, &[], err))
            }
        }
    }

    fn handle(
        &self,
        capabilities: Capabilities,
        scope_id: u64,
        peer_id: Option<&[u8]>,
        request: &[u8],
    ) -> Result<Vec<u8>, BridgeError> {
        let ctx = match &self.state {
            BridgeState::Initialized(ctx) => ctx,
            _ => return Err(BridgeError::NotInitialized),
        };

        // Call-scoped copy: the bridge never aliases caller-owned memory
        // while processing, and the copy is dropped on every exit path.
        let request_copy = request.to_vec();

        let peer = wire::decode_peer_id(peer_id)?;
        let client = match peer {
            Some(peer) => ClientIdentity::new_peer(capabilities, scope_id, peer),
            None => ClientIdentity::new_main(capabilities, scope_id),
        };

        self.core
            .handle_client_message(ctx, &client, &request_copy)
            .map_err(|err| Self::report_core_error(&client, &request_copy, err))
    }
}
