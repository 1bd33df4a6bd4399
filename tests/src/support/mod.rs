//! # Test Support
//!
//! A scripted signing core standing in for the real cryptographic core.
//!
//! The scripted core speaks a miniature type-prefixed protocol: every
//! request starts with a big-endian `u16` message type and is answered by
//! a message of type `request + 100` carrying the request payload. That is
//! enough to observe, from the outside, that the bridge forwards requests
//! and responses byte-for-byte and enforces nothing itself.

use std::sync::Mutex;

use oracle_bridge::{
    Capability, ChainParams, ClientIdentity, CoreError, FailReason, ProcessContext, SigningCore,
    SECRET_LEN,
};

/// Offset between request and response message types.
pub const RESPONSE_TYPE_OFFSET: u16 = 100;

/// Message type of the ping request the scripted core understands.
pub const MSG_PING: u16 = 23;

/// Message type that only clients holding [`Capability::SIGN_GOSSIP`] may
/// send.
pub const MSG_SIGN_GOSSIP: u16 = 2;

/// Message type scripted to violate a core invariant.
pub const MSG_POISON: u16 = 666;

/// Scripted signing core.
///
/// Records every client identity it is handed, so flows can assert on how
/// the bridge resolved them.
pub struct ScriptedCore {
    /// Clients observed by `handle_client_message`, in call order
    pub seen_clients: Mutex<Vec<ClientIdentity>>,
}

impl ScriptedCore {
    /// Create a fresh scripted core.
    pub fn new() -> Self {
        Self {
            seen_clients: Mutex::new(Vec::new()),
        }
    }

    fn request_type(request: &[u8]) -> Option<u16> {
        let head: [u8; 2] = request.get(..2)?.try_into().ok()?;
        Some(u16::from_be_bytes(head))
    }

    /// Build the response for `msg_type` with `payload` appended.
    pub fn response_for(msg_type: u16, payload: &[u8]) -> Vec<u8> {
        let mut out = (msg_type + RESPONSE_TYPE_OFFSET).to_be_bytes().to_vec();
        out.extend_from_slice(payload);
        out
    }
}

impl Default for ScriptedCore {
    fn default() -> Self {
        Self::new()
    }
}

impl SigningCore for ScriptedCore {
    fn init(&self, _secret: &[u8; SECRET_LEN], chain: &ChainParams) -> Result<Vec<u8>, CoreError> {
        // An init response derived from public material only: the network's
        // key-version prefix, never the secret.
        let mut response = vec![0x00, 0x65];
        response.extend_from_slice(&chain.key_version.bip32_pubkey_version.to_be_bytes());
        Ok(response)
    }

    fn handle_client_message(
        &self,
        _ctx: &ProcessContext,
        client: &ClientIdentity,
        request: &[u8],
    ) -> Result<Vec<u8>, CoreError> {
        self.seen_clients.lock().unwrap().push(client.clone());

        let msg_type = Self::request_type(request)
            .ok_or_else(|| CoreError::BadRequest("Message too short for a type".into()))?;

        match msg_type {
            MSG_PING => Ok(Self::response_for(MSG_PING, &request[2..])),
            MSG_SIGN_GOSSIP => {
                // Capability enforcement lives here, in the core, not in
                // the bridge.
                if client.capabilities & Capability::SIGN_GOSSIP == 0 {
                    return Err(CoreError::BadRequest(
                        "Client lacks the sign-gossip capability".into(),
                    ));
                }
                Ok(Self::response_for(MSG_SIGN_GOSSIP, &request[2..]))
            }
            MSG_POISON => Err(CoreError::Fatal {
                reason: FailReason::InternalError,
                message: "Scripted invariant violation".into(),
            }),
            other => Err(CoreError::BadRequest(format!("Unknown message type {other}"))),
        }
    }
}
