//! # Client Identity
//!
//! Capability-scoped identities presented to the signing core with every
//! request. An identity is constructed fresh per request and never retained.
//!
//! Capability bits name which operation classes a client may invoke. This
//! layer only carries them; enforcement happens inside the signing core once
//! the identity is presented to it.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

/// Combination of [`Capability`] bits.
pub type Capabilities = u64;

/// Individual capability bits.
#[allow(non_snake_case)]
pub mod Capability {
    /// Derive shared secrets via ECDH
    pub const ECDH: u64 = 1;
    /// Sign gossip announcements
    pub const SIGN_GOSSIP: u64 = 2;
    /// Sign on-chain transactions
    pub const SIGN_ONCHAIN_TX: u64 = 4;
    /// Derive per-commitment points
    pub const COMMITMENT_POINT: u64 = 8;
    /// Sign the remote side's commitment transactions
    pub const SIGN_REMOTE_TX: u64 = 16;
    /// Sign mutual-close transactions
    pub const SIGN_CLOSING_TX: u64 = 32;
    /// Sign will-fund offers
    pub const SIGN_WILL_FUND_OFFER: u64 = 64;
    /// Full access, reserved for the main daemon
    pub const MASTER: u64 = 1024;
}

/// Wire width of a peer identifier in bytes.
pub const PEER_ID_LEN: usize = 33;

/// Fixed-width binary peer identifier (compressed public key).
#[serde_as]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerId(#[serde_as(as = "Bytes")] [u8; PEER_ID_LEN]);

impl PeerId {
    /// Wire width of a peer identifier in bytes.
    pub const LEN: usize = PEER_ID_LEN;

    /// Create from a fixed-size byte array.
    pub fn new(bytes: [u8; Self::LEN]) -> Self {
        Self(bytes)
    }

    /// Get the identifier bytes.
    pub fn as_bytes(&self) -> &[u8; Self::LEN] {
        &self.0
    }

    /// Hex encoding used for log lines.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for PeerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A capability-scoped client identity.
///
/// `peer` is either the exactly-decoded fixed-width identifier or `None`
/// for host-internal clients (the main daemon). Never a partial value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientIdentity {
    /// Operation classes this client may invoke
    pub capabilities: Capabilities,
    /// Database/scope id narrowing the state a request may act upon
    pub scope_id: u64,
    /// Peer identifier, `None` for host-internal clients
    pub peer: Option<PeerId>,
}

impl ClientIdentity {
    /// Build a peer-scoped identity.
    pub fn new_peer(capabilities: Capabilities, scope_id: u64, peer: PeerId) -> Self {
        Self {
            capabilities,
            scope_id,
            peer: Some(peer),
        }
    }

    /// Build a main/daemon-scoped identity.
    pub fn new_main(capabilities: Capabilities, scope_id: u64) -> Self {
        Self {
            capabilities,
            scope_id,
            peer: None,
        }
    }
}
