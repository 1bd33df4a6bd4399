//! # Chain Parameters
//!
//! Network-specific derivation constants, resolved once by network name at
//! bootstrap and immutable for the process lifetime.

use serde::{Deserialize, Serialize};

/// BIP32-style extended-key version prefixes for one network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyVersion {
    /// Version prefix for extended public keys
    pub bip32_pubkey_version: u32,
    /// Version prefix for extended private keys
    pub bip32_privkey_version: u32,
}

/// Derivation constants for one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainParams {
    /// Canonical network name used for lookup
    pub network_name: &'static str,
    /// Extended-key version prefixes affecting key derivation
    pub key_version: KeyVersion,
}

/// Mainnet extended-key versions (`xpub`/`xprv`).
const MAINNET_KEY_VERSION: KeyVersion = KeyVersion {
    bip32_pubkey_version: 0x0488B21E,
    bip32_privkey_version: 0x0488ADE4,
};

/// Test-network extended-key versions (`tpub`/`tprv`), shared by testnet,
/// signet and regtest.
const TESTNET_KEY_VERSION: KeyVersion = KeyVersion {
    bip32_pubkey_version: 0x043587CF,
    bip32_privkey_version: 0x04358394,
};

/// All networks the oracle can be bootstrapped for.
static NETWORKS: &[ChainParams] = &[
    ChainParams {
        network_name: "bitcoin",
        key_version: MAINNET_KEY_VERSION,
    },
    ChainParams {
        network_name: "testnet",
        key_version: TESTNET_KEY_VERSION,
    },
    ChainParams {
        network_name: "signet",
        key_version: TESTNET_KEY_VERSION,
    },
    ChainParams {
        network_name: "regtest",
        key_version: TESTNET_KEY_VERSION,
    },
];

impl ChainParams {
    /// Look up chain parameters by network name.
    ///
    /// Returns `None` for unknown networks; the caller turns that into
    /// an `UnknownNetwork` bootstrap failure.
    pub fn for_network(name: &str) -> Option<&'static ChainParams> {
        NETWORKS.iter().find(|p| p.network_name == name)
    }
}
