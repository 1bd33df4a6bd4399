//! # Process-Wide Context
//!
//! State established exactly once by a successful bootstrap and read-only
//! afterwards: the acquired cryptographic library context and the resolved
//! chain parameters. Modeled as an explicit value threaded into every call
//! instead of ambient global state, so concurrent `handle` calls can share
//! it without locking.

use rand::RngCore;
use zeroize::Zeroize;

use crate::domain::chainparams::ChainParams;
use crate::domain::errors::BridgeError;

/// Witness that the underlying cryptographic libraries are usable.
///
/// Acquisition probes the OS entropy source once; if the probe fails the
/// bootstrap fails with [`BridgeError::CryptoInitUnavailable`] and nothing
/// else happens.
#[derive(Debug)]
pub struct CryptoContext {
    _priv: (),
}

impl CryptoContext {
    /// Acquire the cryptographic context.
    pub fn acquire() -> Result<Self, BridgeError> {
        let mut probe = [0u8; 32];
        rand::rngs::OsRng
            .try_fill_bytes(&mut probe)
            .map_err(|e| BridgeError::CryptoInitUnavailable(e.to_string()))?;
        probe.zeroize();
        Ok(Self { _priv: () })
    }
}

/// Read-only context shared by every call after bootstrap.
#[derive(Debug)]
pub struct ProcessContext {
    /// Network parameters resolved at bootstrap
    pub chain: &'static ChainParams,
    /// Acquired cryptographic library context
    pub crypto: CryptoContext,
}
