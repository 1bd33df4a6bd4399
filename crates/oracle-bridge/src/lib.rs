//! # Oracle Bridge — Signing-Oracle Dispatch
//!
//! Dispatch bridge between host processes and an HSM-style signing core:
//! the core holds the master secret's derivations and answers scoped
//! requests; this crate carries those requests across the trust boundary
//! without ever exposing the secret itself.
//!
//! ## Architecture
//!
//! This crate follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): secret handling, chain parameters,
//!   client identities, wire decoding
//! - **Ports Layer** (`ports/`): trait definitions for inbound/outbound
//!   interfaces
//! - **Service Layer** (`service.rs`): wires domain logic to ports
//!
//! ## Failure model
//!
//! Two tiers. Recoverable failures (bad bootstrap parameters, malformed
//! peer ids, rejected requests) are ordinary [`BridgeError`] values scoped
//! to one call. Fatal failures ([`BridgeError::Fatal`]) never resume: the
//! host's top-level handler passes them to [`status::terminate`], which
//! stops the process with exit status `0x80 | reason`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod context;
pub mod domain;
pub mod ports;
pub mod service;
pub mod status;

// Re-export public API
pub use context::{CryptoContext, ProcessContext};
pub use domain::chainparams::{ChainParams, KeyVersion};
pub use domain::errors::{BridgeError, FailReason};
pub use domain::identity::{Capabilities, Capability, ClientIdentity, PeerId};
pub use domain::secret::{MasterSecret, PinnedSecret, SECRET_LEN};
pub use domain::wire::decode_peer_id;
pub use ports::inbound::SigningOracleApi;
pub use ports::outbound::{CoreError, SigningCore};
pub use service::OracleBridge;
pub use status::LogLevel;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
