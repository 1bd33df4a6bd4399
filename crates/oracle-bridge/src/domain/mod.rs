//! # Domain Layer
//!
//! Pure bridge logic: secret handling, chain parameters, client identities
//! and wire decoding. No I/O besides the memory-pinning syscalls in
//! [`secret`].

pub mod chainparams;
pub mod errors;
pub mod identity;
pub mod secret;
pub mod wire;
