//! # Ports Layer
//!
//! Trait definitions for the bridge's inbound and outbound interfaces.

pub mod inbound;
pub mod outbound;
