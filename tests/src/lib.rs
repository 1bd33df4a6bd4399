//! # Signing-Oracle Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # Scripted signing core shared by the flows
//! └── integration/      # Bootstrap and dispatch choreography
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p oracle-tests
//!
//! # By category
//! cargo test -p oracle-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
pub mod support;
