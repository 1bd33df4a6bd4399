//! # Integration Tests
//!
//! Bootstrap and dispatch choreography against the scripted signing core.
