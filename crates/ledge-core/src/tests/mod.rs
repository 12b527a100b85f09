//! Scenario tests for the movement pipeline.
//!
//! # Test Structure
//!
//! - `helpers.rs`: level builders, bodies and a minimal gravity walker
//! - `integration.rs`: end-to-end movement scenarios
//! - `determinism.rs`: replay and parallel stepping produce identical state

mod helpers;
