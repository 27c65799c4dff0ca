//! Quarry: deterministic value-sequence primitives for property-based testing.
//!
//! This is the main entry point for Quarry, re-exporting the core
//! primitives under one roof.

pub use quarry_core::*;
