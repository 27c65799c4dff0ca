//! Core functionality for Quarry.
//!
//! This crate provides the primitives that value generators for
//! property-based testing are built from: a deterministic ISAAC bit source,
//! pairing functions for enumerating product spaces, memoizing caches over
//! lazy sequences, sequences with a late-declared length, and geometric
//! samplers for keeping random values small.

pub mod cache;
pub mod data;
pub mod deferred;
pub mod error;
pub mod geometric;
pub mod pairing;
pub mod source;

// Re-export the main types
pub use cache::{LazySequenceCache, Slot};
pub use data::*;
pub use deferred::{Advance, DeferredLengthSequence, OutputSize};
pub use error::*;
pub use geometric::{GeometricSampler, Variant};
pub use pairing::{demux, log_demux, log_mux, mux, sqrt_demux, sqrt_mux, Pairing};
pub use source::*;
