//! Error types for Quarry primitives.

use thiserror::Error;

/// Main error type for Quarry operations.
///
/// Every variant is fatal to the call that produced it: nothing inside the
/// core retries or clamps. Running off the end of a finite cached sequence
/// is not an error and is reported through [`crate::cache::Slot::Absent`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A function defined only over the naturals received a negative value.
    #[error("Expected a non-negative integer, got {value}")]
    NegativeInput { value: String },

    /// `demux` was asked to split a non-zero value into zero components.
    #[error("Cannot demux {value} into {arity} components")]
    DemuxArity { arity: usize, value: String },

    /// The exponent half of a logarithmic pair does not fit in a `u64`.
    #[error("Logarithmic exponent {value} does not fit in 64 bits")]
    ExponentTooLarge { value: String },

    /// A sampler mean lies on the wrong side of its domain boundary.
    #[error("Invalid mean {mean} for {variant} geometric sampler")]
    InvalidMean { variant: &'static str, mean: String },

    /// A configured scale is too large to serve as a sampler mean.
    #[error("Config {field} of {scale} exceeds the largest sampler mean")]
    ScaleTooLarge { field: &'static str, scale: u64 },

    /// A rational mean was built with a zero denominator.
    #[error("Mean denominator must be non-zero")]
    ZeroDenominator,

    /// The output size of a deferred-length sequence was declared twice.
    #[error("Output size already set to {size}")]
    OutputSizeAlreadySet { size: usize },

    /// The declared output size is smaller than what was already produced.
    #[error("Output size {requested} is less than the {produced} elements already produced")]
    OutputSizeTooSmall { requested: usize, produced: usize },

    /// A deferred-length sequence was advanced past its declared end.
    #[error("Sequence exhausted after {size} elements")]
    Exhausted { size: usize },
}

/// Result type for Quarry operations.
pub type Result<T> = std::result::Result<T, Error>;
