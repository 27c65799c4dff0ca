//! Size-biased sampling of integers around a target mean.
//!
//! Random test inputs should be small most of the time and large some of
//! the time. A [`GeometricSampler`] turns uniform random bits into integers
//! with a geometric distribution: each value is less likely than the one
//! before it by a constant ratio chosen so that the mean is the requested
//! [`Mean`].
//!
//! Every variant is derived from the natural-number draw:
//!
//! | variant    | domain      | mean parameter         |
//! |------------|-------------|------------------------|
//! | `natural`  | `v >= 0`    | `m >= 0`               |
//! | `positive` | `v >= 1`    | `m >= 1`               |
//! | `negative` | `v <= -1`   | `m <= -1`              |
//! | `nonzero`  | `v != 0`    | `\|m\| >= 1`, of `\|v\|` |
//! | `signed`   | any         | `\|m\|`, of `\|v\|`      |
//!
//! Samplers implement [`rand::distributions::Distribution`], so they draw
//! from a [`BitStreamSource`](crate::source::BitStreamSource) or any other
//! [`Rng`].
//!
//! ```rust
//! use quarry_core::{BitStreamSource, GeometricSampler};
//!
//! let mut source = BitStreamSource::example();
//! let sampler = GeometricSampler::natural(4).unwrap();
//! let values: Vec<i64> = sampler.samples(&mut source).take(5).collect();
//! assert!(values.iter().all(|&v| v >= 0));
//! ```

use crate::{data::Mean, error::*};
use rand::distributions::{DistIter, Distribution};
use rand::Rng;

/// Which integers a [`GeometricSampler`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Natural,
    Positive,
    Negative,
    Nonzero,
    Signed,
}

impl Variant {
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Natural => "natural",
            Variant::Positive => "positive",
            Variant::Negative => "negative",
            Variant::Nonzero => "nonzero",
            Variant::Signed => "signed",
        }
    }
}

/// Geometric distribution over integers with a rational mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometricSampler {
    variant: Variant,
    mean: Mean,
    // Mean of the underlying natural draw, as numerator / denominator.
    numerator: u64,
    denominator: u64,
}

impl GeometricSampler {
    /// Naturals with mean `mean`. A mean of zero always yields zero.
    pub fn natural(mean: impl Into<Mean>) -> Result<Self> {
        let mean = mean.into();
        if mean.signum() < 0 {
            return Err(invalid(Variant::Natural, mean));
        }
        let (numerator, denominator) = mean.magnitude();
        Ok(Self::build(Variant::Natural, mean, numerator, denominator))
    }

    /// Positive integers with mean `mean`. A mean of one always yields one.
    pub fn positive(mean: impl Into<Mean>) -> Result<Self> {
        let mean = mean.into();
        if mean.signum() < 0 {
            return Err(invalid(Variant::Positive, mean));
        }
        Self::shifted(Variant::Positive, mean)
    }

    /// Negative integers with mean `mean`. A mean of minus one always
    /// yields minus one.
    pub fn negative(mean: impl Into<Mean>) -> Result<Self> {
        let mean = mean.into();
        if mean.signum() > 0 {
            return Err(invalid(Variant::Negative, mean));
        }
        Self::shifted(Variant::Negative, mean)
    }

    /// Nonzero integers whose absolute value has mean `|mean|`.
    pub fn nonzero(mean: impl Into<Mean>) -> Result<Self> {
        Self::shifted(Variant::Nonzero, mean.into())
    }

    /// Integers whose absolute value has mean `|mean|`.
    pub fn signed(mean: impl Into<Mean>) -> Result<Self> {
        let mean = mean.into();
        let (numerator, denominator) = mean.magnitude();
        Ok(Self::build(Variant::Signed, mean, numerator, denominator))
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn mean(&self) -> Mean {
        self.mean
    }

    /// Infinite sequence of draws from `rng`.
    pub fn samples<R: Rng>(&self, rng: R) -> DistIter<Self, R, i64> {
        Distribution::sample_iter(*self, rng)
    }

    // Variants whose magnitude is at least one draw a natural with mean
    // |m| - 1 and add one.
    fn shifted(variant: Variant, mean: Mean) -> Result<Self> {
        let (numerator, denominator) = mean.magnitude();
        if numerator < denominator {
            return Err(invalid(variant, mean));
        }
        Ok(Self::build(variant, mean, numerator - denominator, denominator))
    }

    fn build(variant: Variant, mean: Mean, numerator: u64, denominator: u64) -> Self {
        GeometricSampler {
            variant,
            mean,
            numerator,
            denominator,
        }
    }

    /// Count failed trials before the first success, where a trial
    /// succeeds with probability `denominator / (numerator + denominator)`.
    fn draw_natural<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        if self.numerator == 0 {
            return 0;
        }
        let trials = u128::from(self.numerator) + u128::from(self.denominator);
        let success = u128::from(self.denominator);
        let mut failures = 0u64;
        while rng.gen_range(0..trials) >= success {
            failures = failures.saturating_add(1);
        }
        failures
    }
}

impl Distribution<i64> for GeometricSampler {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        let natural = i64::try_from(self.draw_natural(rng)).unwrap_or(i64::MAX);
        match self.variant {
            Variant::Natural => natural,
            Variant::Positive => natural.saturating_add(1),
            Variant::Negative => -natural.saturating_add(1),
            Variant::Nonzero => with_sign(rng, natural.saturating_add(1)),
            Variant::Signed if natural == 0 => 0,
            Variant::Signed => with_sign(rng, natural),
        }
    }
}

fn with_sign<R: Rng + ?Sized>(rng: &mut R, magnitude: i64) -> i64 {
    if rng.gen::<bool>() {
        -magnitude
    } else {
        magnitude
    }
}

fn invalid(variant: Variant, mean: Mean) -> Error {
    Error::InvalidMean {
        variant: variant.name(),
        mean: mean.to_string(),
    }
}
