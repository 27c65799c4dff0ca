//! Bijections between tuples of naturals and single naturals.
//!
//! Exhaustive generation enumerates product spaces such as ℕ×ℕ in one
//! dimension: the n-th value of the product is `decode(n)`. The functions
//! here decide how fairly each dimension is explored.
//!
//! - [`mux`]/[`demux`] interleave the binary digits of `k` values, so every
//!   component grows at the same rate.
//! - [`log_mux`]/[`log_demux`] let the first component grow linearly while
//!   the second grows logarithmically.
//! - [`sqrt_mux`]/[`sqrt_demux`] let the second component grow like the
//!   square root of the first.
//!
//! Every encoder is strictly increasing in each argument and every decoder
//! is its exact inverse.

use crate::error::*;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};
use std::cmp;

/// Interleave the bits of `xs` into a single natural.
///
/// With `k = xs.len()`, bit `d` of `xs[j]` becomes bit `d*k + (k-1-j)` of
/// the result: the last component owns the lowest bit of each group.
/// `mux(&[])` is zero and `mux(&[x])` is `x`.
pub fn mux(xs: &[BigUint]) -> BigUint {
    let arity = xs.len() as u64;
    let width = xs.iter().map(BigUint::bits).max().unwrap_or(0);
    let mut result = BigUint::zero();
    for digit in 0..width {
        for (j, x) in xs.iter().enumerate() {
            if x.bit(digit) {
                result.set_bit(digit * arity + (arity - 1 - j as u64), true);
            }
        }
    }
    result
}

/// Split `n` into `arity` components; the inverse of [`mux`].
///
/// Zero components are only possible for `n = 0`.
pub fn demux(arity: usize, n: &BigUint) -> Result<Vec<BigUint>> {
    if arity == 0 {
        return if n.is_zero() {
            Ok(Vec::new())
        } else {
            Err(Error::DemuxArity {
                arity,
                value: n.to_string(),
            })
        };
    }
    Ok(split_bits(arity, n))
}

fn split_bits(arity: usize, n: &BigUint) -> Vec<BigUint> {
    let k = arity as u64;
    let mut parts = vec![BigUint::zero(); arity];
    for position in (0..n.bits()).filter(|&p| n.bit(p)) {
        let j = arity - 1 - (position % k) as usize;
        parts[j].set_bit(position / k, true);
    }
    parts
}

/// `(2a + 1) * 2^b - 1`.
///
/// `b` is a machine word: any larger exponent would need more than 2^64
/// bits of output.
pub fn log_mux(a: &BigUint, b: u64) -> BigUint {
    (((a << 1u32) + 1u32) << b) - 1u32
}

/// Inverse of [`log_mux`].
pub fn log_demux(n: &BigUint) -> (BigUint, u64) {
    let successor = n + 1u32;
    let b = successor.trailing_zeros().unwrap_or(0);
    let a = ((successor >> b) - 1u32) >> 1u32;
    (a, b)
}

/// Pack `a` and `b` in groups of three bits.
///
/// The lowest bit of each group is the next bit of `b`, the two bits above
/// it are the next two bits of `a`.
pub fn sqrt_mux(a: &BigUint, b: &BigUint) -> BigUint {
    let groups = cmp::max(a.bits().div_ceil(2), b.bits());
    let mut result = BigUint::zero();
    for group in 0..groups {
        if b.bit(group) {
            result.set_bit(3 * group, true);
        }
        if a.bit(2 * group) {
            result.set_bit(3 * group + 1, true);
        }
        if a.bit(2 * group + 1) {
            result.set_bit(3 * group + 2, true);
        }
    }
    result
}

/// Inverse of [`sqrt_mux`].
pub fn sqrt_demux(n: &BigUint) -> (BigUint, BigUint) {
    let mut a = BigUint::zero();
    let mut b = BigUint::zero();
    for position in (0..n.bits()).filter(|&p| n.bit(p)) {
        let group = position / 3;
        match position % 3 {
            0 => b.set_bit(group, true),
            offset => a.set_bit(2 * group + offset - 1, true),
        }
    }
    (a, b)
}

/// Convert a signed integer for use with the pairing functions.
pub fn to_natural(value: &BigInt) -> Result<BigUint> {
    value.to_biguint().ok_or_else(|| Error::NegativeInput {
        value: value.to_string(),
    })
}

/// Little-endian bits of `n`, without trailing zeros.
pub fn bits(n: &BigUint) -> impl Iterator<Item = bool> + '_ {
    (0..n.bits()).map(move |i| n.bit(i))
}

/// Build a natural from little-endian bits.
pub fn from_bits<I>(bits: I) -> BigUint
where
    I: IntoIterator<Item = bool>,
{
    let mut result = BigUint::zero();
    for (i, bit) in bits.into_iter().enumerate() {
        if bit {
            result.set_bit(i as u64, true);
        }
    }
    result
}

/// Order in which an exhaustive pair enumeration walks ℕ×ℕ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pairing {
    /// Both components grow at the same rate ([`mux`] of two).
    Interleave,
    /// The second component grows logarithmically ([`log_mux`]).
    Logarithmic,
    /// The second component grows like a square root ([`sqrt_mux`]).
    SquareRoot,
}

impl Pairing {
    /// Ordinal of the pair `(a, b)`; the inverse of [`Pairing::decode`].
    ///
    /// [`Pairing::Logarithmic`] fails when `b` does not fit in a `u64`.
    pub fn encode(&self, a: &BigUint, b: &BigUint) -> Result<BigUint> {
        match self {
            Pairing::Interleave => Ok(mux(&[a.clone(), b.clone()])),
            Pairing::Logarithmic => {
                let exponent = u64::try_from(b).map_err(|_| Error::ExponentTooLarge {
                    value: b.to_string(),
                })?;
                Ok(log_mux(a, exponent))
            }
            Pairing::SquareRoot => Ok(sqrt_mux(a, b)),
        }
    }

    /// The pair at ordinal `n`.
    pub fn decode(&self, n: &BigUint) -> (BigUint, BigUint) {
        match self {
            Pairing::Interleave => {
                let mut parts = split_bits(2, n);
                let second = parts.pop().unwrap_or_default();
                let first = parts.pop().unwrap_or_default();
                (first, second)
            }
            Pairing::Logarithmic => {
                let (a, b) = log_demux(n);
                (a, BigUint::from(b))
            }
            Pairing::SquareRoot => sqrt_demux(n),
        }
    }

    /// Every pair of naturals, in this pairing's order.
    pub fn pairs(self) -> Pairs {
        Pairs {
            pairing: self,
            ordinal: BigUint::zero(),
        }
    }
}

/// Infinite iterator over ℕ×ℕ; see [`Pairing::pairs`].
#[derive(Debug, Clone)]
pub struct Pairs {
    pairing: Pairing,
    ordinal: BigUint,
}

impl Pairs {
    /// Ordinal of the next pair this iterator yields.
    pub fn ordinal(&self) -> &BigUint {
        &self.ordinal
    }
}

impl Iterator for Pairs {
    type Item = (BigUint, BigUint);

    fn next(&mut self) -> Option<Self::Item> {
        let pair = self.pairing.decode(&self.ordinal);
        self.ordinal += BigUint::one();
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
