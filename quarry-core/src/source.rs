//! Deterministic random bit source built on ISAAC.
//!
//! [`BitStreamSource`] is the randomness substrate for every random value
//! Quarry produces. It is Bob Jenkins' ISAAC generator: 256 words of state,
//! a 256-word output buffer and three registers. The counter register grows
//! by one per buffer, which guarantees a period of at least 2^40 words.
//!
//! All arithmetic is done in [`Wrapping<u32>`] so the output is bit-for-bit
//! identical to the reference implementation on every platform.
//!
//! # Determinism
//!
//! Same seed, same words. Cloning forks the stream: the clone and its source
//! then advance independently.
//!
//! ```rust
//! use quarry_core::BitStreamSource;
//!
//! let mut source = BitStreamSource::new(&[]);
//! assert_eq!(source.next_word(), 0x182600f3);
//!
//! let mut fork = source.clone();
//! assert_eq!(source.next_word(), fork.next_word());
//! ```

use crate::data::{Seed, SEED_WORDS};
use rand::RngCore;
use std::fmt;
use std::num::Wrapping;

const SIZE: usize = SEED_WORDS;
const HALF: usize = SIZE / 2;
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

type Word = Wrapping<u32>;

/// ISAAC pseudorandom word generator.
#[derive(Clone)]
pub struct BitStreamSource {
    state: [Word; SIZE],
    results: [Word; SIZE],
    a: Word,
    b: Word,
    c: Word,
    count: usize,
}

impl BitStreamSource {
    /// Create a source from up to 256 seed words.
    ///
    /// Missing words are treated as zero and words past the 256th are
    /// ignored.
    pub fn new(seed: &[u32]) -> Self {
        let mut source = BitStreamSource {
            state: [Wrapping(0); SIZE],
            results: [Wrapping(0); SIZE],
            a: Wrapping(0),
            b: Wrapping(0),
            c: Wrapping(0),
            count: 0,
        };
        for (slot, &word) in source.results.iter_mut().zip(seed) {
            *slot = Wrapping(word);
        }
        source.initialize();
        source
    }

    /// Create a source from a [`Seed`].
    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.words())
    }

    /// Create a source seeded with the canonical example seed.
    pub fn example() -> Self {
        Self::from_seed(&Seed::example())
    }

    /// Create a source seeded from system entropy.
    pub fn from_entropy() -> Self {
        let source = Self::from_seed(&Seed::random());
        tracing::debug!(
            fingerprint = source.fingerprint(),
            "seeded bit source from system entropy"
        );
        source
    }

    /// Draw the next 32-bit word.
    pub fn next_word(&mut self) -> u32 {
        if self.count == 0 {
            self.generate();
            self.count = SIZE;
        }
        self.count -= 1;
        self.results[self.count].0
    }

    /// Draw a single random bit.
    pub fn next_bool(&mut self) -> bool {
        self.next_word() & 1 == 1
    }

    /// Draw a value uniformly from `[0, bound)`.
    ///
    /// Uses masked rejection, so no value is favoured. A bound of zero or
    /// one always yields zero without consuming any words.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        if bound <= 1 {
            return 0;
        }
        let mask = u64::MAX >> (bound - 1).leading_zeros();
        loop {
            let raw = if mask <= u64::from(u32::MAX) {
                u64::from(self.next_word())
            } else {
                self.next_u64()
            };
            let candidate = raw & mask;
            if candidate < bound {
                return candidate;
            }
        }
    }

    /// Derive an independent source seeded from the next 256 words.
    pub fn fork(&mut self) -> BitStreamSource {
        let seed: Vec<u32> = (0..SIZE).map(|_| self.next_word()).collect();
        BitStreamSource::new(&seed)
    }

    /// Opaque 64-bit identifier of the current state.
    ///
    /// Seeds a throwaway source with `[a, b, c, count, state...]` and
    /// combines its first two words. `self` is not advanced.
    pub fn fingerprint(&self) -> u64 {
        let mut seed = Vec::with_capacity(SIZE + 4);
        seed.extend([self.a.0, self.b.0, self.c.0, self.count as u32]);
        seed.extend(self.state.iter().map(|word| word.0));

        let mut probe = BitStreamSource::new(&seed);
        let high = u64::from(probe.next_word());
        let low = u64::from(probe.next_word());
        (high << 32) | low
    }

    fn initialize(&mut self) {
        let mut registers = [Wrapping(GOLDEN_RATIO); 8];
        for _ in 0..4 {
            mix(&mut registers);
        }

        // First pass folds in the seed, second spreads every seed word
        // across the whole state.
        for i in (0..SIZE).step_by(8) {
            for (k, register) in registers.iter_mut().enumerate() {
                *register += self.results[i + k];
            }
            mix(&mut registers);
            self.state[i..i + 8].copy_from_slice(&registers);
        }
        for i in (0..SIZE).step_by(8) {
            for (k, register) in registers.iter_mut().enumerate() {
                *register += self.state[i + k];
            }
            mix(&mut registers);
            self.state[i..i + 8].copy_from_slice(&registers);
        }

        self.generate();
        self.count = SIZE;
    }

    fn generate(&mut self) {
        self.c += Wrapping(1);
        self.b += self.c;

        let mut a = self.a;
        let mut b = self.b;
        for i in 0..SIZE {
            let x = self.state[i];
            a ^= match i % 4 {
                0 => a << 13,
                1 => a >> 6,
                2 => a << 2,
                _ => a >> 16,
            };
            // i ^ HALF is the same slot in the opposite half.
            a += self.state[i ^ HALF];
            let y = self.state[slot(x >> 2)] + a + b;
            self.state[i] = y;
            b = self.state[slot(y >> 10)] + x;
            self.results[i] = b;
        }
        self.a = a;
        self.b = b;
    }
}

fn slot(word: Word) -> usize {
    word.0 as usize & (SIZE - 1)
}

fn mix(registers: &mut [Word; 8]) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *registers;
    a ^= b << 11;
    d += a;
    b += c;
    b ^= c >> 2;
    e += b;
    c += d;
    c ^= d << 8;
    f += c;
    d += e;
    d ^= e >> 16;
    g += d;
    e += f;
    e ^= f << 10;
    h += e;
    f += g;
    f ^= g >> 4;
    a += f;
    g += h;
    g ^= h << 8;
    b += g;
    h += a;
    h ^= a >> 9;
    c += h;
    a += b;
    *registers = [a, b, c, d, e, f, g, h];
}

/// Equality compares the state, the output buffer, `a`, `b` and the cursor.
impl PartialEq for BitStreamSource {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.results == other.results
            && self.a == other.a
            && self.b == other.b
            && self.count == other.count
    }
}

impl Eq for BitStreamSource {}

impl fmt::Debug for BitStreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitStreamSource")
            .field("a", &self.a.0)
            .field("b", &self.b.0)
            .field("c", &self.c.0)
            .field("count", &self.count)
            .field("fingerprint", &format_args!("{:#018x}", self.fingerprint()))
            .finish_non_exhaustive()
    }
}

impl RngCore for BitStreamSource {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    /// The first word drawn is the high half.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_word());
        let low = u64::from(self.next_word());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
