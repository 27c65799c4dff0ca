//! Core data types: seeds, sampler means and configuration.

use crate::{error::*, geometric::GeometricSampler, source::BitStreamSource};
use std::fmt;

/// Number of 32-bit words a seed can carry.
pub const SEED_WORDS: usize = 256;

/// The canonical fixed seed used for reproducible fixtures and demos.
pub const EXAMPLE_SEED: [u32; SEED_WORDS] = [
    0x03f0a9b4, 0x09f1fd9d, 0x1bbf8475, 0x55327416, 0x96b343b3, 0x5d5bca46,
    0x7d22528d, 0x70d29b6c, 0xf9915475, 0x0bf2b716, 0x95387cca, 0x5eb7f92b,
    0xc21d7f90, 0x296cd0f2, 0x05c125b1, 0x1289a698, 0xdacb9e73, 0xdaa27fb8,
    0xcb3f4727, 0x3ed08d59, 0x6c15c659, 0x58a5f17b, 0xfa7b481a, 0x651ac042,
    0xa88e8dcc, 0x22af6aea, 0x640abfb9, 0x2d2bae64, 0x10231b07, 0xad0e83a7,
    0x69d91f12, 0x9d30ff21, 0x523504dd, 0xf5ff07c9, 0xba66eec0, 0x1273c823,
    0x49cb520b, 0x47e1dbe2, 0x69484adc, 0xbbea42bd, 0x6ef9e4c4, 0xc33e61bc,
    0x231b5114, 0x752cd583, 0x988622e5, 0xe53dc6e1, 0xed361ba3, 0x928eb721,
    0xf379031e, 0x10bf7972, 0x5ad75c38, 0x974041d1, 0x42286387, 0xff9b273f,
    0xef087eb0, 0x2601349f, 0x429a4a7e, 0x5753f8ef, 0xdcbcbaba, 0x2663e5e9,
    0x52c6235c, 0xa8bb872e, 0xb0dc91ac, 0xe1774d56, 0x702b6452, 0x8634930f,
    0x30892ddd, 0x1674658f, 0xe4fd469e, 0x2f957488, 0x9a126362, 0x656ed1cb,
    0x09163089, 0x53256626, 0x9643a1bc, 0x3ba278a3, 0x544646d9, 0x0efa3dda,
    0x1fb520cc, 0x4cc8c74c, 0x31f85c18, 0x626c1ef3, 0x2cc7b3c9, 0x01457b86,
    0xf6f9ad71, 0x3825403d, 0x13c9d42d, 0x272c78c4, 0xb289c9ce, 0x4dde6838,
    0x9e64eb89, 0x1467a128, 0x36b5b98d, 0x00eb8b8a, 0x2bf81344, 0xf2443b54,
    0xd03ad4be, 0x278641ca, 0x503faeee, 0x5a71cd3d, 0x6446969a, 0x2c58daa0,
    0xf9d26976, 0x79559ff0, 0xaac0fffd, 0x4a127fe7, 0x27803ecc, 0xbca48838,
    0x559d3728, 0xb60627c1, 0x3f48b12d, 0x0d1d73ce, 0xb7b50e87, 0x78e74b9e,
    0xba822e65, 0xeb26c664, 0xca9dcb0a, 0xef794a8d, 0x1ee9784b, 0x89119cbf,
    0xf135de45, 0x180b37df, 0xe6055f33, 0xbe1b67d3, 0x62ce02c8, 0x6fbe6fba,
    0xb4f36bc8, 0x1fbf7b87, 0x7cd13ccb, 0xf2cf4b80, 0xf17937eb, 0x93d26a01,
    0x6c011a84, 0x9be8a4ef, 0x92ea9c40, 0x760d0911, 0x5d14a11a, 0xada4aecc,
    0x6844e2b3, 0x00e9f0d3, 0x06366bc3, 0x38c7a37c, 0x66d55549, 0x2ff6370a,
    0x22dbf3aa, 0x8cb2f8fb, 0xc3387367, 0xf1026344, 0xf015c4d5, 0x1b42c916,
    0x9eb0dcda, 0xbbf5e9fc, 0xe89cd156, 0x6f52b7a4, 0x444eba66, 0x54db06f4,
    0x8fa3ef76, 0x8f03a409, 0x08bcb62c, 0x2ce286c2, 0x215e12f8, 0x865b472b,
    0x52fbf0d2, 0x688d0534, 0x4edba7fe, 0x00bd53bd, 0xfb935dd3, 0xce95ee53,
    0xd5f19619, 0x00e424b1, 0x84cf5335, 0xd772c7af, 0xf5e138af, 0x0aa2ce72,
    0x0e056024, 0x8b179f8a, 0x9e83ad0f, 0x40fbef7e, 0x5dae0125, 0xe3855e09,
    0xc99e17b5, 0x4986b0b2, 0xbf0178b3, 0x0e65fffe, 0xe720e46e, 0x1f667244,
    0x689367e3, 0x921759fe, 0x937b43c5, 0x1a372f66, 0x2ce2dbfb, 0x76bb48b2,
    0xb91b6ee5, 0x1f6bb18e, 0x1fcb806f, 0xb2f46d14, 0x9b4df2e4, 0xd92f6fa8,
    0x6722c671, 0x6da66547, 0x1a8c65e1, 0x9ab02bfe, 0x8b69b1d5, 0xdcf0bf6e,
    0x3fcaeb4d, 0xe8a427e1, 0x028df290, 0xf0c0c01a, 0xcadebb98, 0xba8354fb,
    0x7e40ed48, 0x9d8344cb, 0x1deb4fab, 0x7699eb26, 0x5956c67c, 0x080563da,
    0x6294d3eb, 0xe06a7c6a, 0xb7a5d526, 0xa3e82300, 0x2f3910fa, 0xc307e5f8,
    0x0a2e20ed, 0xf7d25f52, 0x62cc0a2c, 0x89ddc763, 0xc7ef2af3, 0xe9414de6,
    0x8764beaf, 0x33b99148, 0xd92d6a23, 0x22c63036, 0xff95abeb, 0x6c4c1dd3,
    0xe150df56, 0x211ca5b5, 0x256266ee, 0x24dbee67, 0x3902d9df, 0xcc313251,
    0x3285db64, 0xfa515941, 0xde461dab, 0xb617378a, 0x9f6c74c3, 0x293da444,
    0x9cba1807, 0x2225acf6, 0x194fbae1, 0xf2073587, 0xb7e98903, 0x811c4cab,
    0x3b0bf62c, 0x0e618d39, 0x3bbe5ea6, 0xc3d5fcec,
];

/// Seed material for a [`BitStreamSource`].
///
/// Holds at most [`SEED_WORDS`] words. Shorter seeds are zero-padded when
/// the source is built; longer inputs are truncated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Seed(Vec<u32>);

impl Seed {
    /// Create a seed from the given words, keeping the first 256.
    pub fn new(words: impl Into<Vec<u32>>) -> Self {
        let mut words = words.into();
        words.truncate(SEED_WORDS);
        Seed(words)
    }

    /// The canonical example seed.
    pub fn example() -> Self {
        Seed(EXAMPLE_SEED.to_vec())
    }

    /// Create a two-word seed from a single value, low word first.
    pub fn from_u64(value: u64) -> Self {
        Seed(vec![value as u32, (value >> 32) as u32])
    }

    /// Generate a full-width seed from system entropy.
    pub fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::thread_rng();
        Seed((0..SEED_WORDS).map(|_| rng.gen()).collect())
    }

    /// The seed words.
    pub fn words(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for Seed {
    fn from(words: Vec<u32>) -> Self {
        Seed::new(words)
    }
}

impl From<&[u32]> for Seed {
    fn from(words: &[u32]) -> Self {
        Seed::new(words.to_vec())
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seed({} words)", self.0.len())
    }
}

/// Target mean of a geometric sampler, as a reduced rational.
///
/// The denominator is always positive; the sign lives on the numerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mean {
    numerator: i64,
    denominator: u64,
}

impl Mean {
    /// Create the mean `numerator / denominator`.
    pub fn new(numerator: i64, denominator: u64) -> Result<Self> {
        if denominator == 0 {
            return Err(Error::ZeroDenominator);
        }
        let divisor = gcd(numerator.unsigned_abs(), denominator);
        let magnitude = numerator.unsigned_abs() / divisor;
        let numerator = if numerator < 0 {
            0i64.wrapping_sub(magnitude as i64)
        } else {
            magnitude as i64
        };
        Ok(Mean {
            numerator,
            denominator: denominator / divisor,
        })
    }

    /// An integral mean.
    pub fn integer(value: i64) -> Self {
        Mean {
            numerator: value,
            denominator: 1,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// `|numerator|` and the denominator.
    pub fn magnitude(&self) -> (u64, u64) {
        (self.numerator.unsigned_abs(), self.denominator)
    }

    pub fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Approximate value, for statistics.
    pub fn as_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl From<i64> for Mean {
    fn from(value: i64) -> Self {
        Mean::integer(value)
    }
}

impl From<i32> for Mean {
    fn from(value: i32) -> Self {
        Mean::integer(i64::from(value))
    }
}

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Configuration for the random side of value generation.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seed for the bit source.
    pub seed: Seed,

    /// Mean size of primary random values (list lengths, magnitudes).
    pub scale: u64,

    /// Mean size of values nested inside primary ones.
    pub secondary_scale: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: Seed::example(),
            scale: 32,
            secondary_scale: 8,
        }
    }
}

impl Config {
    /// Create a new config with the given seed.
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Create a new config with the given primary scale.
    pub fn with_scale(mut self, scale: u64) -> Self {
        self.scale = scale;
        self
    }

    /// Create a new config with the given secondary scale.
    pub fn with_secondary_scale(mut self, scale: u64) -> Self {
        self.secondary_scale = scale;
        self
    }

    /// Build a fresh bit source from the configured seed.
    pub fn source(&self) -> BitStreamSource {
        BitStreamSource::from_seed(&self.seed)
    }

    /// Natural-number sampler with the primary scale as its mean.
    pub fn naturals(&self) -> Result<GeometricSampler> {
        GeometricSampler::natural(scale_mean("scale", self.scale)?)
    }

    /// Natural-number sampler with the secondary scale as its mean.
    pub fn secondary_naturals(&self) -> Result<GeometricSampler> {
        GeometricSampler::natural(scale_mean("secondary_scale", self.secondary_scale)?)
    }

    /// Fingerprint of the source this config builds.
    pub fn fingerprint(&self) -> u64 {
        self.source().fingerprint()
    }
}

fn scale_mean(field: &'static str, scale: u64) -> Result<Mean> {
    i64::try_from(scale)
        .map(Mean::integer)
        .map_err(|_| Error::ScaleTooLarge { field, scale })
}
