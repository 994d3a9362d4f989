//! 32-bit xorshift generator
//!
//! This is a fast, low-quality bit mixer. It is deterministic and suitable for
//! reproducible generative sampling, and nothing else (it is NOT a secure RNG).
//!
//! # Algorithm
//!
//! Marsaglia's "xor" triple (13, 17, 5) applied to a signed 32-bit state:
//!
//! ```text
//! s ^= s << 13;   // wrapping
//! s ^= s >> 17;   // arithmetic (sign-propagating)
//! s ^= s << 5;    // wrapping
//! ```
//!
//! The draw is then `(|s| mod 1000) / 1000`, a value in `[0, 1)` with three
//! decimal digits of resolution, mapped linearly into the requested range.
//!
//! # Determinism
//!
//! Same seed material → same sequence of draws, bit for bit, on every platform.

use serde::{Deserialize, Serialize};
use std::ops::Range;
use thiserror::Error;

/// Byte positions of the seed material that hold the hex-encoded state.
///
/// Token hashes look like `0x` followed by 64 hex digits; the prefix is skipped
/// and the next 8 digits are used.
pub const SEED_HEX_RANGE: Range<usize> = 2..10;

const RESOLUTION: u32 = 1000;

/// Errors that can occur while deriving a seed
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SeedError {
    #[error("Invalid seed format {material:?}: {reason}")]
    InvalidSeedFormat { material: String, reason: String },
}

/// Half-open range `[min, max)` for uniform draws
///
/// `UniformRange::default()` is `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub min: f64,
    pub max: f64,
}

impl UniformRange {
    pub const UNIT: UniformRange = UniformRange { min: 0.0, max: 1.0 };

    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Linearly map a unit value `r` in `[0, 1)` into this range.
    pub fn map(&self, r: f64) -> f64 {
        self.min + (self.max - self.min) * r
    }
}

impl Default for UniformRange {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Deterministic generator holding a single signed 32-bit state
///
/// There is no unseeded state: a `Generator` only exists once it has been
/// seeded, either from seed material or from a raw state value.
///
/// # Example
/// ```
/// use seedcraft_core::Generator;
///
/// let mut rng = Generator::from_material("0xa1b2c3d4e5f6").unwrap();
/// assert_eq!(rng.next_uniform(), 0.08);
/// let value = rng.next_uniform_in(10.0, 20.0); // [10, 20)
/// assert!(value >= 10.0 && value < 20.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generator {
    /// Internal state (32-bit, signed)
    state: i32,
}

impl Generator {
    /// Create a generator from a raw state value
    ///
    /// A zero state is accepted as-is; xorshift maps zero to zero, so every
    /// draw from it is `0.0`.
    ///
    /// # Example
    /// ```
    /// use seedcraft_core::Generator;
    ///
    /// let rng = Generator::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn new(state: i32) -> Self {
        Self { state }
    }

    /// Create a generator from seed material such as a token hash
    ///
    /// Characters 2..10 (skipping a two-character prefix such as `0x`) are
    /// parsed as base-16 and reinterpreted as a signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// `SeedError::InvalidSeedFormat` if the material is shorter than 10
    /// characters or the substring is not exactly 8 hex digits.
    ///
    /// # Example
    /// ```
    /// use seedcraft_core::Generator;
    ///
    /// let rng = Generator::from_material("0xa1b2c3d4ffff").unwrap();
    /// assert_eq!(rng.state(), 0xa1b2c3d4_u32 as i32);
    ///
    /// assert!(Generator::from_material("0x1234").is_err());
    /// ```
    pub fn from_material(material: &str) -> Result<Self, SeedError> {
        let invalid = |reason: &str| SeedError::InvalidSeedFormat {
            material: material.to_string(),
            reason: reason.to_string(),
        };

        if material.len() < SEED_HEX_RANGE.end {
            return Err(invalid("expected at least 10 characters"));
        }

        let digits = material
            .get(SEED_HEX_RANGE)
            .ok_or_else(|| invalid("seed digits are not on a character boundary"))?;

        // from_str_radix alone would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid("characters 2..10 are not hexadecimal"));
        }

        let raw = u32::from_str_radix(digits, 16).map_err(|e| invalid(&e.to_string()))?;
        let state = raw as i32;
        log::debug!("Generator seeded from {:?}: state={}", digits, state);

        Ok(Self { state })
    }

    /// Get current state (for checkpointing/replay)
    ///
    /// # Example
    /// ```
    /// use seedcraft_core::Generator;
    ///
    /// let mut rng = Generator::new(7);
    /// rng.next_uniform();
    ///
    /// // Later, can recreate the generator from this state
    /// let resumed = Generator::new(rng.state());
    /// assert_eq!(resumed, rng);
    /// ```
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Advance the state and return the raw three-digit draw in `0..1000`
    pub fn next_raw(&mut self) -> u32 {
        let mut s = self.state;
        s ^= s.wrapping_shl(13);
        s ^= s >> 17;
        s ^= s.wrapping_shl(5);
        self.state = s;
        // unsigned_abs keeps |i32::MIN| = 2^31 instead of wrapping
        s.unsigned_abs() % RESOLUTION
    }

    /// Generate next value in `[0, 1)`
    pub fn next_uniform(&mut self) -> f64 {
        self.next_uniform_range(UniformRange::UNIT)
    }

    /// Generate next value mapped into `[min, max)`
    ///
    /// The mapping is linear and does not validate its bounds: with
    /// `min > max` the result lies in `(max, min]`.
    pub fn next_uniform_in(&mut self, min: f64, max: f64) -> f64 {
        self.next_uniform_range(UniformRange::new(min, max))
    }

    /// Generate next value mapped into `range`
    pub fn next_uniform_range(&mut self, range: UniformRange) -> f64 {
        let unit = f64::from(self.next_raw()) / f64::from(RESOLUTION);
        range.map(unit)
    }
}
