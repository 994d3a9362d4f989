//! Sampling layer built on the generator
//!
//! Integers, integer sequences, booleans and list picks, all derived from
//! [`Generator::next_uniform_in`] so they inherit its determinism. The only
//! stateful piece is [`PickMemory`], which remembers the previous
//! "pick different" choice.

mod pick_memory;

pub use pick_memory::{PickMemory, MAX_PICK_ATTEMPTS};

use crate::rng::{Generator, UniformRange};
use thiserror::Error;

/// Threshold used by [`Generator::next_coin`]
pub const DEFAULT_BOOLEAN_THRESHOLD: f64 = 0.5;

/// Safety margin on the pick range so that the index never reaches `len`
pub const PICK_MARGIN: f64 = 0.99;

/// Largest unit draw the generator can produce (999 / 1000)
const MAX_UNIT: f64 = 0.999;

/// Errors that can occur while sampling
#[derive(Debug, Error, PartialEq, Clone)]
pub enum SamplingError {
    #[error("Invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Cannot pick from an empty list")]
    EmptyList,

    #[error("No pickable option differs from the previous pick")]
    NoDistinctOption,

    #[error("Every one of {attempts} pick attempts repeated the previous pick")]
    PickAttemptsExhausted { attempts: usize },
}

/// Highest index `pick` can return for a list of `len` elements
///
/// Evaluated with the same float operations as the draw itself. For lists
/// longer than about 90 elements the margin leaves the tail unreachable.
pub fn max_pick_index(len: usize) -> usize {
    UniformRange::new(0.0, len as f64 * PICK_MARGIN)
        .map(MAX_UNIT)
        .floor() as usize
}

impl Generator {
    /// Generate an integer in `[min, max]` (inclusive on both ends)
    ///
    /// # Errors
    ///
    /// `SamplingError::InvalidRange` if `min > max`. No draw is consumed.
    ///
    /// # Example
    /// ```
    /// use seedcraft_core::Generator;
    ///
    /// let mut rng = Generator::from_material("0xa1b2c3d4").unwrap();
    /// let face = rng.next_integer(1, 6).unwrap();
    /// assert!((1..=6).contains(&face));
    /// ```
    pub fn next_integer(&mut self, min: i64, max: i64) -> Result<i64, SamplingError> {
        if min > max {
            return Err(SamplingError::InvalidRange { min, max });
        }

        let value = self.next_uniform_in(min as f64, max as f64 + 1.0).floor() as i64;
        // Beyond 2^53 the f64 bounds round, so the floor can fall outside
        Ok(value.clamp(min, max))
    }

    /// Generate `n` integers in `[min, max]`, in draw order
    pub fn next_integers(
        &mut self,
        n: usize,
        min: i64,
        max: i64,
    ) -> Result<Vec<i64>, SamplingError> {
        if min > max {
            return Err(SamplingError::InvalidRange { min, max });
        }
        (0..n).map(|_| self.next_integer(min, max)).collect()
    }

    /// Return true iff the next unit draw is below `threshold`
    pub fn next_boolean(&mut self, threshold: f64) -> bool {
        self.next_uniform() < threshold
    }

    /// Fair coin: [`next_boolean`](Self::next_boolean) with
    /// [`DEFAULT_BOOLEAN_THRESHOLD`]
    pub fn next_coin(&mut self) -> bool {
        self.next_boolean(DEFAULT_BOOLEAN_THRESHOLD)
    }

    /// Choose a position in a list of `len` elements
    ///
    /// # Errors
    ///
    /// `SamplingError::EmptyList` if `len == 0`. No draw is consumed.
    pub fn pick_index(&mut self, len: usize) -> Result<usize, SamplingError> {
        if len == 0 {
            return Err(SamplingError::EmptyList);
        }

        let index = self
            .next_uniform_in(0.0, len as f64 * PICK_MARGIN)
            .floor() as usize;
        debug_assert!(index < len);
        Ok(index)
    }

    /// Choose one element of `list`
    ///
    /// # Example
    /// ```
    /// use seedcraft_core::Generator;
    ///
    /// let mut rng = Generator::from_material("0xa1b2c3d4").unwrap();
    /// let palette = ["red", "green", "blue", "black"];
    /// assert_eq!(*rng.pick(&palette).unwrap(), "red");
    /// ```
    pub fn pick<'a, T>(&mut self, list: &'a [T]) -> Result<&'a T, SamplingError> {
        let index = self.pick_index(list.len())?;
        Ok(&list[index])
    }
}
