//! Single-slot memory for "pick different" sampling

use super::{max_pick_index, SamplingError};
use crate::rng::Generator;
use serde::{Deserialize, Serialize};

/// Upper bound on re-draws before `pick_different` gives up
pub const MAX_PICK_ATTEMPTS: usize = 10_000;

/// Remembers the last value returned by [`PickMemory::pick_different`]
///
/// One memory belongs to one sampling context; start a new artwork with
/// [`PickMemory::reset`] (or a fresh memory).
///
/// # Example
/// ```
/// use seedcraft_core::{Generator, PickMemory};
///
/// let mut rng = Generator::from_material("0xa1b2c3d4").unwrap();
/// let mut memory = PickMemory::new();
/// let options = ["a", "b"];
///
/// let first = *memory.pick_different(&mut rng, &options).unwrap().unwrap();
/// let second = *memory.pick_different(&mut rng, &options).unwrap().unwrap();
/// assert_ne!(first, second);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickMemory<T> {
    last: Option<T>,
}

impl<T> Default for PickMemory<T> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<T: PartialEq + Clone> PickMemory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a memory holding `last`
    pub fn with_last(last: Option<T>) -> Self {
        Self { last }
    }

    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }

    /// Forget the previous pick
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Pick an element that differs from the previous pick
    ///
    /// - Empty list: `Ok(None)`, no draw.
    /// - One element: that element, no draw, memory untouched.
    /// - Otherwise draws until the value differs from the previous pick, then
    ///   remembers and returns it.
    ///
    /// # Errors
    ///
    /// Memory is left unchanged on error.
    ///
    /// - `NoDistinctOption` if no element `pick` can reach differs from the
    ///   previous pick (e.g. `[5, 5, 5]` after picking `5`). No draw.
    /// - `PickAttemptsExhausted` after [`MAX_PICK_ATTEMPTS`] rejected draws.
    pub fn pick_different<'a>(
        &mut self,
        rng: &mut Generator,
        list: &'a [T],
    ) -> Result<Option<&'a T>, SamplingError> {
        match list.len() {
            0 => return Ok(None),
            1 => return Ok(Some(&list[0])),
            _ => {}
        }

        let reachable = &list[..=max_pick_index(list.len())];
        if !reachable.iter().any(|v| !self.is_last(v)) {
            return Err(SamplingError::NoDistinctOption);
        }

        for attempt in 1..=MAX_PICK_ATTEMPTS {
            let candidate = rng.pick(list)?;
            if self.is_last(candidate) {
                log::trace!("pick_different: attempt {} repeated previous pick", attempt);
                continue;
            }
            self.last = Some(candidate.clone());
            return Ok(Some(candidate));
        }

        log::warn!(
            "pick_different: gave up after {} attempts (state={})",
            MAX_PICK_ATTEMPTS,
            rng.state()
        );
        Err(SamplingError::PickAttemptsExhausted {
            attempts: MAX_PICK_ATTEMPTS,
        })
    }

    fn is_last(&self, value: &T) -> bool {
        self.last.as_ref() == Some(value)
    }
}
