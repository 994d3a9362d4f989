//! Sketch context - one generation run
//!
//! Bundles the per-run state that generative code reads and writes: the
//! generator, the "pick different" memory and the canvas scaler. A sketch
//! starts empty; seeding and canvas creation are explicit steps, and using
//! either part before its step is reported as an error.
//!
//! All mutation goes through `&mut self`, so one sketch is always accessed
//! sequentially. Independent sketches share nothing and can run on separate
//! threads.

use crate::canvas::{Canvas, Scaler};
use crate::checkpoint::{compute_config_hash, CheckpointError, SketchSnapshot};
use crate::config::{ConfigError, SketchConfig};
use crate::rng::{Generator, SeedError};
use crate::sampling::{PickMemory, SamplingError, DEFAULT_BOOLEAN_THRESHOLD};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by sketch operations
#[derive(Debug, Error, PartialEq, Clone)]
pub enum SketchError {
    #[error("Generator used before seeding")]
    UninitializedGenerator,

    #[error("Scaler used before a canvas was created")]
    UninitializedScaler,

    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Sampling(#[from] SamplingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Checkpoint(#[from] CheckpointError),
}

/// Per-run sampling context
///
/// `T` is the element type remembered by [`pick_different`](Self::pick_different).
///
/// # Example
/// ```
/// use seedcraft_core::canvas::HeadlessCanvas;
/// use seedcraft_core::Sketch;
///
/// let mut sketch: Sketch = Sketch::new();
/// sketch.seed("0xa1b2c3d4e5f6").unwrap();
/// sketch.create_canvas(Some(500.0), Some(300.0), &mut HeadlessCanvas::default());
///
/// let x = sketch.uniform().unwrap();
/// assert_eq!(sketch.scale(x).unwrap(), 24.0);
/// ```
#[derive(Debug, Clone)]
pub struct Sketch<T = String> {
    generator: Option<Generator>,
    picks: PickMemory<T>,
    scaler: Option<Scaler>,
    boolean_threshold: f64,
    config_hash: Option<String>,
}

impl<T> Default for Sketch<T> {
    fn default() -> Self {
        Self {
            generator: None,
            picks: PickMemory::default(),
            scaler: None,
            boolean_threshold: DEFAULT_BOOLEAN_THRESHOLD,
            config_hash: None,
        }
    }
}

impl<T: PartialEq + Clone> Sketch<T> {
    /// Create an unseeded sketch with no canvas
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed, size the canvas and remember the config for checkpoint matching
    pub fn from_config(
        config: &SketchConfig,
        canvas: &mut impl Canvas,
    ) -> Result<Self, SketchError> {
        let mut sketch = Self::new();
        sketch.seed(&config.seed)?;
        sketch.scaler = Some(Scaler::from_config(&config.canvas, canvas));
        sketch.boolean_threshold = config.boolean_threshold;
        sketch.config_hash = Some(compute_config_hash(config)?);
        Ok(sketch)
    }

    /// Seed (or reseed) the generator from seed material
    ///
    /// On error the previous generator, if any, is kept.
    pub fn seed(&mut self, material: &str) -> Result<(), SketchError> {
        self.generator = Some(Generator::from_material(material)?);
        Ok(())
    }

    pub fn is_seeded(&self) -> bool {
        self.generator.is_some()
    }

    pub fn generator(&self) -> Option<&Generator> {
        self.generator.as_ref()
    }

    /// Start a new sampling context: forget the last "pick different" value
    pub fn reset_picks(&mut self) {
        self.picks.reset();
    }

    pub fn last_pick(&self) -> Option<&T> {
        self.picks.last()
    }

    fn rng(&mut self) -> Result<&mut Generator, SketchError> {
        self.generator
            .as_mut()
            .ok_or(SketchError::UninitializedGenerator)
    }

    /// Next value in `[0, 1)`
    pub fn uniform(&mut self) -> Result<f64, SketchError> {
        Ok(self.rng()?.next_uniform())
    }

    /// Next value in `[min, max)`
    pub fn uniform_in(&mut self, min: f64, max: f64) -> Result<f64, SketchError> {
        Ok(self.rng()?.next_uniform_in(min, max))
    }

    /// Next integer in `[min, max]`
    pub fn integer(&mut self, min: i64, max: i64) -> Result<i64, SketchError> {
        Ok(self.rng()?.next_integer(min, max)?)
    }

    /// `n` integers in `[min, max]`
    pub fn integers(&mut self, n: usize, min: i64, max: i64) -> Result<Vec<i64>, SketchError> {
        Ok(self.rng()?.next_integers(n, min, max)?)
    }

    /// True iff the next unit draw is below `threshold`
    pub fn boolean(&mut self, threshold: f64) -> Result<bool, SketchError> {
        Ok(self.rng()?.next_boolean(threshold))
    }

    /// Boolean with the configured threshold (0.5 unless the config says otherwise)
    pub fn coin(&mut self) -> Result<bool, SketchError> {
        let threshold = self.boolean_threshold;
        self.boolean(threshold)
    }

    /// One element of `list`, of any element type
    pub fn pick<'a, U>(&mut self, list: &'a [U]) -> Result<&'a U, SketchError> {
        Ok(self.rng()?.pick(list)?)
    }

    /// One element of `list` differing from the previous call's result
    ///
    /// See [`PickMemory::pick_different`]; an empty list yields `Ok(None)`.
    /// Lists of zero or one element do not require a seeded generator.
    pub fn pick_different<'a>(&mut self, list: &'a [T]) -> Result<Option<&'a T>, SketchError> {
        match list.len() {
            0 => return Ok(None),
            1 => return Ok(Some(&list[0])),
            _ => {}
        }
        let rng = self
            .generator
            .as_mut()
            .ok_or(SketchError::UninitializedGenerator)?;
        Ok(self.picks.pick_different(rng, list)?)
    }

    /// Resolve the canvas size, fix the scale factor and create the canvas
    pub fn create_canvas(&mut self, width: Option<f64>, height: Option<f64>, canvas: &mut impl Canvas) {
        self.scaler = Some(Scaler::initialize(width, height, canvas));
    }

    pub fn scaler(&self) -> Option<&Scaler> {
        self.scaler.as_ref()
    }

    /// Map a normalized value into canvas units
    pub fn scale(&self, x: f64) -> Result<f64, SketchError> {
        self.scaler
            .as_ref()
            .map(|scaler| scaler.scale(x))
            .ok_or(SketchError::UninitializedScaler)
    }
}

impl<T: PartialEq + Clone + Serialize> Sketch<T> {
    /// Capture the current state for later [`restore`](Self::restore)
    pub fn snapshot(&self) -> SketchSnapshot<T> {
        SketchSnapshot {
            generator_state: self.generator.as_ref().map(Generator::state),
            last_pick: self.picks.last().cloned(),
            scaler: self.scaler,
            config_hash: self.config_hash.clone(),
        }
    }

    /// Rebuild a sketch from a snapshot
    ///
    /// `config` must be the config the snapshot was taken under (or `None`
    /// for a sketch built without one). The canvas surface itself is not
    /// recreated; the scaler comes back with its original factor.
    pub fn restore(
        snapshot: SketchSnapshot<T>,
        config: Option<&SketchConfig>,
    ) -> Result<Self, SketchError> {
        let actual = config.map(compute_config_hash).transpose()?;
        if actual != snapshot.config_hash {
            return Err(CheckpointError::ConfigMismatch {
                expected: snapshot.config_hash,
                actual,
            }
            .into());
        }

        Ok(Self {
            generator: snapshot.generator_state.map(Generator::new),
            picks: PickMemory::with_last(snapshot.last_pick),
            scaler: snapshot.scaler,
            boolean_threshold: config
                .map(|c| c.boolean_threshold)
                .unwrap_or(DEFAULT_BOOLEAN_THRESHOLD),
            config_hash: actual,
        })
    }
}
