//! Seedcraft Core - Deterministic sampling for generative art
//!
//! Reproducible pseudo-random draws keyed by a token hash: the same seed
//! yields the same artwork on every run and platform.
//!
//! # Architecture
//!
//! - **rng**: 32-bit xorshift generator and seed derivation
//! - **sampling**: Integers, booleans, list picks, "pick different" memory
//! - **canvas**: Dimensionless coordinate scaler and the canvas seam
//! - **sketch**: Per-run context bundling the above
//! - **checkpoint**: Snapshot/restore of a sketch mid-run
//! - **config**: Serde-loadable sketch configuration
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded generator, no globals)
//! 2. A malformed seed is an error, never a default sequence
//! 3. Not a secure RNG

// Module declarations
pub mod canvas;
pub mod checkpoint;
pub mod config;
pub mod rng;
pub mod sampling;
pub mod sketch;

#[cfg(feature = "token")]
pub mod token;

// Re-exports for convenience
pub use canvas::{Canvas, CanvasConfig, HeadlessCanvas, Scaler, DEFAULT_SIZE};
pub use checkpoint::{compute_config_hash, CheckpointError, SketchSnapshot};
pub use config::{ConfigError, SketchConfig};
pub use rng::{Generator, SeedError, UniformRange};
pub use sampling::{PickMemory, SamplingError, DEFAULT_BOOLEAN_THRESHOLD};
pub use sketch::{Sketch, SketchError};

#[cfg(feature = "token")]
pub use token::{generate_test_token, TestToken};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn seedcraft_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::PyGenerator>()?;
    Ok(())
}
