//! Deterministic random number generation
//!
//! Uses a 32-bit xorshift recurrence for fast, deterministic draws.
//! CRITICAL: All randomness feeding an artwork MUST go through this module.

mod xorshift;

pub use xorshift::{Generator, SeedError, UniformRange, SEED_HEX_RANGE};
