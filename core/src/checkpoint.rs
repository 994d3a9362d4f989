//! Checkpoint - Save/Load Sketch State
//!
//! Captures everything a sketch needs to resume drawing mid-run and produce
//! exactly the values an uninterrupted run would have produced.
//!
//! # Critical Invariants
//!
//! - **Determinism**: restored generator state continues the same sequence
//! - **Config Matching**: a snapshot can only be restored with the config it
//!   was taken under

use crate::canvas::Scaler;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Errors that can occur while creating or restoring checkpoints
#[derive(Debug, Error, PartialEq, Clone)]
pub enum CheckpointError {
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Config mismatch: snapshot was taken under {expected:?}, restoring with {actual:?}")]
    ConfigMismatch {
        expected: Option<String>,
        actual: Option<String>,
    },
}

/// Complete sketch state snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchSnapshot<T> {
    /// Generator state at time of snapshot (None if not yet seeded)
    pub generator_state: Option<i32>,

    /// Last value returned by pick_different
    pub last_pick: Option<T>,

    /// Canvas scaler, if a canvas had been created
    pub scaler: Option<Scaler>,

    /// SHA256 hash of the sketch config (None for sketches built without one)
    pub config_hash: Option<String>,
}

impl<T: Serialize> SketchSnapshot<T> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| {
            CheckpointError::Serialization(format!("Snapshot serialization failed: {}", e))
        })
    }
}

impl<T: DeserializeOwned> SketchSnapshot<T> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| {
            CheckpointError::Serialization(format!("Snapshot deserialization failed: {}", e))
        })
    }
}

/// Compute deterministic SHA256 hash of config
///
/// The config is hashed as compact JSON with object keys in sorted order, so
/// the hash does not depend on field or map ordering.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, CheckpointError> {
    let value = serde_json::to_value(config).map_err(config_error)?;
    let mut hasher = Sha256::new();
    hash_canonical(&value, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Feed `value` into `hasher` as canonical JSON, without building the string
fn hash_canonical(value: &Value, hasher: &mut Sha256) -> Result<(), CheckpointError> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            hasher.update(b"{");
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    hasher.update(b",");
                }
                hasher.update(serde_json::to_string(key).map_err(config_error)?);
                hasher.update(b":");
                hash_canonical(item, hasher)?;
            }
            hasher.update(b"}");
        }
        Value::Array(items) => {
            hasher.update(b"[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    hasher.update(b",");
                }
                hash_canonical(item, hasher)?;
            }
            hasher.update(b"]");
        }
        scalar => hasher.update(serde_json::to_string(scalar).map_err(config_error)?),
    }
    Ok(())
}

fn config_error(e: serde_json::Error) -> CheckpointError {
    CheckpointError::Serialization(format!("Config serialization failed: {}", e))
}
