//! Tests for sketch snapshot/restore

use seedcraft_core::{
    CheckpointError, HeadlessCanvas, Sketch, SketchConfig, SketchError, SketchSnapshot,
};

const TOKEN_HASH: &str = "0xa1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

fn config() -> SketchConfig {
    SketchConfig::new(TOKEN_HASH).with_canvas(Some(800.0), Some(600.0))
}

fn palette() -> Vec<String> {
    ["rose", "moss", "slate", "sand"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_resume_matches_uninterrupted_run() {
    let config = config();
    let palette = palette();

    let mut uninterrupted: Sketch =
        Sketch::from_config(&config, &mut HeadlessCanvas::default()).unwrap();
    let mut interrupted: Sketch =
        Sketch::from_config(&config, &mut HeadlessCanvas::default()).unwrap();

    for _ in 0..25 {
        uninterrupted.uniform().unwrap();
        uninterrupted.pick_different(&palette).unwrap();
        interrupted.uniform().unwrap();
        interrupted.pick_different(&palette).unwrap();
    }

    let json = interrupted.snapshot().to_json().unwrap();
    drop(interrupted);

    let snapshot: SketchSnapshot<String> = SketchSnapshot::from_json(&json).unwrap();
    let mut resumed: Sketch = Sketch::restore(snapshot, Some(&config)).unwrap();

    assert_eq!(resumed.last_pick(), uninterrupted.last_pick());
    assert_eq!(resumed.scale(1.0), uninterrupted.scale(1.0));
    for _ in 0..50 {
        assert_eq!(
            resumed.pick_different(&palette).unwrap(),
            uninterrupted.pick_different(&palette).unwrap()
        );
        assert_eq!(resumed.integer(0, 255), uninterrupted.integer(0, 255));
    }
}

#[test]
fn test_snapshot_contents() {
    let mut sketch: Sketch = Sketch::new();
    sketch.seed(TOKEN_HASH).unwrap();
    sketch.uniform().unwrap();

    let snapshot = sketch.snapshot();
    assert_eq!(snapshot.generator_state, Some(-1061136080));
    assert_eq!(snapshot.last_pick, None);
    assert_eq!(snapshot.scaler, None);
    assert_eq!(snapshot.config_hash, None);
}

#[test]
fn test_restore_requires_matching_config() {
    let sketch: Sketch = Sketch::from_config(&config(), &mut HeadlessCanvas::default()).unwrap();
    let snapshot = sketch.snapshot();

    let other = SketchConfig::new(TOKEN_HASH).with_canvas(Some(1024.0), None);
    let result = Sketch::restore(snapshot.clone(), Some(&other));
    assert!(matches!(
        result,
        Err(SketchError::Checkpoint(CheckpointError::ConfigMismatch { .. }))
    ));

    let result = Sketch::restore(snapshot, None);
    assert!(matches!(
        result,
        Err(SketchError::Checkpoint(CheckpointError::ConfigMismatch { .. }))
    ));
}

#[test]
fn test_restore_unconfigured_sketch() {
    let mut sketch: Sketch<i32> = Sketch::new();
    sketch.seed("0xdeadbeef").unwrap();
    sketch.pick_different(&[1, 2, 3]).unwrap();

    let mut restored = Sketch::restore(sketch.snapshot(), None).unwrap();
    assert_eq!(restored.last_pick(), sketch.last_pick());
    assert_eq!(restored.uniform(), sketch.uniform());
}
