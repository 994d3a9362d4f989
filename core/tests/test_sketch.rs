//! Tests for the per-run sketch context

use seedcraft_core::{HeadlessCanvas, SamplingError, Sketch, SketchConfig, SketchError};

const TOKEN_HASH: &str = "0xa1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5f60718293a4b5c6d7e8f90";

/// Draws one "artwork" worth of values from a fresh sketch
fn render(material: &str) -> (Vec<f64>, Vec<i64>, Vec<String>, Vec<bool>) {
    let mut sketch: Sketch = Sketch::new();
    sketch.seed(material).unwrap();
    sketch.create_canvas(Some(500.0), Some(300.0), &mut HeadlessCanvas::default());

    let points = (0..10)
        .map(|_| {
            let x = sketch.uniform().unwrap();
            sketch.scale(x).unwrap()
        })
        .collect();
    let sizes = sketch.integers(10, 3, 40).unwrap();
    let palette: Vec<String> = ["ochre", "teal", "ink"].iter().map(|s| s.to_string()).collect();
    let colours = (0..10)
        .map(|_| sketch.pick_different(&palette).unwrap().unwrap().clone())
        .collect();
    let flags = (0..10).map(|_| sketch.coin().unwrap()).collect();

    (points, sizes, colours, flags)
}

#[test]
fn test_two_runs_are_identical() {
    assert_eq!(render(TOKEN_HASH), render(TOKEN_HASH));
}

#[test]
fn test_runs_with_different_tokens_differ() {
    assert_ne!(render(TOKEN_HASH), render("0xdeadbeef00000000"));
}

#[test]
fn test_sketches_are_isolated() {
    let mut a: Sketch = Sketch::new();
    let mut b: Sketch = Sketch::new();
    a.seed(TOKEN_HASH).unwrap();
    b.seed(TOKEN_HASH).unwrap();

    // Draining a does not move b
    for _ in 0..100 {
        a.uniform().unwrap();
    }
    assert_eq!(b.uniform(), Ok(0.08));
}

#[test]
fn test_parallel_sketches() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| render(TOKEN_HASH)))
        .collect();
    let expected = render(TOKEN_HASH);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_pick_different_alternates_on_two_options() {
    let mut sketch: Sketch = Sketch::new();
    sketch.seed(TOKEN_HASH).unwrap();
    let options = vec!["a".to_string(), "b".to_string()];

    let first = sketch.pick_different(&options).unwrap().unwrap().clone();
    let second = sketch.pick_different(&options).unwrap().unwrap().clone();
    assert_eq!(first, "a");
    assert_eq!(second, "b");
    assert_eq!(sketch.last_pick(), Some(&"b".to_string()));
}

#[test]
fn test_reset_picks() {
    let mut sketch: Sketch<i32> = Sketch::new();
    sketch.seed(TOKEN_HASH).unwrap();
    sketch.pick_different(&[1, 2, 3]).unwrap();
    assert!(sketch.last_pick().is_some());

    sketch.reset_picks();
    assert_eq!(sketch.last_pick(), None);
}

#[test]
fn test_sampling_errors_surface() {
    let mut sketch: Sketch = Sketch::new();
    sketch.seed(TOKEN_HASH).unwrap();

    assert_eq!(
        sketch.integer(6, 1),
        Err(SketchError::Sampling(SamplingError::InvalidRange {
            min: 6,
            max: 1
        }))
    );
    let empty: [u8; 0] = [];
    assert_eq!(
        sketch.pick(&empty),
        Err(SketchError::Sampling(SamplingError::EmptyList))
    );
}

#[test]
fn test_from_config() {
    let config = SketchConfig::new(TOKEN_HASH).with_canvas(Some(500.0), Some(300.0));
    let mut canvas = HeadlessCanvas::default();
    let mut sketch: Sketch = Sketch::from_config(&config, &mut canvas).unwrap();

    assert_eq!(canvas.size, Some((500.0, 300.0)));
    assert_eq!(sketch.scale(1.0), Ok(300.0));
    assert_eq!(sketch.uniform(), Ok(0.08));
}

#[test]
fn test_from_config_bad_seed() {
    let config = SketchConfig::new("0xnothex_");
    let result: Result<Sketch, _> = Sketch::from_config(&config, &mut HeadlessCanvas::default());
    assert!(matches!(result, Err(SketchError::Seed(_))));
}
