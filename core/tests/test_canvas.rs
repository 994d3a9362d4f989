//! Tests for the dimensionless coordinate scaler

use seedcraft_core::{Canvas, CanvasConfig, HeadlessCanvas, Scaler, DEFAULT_SIZE};

/// Records every surface the scaler asks for
#[derive(Default)]
struct RecordingCanvas {
    created: Vec<(f64, f64)>,
}

impl Canvas for RecordingCanvas {
    fn create_canvas(&mut self, width: f64, height: f64) {
        self.created.push((width, height));
    }
}

#[test]
fn test_landscape_canvas_exact_factor() {
    let mut canvas = RecordingCanvas::default();
    let scaler = Scaler::initialize(Some(500.0), Some(300.0), &mut canvas);

    assert_eq!(scaler.factor(), 300_000.0);
    assert_eq!(scaler.scale(1.0), 300.0);
    assert_eq!(scaler.scale(0.5), 150.0);
    assert_eq!(canvas.created, vec![(500.0, 300.0)]);
}

#[test]
fn test_default_canvas() {
    let mut canvas = RecordingCanvas::default();
    let scaler = Scaler::initialize(None, None, &mut canvas);

    assert_eq!(canvas.created, vec![(DEFAULT_SIZE, DEFAULT_SIZE)]);
    assert_eq!(scaler.scale(1.0), 1000.0);
}

#[test]
fn test_square_from_width_only() {
    let mut canvas = RecordingCanvas::default();
    let scaler = Scaler::initialize(Some(250.0), None, &mut canvas);

    assert_eq!(canvas.created, vec![(250.0, 250.0)]);
    assert_eq!(scaler.scale(0.2), 50.0);
}

#[test]
fn test_reinitialize_replaces_factor() {
    let mut canvas = RecordingCanvas::default();
    let first = Scaler::initialize(Some(100.0), None, &mut canvas);
    let second = Scaler::initialize(Some(400.0), Some(800.0), &mut canvas);

    assert_eq!(first.factor(), 100_000.0);
    assert_eq!(second.factor(), 400_000.0);
    assert_eq!(canvas.created.len(), 2);
}

#[test]
fn test_scale_is_linear() {
    let scaler = Scaler::resolve(Some(500.0), Some(300.0));
    assert_eq!(scaler.scale(0.0), 0.0);
    assert_eq!(scaler.scale(2.0), 2.0 * scaler.scale(1.0));
    assert_eq!(scaler.scale(-1.0), -300.0);
}

#[test]
fn test_from_config() {
    let config: CanvasConfig = serde_json::from_str(r#"{ "height": 720 }"#).unwrap();
    let mut canvas = HeadlessCanvas::default();
    let scaler = Scaler::from_config(&config, &mut canvas);

    assert_eq!(canvas.size, Some((1000.0, 720.0)));
    assert_eq!(scaler.factor(), 720_000.0);
}
