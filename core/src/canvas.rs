//! Coordinate scaler for dimensionless drawing
//!
//! Generative code works in a normalized plane; [`Scaler`] converts those
//! values into canvas units with a factor fixed once per canvas. Actual
//! surface creation belongs to whatever implements [`Canvas`].

use serde::{Deserialize, Serialize};

/// Side length used when a dimension is not given, and the normalization base
pub const DEFAULT_SIZE: f64 = 1000.0;

/// Surface-creation collaborator
///
/// Implemented by the rendering layer; the scaler only tells it which size
/// to create.
pub trait Canvas {
    fn create_canvas(&mut self, width: f64, height: f64);
}

/// Canvas that creates no surface and only records the requested size
///
/// For headless runs (CLI, bindings, tests) where nothing is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeadlessCanvas {
    pub size: Option<(f64, f64)>,
}

impl Canvas for HeadlessCanvas {
    fn create_canvas(&mut self, width: f64, height: f64) {
        self.size = Some((width, height));
    }
}

/// Requested canvas dimensions
///
/// Missing, zero or NaN dimensions fall back the same way as
/// [`Scaler::initialize`] describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Scale factor derived from a canvas size
///
/// # Example
/// ```
/// use seedcraft_core::canvas::{Canvas, Scaler};
///
/// struct Headless;
/// impl Canvas for Headless {
///     fn create_canvas(&mut self, _width: f64, _height: f64) {}
/// }
///
/// let scaler = Scaler::initialize(Some(500.0), Some(300.0), &mut Headless);
/// assert_eq!(scaler.factor(), 300_000.0);
/// assert_eq!(scaler.scale(1.0), 300.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    width: f64,
    height: f64,
    /// min(width, height) * DEFAULT_SIZE
    k: f64,
}

impl Scaler {
    /// Resolve the canvas size, compute the factor and create the canvas
    ///
    /// Width is `width` or [`DEFAULT_SIZE`]; height is `height`, else the
    /// resolved `width`, else [`DEFAULT_SIZE`]. Zero and NaN count as absent.
    pub fn initialize(width: Option<f64>, height: Option<f64>, canvas: &mut impl Canvas) -> Self {
        let scaler = Self::resolve(width, height);
        log::debug!(
            "Creating {}x{} canvas (k={})",
            scaler.width,
            scaler.height,
            scaler.k
        );
        canvas.create_canvas(scaler.width, scaler.height);
        scaler
    }

    pub fn from_config(config: &CanvasConfig, canvas: &mut impl Canvas) -> Self {
        Self::initialize(config.width, config.height, canvas)
    }

    /// Compute the factor without touching any canvas
    pub fn resolve(width: Option<f64>, height: Option<f64>) -> Self {
        let width = given(width);
        let height = given(height).or(width).unwrap_or(DEFAULT_SIZE);
        let width = width.unwrap_or(DEFAULT_SIZE);

        Self {
            width,
            height,
            k: width.min(height) * DEFAULT_SIZE,
        }
    }

    /// Map a normalized value into canvas units: `x * k / DEFAULT_SIZE`
    pub fn scale(&self, x: f64) -> f64 {
        x * self.k / DEFAULT_SIZE
    }

    pub fn factor(&self) -> f64 {
        self.k
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

fn given(dimension: Option<f64>) -> Option<f64> {
    dimension.filter(|d| *d != 0.0 && !d.is_nan())
}
