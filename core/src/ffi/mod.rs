//! PyO3 wrapper for the sketch context
//!
//! Exposes a seeded sampling context to Python sketches.
//!
//! # Example (from Python)
//!
//! ```python
//! from seedcraft_core import Generator
//!
//! g = Generator()
//! g.seed(token_hash)
//! g.create_canvas(500, 300)
//! x = g.scale(g.uniform())
//! colour = g.pick_different(["red", "green", "blue"])
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::canvas::HeadlessCanvas;
use crate::sketch::{Sketch, SketchError};

fn to_py_err(err: SketchError) -> PyErr {
    match err {
        SketchError::UninitializedGenerator | SketchError::UninitializedScaler => {
            PyRuntimeError::new_err(err.to_string())
        }
        other => PyValueError::new_err(other.to_string()),
    }
}

/// Python wrapper for a Rust `Sketch<String>`
#[pyclass(name = "Generator")]
pub struct PyGenerator {
    inner: Sketch<String>,
}

#[pymethods]
impl PyGenerator {
    #[new]
    fn new() -> Self {
        PyGenerator {
            inner: Sketch::new(),
        }
    }

    /// Seed from a token hash (raises ValueError on malformed material)
    fn seed(&mut self, material: &str) -> PyResult<()> {
        self.inner.seed(material).map_err(to_py_err)
    }

    #[pyo3(signature = (min = 0.0, max = 1.0))]
    fn uniform(&mut self, min: f64, max: f64) -> PyResult<f64> {
        self.inner.uniform_in(min, max).map_err(to_py_err)
    }

    fn integer(&mut self, min: i64, max: i64) -> PyResult<i64> {
        self.inner.integer(min, max).map_err(to_py_err)
    }

    fn integers(&mut self, n: usize, min: i64, max: i64) -> PyResult<Vec<i64>> {
        self.inner.integers(n, min, max).map_err(to_py_err)
    }

    #[pyo3(signature = (threshold = 0.5))]
    fn boolean(&mut self, threshold: f64) -> PyResult<bool> {
        self.inner.boolean(threshold).map_err(to_py_err)
    }

    fn pick(&mut self, options: Vec<String>) -> PyResult<String> {
        self.inner.pick(&options).cloned().map_err(to_py_err)
    }

    /// Returns None for an empty list
    fn pick_different(&mut self, options: Vec<String>) -> PyResult<Option<String>> {
        self.inner
            .pick_different(&options)
            .map(|picked| picked.cloned())
            .map_err(to_py_err)
    }

    fn reset_picks(&mut self) {
        self.inner.reset_picks();
    }

    /// Fix the scale factor; returns the resolved (width, height)
    #[pyo3(signature = (width = None, height = None))]
    fn create_canvas(&mut self, width: Option<f64>, height: Option<f64>) -> (f64, f64) {
        let mut canvas = HeadlessCanvas::default();
        self.inner.create_canvas(width, height, &mut canvas);
        canvas.size.unwrap_or_default()
    }

    fn scale(&self, x: f64) -> PyResult<f64> {
        self.inner.scale(x).map_err(to_py_err)
    }

    fn state(&self) -> Option<i32> {
        self.inner.generator().map(|g| g.state())
    }
}
