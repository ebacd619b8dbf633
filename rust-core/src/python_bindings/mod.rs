//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyIndexError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::SpectralError;

mod editor_bindings;
mod series_bindings;

impl From<SpectralError> for PyErr {
    fn from(err: SpectralError) -> Self {
        let message = err.to_string();
        match err {
            SpectralError::InvalidInput(_)
            | SpectralError::LengthMismatch { .. }
            | SpectralError::Parse { .. } => PyValueError::new_err(message),
            SpectralError::IndexOutOfRange { .. } => PyIndexError::new_err(message),
            SpectralError::NotLoaded => PyRuntimeError::new_err(message),
            SpectralError::Io(_) => PyIOError::new_err(message),
        }
    }
}

/// Python module definition
#[pymodule]
fn spectral_editor(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<editor_bindings::PyBinEditor>()?;

    m.add_function(wrap_pyfunction!(series_bindings::load_samples, m)?)?;
    m.add_function(wrap_pyfunction!(series_bindings::save_series, m)?)?;
    m.add_function(wrap_pyfunction!(series_bindings::difference, m)?)?;
    m.add_function(wrap_pyfunction!(series_bindings::truncate, m)?)?;
    m.add_function(wrap_pyfunction!(series_bindings::keep_strongest, m)?)?;

    Ok(())
}
