//! Python bindings for one-shot series operations

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{ExportConfig, LoaderConfig};
use crate::io;
use crate::spectrum::{self, SpectralTransform};

fn as_slice<'a>(array: &'a PyReadonlyArray1<f64>) -> PyResult<&'a [f64]> {
    array
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Load samples from a three-column text file
#[pyfunction]
pub fn load_samples<'py>(py: Python<'py>, path: &str) -> PyResult<&'py PyArray1<f64>> {
    let samples = io::load_samples(path, &LoaderConfig::default())?;
    Ok(PyArray1::from_vec(py, samples))
}

/// Write one value per line
#[pyfunction]
#[pyo3(signature = (path, series, precision=None))]
pub fn save_series(path: &str, series: PyReadonlyArray1<f64>, precision: Option<usize>) -> PyResult<()> {
    let config = ExportConfig { precision };
    Ok(io::save_series(path, as_slice(&series)?, &config)?)
}

/// Elementwise a - b
#[pyfunction]
pub fn difference<'py>(
    py: Python<'py>,
    a: PyReadonlyArray1<f64>,
    b: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let diff = spectrum::difference(as_slice(&a)?, as_slice(&b)?)?;
    Ok(PyArray1::from_vec(py, diff))
}

/// Reconstruct from the lowest `max_bins` bins
#[pyfunction]
pub fn truncate<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    max_bins: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let out = SpectralTransform::new().truncate(as_slice(&samples)?, max_bins)?;
    Ok(PyArray1::from_vec(py, out))
}

/// Reconstruct from DC and the `count` strongest bins
#[pyfunction]
pub fn keep_strongest<'py>(
    py: Python<'py>,
    samples: PyReadonlyArray1<f64>,
    count: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let out = SpectralTransform::new().keep_strongest(as_slice(&samples)?, count)?;
    Ok(PyArray1::from_vec(py, out))
}
