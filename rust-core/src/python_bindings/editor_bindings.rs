//! Python bindings for the bin editor

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SpectralError;
use crate::spectrum::{BinEditor, EditorState};

/// Bin editor exposed to Python
#[pyclass(name = "BinEditor", unsendable)]
pub struct PyBinEditor {
    editor: BinEditor,
}

#[pymethods]
impl PyBinEditor {
    #[new]
    fn new() -> Self {
        Self {
            editor: BinEditor::new(),
        }
    }

    /// Load a sample series, discarding previous edits
    ///
    /// Args:
    ///     samples: Input signal as numpy array
    fn load(&mut self, samples: PyReadonlyArray1<f64>) -> PyResult<()> {
        let sig = samples
            .as_slice()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(self.editor.load(sig)?)
    }

    /// Suppress (True) or restore (False) one frequency bin
    fn set_suppressed(&mut self, index: usize, suppressed: bool) -> PyResult<()> {
        Ok(self.editor.set_suppressed(index, suppressed)?)
    }

    /// Flip one bin and return whether it is now suppressed
    fn toggle(&mut self, index: usize) -> PyResult<bool> {
        Ok(self.editor.toggle(index)?)
    }

    /// Keep the lowest `max_bins` bins. Replaces any per-bin edits.
    fn truncate_to(&mut self, max_bins: usize) -> PyResult<()> {
        Ok(self.editor.truncate_to(max_bins)?)
    }

    /// Keep DC and the `count` strongest bins. Replaces any per-bin edits.
    fn keep_strongest(&mut self, count: usize) -> PyResult<()> {
        Ok(self.editor.keep_strongest(count)?)
    }

    fn restore_all(&mut self) -> PyResult<()> {
        Ok(self.editor.restore_all()?)
    }

    /// Reconstructed signal for the current mask
    fn reconstruction<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let recon = self.editor.reconstruction().ok_or(SpectralError::NotLoaded)?;
        Ok(PyArray1::from_slice(py, recon))
    }

    /// Original signal minus the reconstruction
    fn residual<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let residual = self.editor.residual()?;
        Ok(PyArray1::from_vec(py, residual))
    }

    /// Magnitudes of the unmasked spectrum, DC first
    fn magnitudes<'py>(&self, py: Python<'py>) -> PyResult<&'py PyArray1<f64>> {
        let canonical = self.editor.canonical().ok_or(SpectralError::NotLoaded)?;
        Ok(PyArray1::from_vec(py, canonical.magnitudes()))
    }

    /// List of (index, magnitude) pairs, strongest first
    fn ranked(&self) -> PyResult<Vec<(usize, f64)>> {
        let ranked = self.editor.ranked().ok_or(SpectralError::NotLoaded)?;
        Ok(ranked.iter().map(|b| (b.index, b.magnitude)).collect())
    }

    fn suppressed(&self) -> Vec<usize> {
        self.editor.suppressed()
    }

    fn is_suppressed(&self, index: usize) -> bool {
        self.editor.is_suppressed(index)
    }

    fn num_bins(&self) -> usize {
        self.editor.num_bins()
    }

    /// One of "empty", "loaded", "edited"
    fn state(&self) -> &'static str {
        match self.editor.state() {
            EditorState::Empty => "empty",
            EditorState::Loaded => "loaded",
            EditorState::Edited => "edited",
        }
    }
}
