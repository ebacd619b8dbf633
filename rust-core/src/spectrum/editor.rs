//! Interactive bin editor
//!
//! Owns the canonical spectrum of a loaded series and a masked working copy.
//! Every edit rebuilds the working copy from the canonical one and runs a full
//! inverse transform, so the reconstruction always matches the current mask.
//!
//! Per-bin edits (`set_suppressed`, `toggle`) and the bulk modes
//! (`truncate_to`, `keep_strongest`) write the same suppression set. They do
//! not combine: each bulk mode replaces whatever mask was there before.

use std::collections::BTreeSet;

use log::debug;

use super::fft::SpectralTransform;
use super::mask::{apply_mask, strongest_mask, truncation_mask};
use super::ranking::rank;
use super::residual::difference;
use super::types::{RankedBin, Spectrum};
use crate::error::{Result, SpectralError};

/// Editor lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Nothing loaded yet
    Empty,
    /// Series loaded, no bins suppressed
    Loaded,
    /// At least one bin suppressed
    Edited,
}

/// Everything derived from one loaded series
struct Session {
    samples: Vec<f64>,
    canonical: Spectrum,
    working: Spectrum,
    suppressed: BTreeSet<usize>,
    reconstruction: Vec<f64>,
    ranked: Vec<RankedBin>,
}

impl Session {
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.canonical.len() {
            return Err(SpectralError::IndexOutOfRange {
                index,
                len: self.canonical.len(),
            });
        }
        Ok(())
    }

    /// Replace the mask, then working copy and reconstruction, all or nothing
    fn commit(&mut self, transform: &mut SpectralTransform, suppressed: BTreeSet<usize>) -> Result<()> {
        let working = apply_mask(&self.canonical, &suppressed);
        let reconstruction = transform.backward(&working)?;

        debug!(
            "Reconstructed {} samples with {}/{} bins suppressed",
            reconstruction.len(),
            suppressed.len(),
            self.canonical.len()
        );

        self.working = working;
        self.suppressed = suppressed;
        self.reconstruction = reconstruction;
        Ok(())
    }
}

/// Spectral editor for one series at a time
///
/// Not synchronized: callers sharing an editor must serialize access.
/// Independent editors do not share any state.
#[derive(Default)]
pub struct BinEditor {
    transform: SpectralTransform,
    session: Option<Session>,
}

impl BinEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new series, discarding any previous one and its edits
    ///
    /// On error the editor keeps its previous contents.
    ///
    /// # Errors
    /// `InvalidInput` if `samples` is empty
    pub fn load(&mut self, samples: &[f64]) -> Result<()> {
        let canonical = self.transform.forward(samples)?;
        let working = canonical.clone();
        let reconstruction = self.transform.backward(&working)?;
        let ranked = rank(&canonical);

        debug!(
            "Loaded {} samples into {} bins",
            samples.len(),
            canonical.len()
        );

        self.session = Some(Session {
            samples: samples.to_vec(),
            canonical,
            working,
            suppressed: BTreeSet::new(),
            reconstruction,
            ranked,
        });
        Ok(())
    }

    /// Suppress or restore one bin
    ///
    /// Repeating the current state is allowed and still recomputes the
    /// reconstruction. Restoring copies the canonical value back bit for bit.
    ///
    /// # Errors
    /// `NotLoaded` before any load, `IndexOutOfRange` for an index past the last bin
    pub fn set_suppressed(&mut self, index: usize, suppressed: bool) -> Result<()> {
        let session = self.session.as_mut().ok_or(SpectralError::NotLoaded)?;
        session.check_index(index)?;

        let mut mask = session.suppressed.clone();
        if suppressed {
            mask.insert(index);
        } else {
            mask.remove(&index);
        }

        session.commit(&mut self.transform, mask)
    }

    /// Flip one bin's suppression and return its new state
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let suppressed = !self.is_suppressed(index);
        self.set_suppressed(index, suppressed)?;
        Ok(suppressed)
    }

    /// Keep bins `0..max_bins` and suppress the rest
    ///
    /// `max_bins` is clamped to the bin count; 0 suppresses everything.
    /// Replaces any existing mask.
    pub fn truncate_to(&mut self, max_bins: usize) -> Result<()> {
        let session = self.session.as_mut().ok_or(SpectralError::NotLoaded)?;
        let mask = truncation_mask(session.canonical.len(), max_bins);
        session.commit(&mut self.transform, mask)
    }

    /// Keep DC plus the `count` strongest non-DC bins and suppress the rest
    ///
    /// `count` is clamped to the number of non-DC bins. Replaces any existing mask.
    pub fn keep_strongest(&mut self, count: usize) -> Result<()> {
        let session = self.session.as_mut().ok_or(SpectralError::NotLoaded)?;
        let mask = strongest_mask(&session.ranked, session.canonical.len(), count);
        session.commit(&mut self.transform, mask)
    }

    /// Clear every suppression
    pub fn restore_all(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(SpectralError::NotLoaded)?;
        session.commit(&mut self.transform, BTreeSet::new())
    }

    pub fn state(&self) -> EditorState {
        match &self.session {
            None => EditorState::Empty,
            Some(session) if session.suppressed.is_empty() => EditorState::Loaded,
            Some(_) => EditorState::Edited,
        }
    }

    /// Number of bins in the loaded spectrum (0 when empty)
    pub fn num_bins(&self) -> usize {
        self.session.as_ref().map_or(0, |s| s.canonical.len())
    }

    pub fn is_suppressed(&self, index: usize) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.suppressed.contains(&index))
    }

    /// Suppressed bin indices in ascending order
    pub fn suppressed(&self) -> Vec<usize> {
        self.session
            .as_ref()
            .map(|s| s.suppressed.iter().copied().collect())
            .unwrap_or_default()
    }

    /// The series as loaded
    pub fn samples(&self) -> Option<&[f64]> {
        self.session.as_ref().map(|s| s.samples.as_slice())
    }

    /// Unmasked spectrum of the loaded series
    pub fn canonical(&self) -> Option<&Spectrum> {
        self.session.as_ref().map(|s| &s.canonical)
    }

    /// Spectrum with the current mask applied
    pub fn working(&self) -> Option<&Spectrum> {
        self.session.as_ref().map(|s| &s.working)
    }

    /// Reconstruction for the current mask
    pub fn reconstruction(&self) -> Option<&[f64]> {
        self.session.as_ref().map(|s| s.reconstruction.as_slice())
    }

    /// Canonical bins ranked by magnitude, computed once per load
    pub fn ranked(&self) -> Option<&[RankedBin]> {
        self.session.as_ref().map(|s| s.ranked.as_slice())
    }

    /// Original samples minus the current reconstruction
    pub fn residual(&self) -> Result<Vec<f64>> {
        let session = self.session.as_ref().ok_or(SpectralError::NotLoaded)?;
        difference(&session.samples, &session.reconstruction)
    }
}
