//! Shared spectral data types

use num_complex::Complex;

/// Number of non-redundant bins for a real series of length `signal_len`
pub fn num_bins(signal_len: usize) -> usize {
    signal_len / 2 + 1
}

/// Half spectrum of a real-valued series
///
/// Bins run from DC (index 0) to Nyquist. Since `signal_len / 2 + 1` maps two
/// series lengths onto the same bin count, the source length travels with the
/// bins so the inverse transform knows how many samples to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex<f64>>,
    signal_len: usize,
}

impl Spectrum {
    /// Wrap raw bins. Consistency with `signal_len` is checked by the inverse transform.
    pub fn from_parts(bins: Vec<Complex<f64>>, signal_len: usize) -> Self {
        Self { bins, signal_len }
    }

    pub fn bins(&self) -> &[Complex<f64>] {
        &self.bins
    }

    /// Length of the time-domain series this spectrum describes
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// |X[k]| for every bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }
}

/// One bin's position and magnitude, as presented by the ranking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedBin {
    pub index: usize,
    pub magnitude: f64,
}
