//! Magnitude ranking of spectrum bins

use super::types::{RankedBin, Spectrum};

/// Order bins by magnitude, strongest first
///
/// Equal magnitudes keep ascending bin order, so the result is a total,
/// reproducible order even for symmetric spectra.
pub fn rank(spectrum: &Spectrum) -> Vec<RankedBin> {
    let mut ranked: Vec<RankedBin> = spectrum
        .bins()
        .iter()
        .enumerate()
        .map(|(index, c)| RankedBin {
            index,
            magnitude: c.norm(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.magnitude
            .total_cmp(&a.magnitude)
            .then_with(|| a.index.cmp(&b.index))
    });

    ranked
}
