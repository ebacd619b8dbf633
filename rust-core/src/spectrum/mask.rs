//! Suppression masks over spectrum bins
//!
//! A mask is the set of suppressed bin indices. Applying it to a spectrum
//! copies every unmasked bin verbatim and zeroes the rest, so a bin is
//! always either its original value or zero.

use std::collections::BTreeSet;

use num_complex::Complex;

use super::types::{RankedBin, Spectrum};

/// Suppress every bin at index >= `max_bins` (clamped to `num_bins`)
pub fn truncation_mask(num_bins: usize, max_bins: usize) -> BTreeSet<usize> {
    (max_bins.min(num_bins)..num_bins).collect()
}

/// Suppress everything except DC and the first `count` non-DC entries of `ranked`
///
/// `count` is clamped to the number of non-DC bins.
pub fn strongest_mask(ranked: &[RankedBin], num_bins: usize, count: usize) -> BTreeSet<usize> {
    let kept: BTreeSet<usize> = std::iter::once(0)
        .chain(
            ranked
                .iter()
                .map(|bin| bin.index)
                .filter(|&index| index != 0 && index < num_bins)
                .take(count),
        )
        .collect();

    (0..num_bins).filter(|index| !kept.contains(index)).collect()
}

/// Copy of `canonical` with every bin in `suppressed` forced to zero
pub fn apply_mask(canonical: &Spectrum, suppressed: &BTreeSet<usize>) -> Spectrum {
    let bins = canonical
        .bins()
        .iter()
        .enumerate()
        .map(|(index, &bin)| {
            if suppressed.contains(&index) {
                Complex::new(0.0, 0.0)
            } else {
                bin
            }
        })
        .collect();

    Spectrum::from_parts(bins, canonical.signal_len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_mask() {
        assert_eq!(truncation_mask(5, 2), BTreeSet::from([2, 3, 4]));
        assert_eq!(truncation_mask(5, 0), (0..5).collect::<BTreeSet<usize>>());
        assert!(truncation_mask(5, 5).is_empty());
        assert!(truncation_mask(5, 99).is_empty());
    }

    #[test]
    fn test_strongest_mask_keeps_dc() {
        let ranked = vec![
            RankedBin { index: 3, magnitude: 9.0 },
            RankedBin { index: 0, magnitude: 7.0 },
            RankedBin { index: 1, magnitude: 5.0 },
            RankedBin { index: 2, magnitude: 1.0 },
        ];

        assert_eq!(strongest_mask(&ranked, 4, 1), BTreeSet::from([1, 2]));
        assert_eq!(strongest_mask(&ranked, 4, 0), BTreeSet::from([1, 2, 3]));
        assert!(strongest_mask(&ranked, 4, 10).is_empty());
    }

    #[test]
    fn test_apply_mask_copies_or_zeroes() {
        let canonical = Spectrum::from_parts(
            vec![Complex::new(1.0, 0.0), Complex::new(0.25, -0.5), Complex::new(2.0, 0.0)],
            4,
        );
        let masked = apply_mask(&canonical, &BTreeSet::from([1]));

        assert_eq!(masked.len(), canonical.len());
        assert_eq!(masked.signal_len(), 4);
        assert_eq!(masked.bins()[0], canonical.bins()[0]);
        assert_eq!(masked.bins()[1], Complex::new(0.0, 0.0));
        assert_eq!(masked.bins()[2], canonical.bins()[2]);
    }
}
