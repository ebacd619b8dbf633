//! Forward/inverse real FFT pair using realfft
//!
//! Spectra use the half-length convention: N samples <-> N/2 + 1 bins.
//! The inverse is scaled by 1/N so a forward/backward round trip is the identity.

use log::debug;
use num_complex::Complex;
use realfft::RealFftPlanner;

use super::mask::{apply_mask, strongest_mask, truncation_mask};
use super::ranking::rank;
use super::types::{num_bins, Spectrum};
use crate::error::{Result, SpectralError};

/// Real-input transform with plan caching
///
/// Plans are cached per series length by the underlying planner, so repeated
/// edits of the same series only pay for the transform itself.
pub struct SpectralTransform {
    planner: RealFftPlanner<f64>,
}

impl Default for SpectralTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransform {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
        }
    }

    /// Compute the half spectrum of `samples`
    ///
    /// # Errors
    /// `InvalidInput` if `samples` is empty
    pub fn forward(&mut self, samples: &[f64]) -> Result<Spectrum> {
        if samples.is_empty() {
            return Err(SpectralError::InvalidInput(
                "cannot transform an empty sample series".into(),
            ));
        }

        let n = samples.len();
        let r2c = self.planner.plan_fft_forward(n);

        // process() uses the input as scratch space
        let mut input = samples.to_vec();
        let mut output = r2c.make_output_vec();
        r2c.process(&mut input, &mut output)
            .map_err(|e| SpectralError::InvalidInput(e.to_string()))?;

        debug!("Forward transform: {} samples -> {} bins", n, output.len());

        Ok(Spectrum::from_parts(output, n))
    }

    /// Reconstruct the real series described by `spectrum`
    ///
    /// Imaginary parts of DC and (for even lengths) Nyquist are dropped,
    /// a real signal cannot carry them.
    ///
    /// # Errors
    /// `InvalidInput` if the spectrum is empty or its bin count is not
    /// `signal_len / 2 + 1`
    pub fn backward(&mut self, spectrum: &Spectrum) -> Result<Vec<f64>> {
        let n = spectrum.signal_len();

        if spectrum.is_empty() || n == 0 {
            return Err(SpectralError::InvalidInput(
                "cannot invert an empty spectrum".into(),
            ));
        }
        if spectrum.len() != num_bins(n) {
            return Err(SpectralError::InvalidInput(format!(
                "spectrum has {} bins but a {}-sample series needs {}",
                spectrum.len(),
                n,
                num_bins(n)
            )));
        }

        let c2r = self.planner.plan_fft_inverse(n);

        let mut input: Vec<Complex<f64>> = spectrum.bins().to_vec();
        input[0].im = 0.0;
        if n % 2 == 0 {
            if let Some(nyquist) = input.last_mut() {
                nyquist.im = 0.0;
            }
        }

        let mut output = c2r.make_output_vec();
        c2r.process(&mut input, &mut output)
            .map_err(|e| SpectralError::InvalidInput(e.to_string()))?;

        // Scale by 1/N (IFFT normalization)
        let scale = 1.0 / n as f64;
        for s in output.iter_mut() {
            *s *= scale;
        }

        Ok(output)
    }

    /// Low-pass reconstruction keeping bins `0..max_bins`
    ///
    /// `max_bins` is clamped to the spectrum length; 0 yields the zero series.
    pub fn truncate(&mut self, samples: &[f64], max_bins: usize) -> Result<Vec<f64>> {
        let spectrum = self.forward(samples)?;
        let mask = truncation_mask(spectrum.len(), max_bins);
        self.backward(&apply_mask(&spectrum, &mask))
    }

    /// Reconstruction from DC plus the `count` strongest non-DC bins
    pub fn keep_strongest(&mut self, samples: &[f64], count: usize) -> Result<Vec<f64>> {
        let spectrum = self.forward(samples)?;
        let mask = strongest_mask(&rank(&spectrum), spectrum.len(), count);
        self.backward(&apply_mask(&spectrum, &mask))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
            assert!((x - y).abs() < tol, "Mismatch at {}: {} vs {}", i, x, y);
        }
    }

    #[test]
    fn test_forward_dc_signal() {
        let mut transform = SpectralTransform::new();
        let spectrum = transform.forward(&vec![1.0; 100]).unwrap();

        assert_eq!(spectrum.len(), 51);
        assert_eq!(spectrum.signal_len(), 100);
        assert!((spectrum.bins()[0].re - 100.0).abs() < 1e-9);
        assert!(spectrum.bins()[10].norm() < 1e-9);
    }

    #[test]
    fn test_forward_sine_peak() {
        let mut transform = SpectralTransform::new();
        let signal: Vec<f64> = (0..256)
            .map(|n| (2.0 * PI * 8.0 * n as f64 / 256.0).sin())
            .collect();

        let magnitudes = transform.forward(&signal).unwrap().magnitudes();
        let (peak_bin, &peak_mag) = magnitudes
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert_eq!(peak_bin, 8);
        assert!((peak_mag - 128.0).abs() < 1e-6);
    }

    #[test]
    fn test_round_trip_even_and_odd() {
        let mut transform = SpectralTransform::new();
        for len in [1usize, 2, 7, 64, 101] {
            let signal: Vec<f64> = (0..len)
                .map(|n| (n as f64 * 0.37).sin() * 3.0 + (n as f64 * 1.3).cos())
                .collect();
            let spectrum = transform.forward(&signal).unwrap();
            let restored = transform.backward(&spectrum).unwrap();
            assert_close(&restored, &signal, 1e-9);
        }
    }

    #[test]
    fn test_forward_empty_fails() {
        let mut transform = SpectralTransform::new();
        assert!(matches!(
            transform.forward(&[]),
            Err(SpectralError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_backward_rejects_inconsistent_length() {
        let mut transform = SpectralTransform::new();
        let bad = Spectrum::from_parts(vec![Complex::new(1.0, 0.0); 4], 4);
        assert!(matches!(
            transform.backward(&bad),
            Err(SpectralError::InvalidInput(_))
        ));

        let empty = Spectrum::from_parts(Vec::new(), 0);
        assert!(matches!(
            transform.backward(&empty),
            Err(SpectralError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_truncate_to_dc_gives_mean() {
        let mut transform = SpectralTransform::new();
        let out = transform.truncate(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_close(&out, &[2.5; 4], 1e-12);
    }

    #[test]
    fn test_truncate_clamps_out_of_range() {
        let mut transform = SpectralTransform::new();
        let signal = [0.5, -1.0, 2.0, 4.0, -3.0];

        let all = transform.truncate(&signal, 1_000).unwrap();
        assert_close(&all, &signal, 1e-9);

        let none = transform.truncate(&signal, 0).unwrap();
        assert_close(&none, &[0.0; 5], 1e-12);
    }

    #[test]
    fn test_keep_strongest_isolates_dominant_tone() {
        let mut transform = SpectralTransform::new();
        let signal: Vec<f64> = (0..128)
            .map(|n| {
                let t = n as f64 / 128.0;
                1.0 + 4.0 * (2.0 * PI * 5.0 * t).cos() + 0.5 * (2.0 * PI * 20.0 * t).cos()
            })
            .collect();
        let expected: Vec<f64> = (0..128)
            .map(|n| 1.0 + 4.0 * (2.0 * PI * 5.0 * n as f64 / 128.0).cos())
            .collect();

        let out = transform.keep_strongest(&signal, 1).unwrap();
        assert_close(&out, &expected, 1e-9);
    }
}
