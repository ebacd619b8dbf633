//! Residual between an original series and its reconstruction

use crate::error::{Result, SpectralError};

/// Elementwise `a[i] - b[i]`
///
/// # Errors
/// `LengthMismatch` if the series differ in length
pub fn difference(a: &[f64], b: &[f64]) -> Result<Vec<f64>> {
    if a.len() != b.len() {
        return Err(SpectralError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| x - y).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_of_self_is_zero() {
        let x = vec![1.5, -2.0, 3.25, 0.0];
        assert_eq!(difference(&x, &x).unwrap(), vec![0.0; 4]);
    }

    #[test]
    fn test_difference_values() {
        let d = difference(&[3.0, 1.0], &[1.0, 4.0]).unwrap();
        assert_eq!(d, vec![2.0, -3.0]);
    }

    #[test]
    fn test_difference_empty() {
        assert!(difference(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_difference_length_mismatch() {
        assert!(matches!(
            difference(&[1.0, 2.0], &[1.0]),
            Err(SpectralError::LengthMismatch { left: 2, right: 1 })
        ));
    }
}
