//! Hermitian expansion of half spectra

use num_complex::Complex;
use rustfft::num_traits::Float;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpectrumError {
    #[error("Half spectrum for length {len} needs {expected} coefficients, got {actual}")]
    HalfSpectrumLength {
        len: usize,
        expected: usize,
        actual: usize,
    },
}

/// Rebuild the full spectrum of a real signal from its first `len/2 + 1` coefficients
///
/// Coefficient `k` and `len - k` of a real signal are complex conjugates, so
/// the upper half is mirrored from the lower one.
pub fn hermitian_expand<T: Float>(half: &[Complex<T>], len: usize) -> Result<Vec<Complex<T>>, SpectrumError> {
    let expected = len / 2 + 1;
    if half.len() != expected {
        return Err(SpectrumError::HalfSpectrumLength {
            len,
            expected,
            actual: half.len(),
        });
    }

    Ok((0..len)
        .map(|k| if k < expected { half[k] } else { half[len - k].conj() })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_even_length() {
        let half = vec![
            Complex::new(4.0, 0.0),
            Complex::new(1.0, 2.0),
            Complex::new(-1.0, 0.0),
        ];
        let full = hermitian_expand(&half, 4).unwrap();
        assert_eq!(full.len(), 4);
        assert_eq!(full[3], Complex::new(1.0, -2.0));
        assert_eq!(full[2], Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_expand_odd_length() {
        let half = vec![Complex::new(1.0f32, 0.0), Complex::new(0.5, 0.25)];
        let full = hermitian_expand(&half, 3).unwrap();
        assert_eq!(full, vec![half[0], half[1], half[1].conj()]);
    }

    #[test]
    fn test_expand_rejects_wrong_length() {
        let half = vec![Complex::new(1.0, 0.0); 3];
        assert_eq!(
            hermitian_expand(&half, 8),
            Err(SpectrumError::HalfSpectrumLength { len: 8, expected: 5, actual: 3 })
        );
    }
}
