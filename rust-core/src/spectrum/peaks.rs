//! Peak detection, normalization and squelching
//!
//! Works on real samples and complex coefficients alike through [`Magnitude`].

use num_complex::Complex;

/// Values with a magnitude that can be scaled and zeroed
pub trait Magnitude: Copy {
    /// Absolute value (modulus for complex values)
    fn magnitude(&self) -> f64;

    /// The zero value
    fn zero() -> Self;

    /// Multiply by a real factor
    fn scale(self, factor: f64) -> Self;
}

impl Magnitude for f64 {
    fn magnitude(&self) -> f64 {
        self.abs()
    }

    fn zero() -> Self {
        0.0
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Magnitude for f32 {
    fn magnitude(&self) -> f64 {
        self.abs() as f64
    }

    fn zero() -> Self {
        0.0
    }

    fn scale(self, factor: f64) -> Self {
        (self as f64 * factor) as f32
    }
}

impl Magnitude for Complex<f64> {
    fn magnitude(&self) -> f64 {
        self.norm()
    }

    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn scale(self, factor: f64) -> Self {
        self * factor
    }
}

impl Magnitude for Complex<f32> {
    fn magnitude(&self) -> f64 {
        self.norm() as f64
    }

    fn zero() -> Self {
        Complex::new(0.0, 0.0)
    }

    fn scale(self, factor: f64) -> Self {
        self * factor as f32
    }
}

/// Spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Bin index
    pub index: usize,

    /// Magnitude at that bin
    pub magnitude: f64,
}

/// Largest value and its position; the first one wins on ties
///
/// Returns `None` for an empty slice.
pub fn find_peak<M: Magnitude>(values: &[M]) -> Option<Peak> {
    let first = values.first()?;
    let mut peak = Peak {
        index: 0,
        magnitude: first.magnitude(),
    };
    for (index, v) in values.iter().enumerate().skip(1) {
        let magnitude = v.magnitude();
        if peak.magnitude < magnitude {
            peak = Peak { index, magnitude };
        }
    }
    Some(peak)
}

/// Largest magnitude
pub fn find_max<M: Magnitude>(values: &[M]) -> Option<f64> {
    find_peak(values).map(|peak| peak.magnitude)
}

/// Index of the first largest magnitude
pub fn find_max_index<M: Magnitude>(values: &[M]) -> Option<usize> {
    find_peak(values).map(|peak| peak.index)
}

/// Scale so the largest magnitude becomes 1
///
/// Returns the divisor, or `None` when the slice is empty or all zero, in
/// which case nothing is changed.
pub fn normalize<M: Magnitude>(values: &mut [M]) -> Option<f64> {
    let max = find_max(values)?;
    if max == 0.0 || !max.is_finite() {
        return None;
    }
    let factor = 1.0 / max;
    for v in values.iter_mut() {
        *v = v.scale(factor);
    }
    Some(max)
}

/// Zero every value whose magnitude is below `level`
pub fn squelch<M: Magnitude>(values: &mut [M], level: f64) {
    for v in values.iter_mut() {
        if v.magnitude() < level {
            *v = M::zero();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_find_peak_first_of_ties() {
        let values = vec![1.0, -3.0, 2.0, 3.0];
        assert_eq!(find_peak(&values), Some(Peak { index: 1, magnitude: 3.0 }));
        assert_eq!(find_max_index(&values), Some(1));
        assert_eq!(find_max::<f64>(&[]), None);
    }

    #[test]
    fn test_complex_magnitude() {
        let values = vec![Complex::new(3.0, 4.0), Complex::new(0.0, -6.0)];
        assert_eq!(find_max(&values), Some(6.0));
        assert_eq!(find_max_index(&values), Some(1));
    }

    #[test]
    fn test_normalize() {
        let mut values = vec![Complex::new(0.0, 2.0), Complex::new(-4.0, 0.0)];
        assert_eq!(normalize(&mut values), Some(4.0));
        assert_eq!(values, vec![Complex::new(0.0, 0.5), Complex::new(-1.0, 0.0)]);
    }

    #[test]
    fn test_normalize_all_zero_is_noop() {
        let mut values = vec![0.0f32; 4];
        assert_eq!(normalize(&mut values), None);
        assert_eq!(values, vec![0.0; 4]);
    }

    #[test]
    fn test_squelch_threshold() {
        let mut values = vec![0.05, -0.2, 0.1, -0.09];
        squelch(&mut values, 0.1);
        assert_eq!(values, vec![0.0, -0.2, 0.1, 0.0]);
    }

    proptest! {
        #[test]
        fn prop_squelch_idempotent(
            values in prop::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 0..64),
            level in 0.0f64..10.0,
        ) {
            let mut once: Vec<Complex<f64>> = values.iter().map(|&(re, im)| Complex::new(re, im)).collect();
            squelch(&mut once, level);
            let mut twice = once.clone();
            squelch(&mut twice, level);
            prop_assert_eq!(once, twice);
        }
    }
}
