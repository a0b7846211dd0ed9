//! Test signal generators
//!
//! Each generator has a `fill_*` form that writes straight into a transform's
//! input buffer.

use num_complex::Complex;
use std::f64::consts::PI;

/// Fill with `amplitude * exp(i*2π*bin*k/N)`, N being the buffer length
pub fn fill_tone(buffer: &mut [Complex<f64>], bin: f64, amplitude: f64) {
    let len = buffer.len() as f64;
    for (k, sample) in buffer.iter_mut().enumerate() {
        *sample = Complex::from_polar(amplitude, 2.0 * PI * bin * k as f64 / len);
    }
}

/// Complex exponential at `bin` over `len` samples
pub fn tone(len: usize, bin: f64, amplitude: f64) -> Vec<Complex<f64>> {
    let mut buffer = vec![Complex::new(0.0, 0.0); len];
    fill_tone(&mut buffer, bin, amplitude);
    buffer
}

/// Fill with a DC offset plus four tones of halving weight
///
/// Each tone is `(sin(hφ), cos(hφ))` with harmonics 1, 2, 3 and 16.
pub fn fill_demo_complex(buffer: &mut [Complex<f64>]) {
    const TONES: [(f64, f64); 4] = [(1.0, 1.0), (2.0, 0.5), (3.0, 0.25), (16.0, 0.125)];

    let step = 2.0 * PI / buffer.len() as f64;
    for (k, sample) in buffer.iter_mut().enumerate() {
        let ph = step * k as f64;
        *sample = TONES
            .iter()
            .fold(Complex::new(1.0, 0.0), |acc, &(h, w)| acc + Complex::new((h * ph).sin(), (h * ph).cos()) * w);
    }
}

/// Complex demo signal of `len` samples
pub fn demo_complex_signal(len: usize) -> Vec<Complex<f64>> {
    let mut buffer = vec![Complex::new(0.0, 0.0); len];
    fill_demo_complex(&mut buffer);
    buffer
}

/// Fill with `1 + sin(φ) + sin(15φ)`
pub fn fill_demo_real(buffer: &mut [f64]) {
    let step = 2.0 * PI / buffer.len() as f64;
    for (k, sample) in buffer.iter_mut().enumerate() {
        let ph = step * k as f64;
        *sample = 1.0 + ph.sin() + (15.0 * ph).sin();
    }
}

/// Real demo signal of `len` samples
pub fn demo_real_signal(len: usize) -> Vec<f64> {
    let mut buffer = vec![0.0; len];
    fill_demo_real(&mut buffer);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_unit_modulus() {
        let t = tone(32, 3.0, 2.0);
        assert_eq!(t.len(), 32);
        assert!(t.iter().all(|c| (c.norm() - 2.0).abs() < 1e-12));
        assert!((t[0] - Complex::new(2.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_demo_signals_start_values() {
        // φ = 0: DC plus the cos parts of every tone
        let c = demo_complex_signal(32);
        assert!((c[0] - Complex::new(1.0, 1.875)).norm() < 1e-12);

        let r = demo_real_signal(32);
        assert!((r[0] - 1.0).abs() < 1e-12);
        assert!((r.iter().sum::<f64>() - 32.0).abs() < 1e-9);
    }
}
