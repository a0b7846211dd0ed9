//! Frequency axis helpers for transform output bins

/// Convert bin index to normalized frequency (units of π rad/sample)
///
/// # Arguments
/// * `bin` - Output bin index
/// * `len` - Transform length N
pub fn bin_to_frequency(bin: usize, len: usize) -> f64 {
    2.0 * bin as f64 / len as f64
}

/// Frequency of an output bin in Hz
///
/// # Arguments
/// * `bin` - Output bin index
/// * `len` - Transform length N
/// * `sample_rate` - Sample rate in Hz
pub fn bin_frequency(bin: usize, len: usize, sample_rate: f64) -> f64 {
    normalized_to_hz(bin_to_frequency(bin, len), sample_rate)
}

/// Normalized frequencies of the first `bins` output bins
pub fn frequency_axis(len: usize, bins: usize) -> Vec<f64> {
    (0..bins).map(|bin| bin_to_frequency(bin, len)).collect()
}

/// Convert normalized frequency to Hz
///
/// # Arguments
/// * `normalized_freq` - Frequency in units of π rad/sample
/// * `sample_rate` - Sample rate in Hz
pub fn normalized_to_hz(normalized_freq: f64, sample_rate: f64) -> f64 {
    normalized_freq * sample_rate / 2.0
}
