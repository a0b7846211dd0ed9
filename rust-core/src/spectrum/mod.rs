//! Spectrum post-processing for display

pub mod axis;
pub mod hermitian;
pub mod peaks;

pub use axis::{bin_frequency, bin_to_frequency, frequency_axis, normalized_to_hz};
pub use hermitian::{hermitian_expand, SpectrumError};
pub use peaks::{find_max, find_max_index, find_peak, normalize, squelch, Magnitude, Peak};
