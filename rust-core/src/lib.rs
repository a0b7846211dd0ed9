//! FFT Workbench - Transform Buffer Core
//!
//! Owned, fixed-size transform buffers with a plan bound to them, plus the
//! post-processing used to display spectra.

pub mod signal;
pub mod spectrum;
pub mod transform;

pub use transform::{Direction, PlanningEffort, TransformBuffer, TransformConfig, TransformError};
