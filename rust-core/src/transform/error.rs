//! Errors raised while building a transform

use super::layout::LayoutKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Transform length must be positive")]
    ZeroLength,

    #[error("Failed to allocate {elements} elements ({bytes} bytes) for a transform buffer")]
    Allocation { elements: usize, bytes: usize },

    #[error("Failed to plan {layout} transform of length {len}: {reason}")]
    Plan {
        layout: LayoutKind,
        len: usize,
        reason: &'static str,
    },
}
