//! Buffer layout rules for each supported (input, output) element pair
//!
//! The pair is fixed at compile time through the [`Layout`] trait. Only the
//! three transform shapes below implement it, so asking for any other pair
//! (real to real, mixed precision) is a type error.

use super::error::TransformError;
use super::planner::{self, PlanningEffort, Strategy};
use log::debug;
use num_complex::Complex;
use std::fmt;

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Inverse,
}

/// The three buffer layouts a transform can have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// N real samples in, N/2+1 complex coefficients out
    RealToComplex,
    /// N/2+1 complex coefficients in, N real samples out
    ComplexToReal,
    /// N complex values in and out
    ComplexToComplex,
}

impl LayoutKind {
    /// Element counts `(in_size, out_size)` for a transform of length `len`
    pub fn sizes(self, len: usize) -> (usize, usize) {
        let half = len / 2 + 1;
        match self {
            LayoutKind::RealToComplex => (len, half),
            LayoutKind::ComplexToReal => (half, len),
            LayoutKind::ComplexToComplex => (len, len),
        }
    }

    /// Direction actually used for this layout.
    ///
    /// Half-spectrum transforms have a fixed direction, so the request only
    /// matters for complex to complex.
    pub fn resolve_direction(self, requested: Direction) -> Direction {
        let resolved = match self {
            LayoutKind::RealToComplex => Direction::Forward,
            LayoutKind::ComplexToReal => Direction::Inverse,
            LayoutKind::ComplexToComplex => requested,
        };
        if resolved != requested {
            debug!("{} transform ignores requested {:?} direction", self, requested);
        }
        resolved
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayoutKind::RealToComplex => "real-to-complex",
            LayoutKind::ComplexToReal => "complex-to-real",
            LayoutKind::ComplexToComplex => "complex-to-complex",
        };
        f.write_str(name)
    }
}

/// Element kinds a transform buffer can hold
pub trait Element: Copy + Default + fmt::Debug + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for f64 {}
impl Element for Complex<f32> {}
impl Element for Complex<f64> {}

/// Layout rules for a transform from `Self` elements to `Out` elements
pub trait Layout<Out: Element>: Element {
    const KIND: LayoutKind;

    /// Element counts `(in_size, out_size)` for a transform of length `len`
    fn sizes(len: usize) -> (usize, usize) {
        Self::KIND.sizes(len)
    }

    /// Plan strategies worth considering for this layout at the given effort.
    fn candidates(
        len: usize,
        direction: Direction,
        effort: PlanningEffort,
    ) -> Result<Vec<Box<dyn Strategy<Self, Out>>>, TransformError>;
}

macro_rules! impl_layouts {
    ($($real:ty),*) => {$(
        impl Layout<Complex<$real>> for $real {
            const KIND: LayoutKind = LayoutKind::RealToComplex;

            fn candidates(
                len: usize,
                _direction: Direction,
                effort: PlanningEffort,
            ) -> Result<Vec<Box<dyn Strategy<Self, Complex<$real>>>>, TransformError> {
                planner::real_forward_candidates::<$real>(len, effort)
            }
        }

        impl Layout<$real> for Complex<$real> {
            const KIND: LayoutKind = LayoutKind::ComplexToReal;

            fn candidates(
                len: usize,
                _direction: Direction,
                effort: PlanningEffort,
            ) -> Result<Vec<Box<dyn Strategy<Self, $real>>>, TransformError> {
                planner::real_inverse_candidates::<$real>(len, effort)
            }
        }

        impl Layout<Complex<$real>> for Complex<$real> {
            const KIND: LayoutKind = LayoutKind::ComplexToComplex;

            fn candidates(
                len: usize,
                direction: Direction,
                effort: PlanningEffort,
            ) -> Result<Vec<Box<dyn Strategy<Self, Complex<$real>>>>, TransformError> {
                planner::complex_candidates::<$real>(len, direction, effort)
            }
        }
    )*};
}

impl_layouts!(f32, f64);
