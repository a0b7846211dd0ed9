//! Buffer allocation and layout reinterpretation
//!
//! Transform buffers are allocated once, at their final size, and never grow.
//! Allocation is fallible so an oversized request surfaces as an error instead
//! of aborting the process.

use super::error::TransformError;
use num_complex::Complex;
use std::mem::{align_of, size_of};

/// Allocate a fixed-size buffer of `len` copies of `value`.
pub(crate) fn alloc_filled<T: Clone>(len: usize, value: T) -> Result<Box<[T]>, TransformError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| TransformError::Allocation {
            elements: len,
            bytes: len.saturating_mul(size_of::<T>()),
        })?;
    buffer.resize(len, value);
    Ok(buffer.into_boxed_slice())
}

/// Allocate a zero-initialized buffer.
pub(crate) fn alloc_zeroed<T: Clone + Default>(len: usize) -> Result<Box<[T]>, TransformError> {
    alloc_filled(len, T::default())
}

/// Scalar types whose complex pair is laid out as two adjacent scalars.
pub trait PairScalar: Copy + sealed::Sealed {}

impl PairScalar for f32 {}
impl PairScalar for f64 {}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

// `Complex<T>` is `#[repr(C)]` with fields `re, im`. These checks pin the
// reinterpretation below to the scalar types where that has been verified.
const _: () = assert!(size_of::<Complex<f32>>() == size_of::<[f32; 2]>());
const _: () = assert!(align_of::<Complex<f32>>() == align_of::<[f32; 2]>());
const _: () = assert!(size_of::<Complex<f64>>() == size_of::<[f64; 2]>());
const _: () = assert!(align_of::<Complex<f64>>() == align_of::<[f64; 2]>());

/// View complex values as `[re, im]` pairs without copying.
///
/// This is the one place the crate steps outside normal type safety: it is
/// limited to [`PairScalar`] types, whose layout equivalence is asserted at
/// compile time above.
pub fn as_pairs<T: PairScalar>(values: &[Complex<T>]) -> &[[T; 2]] {
    // SAFETY: Complex<T> is repr(C) { re: T, im: T } with the same size and
    // alignment as [T; 2] for every PairScalar, so the cast preserves both the
    // element count and validity of every element.
    unsafe { std::slice::from_raw_parts(values.as_ptr().cast::<[T; 2]>(), values.len()) }
}

/// Mutable variant of [`as_pairs`].
pub fn as_pairs_mut<T: PairScalar>(values: &mut [Complex<T>]) -> &mut [[T; 2]] {
    // SAFETY: see `as_pairs`; the exclusive borrow is carried over unchanged.
    unsafe { std::slice::from_raw_parts_mut(values.as_mut_ptr().cast::<[T; 2]>(), values.len()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_zeroed_has_exact_length() {
        let buffer: Box<[Complex<f64>]> = alloc_zeroed(33).unwrap();
        assert_eq!(buffer.len(), 33);
        assert!(buffer.iter().all(|c| c.re == 0.0 && c.im == 0.0));
    }

    #[test]
    fn test_alloc_reports_oversized_request() {
        let result = alloc_filled::<f64>(usize::MAX / 4, 0.0);
        match result {
            Err(TransformError::Allocation { elements, .. }) => assert_eq!(elements, usize::MAX / 4),
            other => panic!("expected allocation failure, got {:?}", other.map(|b| b.len())),
        }
    }

    #[test]
    fn test_pairs_view_matches_fields() {
        let mut values = vec![Complex::new(1.0f64, -2.0), Complex::new(3.5, 4.25)];
        assert_eq!(as_pairs(&values), &[[1.0, -2.0], [3.5, 4.25]]);

        as_pairs_mut(&mut values)[1][1] = 9.0;
        assert_eq!(values[1], Complex::new(3.5, 9.0));
    }
}
