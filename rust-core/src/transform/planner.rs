//! Plan construction and strategy selection
//!
//! A plan is one concrete way of computing the transform, together with the
//! work areas it needs. Cheap planning takes the default strategy; measured
//! planning times every candidate on the transform's own buffers and keeps
//! the fastest one.

use super::buffer::alloc_filled;
use super::error::TransformError;
use super::layout::Direction;
use log::{debug, warn};
use num_complex::Complex;
use realfft::{ComplexToReal, RealFftPlanner, RealToComplex};
use rustfft::num_traits::Zero;
use rustfft::{Fft, FftDirection, FftNum, FftPlanner, FftPlannerScalar};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How much work to put into choosing a plan
///
/// Higher effort costs more at construction and may run faster afterwards.
/// It never changes the mathematical result, only rounding at the bit level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanningEffort {
    /// Take the default strategy without trial runs
    #[default]
    Estimate,
    /// Time each candidate strategy and keep the fastest
    Measure,
    /// Like `Measure`, with every instruction-set specific planner and more repetitions
    Exhaustive,
}

impl PlanningEffort {
    /// Timed executions per candidate
    fn trials(self) -> u32 {
        match self {
            PlanningEffort::Estimate => 0,
            PlanningEffort::Measure => 8,
            PlanningEffort::Exhaustive => 32,
        }
    }
}

/// One concrete way of running a transform
///
/// A strategy reads `input` without modifying it and overwrites all of `output`.
pub trait Strategy<I, O>: Send {
    /// Short label used in logs and diagnostics
    fn name(&self) -> &str;

    /// Run the transform
    fn run(&mut self, input: &[I], output: &mut [O]);
}

/// Complex FFT plans from each planner allowed at this effort
fn complex_plans<T: FftNum>(
    len: usize,
    direction: Direction,
    effort: PlanningEffort,
) -> Vec<(&'static str, Arc<dyn Fft<T>>)> {
    let direction = match direction {
        Direction::Forward => FftDirection::Forward,
        Direction::Inverse => FftDirection::Inverse,
    };

    let mut plans: Vec<(&'static str, Arc<dyn Fft<T>>)> =
        vec![("auto", FftPlanner::<T>::new().plan_fft(len, direction))];
    if effort == PlanningEffort::Estimate {
        return plans;
    }

    plans.push(("scalar", FftPlannerScalar::<T>::new().plan_fft(len, direction)));

    #[cfg(target_arch = "x86_64")]
    {
        if effort == PlanningEffort::Exhaustive {
            if let Ok(mut planner) = rustfft::FftPlannerAvx::<T>::new() {
                plans.push(("avx", planner.plan_fft(len, direction)));
            }
            if let Ok(mut planner) = rustfft::FftPlannerSse::<T>::new() {
                plans.push(("sse", planner.plan_fft(len, direction)));
            }
        }
    }

    plans
}

// Layout::candidates is public, so the planner guards its own entry points.
fn check_len(len: usize) -> Result<(), TransformError> {
    if len == 0 {
        return Err(TransformError::ZeroLength);
    }
    Ok(())
}

pub(crate) fn complex_candidates<T: FftNum>(
    len: usize,
    direction: Direction,
    effort: PlanningEffort,
) -> Result<Vec<Box<dyn Strategy<Complex<T>, Complex<T>>>>, TransformError> {
    check_len(len)?;

    let mut candidates: Vec<Box<dyn Strategy<Complex<T>, Complex<T>>>> = Vec::new();
    for (name, fft) in complex_plans::<T>(len, direction, effort) {
        let scratch = alloc_filled(fft.get_inplace_scratch_len(), Complex::zero())?;
        candidates.push(Box::new(ComplexPlan { name, fft, scratch }));
    }
    Ok(candidates)
}

pub(crate) fn real_forward_candidates<T: FftNum>(
    len: usize,
    effort: PlanningEffort,
) -> Result<Vec<Box<dyn Strategy<T, Complex<T>>>>, TransformError> {
    check_len(len)?;

    let r2c = RealFftPlanner::<T>::new().plan_fft_forward(len);
    let packed = PackedForward {
        work: alloc_filled(len, T::zero())?,
        scratch: alloc_filled(r2c.get_scratch_len(), Complex::zero())?,
        r2c,
    };

    let mut candidates: Vec<Box<dyn Strategy<T, Complex<T>>>> = vec![Box::new(packed)];
    if effort == PlanningEffort::Estimate {
        return Ok(candidates);
    }

    for (name, fft) in complex_plans::<T>(len, Direction::Forward, effort) {
        candidates.push(Box::new(EmbeddedForward {
            name: format!("embedded-{}", name),
            work: alloc_filled(len, Complex::zero())?,
            scratch: alloc_filled(fft.get_inplace_scratch_len(), Complex::zero())?,
            fft,
        }));
    }
    Ok(candidates)
}

pub(crate) fn real_inverse_candidates<T: FftNum>(
    len: usize,
    effort: PlanningEffort,
) -> Result<Vec<Box<dyn Strategy<Complex<T>, T>>>, TransformError> {
    check_len(len)?;

    let c2r = RealFftPlanner::<T>::new().plan_fft_inverse(len);
    let packed = PackedInverse {
        work: alloc_filled(c2r.complex_len(), Complex::zero())?,
        scratch: alloc_filled(c2r.get_scratch_len(), Complex::zero())?,
        c2r,
    };

    let mut candidates: Vec<Box<dyn Strategy<Complex<T>, T>>> = vec![Box::new(packed)];
    if effort == PlanningEffort::Estimate {
        return Ok(candidates);
    }

    for (name, fft) in complex_plans::<T>(len, Direction::Inverse, effort) {
        candidates.push(Box::new(EmbeddedInverse {
            name: format!("embedded-{}", name),
            work: alloc_filled(len, Complex::zero())?,
            scratch: alloc_filled(fft.get_inplace_scratch_len(), Complex::zero())?,
            fft,
        }));
    }
    Ok(candidates)
}

/// Pick the plan to keep from `candidates`.
///
/// Trial runs go through the transform's own buffers, which are still zeroed
/// at this point, so nothing observable is lost.
pub(crate) fn select<I, O>(
    candidates: Vec<Box<dyn Strategy<I, O>>>,
    effort: PlanningEffort,
    input: &[I],
    output: &mut [O],
) -> Option<Box<dyn Strategy<I, O>>> {
    let trials = effort.trials();
    if trials == 0 || candidates.len() == 1 {
        return candidates.into_iter().next();
    }

    let mut best: Option<(Duration, Box<dyn Strategy<I, O>>)> = None;
    for mut candidate in candidates {
        // Warm-up run keeps first-touch page faults out of the timing.
        candidate.run(input, output);

        let start = Instant::now();
        for _ in 0..trials {
            candidate.run(input, output);
        }
        let elapsed = start.elapsed();
        debug!("candidate {} took {:?} over {} runs", candidate.name(), elapsed, trials);

        let faster = best.as_ref().map_or(true, |(fastest, _)| elapsed < *fastest);
        if faster {
            best = Some((elapsed, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// Full-length complex FFT run in place over a copy of the input
struct ComplexPlan<T: FftNum> {
    name: &'static str,
    fft: Arc<dyn Fft<T>>,
    scratch: Box<[Complex<T>]>,
}

impl<T: FftNum> Strategy<Complex<T>, Complex<T>> for ComplexPlan<T> {
    fn name(&self) -> &str {
        self.name
    }

    fn run(&mut self, input: &[Complex<T>], output: &mut [Complex<T>]) {
        output.copy_from_slice(input);
        self.fft.process_with_scratch(output, &mut self.scratch);
    }
}

/// Half-length packed real FFT
struct PackedForward<T: FftNum> {
    r2c: Arc<dyn RealToComplex<T>>,
    work: Box<[T]>,
    scratch: Box<[Complex<T>]>,
}

impl<T: FftNum> Strategy<T, Complex<T>> for PackedForward<T> {
    fn name(&self) -> &str {
        "packed"
    }

    fn run(&mut self, input: &[T], output: &mut [Complex<T>]) {
        // The real FFT clobbers its input, so it works on a copy.
        self.work.copy_from_slice(input);
        if let Err(err) = self.r2c.process_with_scratch(&mut self.work, output, &mut self.scratch) {
            warn!("real-to-complex transform: {}", err);
        }
    }
}

/// Real input widened to complex and run through a full-length FFT
struct EmbeddedForward<T: FftNum> {
    name: String,
    fft: Arc<dyn Fft<T>>,
    work: Box<[Complex<T>]>,
    scratch: Box<[Complex<T>]>,
}

impl<T: FftNum> Strategy<T, Complex<T>> for EmbeddedForward<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, input: &[T], output: &mut [Complex<T>]) {
        for (w, &x) in self.work.iter_mut().zip(input) {
            *w = Complex::new(x, T::zero());
        }
        self.fft.process_with_scratch(&mut self.work, &mut self.scratch);
        output.copy_from_slice(&self.work[..output.len()]);
    }
}

/// Half-length packed inverse real FFT
struct PackedInverse<T: FftNum> {
    c2r: Arc<dyn ComplexToReal<T>>,
    work: Box<[Complex<T>]>,
    scratch: Box<[Complex<T>]>,
}

impl<T: FftNum> Strategy<Complex<T>, T> for PackedInverse<T> {
    fn name(&self) -> &str {
        "packed"
    }

    fn run(&mut self, input: &[Complex<T>], output: &mut [T]) {
        self.work.copy_from_slice(input);
        // Non-zero imaginary parts at DC or Nyquist are reported but the
        // transform still runs with them ignored.
        if let Err(err) = self.c2r.process_with_scratch(&mut self.work, output, &mut self.scratch) {
            warn!("complex-to-real transform: {}", err);
        }
    }
}

/// Half spectrum expanded by Hermitian symmetry and run through a full-length inverse FFT
struct EmbeddedInverse<T: FftNum> {
    name: String,
    fft: Arc<dyn Fft<T>>,
    work: Box<[Complex<T>]>,
    scratch: Box<[Complex<T>]>,
}

impl<T: FftNum> Strategy<Complex<T>, T> for EmbeddedInverse<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn run(&mut self, input: &[Complex<T>], output: &mut [T]) {
        let len = self.work.len();
        let half = input.len();

        let first_invalid = !input[0].im.is_zero();
        let last_invalid = len % 2 == 0 && !input[half - 1].im.is_zero();
        if first_invalid || last_invalid {
            warn!(
                "complex-to-real transform: ignoring non-zero imaginary part (first: {}, last: {})",
                first_invalid, last_invalid
            );
        }

        for (k, w) in self.work.iter_mut().enumerate() {
            *w = if k < half { input[k] } else { input[len - k].conj() };
        }
        self.work[0].im = T::zero();
        if len % 2 == 0 {
            self.work[len / 2].im = T::zero();
        }

        self.fft.process_with_scratch(&mut self.work, &mut self.scratch);
        for (o, w) in output.iter_mut().zip(self.work.iter()) {
            *o = w.re;
        }
    }
}
