//! Transform buffers bound to a plan
//!
//! A [`TransformBuffer`] owns its input buffer, its output buffer and the plan
//! that runs between them. All three are created together and released
//! together; there is no partially built state.

use super::buffer::alloc_zeroed;
use super::error::TransformError;
use super::layout::{Direction, Element, Layout, LayoutKind};
use super::planner::{self, PlanningEffort, Strategy};
use log::debug;

/// Transform configuration
#[derive(Debug, Clone)]
pub struct TransformConfig {
    /// Transform length N (number of time-domain samples)
    pub len: usize,

    /// Direction, used only by complex to complex transforms
    pub direction: Direction,

    /// Planning effort
    pub effort: PlanningEffort,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            len: 32,
            direction: Direction::Forward,
            effort: PlanningEffort::Estimate,
        }
    }
}

/// Input and output buffers with the plan bound to them
///
/// The element pair picks the layout at compile time:
///
/// | `I`            | `O`            | input   | output  |
/// |----------------|----------------|---------|---------|
/// | `T`            | `Complex<T>`   | N       | N/2 + 1 |
/// | `Complex<T>`   | `T`            | N/2 + 1 | N       |
/// | `Complex<T>`   | `Complex<T>`   | N       | N       |
///
/// with `T` either `f32` or `f64`. Other pairs do not compile:
///
/// ```compile_fail
/// use fft_workbench::transform::{Direction, PlanningEffort, TransformBuffer};
///
/// let _ = TransformBuffer::<f64, f64>::new(32, Direction::Forward, PlanningEffort::Estimate);
/// ```
///
/// ```compile_fail
/// use fft_workbench::transform::{Direction, PlanningEffort, TransformBuffer};
/// use num_complex::Complex;
///
/// let _ = TransformBuffer::<f32, Complex<f64>>::new(32, Direction::Forward, PlanningEffort::Estimate);
/// ```
///
/// Views returned by [`input`](Self::input) and [`output`](Self::output) borrow
/// from the buffer, so they cannot outlive it. One instance is not meant to be
/// shared between threads; independent instances can run on separate threads.
///
/// ```
/// use fft_workbench::transform::{Direction, PlanningEffort, TransformBuffer};
/// use num_complex::Complex;
///
/// let mut fft = TransformBuffer::<f64, Complex<f64>>::new(8, Direction::Forward, PlanningEffort::Estimate)?;
/// fft.input_mut().fill(1.0);
/// fft.execute();
/// assert_eq!(fft.output().len(), 5);
/// assert!((fft.output()[0].re - 8.0).abs() < 1e-12);
/// # Ok::<(), fft_workbench::transform::TransformError>(())
/// ```
pub struct TransformBuffer<I, O>
where
    I: Layout<O>,
    O: Element,
{
    // Declared first so it is dropped before the buffers it runs over.
    plan: Box<dyn Strategy<I, O>>,
    input: Box<[I]>,
    output: Box<[O]>,
    len: usize,
    direction: Direction,
    effort: PlanningEffort,
}

#[allow(clippy::len_without_is_empty)]
impl<I, O> TransformBuffer<I, O>
where
    I: Layout<O>,
    O: Element,
{
    /// Allocate both buffers and plan a transform of length `len`
    ///
    /// # Arguments
    /// * `len` - Transform length N, must be positive
    /// * `direction` - Forward or inverse; ignored by half-spectrum layouts
    /// * `effort` - Planning effort
    pub fn new(len: usize, direction: Direction, effort: PlanningEffort) -> Result<Self, TransformError> {
        if len == 0 {
            return Err(TransformError::ZeroLength);
        }
        let layout = I::KIND;

        let (in_size, out_size) = I::sizes(len);
        let input = alloc_zeroed::<I>(in_size)?;
        let mut output = alloc_zeroed::<O>(out_size)?;

        let direction = layout.resolve_direction(direction);
        let candidates = I::candidates(len, direction, effort)?;
        let plan = planner::select(candidates, effort, &input[..], &mut output[..]).ok_or(TransformError::Plan {
            layout,
            len,
            reason: "no plan candidates available",
        })?;

        debug!(
            "planned {} transform of length {} ({:?}, {:?}) using {}",
            layout,
            len,
            direction,
            effort,
            plan.name()
        );

        Ok(Self {
            plan,
            input,
            output,
            len,
            direction,
            effort,
        })
    }

    /// Build from a [`TransformConfig`]
    pub fn from_config(config: &TransformConfig) -> Result<Self, TransformError> {
        Self::new(config.len, config.direction, config.effort)
    }

    /// Run the transform
    ///
    /// Reads the input buffer, which is left unchanged, and overwrites the
    /// whole output buffer.
    pub fn execute(&mut self) {
        self.plan.run(&self.input, &mut self.output);
    }

    /// Input buffer contents
    pub fn input(&self) -> &[I] {
        &self.input
    }

    /// Writable input buffer; the only way to supply transform input
    pub fn input_mut(&mut self) -> &mut [I] {
        &mut self.input
    }

    /// Output buffer contents, meaningful after [`execute`](Self::execute)
    pub fn output(&self) -> &[O] {
        &self.output
    }

    /// Writable output buffer, for in-place post-processing
    pub fn output_mut(&mut self) -> &mut [O] {
        &mut self.output
    }

    /// Transform length N
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of input elements
    pub fn in_size(&self) -> usize {
        self.input.len()
    }

    /// Number of output elements
    pub fn out_size(&self) -> usize {
        self.output.len()
    }

    /// Layout selected by the element pair
    pub fn layout(&self) -> LayoutKind {
        I::KIND
    }

    /// Direction actually used by the plan
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Planning effort used at construction
    pub fn effort(&self) -> PlanningEffort {
        self.effort
    }

    /// Name of the strategy the planner kept
    pub fn strategy(&self) -> &str {
        self.plan.name()
    }
}
