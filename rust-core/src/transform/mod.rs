//! Transform buffers and plans
//!
//! Planning and execution are delegated to rustfft (complex to complex) and
//! realfft (real to complex half spectrum).

pub mod buffer;
pub mod engine;
pub mod error;
pub mod layout;
pub mod planner;

pub use buffer::{as_pairs, as_pairs_mut, PairScalar};
pub use engine::{TransformBuffer, TransformConfig};
pub use error::TransformError;
pub use layout::{Direction, Element, Layout, LayoutKind};
pub use planner::{PlanningEffort, Strategy};
