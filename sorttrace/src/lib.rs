//! Instrumented sorting algorithms that record a replayable step trace.
//!
//! Each algorithm sorts a private copy of its input and, as a side effect,
//! appends every elementary event (comparison, exchange, write, sortedness
//! milestone) to a [`recorder::Recorder`]. The finished [`trace::Trace`] is
//! what a visualizer replays to animate the run.
//!
//! - **[`step`]**: The tagged step union and its wire format.
//! - **[`recorder`]** / **[`trace`]**: Append-only log and its read-only result.
//! - **[`algorithms`]**: Exchange, merge and partition sort.
//! - **[`registry`]**: Fixed name table and timed [`registry::dispatch`].

pub mod algorithms;
pub mod error;
pub mod logging;
pub mod recorder;
pub mod registry;
pub mod step;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod trace;

pub use error::TraceError;
pub use recorder::Recorder;
pub use registry::{Algorithm, AlgorithmResult, dispatch};
pub use step::Step;
pub use trace::Trace;
