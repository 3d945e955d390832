//! Instrumented sorting algorithms.
//!
//! Every algorithm copies its input before touching it and drives a
//! [`Recorder`] with the exact sequence of comparisons and moves it performs.
//! Traces are deterministic: the same input always yields the same steps.

pub mod exchange;
pub mod merge;
pub mod partition;

use crate::recorder::Recorder;

pub use exchange::exchange_sort;
pub use merge::merge_sort;
pub use partition::partition_sort;

/// Signature shared by all instrumented algorithms.
pub type SortFn<T> = fn(&[T], &mut Recorder<T>);
