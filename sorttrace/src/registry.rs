//! Fixed table of instrumented algorithms and timed dispatch by name.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::algorithms::{SortFn, exchange_sort, merge_sort, partition_sort};
use crate::error::TraceError;
use crate::recorder::Recorder;
use crate::trace::Trace;

/// Supported algorithms. Serialized names are the wire names clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    BubbleSort,
    MergeSort,
    QuickSort,
}

impl Algorithm {
    /// Registry contents, in the order clients list them.
    pub const ALL: [Algorithm; 3] = [
        Algorithm::BubbleSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
    ];

    /// Wire name, as accepted by [`dispatch`].
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "BubbleSort",
            Algorithm::MergeSort => "MergeSort",
            Algorithm::QuickSort => "QuickSort",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
        }
    }

    pub fn time_complexity(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "O(N²)",
            Algorithm::MergeSort | Algorithm::QuickSort => "O(N log N)",
        }
    }

    pub fn space_complexity(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "O(1)",
            Algorithm::MergeSort => "O(N)",
            Algorithm::QuickSort => "O(log N)",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|algorithm| algorithm.id() == name)
    }

    /// Upper bound on the number of steps a run over `len` elements records,
    /// whatever the data. Lets a host refuse work before allocating a trace.
    pub fn max_steps(self, len: usize) -> usize {
        let pairs = len.saturating_mul(len.saturating_sub(1)) / 2;
        match self {
            // One compare per pair, at most one swap each, plus a sorted mark
            // per index.
            Algorithm::BubbleSort => pairs.saturating_mul(2).saturating_add(len),
            // Each level of the recursion compares and writes back at most
            // `len` positions.
            Algorithm::MergeSort => {
                let levels = if len > 1 {
                    (usize::BITS - (len - 1).leading_zeros()) as usize
                } else {
                    0
                };
                len.saturating_mul(levels)
                    .saturating_mul(2)
                    .saturating_add(len)
            }
            // Worst case is a degenerate split every time: every pair compared
            // and swapped, one pivot swap per partition, then the sorted sweep.
            Algorithm::QuickSort => pairs
                .saturating_mul(2)
                .saturating_add(len.saturating_mul(2)),
        }
    }

    pub fn sort_fn<T: PartialOrd + Clone>(self) -> SortFn<T> {
        match self {
            Algorithm::BubbleSort => exchange_sort,
            Algorithm::MergeSort => merge_sort,
            Algorithm::QuickSort => partition_sort,
        }
    }

    /// Run on a private copy of `input` with a fresh recorder, timing the call.
    pub fn run<T: PartialOrd + Clone>(self, input: &[T]) -> AlgorithmResult<T> {
        let sort = self.sort_fn::<T>();
        let mut recorder = Recorder::new();

        let start = Instant::now();
        sort(input, &mut recorder);
        let elapsed = start.elapsed();

        let trace = recorder.finish();
        debug!(
            algorithm = %self,
            len = input.len(),
            steps = trace.len(),
            elapsed_us = elapsed.as_micros() as u64,
            "algorithm finished"
        );
        AlgorithmResult {
            algorithm: self,
            trace,
            elapsed,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = TraceError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| TraceError::UnsupportedAlgorithm(name.to_string()))
    }
}

/// Output of one dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult<T> {
    pub algorithm: Algorithm,
    pub trace: Trace<T>,
    /// Wall-clock time spent inside the algorithm.
    pub elapsed: Duration,
}

impl<T> AlgorithmResult<T> {
    /// Elapsed milliseconds rounded to two decimal places.
    pub fn elapsed_ms_rounded(&self) -> f64 {
        round_ms(self.elapsed)
    }
}

fn round_ms(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100_000.0).round() / 100.0
}

/// Look up `name` in the registry and run it against `input`.
///
/// Unknown names fail with [`TraceError::UnsupportedAlgorithm`] before any
/// step is recorded.
pub fn dispatch<T: PartialOrd + Clone>(
    name: &str,
    input: &[T],
) -> Result<AlgorithmResult<T>, TraceError> {
    let algorithm: Algorithm = name.parse()?;
    Ok(algorithm.run(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Algorithm::from_name("MergeSort"), Some(Algorithm::MergeSort));
        assert_eq!(Algorithm::from_name("mergesort"), None);
        assert_eq!(Algorithm::from_name("Merge Sort"), None);
        assert_eq!(Algorithm::from_name(""), None);
    }

    #[test]
    fn ids_round_trip_through_lookup() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.id()), Some(algorithm));
        }
    }

    #[test]
    fn unknown_name_is_unsupported() {
        let err = dispatch("HeapSort", &[3, 1, 2]).expect_err("unsupported");
        assert_eq!(err, TraceError::UnsupportedAlgorithm("HeapSort".to_string()));
    }

    #[test]
    fn dispatch_runs_named_algorithm() {
        let result = dispatch("BubbleSort", &[2, 1]).expect("dispatch");
        assert_eq!(result.algorithm, Algorithm::BubbleSort);
        assert_eq!(
            result.trace.steps(),
            &[
                Step::compare(0, 1),
                Step::swap(0, 1),
                Step::sorted(1),
                Step::sorted(0),
            ]
        );
        assert!(result.elapsed_ms_rounded() >= 0.0);
    }

    #[test]
    fn max_steps_bounds_recorded_steps() {
        let reversed: Vec<i32> = (0..64).rev().collect();
        let sorted: Vec<i32> = (0..64).collect();
        for algorithm in Algorithm::ALL {
            for input in [&reversed, &sorted] {
                let steps = algorithm.run(input).trace.len();
                assert!(
                    steps <= algorithm.max_steps(input.len()),
                    "{algorithm}: {steps} steps over bound"
                );
            }
        }
    }

    #[test]
    fn max_steps_is_exact_for_reversed_bubble_sort() {
        let reversed: Vec<i32> = (0..20).rev().collect();
        let steps = Algorithm::BubbleSort.run(&reversed).trace.len();
        assert_eq!(steps, Algorithm::BubbleSort.max_steps(20));
    }

    #[test]
    fn max_steps_for_trivial_lengths() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.max_steps(0), 0);
            assert!(algorithm.max_steps(1) >= 1);
        }
        assert_eq!(Algorithm::BubbleSort.max_steps(10_000), 99_990_000 + 10_000);
    }

    #[test]
    fn wire_names_match_serde() {
        let json = serde_json::to_string(&Algorithm::QuickSort).expect("serialize");
        assert_eq!(json, "\"QuickSort\"");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_ms(Duration::from_micros(1_234)), 1.23);
        assert_eq!(round_ms(Duration::from_micros(1_235_600)), 1235.6);
        assert_eq!(round_ms(Duration::ZERO), 0.0);
    }
}
