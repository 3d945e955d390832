//! Test-only fixtures and trace checks shared by unit and integration tests.

use std::cmp::Ordering;

use crate::step::Step;
use crate::trace::Trace;

/// Deterministic inputs covering the usual sorting edge cases.
pub fn sample_inputs() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![5],
        vec![2, 1],
        vec![3, 1, 2],
        vec![1, 2, 3, 4, 5, 6],
        vec![6, 5, 4, 3, 2, 1],
        vec![4, 4, 4, 4],
        vec![3, 1, 3, 1, 2, 2, 0],
        vec![-5, 10, 0, -5, 7, 3],
        pseudo_random(50, 7),
    ]
}

/// Fixed-seed linear congruential sequence in `5..200`, like the visualizer's bars.
pub fn pseudo_random(len: usize, seed: u64) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            5 + ((state >> 33) % 195) as i64
        })
        .collect()
}

/// Stable reference sort for partially ordered values.
pub fn reference_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut sorted = input.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Check the invariants every trace must satisfy for `input`:
/// every index is in range, replay sorts the input, and each index is marked
/// sorted exactly once.
pub fn check_trace<T: PartialOrd + Clone + std::fmt::Debug>(
    input: &[T],
    trace: &Trace<T>,
) -> Result<(), String> {
    if let Some(step) = trace.iter().find(|step| step.max_index() >= input.len()) {
        return Err(format!("step {:?} out of range for len {}", step, input.len()));
    }

    let replayed = trace.replay(input).map_err(|e| e.to_string())?;
    let expected = reference_sort(input);
    if replayed != expected {
        return Err(format!("replay produced {:?}, expected {:?}", replayed, expected));
    }

    let mut marked = trace.sorted_indices();
    marked.sort_unstable();
    let all: Vec<usize> = (0..input.len()).collect();
    if marked != all {
        return Err(format!("sorted indices {:?}, expected {:?}", marked, all));
    }
    Ok(())
}

/// Compact text form of a trace, handy for asserting on short scenarios.
pub fn describe<T: std::fmt::Display>(trace: &Trace<T>) -> Vec<String> {
    trace
        .iter()
        .map(|step| match step {
            Step::Compare { indices: [i, j] } => format!("compare({i},{j})"),
            Step::Swap { indices: [i, j] } => format!("swap({i},{j})"),
            Step::Update { index, new_value } => format!("update({index},{new_value})"),
            Step::Sorted { index } => format!("sorted({index})"),
        })
        .collect()
}

/// Merge ranges `(l, m, r)` in the order the recursion merges them.
pub fn merge_ranges(len: usize) -> Vec<(usize, usize, usize)> {
    fn collect(l: usize, r: usize, out: &mut Vec<(usize, usize, usize)>) {
        if l >= r {
            return;
        }
        let m = l + (r - l) / 2;
        collect(l, m, out);
        collect(m + 1, r, out);
        out.push((l, m, r));
    }

    let mut out = Vec::new();
    if len > 1 {
        collect(0, len - 1, &mut out);
    }
    out
}

/// Check that a merge sort trace over `len` elements is a sequence of merges
/// in recursion order: compares pair one index from `[l, m]` with one from
/// `[m+1, r]`, then every position of `[l, r]` is written back in order, and
/// the trace closes with the ascending sorted sweep.
pub fn check_merge_structure<T: std::fmt::Debug>(
    len: usize,
    trace: &Trace<T>,
) -> Result<(), String> {
    let mut steps = trace.iter().peekable();
    for (l, m, r) in merge_ranges(len) {
        while let Some(Step::Compare { indices: [i, j] }) = steps.peek() {
            if !(l <= *i && *i <= m && m < *j && *j <= r) {
                return Err(format!(
                    "merge [{l},{m}]+[{},{r}]: compare({i},{j}) crosses the split",
                    m + 1
                ));
            }
            steps.next();
        }
        for expected in l..=r {
            match steps.next() {
                Some(Step::Update { index, .. }) if *index == expected => {}
                other => {
                    return Err(format!(
                        "merge [{l},{r}]: expected update({expected}), got {other:?}"
                    ));
                }
            }
        }
    }

    let sweep: Vec<_> = steps.collect();
    let expected: Vec<usize> = (0..len).collect();
    let marked: Vec<usize> = sweep
        .iter()
        .filter_map(|step| match step {
            Step::Sorted { index } => Some(*index),
            _ => None,
        })
        .collect();
    if marked.len() != sweep.len() || marked != expected {
        return Err(format!("trailing steps {sweep:?} are not the sorted sweep"));
    }
    Ok(())
}

/// Check that a partition sort trace is a sequence of Lomuto partitions: each
/// one compares consecutive indices against the same pivot slot `high`,
/// interleaves swaps with the index just compared, and ends with a swap into
/// `high`.
pub fn check_partition_structure<T: std::fmt::Debug>(trace: &Trace<T>) -> Result<(), String> {
    // (pivot slot, next index the loop should compare)
    let mut open: Option<(usize, usize)> = None;
    for (pos, step) in trace.iter().enumerate() {
        match (step, open) {
            (Step::Compare { indices: [j, high] }, None) if j < high => {
                open = Some((*high, *j + 1));
            }
            (Step::Compare { indices: [j, high] }, Some((pivot, next))) => {
                if *high != pivot || *j != next {
                    return Err(format!(
                        "step {pos}: compare({j},{high}) inside partition on {pivot}, expected compare({next},{pivot})"
                    ));
                }
                open = Some((pivot, next + 1));
            }
            (Step::Swap { indices: [_, b] }, Some((pivot, _))) if *b == pivot => {
                open = None;
            }
            (Step::Swap { indices: [a, b] }, Some((_, next))) if *b + 1 == next && a <= b => {}
            (Step::Sorted { .. }, None) => {}
            (other, state) => {
                return Err(format!("step {pos}: unexpected {other:?} with partition {state:?}"));
            }
        }
    }
    match open {
        Some((pivot, _)) => Err(format!("partition on {pivot} never placed its pivot")),
        None => Ok(()),
    }
}
