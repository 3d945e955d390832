//! Quicksort using Lomuto partitioning with the last element as pivot.

use crate::recorder::Recorder;

/// Quicksort `input`, recording every pivot comparison and exchange.
///
/// Exchanges are recorded even when both indices are equal, and the final
/// pivot placement is always recorded, so the trace mirrors the unconditional
/// swaps of the textbook partition loop.
pub fn partition_sort<T: PartialOrd + Clone>(input: &[T], recorder: &mut Recorder<T>) {
    let mut values = input.to_vec();
    let n = values.len();
    if n > 1 {
        sort_range(&mut values, 0, n - 1, recorder);
    }
    recorder.sorted_sweep(n);
}

fn sort_range<T: PartialOrd>(
    values: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) {
    if low >= high {
        return;
    }
    let pivot = partition(values, low, high, recorder);
    if pivot > low {
        sort_range(values, low, pivot - 1, recorder);
    }
    sort_range(values, pivot + 1, high, recorder);
}

/// Partition `[low, high]` around `values[high]` and return the pivot's
/// resting index.
fn partition<T: PartialOrd>(
    values: &mut [T],
    low: usize,
    high: usize,
    recorder: &mut Recorder<T>,
) -> usize {
    // Next free slot for a value smaller than the pivot.
    let mut store = low;
    for j in low..high {
        recorder.compare(j, high);
        if values[j] < values[high] {
            values.swap(store, j);
            recorder.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, high);
    recorder.swap(store, high);
    store
}
