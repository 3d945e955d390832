//! Top-down merge sort with an auxiliary buffer and write-back updates.

use crate::recorder::Recorder;

/// Merge sort `input`, recording merge comparisons and write-backs.
///
/// Only the two-cursor loop emits `compare`; draining a leftover run does not.
/// Each merged position is reported as an `update`. Sortedness is only known
/// once the whole range is merged, so all `sorted` steps come at the end.
pub fn merge_sort<T: PartialOrd + Clone>(input: &[T], recorder: &mut Recorder<T>) {
    let mut values = input.to_vec();
    let n = values.len();
    if n > 1 {
        let mut buffer = Vec::with_capacity(n);
        sort_range(&mut values, 0, n - 1, &mut buffer, recorder);
    }
    recorder.sorted_sweep(n);
}

fn sort_range<T: PartialOrd + Clone>(
    values: &mut [T],
    l: usize,
    r: usize,
    buffer: &mut Vec<T>,
    recorder: &mut Recorder<T>,
) {
    if l >= r {
        return;
    }
    let m = l + (r - l) / 2;
    sort_range(values, l, m, buffer, recorder);
    sort_range(values, m + 1, r, buffer, recorder);
    merge(values, l, m, r, buffer, recorder);
}

/// Merge the sorted runs `[l, m]` and `[m+1, r]`. Ties take the left run.
fn merge<T: PartialOrd + Clone>(
    values: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    buffer: &mut Vec<T>,
    recorder: &mut Recorder<T>,
) {
    buffer.clear();
    let (mut i, mut j) = (l, m + 1);
    while i <= m && j <= r {
        recorder.compare(i, j);
        if values[i] <= values[j] {
            buffer.push(values[i].clone());
            i += 1;
        } else {
            buffer.push(values[j].clone());
            j += 1;
        }
    }
    buffer.extend_from_slice(&values[i..=m]);
    buffer.extend_from_slice(&values[j..=r]);

    for (offset, value) in buffer.drain(..).enumerate() {
        values[l + offset] = value.clone();
        recorder.update(l + offset, value);
    }
}
