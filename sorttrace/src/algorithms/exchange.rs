//! Bubble sort with unconditional nested passes.

use crate::recorder::Recorder;

/// Bubble sort `input`, recording every comparison and exchange.
///
/// There is no early exit: a sequence of length `n` always produces
/// `n(n-1)/2` compares. After each outer pass the largest remaining value is
/// final, so `sorted(n-1-i)` is emitted; `sorted(0)` closes the trace.
pub fn exchange_sort<T: PartialOrd + Clone>(input: &[T], recorder: &mut Recorder<T>) {
    let mut values = input.to_vec();
    let n = values.len();
    if n == 0 {
        return;
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            recorder.compare(j, j + 1);
            if values[j] > values[j + 1] {
                recorder.swap(j, j + 1);
                values.swap(j, j + 1);
            }
        }
        recorder.sorted(n - 1 - i);
    }
    recorder.sorted(0);
}
