//! Append-only step log for a single algorithm invocation.

use crate::step::Step;
use crate::trace::Trace;

/// Collects steps in execution order.
///
/// A recorder belongs to exactly one invocation. [`Recorder::finish`] consumes
/// it, so a finished trace can never be appended to or reused.
#[derive(Debug)]
pub struct Recorder<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, step: Step<T>) {
        self.steps.push(step);
    }

    pub fn compare(&mut self, i: usize, j: usize) {
        self.record(Step::compare(i, j));
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.record(Step::swap(i, j));
    }

    pub fn update(&mut self, index: usize, new_value: T) {
        self.record(Step::update(index, new_value));
    }

    pub fn sorted(&mut self, index: usize) {
        self.record(Step::sorted(index));
    }

    /// Mark every index in `0..len` sorted, ascending.
    pub fn sorted_sweep(&mut self, len: usize) {
        self.steps.extend((0..len).map(Step::sorted));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Hand off the accumulated steps.
    pub fn finish(self) -> Trace<T> {
        Trace::from_steps(self.steps)
    }
}
