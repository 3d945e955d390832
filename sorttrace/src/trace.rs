//! Finished, read-only step trace.

use serde::{Deserialize, Serialize};

use crate::error::TraceError;
use crate::step::Step;

/// Ordered steps of one invocation. Serializes as a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace<T> {
    steps: Vec<Step<T>>,
}

impl<T> Trace<T> {
    pub(crate) fn from_steps(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<T>> {
        self.steps.iter()
    }

    pub fn compare_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Compare { .. }))
            .count()
    }

    /// Indices of `sorted` milestones in emission order.
    pub fn sorted_indices(&self) -> Vec<usize> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Sorted { index } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl<T: Clone> Trace<T> {
    /// Apply every `swap` and `update` step, in order, to a copy of `input`.
    ///
    /// This is exactly what the visualizer does to its bars, so the result of
    /// replaying a trace against the original input is the sorted sequence.
    pub fn replay(&self, input: &[T]) -> Result<Vec<T>, TraceError> {
        let mut values = input.to_vec();
        for (pos, step) in self.steps.iter().enumerate() {
            if step.max_index() >= values.len() {
                return Err(TraceError::StepOutOfRange {
                    step: pos,
                    index: step.max_index(),
                    len: values.len(),
                });
            }
            match step {
                Step::Swap { indices: [i, j] } => values.swap(*i, *j),
                Step::Update { index, new_value } => values[*index] = new_value.clone(),
                Step::Compare { .. } | Step::Sorted { .. } => {}
            }
        }
        Ok(values)
    }
}

impl<'a, T> IntoIterator for &'a Trace<T> {
    type Item = &'a Step<T>;
    type IntoIter = std::slice::Iter<'a, Step<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_applies_swaps_and_updates() {
        let trace = Trace::from_steps(vec![
            Step::compare(0, 1),
            Step::swap(0, 1),
            Step::update(2, 10),
            Step::sorted(0),
        ]);
        let replayed = trace.replay(&[2, 1, 7]).expect("replay");
        assert_eq!(replayed, vec![1, 2, 10]);
    }

    #[test]
    fn replay_rejects_out_of_range_index() {
        let trace = Trace::from_steps(vec![Step::<i32>::swap(0, 3)]);
        let err = trace.replay(&[1, 2]).expect_err("out of range");
        assert_eq!(
            err,
            TraceError::StepOutOfRange {
                step: 0,
                index: 3,
                len: 2
            }
        );
    }

    #[test]
    fn serializes_as_plain_array() {
        let trace = Trace::from_steps(vec![Step::<i32>::sorted(0)]);
        let json = serde_json::to_string(&trace).expect("serialize");
        assert_eq!(json, r#"[{"type":"sorted","index":0}]"#);
    }

    #[test]
    fn counts_compares() {
        let trace = Trace::from_steps(vec![
            Step::<i32>::compare(0, 1),
            Step::swap(0, 1),
            Step::compare(1, 2),
        ]);
        assert_eq!(trace.compare_count(), 2);
    }
}
