//! Elementary events recorded while an algorithm runs.
//!
//! The serialized form is consumed by the browser visualizer, so tag and field
//! names are part of the wire contract:
//!
//! ```json
//! {"type":"compare","indices":[0,1]}
//! {"type":"swap","indices":[0,1]}
//! {"type":"update_height","index":3,"newValue":42}
//! {"type":"sorted","index":0}
//! ```

use serde::{Deserialize, Serialize};

/// One instrumented event. Indices refer to positions in the working sequence
/// at the time the step was emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Step<T> {
    /// Two positions were compared; nothing moved.
    Compare { indices: [usize; 2] },
    /// The values at both positions were just exchanged.
    Swap { indices: [usize; 2] },
    /// A position was overwritten (merge write-back).
    #[serde(rename = "update_height")]
    Update {
        index: usize,
        #[serde(rename = "newValue")]
        new_value: T,
    },
    /// A position holds its final value.
    Sorted { index: usize },
}

impl<T> Step<T> {
    pub fn compare(i: usize, j: usize) -> Self {
        Step::Compare { indices: [i, j] }
    }

    pub fn swap(i: usize, j: usize) -> Self {
        Step::Swap { indices: [i, j] }
    }

    pub fn update(index: usize, new_value: T) -> Self {
        Step::Update { index, new_value }
    }

    pub fn sorted(index: usize) -> Self {
        Step::Sorted { index }
    }

    /// True for steps that change the working sequence.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Step::Swap { .. } | Step::Update { .. })
    }

    /// Largest index referenced by this step.
    pub fn max_index(&self) -> usize {
        match self {
            Step::Compare { indices } | Step::Swap { indices } => indices[0].max(indices[1]),
            Step::Update { index, .. } | Step::Sorted { index } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compare_and_swap_serialize_with_indices_pair() {
        let compare = serde_json::to_value(Step::<i64>::compare(0, 1)).expect("serialize");
        assert_eq!(compare, json!({"type": "compare", "indices": [0, 1]}));

        let swap = serde_json::to_value(Step::<i64>::swap(2, 3)).expect("serialize");
        assert_eq!(swap, json!({"type": "swap", "indices": [2, 3]}));
    }

    #[test]
    fn update_uses_visualizer_field_names() {
        let value = serde_json::to_value(Step::update(4, 17_i64)).expect("serialize");
        assert_eq!(value, json!({"type": "update_height", "index": 4, "newValue": 17}));
    }

    #[test]
    fn sorted_serializes_single_index() {
        let value = serde_json::to_value(Step::<f64>::sorted(0)).expect("serialize");
        assert_eq!(value, json!({"type": "sorted", "index": 0}));
    }

    #[test]
    fn parses_visualizer_payload() {
        let step: Step<f64> =
            serde_json::from_value(json!({"type": "update_height", "index": 1, "newValue": 2.5}))
                .expect("parse");
        assert_eq!(step, Step::update(1, 2.5));
    }

    #[test]
    fn only_swap_and_update_mutate() {
        assert!(!Step::<i32>::compare(0, 1).is_mutation());
        assert!(Step::<i32>::swap(0, 1).is_mutation());
        assert!(Step::update(0, 1).is_mutation());
        assert!(!Step::<i32>::sorted(0).is_mutation());
    }

    #[test]
    fn max_index_covers_both_positions() {
        assert_eq!(Step::<i32>::compare(5, 2).max_index(), 5);
        assert_eq!(Step::<i32>::swap(1, 7).max_index(), 7);
        assert_eq!(Step::update(3, 0).max_index(), 3);
    }
}
