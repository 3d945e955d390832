//! Domain errors surfaced by dispatch.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Requested name is not in the registry.
    #[error("Algorithm not supported: {0}")]
    UnsupportedAlgorithm(String),

    /// Input could not be interpreted as a sequence of orderable values.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A replayed step points past the end of the sequence it is applied to.
    #[error("step {step} references index {index} but sequence has length {len}")]
    StepOutOfRange { step: usize, index: usize, len: usize },
}
