/// Failures inside the numeric routines.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("insufficient samples: {left} and {right} finite values, need at least 2 each")]
    InsufficientSamples { left: usize, right: usize },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("distribution error: {0}")]
    Distribution(String),
}

impl From<statrs::StatsError> for StatsError {
    fn from(e: statrs::StatsError) -> Self {
        Self::Distribution(e.to_string())
    }
}

/// Errors from evaluating a single hypothesis.
///
/// These never leave the evaluator; each becomes a failed result for the
/// hypothesis that raised it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("non-finite {field}: {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("statistics error: {0}")]
    Statistics(#[from] StatsError),
    #[error("evaluation panicked: {0}")]
    Panicked(String),
    #[error("evaluation task did not complete")]
    TaskAborted,
}
