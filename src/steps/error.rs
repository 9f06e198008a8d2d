
use thiserror::Error;

/// Recoverable failures of the removal operations on a
/// [`StepList`](super::StepList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StepListError {
  #[error("The list is empty.")]
  Empty,
  #[error("Step '{0}' not found.")]
  NotFound(String),
}
