//! Motion-layer error type.

use thiserror::Error;

/// Errors raised by the physical layer.  `Busy` is a programming error in
/// the caller — the task slot is a hard precondition, not a queue.
#[derive(Debug, Error)]
pub enum MotionError {
    #[error("movable is busy — a task is already scheduled; wait for it to finish")]
    Busy,
}

/// Shorthand result type for `lift-motion`.
pub type MotionResult<T> = Result<T, MotionError>;
