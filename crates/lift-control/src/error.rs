//! Control-layer error type.

use thiserror::Error;

/// Faults raised by a control program.  Both variants carry a message for
/// the observer; neither is recoverable within the current run.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The program returned an error from one of its hooks.
    #[error("control program failure: {0}")]
    Failure(String),

    /// The program panicked inside a hook.  The panic payload is stringified
    /// when possible.
    #[error("control program panicked: {0}")]
    Panicked(String),
}

/// Shorthand result type for `lift-control`.
pub type ControlResult<T> = Result<T, ControlError>;
