//! Simulation-layer error type.

use thiserror::Error;

/// Errors raised while building or running a world.
#[derive(Debug, Error)]
pub enum SimError {
    /// The world options failed validation.
    #[error(transparent)]
    Config(#[from] lift_core::CoreError),
}

/// Shorthand result type for `lift-sim`.
pub type SimResult<T> = Result<T, SimError>;
