//! `lift-motion` — the physical layer of the liftsim elevator simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`task`]     | `Task` — the single-slot cooperative animation state machine  |
//! | [`mobile`]   | `Mobile` — parent-relative position + task slot               |
//! | [`elevator`] | `Elevator` — acceleration-limited vertical kinematics         |
//! | [`floor`]    | `Floor` — up/down call-button state machine                   |
//! | [`events`]   | `ElevatorEvent`, `FloorEvent`, `Direction`                    |
//! | [`error`]    | `MotionError`, `MotionResult<T>`                              |
//!
//! # Design notes
//!
//! Actors here never call each other.  An elevator or floor records what
//! happened as plain-data events in an internal buffer; the world drains the
//! buffers once per tick and dispatches in a fixed order.  This keeps every
//! state change single-writer and makes a run with a given seed and tick
//! sequence exactly reproducible.

pub mod elevator;
pub mod error;
pub mod events;
pub mod floor;
pub mod mobile;
pub mod task;

#[cfg(test)]
mod tests;

pub use elevator::{Elevator, Occupant};
pub use error::{MotionError, MotionResult};
pub use events::{Direction, ElevatorEvent, FloorEvent};
pub use floor::Floor;
pub use mobile::Mobile;
pub use task::{Task, TaskKind};
