//! `lift-control` — destination scheduling and the control-program contract.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`facade`]  | `Scheduler` — the per-elevator destination queue             |
//! | [`context`] | `ElevatorHandle`, `ControlContext` — program-facing surfaces |
//! | [`program`] | `ControlProgram` trait, `ProgramEvent`, event dispatch       |
//! | [`error`]   | `ControlError`, `ControlResult<T>`                           |
//!
//! # Design notes
//!
//! The scheduler is deliberately stateless about *why* floors were queued;
//! prioritization is entirely the control program's job.  The program in
//! turn never touches a raw elevator: the handle keeps every command going
//! through the queue, which is what makes `stop()` and `force_now` coherent.

pub mod context;
pub mod error;
pub mod facade;
pub mod program;

#[cfg(test)]
mod tests;

pub use context::{ControlContext, ElevatorHandle};
pub use error::{ControlError, ControlResult};
pub use facade::{FacadeEvent, Scheduler};
pub use program::{ControlProgram, ProgramEvent, dispatch_event};
