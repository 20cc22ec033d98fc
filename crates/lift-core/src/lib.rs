//! `lift-core` — foundational types for the liftsim elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                        |
//! |-------------|-------------------------------------------------|
//! | [`ids`]     | `ElevatorId`, `FloorId`, `UserId`               |
//! | [`options`] | `WorldOptions`                                  |
//! | [`rng`]     | `SimRng` (deterministic, seedable)              |
//! | [`interp`]  | clamping, epsilon compare, easing curves        |
//! | [`error`]   | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config types.     |

pub mod error;
pub mod ids;
pub mod interp;
pub mod options;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{ElevatorId, FloorId, UserId};
pub use interp::{Interpolation, clamp_number, cool_interpolate, epsilon_equals, linear_interpolate};
pub use options::WorldOptions;
pub use rng::SimRng;
