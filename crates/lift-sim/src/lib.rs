//! `lift-sim` — world orchestration and the frame loop of the liftsim
//! elevator simulation.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`world`]      | `World`, `WorldStats` — entity owner and tick orchestrator |
//! | [`user`]       | `User`, `UserState` — occupant lifecycle state machine    |
//! | [`challenge`]  | `ChallengeCondition`, `ChallengeStatus`                   |
//! | [`controller`] | `WorldController` — frame loop with usercode fencing      |
//! | [`frame`]      | `FrameSource`, `FixedStepFrames`                          |
//! | [`observer`]   | `SimObserver`, `NoopObserver`                             |
//! | [`error`]      | `SimError`, `SimResult<T>`                                |
//!
//! # Example — headless run
//!
//! ```rust,ignore
//! let mut world = World::new(WorldOptions::default(), condition)?;
//! let mut controller = WorldController::new(1.0 / 60.0);
//! controller.set_time_scale(20.0);
//! let mut frames = FixedStepFrames::new(1.0 / 60.0, 200_000);
//! controller.run(&mut frames, &mut world, &mut program, &mut NoopObserver);
//! ```

pub mod challenge;
pub mod controller;
pub mod error;
pub mod frame;
pub mod observer;
pub mod user;
pub mod world;


pub use challenge::{ChallengeCondition, ChallengeStatus};
pub use controller::WorldController;
pub use error::{SimError, SimResult};
pub use frame::{FixedStepFrames, FrameSource};
pub use observer::{NoopObserver, SimObserver};
pub use user::{User, UserState};
pub use world::{World, WorldStats};
