//! World configuration.
//!
//! Typically constructed per challenge attempt by the application and handed
//! to `World::new` together with the challenge condition.  Distances are in
//! abstract position units (one floor is `floor_height` units tall) and time
//! is in simulated seconds.

use crate::{CoreError, CoreResult};

/// Top-level configuration for one world / challenge attempt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldOptions {
    /// Number of building levels.  Floor 0 is the ground floor.
    pub floor_count: usize,

    /// Vertical size of one floor in position units.
    pub floor_height: f64,

    /// Number of elevator shafts.
    pub elevator_count: usize,

    /// Per-elevator boarding-slot counts.  When shorter than
    /// `elevator_count` (or empty), missing entries default to 4 slots.
    pub elevator_capacities: Vec<usize>,

    /// Users spawned per simulated second (on average exactly — spawning is
    /// a fixed-interval accumulator, not a Poisson process).
    pub spawn_rate: f64,

    /// Elevator cruise speed in floors per second.  Acceleration and
    /// deceleration limits are derived from this and `floor_height`.
    pub speed_floors_per_sec: f64,

    /// Master RNG seed.  The same seed always produces identical runs.
    pub seed: u64,
}

impl Default for WorldOptions {
    fn default() -> Self {
        Self {
            floor_count:          4,
            floor_height:         50.0,
            elevator_count:       2,
            elevator_capacities:  Vec::new(),
            spawn_rate:           0.5,
            speed_floors_per_sec: 2.6,
            seed:                 42,
        }
    }
}

impl WorldOptions {
    /// Default boarding-slot count for elevators without an explicit capacity.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Boarding-slot count for elevator `i`.
    pub fn capacity_of(&self, i: usize) -> usize {
        self.elevator_capacities
            .get(i)
            .copied()
            .unwrap_or(Self::DEFAULT_CAPACITY)
    }

    /// Check the options describe a simulatable building.
    pub fn validate(&self) -> CoreResult<()> {
        if self.floor_count < 2 {
            return Err(CoreError::Config("floor_count must be at least 2".into()));
        }
        if self.elevator_count == 0 {
            return Err(CoreError::Config("elevator_count must be at least 1".into()));
        }
        if self.floor_height <= 0.0 {
            return Err(CoreError::Config("floor_height must be positive".into()));
        }
        if self.spawn_rate <= 0.0 {
            return Err(CoreError::Config("spawn_rate must be positive".into()));
        }
        if self.speed_floors_per_sec <= 0.0 {
            return Err(CoreError::Config("speed_floors_per_sec must be positive".into()));
        }
        if self.elevator_capacities.iter().any(|&c| c == 0) {
            return Err(CoreError::Config("elevator capacities must be nonzero".into()));
        }
        Ok(())
    }
}
