//! `User` — the lifecycle state machine of one building occupant.
//!
//! A user is spawned on a floor, presses a call button, boards a suitable
//! elevator when one opens its doors, presses the in-elevator destination
//! button once settled into a slot, rides, and finally walks off when the
//! car opens at their destination.  Each animated phase (boarding walk,
//! exit drift) is a task on the user's [`Mobile`].

use lift_core::{ElevatorId, Interpolation, SimRng, UserId};
use lift_motion::{Elevator, Floor, Mobile};

/// Where a user is in their journey.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UserState {
    /// Standing on a floor with a call button pressed.
    Waiting,
    /// Claimed a slot and walking into the car.
    Boarding { elevator: ElevatorId, slot: usize },
    /// Settled into the slot, destination button pressed.
    Riding { elevator: ElevatorId, slot: usize },
    /// Off the car at the destination, drifting away before despawn.
    Alighting,
    /// Ready to be pruned from the world.
    Removed,
}

/// One building occupant.
#[derive(Debug)]
pub struct User {
    id:     UserId,
    /// Load units; 100 is one average adult.
    weight: f64,

    current_floor:     usize,
    destination_floor: usize,

    /// Reached the destination (set when stepping off the car, before the
    /// exit drift finishes).
    done:       bool,
    /// Finished entirely; the world prunes the user at the end of the tick.
    remove_me:  bool,
    spawned_at: f64,

    pub mobile: Mobile,
    state:      UserState,
}

impl User {
    pub fn new(id: UserId, weight: f64, spawned_at: f64) -> Self {
        Self {
            id,
            weight,
            current_floor: 0,
            destination_floor: 0,
            done: false,
            remove_me: false,
            spawned_at,
            mobile: Mobile::new(),
            state: UserState::Waiting,
        }
    }

    /// Place the user on `floor`, bound for `destination`, and press the
    /// matching call button.
    pub fn appear_on_floor(&mut self, floor: &mut Floor, destination: usize) {
        self.current_floor = floor.floor_num();
        self.destination_floor = destination;
        self.mobile.y = floor.spawn_pos_y();
        self.press_call_button(floor);
    }

    /// Press whichever call button matches the direction of travel.
    pub fn press_call_button(&mut self, floor: &mut Floor) {
        if self.destination_floor < self.current_floor {
            floor.press_down_button();
        } else {
            floor.press_up_button();
        }
    }

    /// An elevator opened its doors on this user's floor; try to board.
    ///
    /// Declines silently when already travelling or when the car's
    /// indicators don't serve the travel direction.  A full car makes the
    /// user press the call button again, which may summon another car.
    pub fn offer_elevator(
        &mut self,
        id:       ElevatorId,
        elevator: &mut Elevator,
        floor:    &mut Floor,
        rng:      &mut SimRng,
    ) {
        if self.done || self.mobile.parent().is_some() || self.mobile.is_busy() {
            return;
        }
        if !elevator.is_suitable_for_travel_between(self.current_floor, self.destination_floor) {
            return;
        }
        match elevator.user_entering(self.id, self.weight, rng) {
            Some((slot, slot_pos)) => {
                self.mobile.attach(id, elevator.position());
                self.state = UserState::Boarding { elevator: id, slot };
                // Cannot fail: busy was checked above.
                let _ = self.mobile.start_tween(slot_pos, 1.0, Interpolation::Cool);
            }
            None => self.press_call_button(floor),
        }
    }

    /// The current task finished; apply the state transition.
    ///
    /// Returns the in-elevator button press to perform when a boarding walk
    /// just completed.
    pub fn on_task_complete(&mut self) -> Option<(ElevatorId, usize)> {
        match self.state {
            UserState::Boarding { elevator, slot } => {
                self.state = UserState::Riding { elevator, slot };
                Some((elevator, self.destination_floor))
            }
            UserState::Alighting => {
                self.remove_me = true;
                self.state = UserState::Removed;
                None
            }
            _ => None,
        }
    }

    /// Step off the car at the destination and drift away.
    pub fn alight(&mut self, elevator: &mut Elevator, rng: &mut SimRng) {
        elevator.user_exiting(self.id);
        self.current_floor = elevator.current_floor();
        self.mobile.detach(elevator.position());
        self.done = true;
        self.state = UserState::Alighting;

        let drift_to = (self.mobile.x + 100.0, self.mobile.y);
        let duration = 1.0 + rng.random::<f64>() * 0.5;
        // Cannot fail: a riding user has no active task.
        let _ = self.mobile.start_tween(drift_to, duration, Interpolation::Linear);
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> UserId {
        self.id
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    #[inline]
    pub fn destination_floor(&self) -> usize {
        self.destination_floor
    }

    #[inline]
    pub fn done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn remove_me(&self) -> bool {
        self.remove_me
    }

    #[inline]
    pub fn spawned_at(&self) -> f64 {
        self.spawned_at
    }

    #[inline]
    pub fn state(&self) -> UserState {
        self.state
    }

    /// How long the user has been in the system at `now`.
    pub fn wait_time(&self, now: f64) -> f64 {
        now - self.spawned_at
    }
}
