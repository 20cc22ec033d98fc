//! `Elevator` — acceleration-limited vertical kinematics, per-floor button
//! memory, boarding slots, and arrival/floor-crossing event emission.
//!
//! # Coordinate system
//!
//! Positions are screen-like: y grows downward, the top floor is at y = 0 and
//! floor 0 (ground) is at `(floor_count − 1) · floor_height`.  Consequently
//! an elevator travelling *up* the building has *negative* vertical velocity.
//!
//! # Motion model
//!
//! Constant-acceleration kinematics with a deceleration budget slightly above
//! the acceleration budget (braking is easier than launching).  The control
//! law keeps the stopping distance at current speed below the remaining
//! distance, permits mild over-braking (factor 1.1) for smoothness after an
//! overshoot is detected, and never reverses direction within a single step —
//! direction changes must pass through standstill.

use lift_core::{SimRng, UserId, clamp_number, epsilon_equals};

use crate::events::{Direction, ElevatorEvent};
use crate::{Mobile, MotionResult};

// ── Kinematics helpers ────────────────────────────────────────────────────────

/// Signed distance covered while changing speed from `current` to `target`
/// at `acceleration`, from v² = u² + 2·a·d.
fn distance_needed_to_achieve_speed(current: f64, target: f64, acceleration: f64) -> f64 {
    (target.powi(2) - current.powi(2)) / (2.0 * acceleration)
}

/// Acceleration that changes speed from `current` to `target` over exactly
/// `distance`, from the same relation solved for a.
fn acceleration_needed_to_achieve_change_distance(current: f64, target: f64, distance: f64) -> f64 {
    0.5 * ((target.powi(2) - current.powi(2)) / distance)
}

/// Three-valued sign (`f64::signum` maps 0.0 to 1.0, which the direction
/// comparisons below cannot tolerate).
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

// ── Occupant ──────────────────────────────────────────────────────────────────

/// A claimed boarding slot: which user, and their weight in load units
/// (100 load units = one average adult = one "full" slot share).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Occupant {
    pub user:   UserId,
    pub weight: f64,
}

// ── Elevator ──────────────────────────────────────────────────────────────────

/// One physical elevator car.
///
/// Invariants: `|velocity_y| ≤ max_speed` at every step boundary, and the
/// position converges to the exact destination y (snap) before `is_moving`
/// clears.
#[derive(Debug)]
pub struct Elevator {
    /// Position + task slot.  The task slot holds door-open dwells; while it
    /// is occupied the motion integrator is suspended.
    pub mobile: Mobile,

    acceleration: f64,
    deceleration: f64,
    max_speed:    f64,

    floor_count:  usize,
    floor_height: f64,

    destination_y: f64,
    velocity_y:    f64,
    /// Set by `go_to_floor`, cleared by the arrival snap.  Needed so that a
    /// command to the *same* floor still re-fires the arrival events.
    is_moving:     bool,

    going_up_indicator:   bool,
    going_down_indicator: bool,

    current_floor: usize,
    /// Truncated "floor if we braked to a stop right now" from the previous
    /// position change — the edge detector behind `PassingFloor`.
    previous_trunc_future_floor: i64,

    button_states: Vec<bool>,
    move_count:    u64,

    slots: Vec<Option<Occupant>>,

    events: Vec<ElevatorEvent>,
}

impl Elevator {
    /// Build an elevator parked at floor 0 with both indicators lit.
    pub fn new(
        speed_floors_per_sec: f64,
        floor_count:          usize,
        floor_height:         f64,
        capacity:             usize,
    ) -> Self {
        let mut elevator = Self {
            mobile:        Mobile::new(),
            acceleration:  floor_height * 2.1,
            deceleration:  floor_height * 2.6,
            max_speed:     floor_height * speed_floors_per_sec,
            floor_count,
            floor_height,
            destination_y: 0.0,
            velocity_y:    0.0,
            is_moving:     false,

            going_up_indicator:   true,
            going_down_indicator: true,

            current_floor:               0,
            previous_trunc_future_floor: 0,
            button_states:               vec![false; floor_count],
            move_count:                  0,
            slots:                       vec![None; capacity],
            events:                      Vec::new(),
        };
        elevator.set_floor_position(0);
        elevator
    }

    // ── Placement & commands ──────────────────────────────────────────────

    /// Teleport to `floor` and make it the resting destination.
    pub fn set_floor_position(&mut self, floor: usize) {
        let destination = self.y_of_floor(floor as f64);
        self.current_floor = floor;
        self.previous_trunc_future_floor = floor as i64;
        self.destination_y = destination;
        self.set_y(destination);
    }

    /// Begin travelling to `floor`.
    ///
    /// Errors if a task (dwell) occupies the slot — callers must check
    /// `is_busy()` first.
    pub fn go_to_floor(&mut self, floor: usize) -> MotionResult<()> {
        self.go_to_exact_floor(floor as f64)
    }

    /// Begin travelling to a possibly fractional floor position.  Used by
    /// the destination scheduler's `stop()`, which retargets the car to its
    /// projected stopping point so it always has a concrete destination.
    pub fn go_to_exact_floor(&mut self, floor: f64) -> MotionResult<()> {
        if self.mobile.is_busy() {
            return Err(crate::MotionError::Busy);
        }
        self.is_moving = true;
        self.destination_y = self.y_of_floor(floor);
        Ok(())
    }

    /// Schedule a door-open dwell.  Motion stays suspended until it elapses.
    pub fn start_dwell(&mut self, duration: f64) -> MotionResult<()> {
        self.mobile.start_wait(duration)
    }

    /// Advance the dwell task; `true` when it completed this tick.
    pub fn advance_task(&mut self, dt: f64) -> bool {
        self.mobile.advance_task(dt)
    }

    // ── Motion integration ────────────────────────────────────────────────

    /// One integration step.  No-op while a dwell task is active.
    pub fn update_movement(&mut self, dt: f64) {
        if self.mobile.is_busy() {
            return;
        }

        // Make sure we're not speeding.
        self.velocity_y = clamp_number(self.velocity_y, -self.max_speed, self.max_speed);

        self.set_y(self.mobile.y + self.velocity_y * dt);

        let destination_diff = self.destination_y - self.mobile.y;
        let direction_sign = sign(destination_diff);
        let velocity_sign = sign(self.velocity_y);
        if destination_diff != 0.0 {
            if direction_sign == velocity_sign {
                // Moving in the correct direction.
                let distance_needed_to_stop =
                    distance_needed_to_achieve_speed(self.velocity_y, 0.0, self.deceleration);
                if distance_needed_to_stop * 1.05 < -destination_diff.abs() {
                    // Brake.  Allow a factor of extra braking so the stop
                    // stays smooth after an overshoot is detected.
                    let required_deceleration = acceleration_needed_to_achieve_change_distance(
                        self.velocity_y,
                        0.0,
                        destination_diff,
                    );
                    let deceleration =
                        (self.deceleration * 1.1).min(required_deceleration.abs());
                    self.velocity_y -= direction_sign * deceleration * dt;
                } else {
                    // Speed up (or hold max speed).
                    let acceleration = (destination_diff.abs() * 5.0).min(self.acceleration);
                    self.velocity_y += direction_sign * acceleration * dt;
                }
            } else if velocity_sign == 0.0 {
                // Standing still — accelerate toward the destination.
                let acceleration = (destination_diff.abs() * 5.0).min(self.acceleration);
                self.velocity_y += direction_sign * acceleration * dt;
            } else {
                // Moving the wrong way — decelerate as hard as allowed, and
                // never flip direction within one step; the standstill branch
                // handles the turnaround next tick.
                self.velocity_y -= velocity_sign * self.deceleration * dt;
                if sign(self.velocity_y) != velocity_sign {
                    self.velocity_y = 0.0;
                }
            }
        }

        if self.is_moving && destination_diff.abs() < 0.5 && self.velocity_y.abs() < 3.0 {
            // Snap to the destination and settle.
            self.set_y(self.destination_y);
            self.velocity_y = 0.0;
            self.is_moving = false;
            self.handle_destination_arrival();
        }
    }

    fn handle_destination_arrival(&mut self) {
        self.events.push(ElevatorEvent::Stopped {
            exact_floor: self.exact_current_floor(),
        });

        if self.is_on_a_floor() {
            self.button_states[self.current_floor] = false;
            self.events.push(ElevatorEvent::StoppedAtFloor { floor: self.current_floor });
            // Riders must get off before waiting users claim slots on the
            // same floor in the same tick: exit strictly precedes entrance.
            self.events.push(ElevatorEvent::ExitAvailable { floor: self.current_floor });
            self.events.push(ElevatorEvent::EntranceAvailable);
        }
    }

    /// Update position and run the floor-crossing detector.
    fn set_y(&mut self, y: f64) {
        self.mobile.y = y;
        self.handle_position_changed();
    }

    /// Recompute the rounded floor and the stopped-floor projection, firing
    /// `NewCurrentFloor` / `PassingFloor` on edges.
    ///
    /// Known simplification, kept deliberately: at most one `PassingFloor`
    /// fires per position change even if the step crossed several floors.
    /// Step sizes are small relative to floor height in practice.
    fn handle_position_changed(&mut self) {
        let rounded = self.rounded_current_floor();
        if rounded != self.current_floor {
            self.move_count += 1;
            self.current_floor = rounded;
            self.events.push(ElevatorEvent::NewCurrentFloor { floor: rounded });
        }

        let future_trunc = self.exact_future_floor_if_stopped().trunc() as i64;
        if future_trunc != self.previous_trunc_future_floor {
            let floor_being_passed = self.exact_future_floor_if_stopped().round();
            // Never announce the destination floor itself — we are not going
            // to pass it, at least not intentionally.
            let is_destination =
                (self.destination_floor() - floor_being_passed).abs() < 1e-9;
            let in_range = floor_being_passed >= 0.0
                && (floor_being_passed as usize) < self.floor_count;
            if !is_destination && in_range && self.is_approaching_floor(floor_being_passed) {
                let direction = if self.velocity_y > 0.0 {
                    Direction::Down
                } else {
                    Direction::Up
                };
                self.events.push(ElevatorEvent::PassingFloor {
                    floor: floor_being_passed as usize,
                    direction,
                });
            }
        }
        self.previous_trunc_future_floor = future_trunc;
    }

    // ── Buttons & boarding slots ──────────────────────────────────────────

    /// Press the in-car destination button for `floor` (clamped).  Fires an
    /// event only on the false→true transition.
    pub fn press_floor_button(&mut self, floor: usize) {
        let floor = floor.min(self.floor_count - 1);
        let prev = self.button_states[floor];
        self.button_states[floor] = true;
        if !prev {
            self.events.push(ElevatorEvent::FloorButtonPressed { floor });
        }
    }

    /// Claim a free boarding slot for `user`.
    ///
    /// The starting slot is randomized so riders don't pile into slot 0.
    /// Returns the slot index and its car-relative position, or `None` when
    /// the car is full.
    pub fn user_entering(
        &mut self,
        user:   UserId,
        weight: f64,
        rng:    &mut SimRng,
    ) -> Option<(usize, (f64, f64))> {
        let count = self.slots.len();
        let random_offset = rng.gen_range(0..count);
        for i in 0..count {
            let slot = (i + random_offset) % count;
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(Occupant { user, weight });
                return Some((slot, Self::slot_position(slot)));
            }
        }
        None
    }

    /// Release whichever slot `user` holds.
    pub fn user_exiting(&mut self, user: UserId) {
        for slot in &mut self.slots {
            if slot.map(|o| o.user) == Some(user) {
                *slot = None;
            }
        }
    }

    /// Car-relative position of boarding slot `i`.
    fn slot_position(i: usize) -> (f64, f64) {
        (2.0 + i as f64 * 10.0, 30.0)
    }

    /// Destination floors with a lit button, ascending.
    pub fn pressed_floors(&self) -> Vec<usize> {
        self.button_states
            .iter()
            .enumerate()
            .filter_map(|(i, &pressed)| pressed.then_some(i))
            .collect()
    }

    /// Σ occupant weights / (slot count × 100) — normalized 0..1 occupancy.
    pub fn load_factor(&self) -> f64 {
        let load: f64 = self.slots.iter().flatten().map(|o| o.weight).sum();
        load / (self.slots.len() as f64 * 100.0)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|s| s.is_none())
    }

    // ── Indicators ────────────────────────────────────────────────────────

    pub fn going_up_indicator(&self) -> bool {
        self.going_up_indicator
    }

    pub fn going_down_indicator(&self) -> bool {
        self.going_down_indicator
    }

    pub fn set_going_up_indicator(&mut self, on: bool) {
        self.going_up_indicator = on;
    }

    pub fn set_going_down_indicator(&mut self, on: bool) {
        self.going_down_indicator = on;
    }

    /// Would a rider travelling `from → to` accept this car, judging by the
    /// direction indicators?
    pub fn is_suitable_for_travel_between(&self, from: usize, to: usize) -> bool {
        if from > to {
            return self.going_down_indicator;
        }
        if from < to {
            return self.going_up_indicator;
        }
        true
    }

    // ── Floor geometry ────────────────────────────────────────────────────

    /// y position of a (possibly fractional) floor number.
    pub fn y_of_floor(&self, floor: f64) -> f64 {
        (self.floor_count - 1) as f64 * self.floor_height - floor * self.floor_height
    }

    /// Fractional floor number of a y position.
    pub fn exact_floor_of_y(&self, y: f64) -> f64 {
        ((self.floor_count - 1) as f64 * self.floor_height - y) / self.floor_height
    }

    pub fn exact_current_floor(&self) -> f64 {
        self.exact_floor_of_y(self.mobile.y)
    }

    /// Fractional floor number of the current destination.
    pub fn destination_floor(&self) -> f64 {
        self.exact_floor_of_y(self.destination_y)
    }

    pub fn rounded_current_floor(&self) -> usize {
        (self.exact_current_floor().round() as i64).clamp(0, self.floor_count as i64 - 1) as usize
    }

    /// Where the car would stop if it braked at full deceleration right now.
    pub fn exact_future_floor_if_stopped(&self) -> f64 {
        let distance_needed_to_stop =
            distance_needed_to_achieve_speed(self.velocity_y, 0.0, self.deceleration);
        self.exact_floor_of_y(self.mobile.y - sign(self.velocity_y) * distance_needed_to_stop)
    }

    /// Is the car moving *toward* `floor` (as opposed to past or away)?
    pub fn is_approaching_floor(&self, floor: f64) -> bool {
        let floor_y = self.y_of_floor(floor);
        let to_floor = floor_y - self.mobile.y;
        self.velocity_y != 0.0 && sign(self.velocity_y) == sign(to_floor)
    }

    /// Exactly aligned with an integer floor (within epsilon)?
    pub fn is_on_a_floor(&self) -> bool {
        epsilon_equals(self.exact_current_floor(), self.rounded_current_floor() as f64)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.mobile.is_busy()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    #[inline]
    pub fn current_floor(&self) -> usize {
        self.current_floor
    }

    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floor_count
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity_y
    }

    #[inline]
    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Whether `floor`'s in-car button is lit.
    pub fn button_state(&self, floor: usize) -> bool {
        self.button_states.get(floor).copied().unwrap_or(false)
    }

    /// World position of the car (elevators are world-rooted).
    pub fn position(&self) -> (f64, f64) {
        (self.mobile.x, self.mobile.y)
    }

    /// Drain this tick's buffered events.
    pub fn take_events(&mut self) -> Vec<ElevatorEvent> {
        std::mem::take(&mut self.events)
    }
}
