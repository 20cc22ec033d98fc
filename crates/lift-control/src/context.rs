//! The surfaces a control program is allowed to touch.
//!
//! A program never sees a raw [`Elevator`]: it gets an [`ElevatorHandle`]
//! that routes movement commands through the destination [`Scheduler`], plus
//! read-only access to the floors.  Everything the handle exposes is safe to
//! call at any time from any hook.

use lift_motion::{Direction, Elevator, Floor};

use crate::Scheduler;

/// One elevator as seen by a control program.
///
/// Pairs the raw car with its scheduler so that commands go through the
/// destination queue and reads come straight from the car.
pub struct ElevatorHandle<'a> {
    elevator:  &'a mut Elevator,
    scheduler: &'a mut Scheduler,
}

impl<'a> ElevatorHandle<'a> {
    pub fn new(elevator: &'a mut Elevator, scheduler: &'a mut Scheduler) -> Self {
        Self { elevator, scheduler }
    }

    /// Queue a trip to `floor`.  With `force_now` the floor jumps to the
    /// front of the queue and is served before anything already queued.
    pub fn go_to_floor(&mut self, floor: usize, force_now: bool) {
        self.scheduler.enqueue(self.elevator, floor, force_now);
    }

    /// Clear the destination queue and brake to a stop, possibly between
    /// floors.  The elevator will not announce idleness on its own
    /// afterwards; call [`check_destination_queue`][Self::check_destination_queue]
    /// to resume.
    pub fn stop(&mut self) {
        self.scheduler.stop(self.elevator);
    }

    /// Re-run the dispatch check, e.g. after editing indicator state while
    /// idle.  On an empty queue this re-announces idleness.
    pub fn check_destination_queue(&mut self) {
        self.scheduler.try_dispatch(self.elevator);
    }

    /// The floor the elevator is currently at (or nearest to while moving).
    pub fn current_floor(&self) -> usize {
        self.elevator.current_floor()
    }

    /// Destination floors whose in-elevator buttons are lit, ascending.
    pub fn pressed_floors(&self) -> Vec<usize> {
        self.elevator.pressed_floors()
    }

    /// The queued destinations, next stop first.
    pub fn destination_queue(&self) -> Vec<usize> {
        self.scheduler.destination_queue().collect()
    }

    /// Normalized load in `0.0..=1.0`; `0.0` is an empty car.
    pub fn load_factor(&self) -> f64 {
        self.elevator.load_factor()
    }

    /// Which way the elevator is headed, or `None` when it has nowhere to
    /// go.
    pub fn destination_direction(&self) -> Option<Direction> {
        let current = self.elevator.exact_current_floor();
        let destination = self.elevator.destination_floor();
        if destination == current {
            None
        } else if destination > current {
            Some(Direction::Up)
        } else {
            Some(Direction::Down)
        }
    }

    /// How many riders fit in the car.
    pub fn max_users(&self) -> usize {
        self.elevator.capacity()
    }

    pub fn going_up_indicator(&self) -> bool {
        self.elevator.going_up_indicator()
    }

    pub fn going_down_indicator(&self) -> bool {
        self.elevator.going_down_indicator()
    }

    /// Set the up indicator; waiting users only board cars whose indicator
    /// matches their direction.  Fluent, so both can be set in one chain.
    pub fn set_going_up_indicator(&mut self, on: bool) -> &mut Self {
        self.elevator.set_going_up_indicator(on);
        self
    }

    /// Set the down indicator.  Fluent.
    pub fn set_going_down_indicator(&mut self, on: bool) -> &mut Self {
        self.elevator.set_going_down_indicator(on);
        self
    }
}

/// Everything a control program may look at during one hook call: mutable
/// handles to every elevator and a read-only view of the floors.
pub struct ControlContext<'a> {
    pub elevators: Vec<ElevatorHandle<'a>>,
    pub floors:    &'a [Floor],
}

impl<'a> ControlContext<'a> {
    /// Build a context from parallel elevator/scheduler borrows.
    pub fn new(
        pairs:  impl IntoIterator<Item = (&'a mut Elevator, &'a mut Scheduler)>,
        floors: &'a [Floor],
    ) -> Self {
        Self {
            elevators: pairs
                .into_iter()
                .map(|(elevator, scheduler)| ElevatorHandle::new(elevator, scheduler))
                .collect(),
            floors,
        }
    }

    pub fn elevator_count(&self) -> usize {
        self.elevators.len()
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }
}
