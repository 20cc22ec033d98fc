//! `Scheduler` — the destination queue sitting between control programs and
//! the raw elevator.
//!
//! Control programs never command an elevator directly; they append floors to
//! this queue and the scheduler keeps the car pointed at the queue head.  The
//! head is issued without being popped (re-issuing the same destination is
//! harmless), and is popped only when the car settles at it.

use std::collections::VecDeque;

use lift_core::epsilon_equals;
use lift_motion::Elevator;

/// Time units the doors stay open after settling on a floor, before the
/// next queued destination is dispatched.
const ARRIVAL_DWELL: f64 = 1.0;

/// Events emitted by a [`Scheduler`] for the control program's benefit.
#[derive(Clone, Debug, PartialEq)]
pub enum FacadeEvent {
    /// The destination queue ran empty while the elevator was available.
    /// Fires on every queue check that finds nothing to do, so an ignored
    /// idle elevator keeps announcing itself.
    Idle,
}

/// Destination queue and dispatch logic for one elevator.
///
/// The scheduler holds no reference to its elevator; every operation takes
/// `&mut Elevator` so that the world can own both in parallel vectors.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue:  VecDeque<usize>,
    events: Vec<FacadeEvent>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `floor` to the destination queue (or prepend with
    /// `force_now`), then re-check dispatch.
    ///
    /// The floor is clamped into the building rather than rejected, and a
    /// destination equal to its would-be queue neighbor is dropped silently
    /// (pressing the same button twice should not queue two stops).
    pub fn enqueue(&mut self, elevator: &mut Elevator, floor: usize, force_now: bool) {
        let floor = floor.min(elevator.floor_count() - 1);

        let adjacent = if force_now {
            self.queue.front()
        } else {
            self.queue.back()
        };
        if adjacent != Some(&floor) {
            if force_now {
                self.queue.push_front(floor);
            } else {
                self.queue.push_back(floor);
            }
        }
        self.try_dispatch(elevator);
    }

    /// Point the elevator at the queue head, or announce idleness.
    ///
    /// The head stays in the queue until the car settles at it; re-issuing
    /// it to a car already en route merely retargets the same destination.
    /// Does nothing while a dwell task occupies the elevator.
    pub fn try_dispatch(&mut self, elevator: &mut Elevator) {
        if elevator.is_busy() {
            return;
        }
        match self.queue.front() {
            Some(&floor) => {
                // Cannot fail: the busy check above is the only error path.
                let _ = elevator.go_to_floor(floor);
            }
            None => self.events.push(FacadeEvent::Idle),
        }
    }

    /// Handle the elevator's settling event.
    ///
    /// If the queue head matches where the car stopped, pop it and hold the
    /// doors open for [`ARRIVAL_DWELL`] before the next dispatch; the world
    /// calls [`on_dwell_complete`][Self::on_dwell_complete] when the dwell
    /// elapses.  A stop between floors (from [`stop`][Self::stop]) re-checks
    /// the queue immediately.
    pub fn on_stopped(&mut self, elevator: &mut Elevator, exact_floor: f64) {
        let head_reached = self
            .queue
            .front()
            .is_some_and(|&head| epsilon_equals(head as f64, exact_floor));
        if !head_reached {
            return;
        }
        self.queue.pop_front();
        if elevator.is_on_a_floor() {
            // Cannot fail: the car just settled, so its task slot is free.
            let _ = elevator.start_dwell(ARRIVAL_DWELL);
        } else {
            self.try_dispatch(elevator);
        }
    }

    /// The arrival dwell elapsed; resume dispatching.
    pub fn on_dwell_complete(&mut self, elevator: &mut Elevator) {
        self.try_dispatch(elevator);
    }

    /// Clear the queue and brake.
    ///
    /// The car is retargeted to its projected stopping point so it always
    /// has a concrete destination, which may be between floors.
    pub fn stop(&mut self, elevator: &mut Elevator) {
        self.queue.clear();
        if !elevator.is_busy() {
            let _ = elevator.go_to_exact_floor(elevator.exact_future_floor_if_stopped());
        }
    }

    /// The queued destinations, head first.
    pub fn destination_queue(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Drain this tick's buffered events.
    pub fn take_events(&mut self) -> Vec<FacadeEvent> {
        std::mem::take(&mut self.events)
    }
}
