//! `Mobile` — parent-relative position plus the cooperative task slot.
//!
//! A `Mobile` is positioned relative to its parent (a rider inside an
//! elevator car moves with the car for free).  The parent link is a
//! non-owning [`ElevatorId`] handle: the world resolves it lazily when a
//! world position is needed, and an elevator never owns its riders'
//! lifetimes.

use lift_core::{ElevatorId, Interpolation};

use crate::{MotionError, MotionResult, Task};

/// A positionable entity with an optional parent and at most one scheduled
/// task.
///
/// Invariant: the entity is *busy* iff a task is present.  Starting a task
/// while busy is a programming error and returns [`MotionError::Busy`].
#[derive(Debug, Default)]
pub struct Mobile {
    /// Horizontal position, relative to the parent (or the world if none).
    pub x: f64,
    /// Vertical position, relative to the parent.  y grows downward.
    pub y: f64,

    parent: Option<ElevatorId>,
    task:   Option<Task>,
}

impl Mobile {
    pub fn new() -> Self {
        Self::default()
    }

    /// The parent elevator, if this entity is currently riding one.
    #[inline]
    pub fn parent(&self) -> Option<ElevatorId> {
        self.parent
    }

    /// `true` while a task occupies the slot.
    #[inline]
    pub fn is_busy(&self) -> bool {
        self.task.is_some()
    }

    fn ensure_not_busy(&self) -> MotionResult<()> {
        if self.is_busy() {
            return Err(MotionError::Busy);
        }
        Ok(())
    }

    /// Schedule a pure delay.
    pub fn start_wait(&mut self, duration: f64) -> MotionResult<()> {
        self.ensure_not_busy()?;
        self.task = Some(Task::wait(duration));
        Ok(())
    }

    /// Schedule a tween from the current position to `to` (parent-relative).
    pub fn start_tween(
        &mut self,
        to:       (f64, f64),
        duration: f64,
        interp:   Interpolation,
    ) -> MotionResult<()> {
        self.ensure_not_busy()?;
        self.task = Some(Task::tween((self.x, self.y), to, duration, interp));
        Ok(())
    }

    /// Advance the scheduled task (if any) by `dt`.
    ///
    /// Returns `true` when a task completed this tick; the slot is freed
    /// before returning so the owner's completion handler may schedule a
    /// follow-up task immediately.
    pub fn advance_task(&mut self, dt: f64) -> bool {
        let Some(task) = self.task.as_mut() else {
            return false;
        };
        let done = task.advance(dt, &mut self.x, &mut self.y);
        if done {
            self.task = None;
        }
        done
    }

    /// World position, given the parent's world position (or `None` if
    /// unparented).  The caller resolves the parent handle; depth is one
    /// because elevators are always world-rooted.
    pub fn world_position(&self, parent_pos: Option<(f64, f64)>) -> (f64, f64) {
        match parent_pos {
            Some((px, py)) => (self.x + px, self.y + py),
            None           => (self.x, self.y),
        }
    }

    /// Reparent onto `parent`, preserving world position: the stored
    /// coordinates become relative to `parent_pos`.
    ///
    /// Attaching is only legal from an unparented state, so `(x, y)` is
    /// already a world position.
    pub fn attach(&mut self, parent: ElevatorId, parent_pos: (f64, f64)) {
        debug_assert!(self.parent.is_none());
        self.parent = Some(parent);
        self.x -= parent_pos.0;
        self.y -= parent_pos.1;
    }

    /// Drop the parent link, preserving world position: the stored
    /// coordinates become absolute again.
    pub fn detach(&mut self, parent_pos: (f64, f64)) {
        if self.parent.take().is_some() {
            self.x += parent_pos.0;
            self.y += parent_pos.1;
        }
    }
}
