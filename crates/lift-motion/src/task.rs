//! `Task` — the single-slot cooperative animation state machine.
//!
//! A task is the only way an actor suspends itself: boarding walks, exit
//! drifts, and door-open dwells are all tasks.  A task is advanced exactly
//! once per world tick via `advance(dt)`; what completion *means* is decided
//! by the owner's state machine, not by the task itself.  There is no
//! cancellation — tasks run to natural completion.

use lift_core::Interpolation;

/// What a scheduled task does while it runs.
#[derive(Clone, Debug, PartialEq)]
pub enum TaskKind {
    /// Do nothing for the duration (door-open dwell).  Completes strictly
    /// *after* the duration has elapsed.
    Wait,

    /// Slide from `from` to `to` over the duration, easing with `interp`.
    /// Completes the tick the accumulated time reaches the duration, and
    /// snaps the position to `to` exactly.
    Tween {
        from:   (f64, f64),
        to:     (f64, f64),
        interp: Interpolation,
    },
}

/// One scheduled task: accumulated time plus its kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    elapsed:  f64,
    duration: f64,
    kind:     TaskKind,
}

impl Task {
    /// A pure delay of `duration` time units.
    pub fn wait(duration: f64) -> Self {
        Self { elapsed: 0.0, duration, kind: TaskKind::Wait }
    }

    /// A positional tween from `from` to `to` over `duration` time units.
    pub fn tween(from: (f64, f64), to: (f64, f64), duration: f64, interp: Interpolation) -> Self {
        Self {
            elapsed: 0.0,
            duration,
            kind: TaskKind::Tween { from, to, interp },
        }
    }

    /// Advance by `dt`, updating the owner's position for tweens.
    ///
    /// Returns `true` when the task completed this step.
    pub fn advance(&mut self, dt: f64, x: &mut f64, y: &mut f64) -> bool {
        match self.kind {
            TaskKind::Wait => {
                self.elapsed += dt;
                self.elapsed > self.duration
            }
            TaskKind::Tween { from, to, interp } => {
                self.elapsed = self.duration.min(self.elapsed + dt);
                if self.elapsed >= self.duration {
                    *x = to.0;
                    *y = to.1;
                    true
                } else {
                    let factor = self.elapsed / self.duration;
                    *x = interp.apply(from.0, to.0, factor);
                    *y = interp.apply(from.1, to.1, factor);
                    false
                }
            }
        }
    }
}
