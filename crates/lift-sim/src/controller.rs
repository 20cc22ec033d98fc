//! `WorldController` — the frame loop gluing a host clock, a world, and a
//! control program together.
//!
//! The controller owns no simulation state; it turns raw host timestamps
//! into capped, scaled `dt`s, runs the world's physics *before* the control
//! program each frame (programs observe settled state), and fences every
//! program call so a fault pauses the run instead of corrupting it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lift_control::{ControlContext, ControlError, ControlProgram, ControlResult, dispatch_event};

use crate::SimObserver;
use crate::challenge::ChallengeStatus;
use crate::frame::FrameSource;
use crate::world::World;

/// Frame-loop driver for one world + control program pair.
pub struct WorldController {
    /// Largest real-time delta accepted per frame; a stalled host clock
    /// (breakpoint, laptop lid) must not turn into one giant physics step.
    dt_max:      f64,
    time_scale:  f64,
    paused:      bool,
    last_t:      Option<f64>,
    initialized: bool,
}

impl WorldController {
    pub fn new(dt_max: f64) -> Self {
        Self {
            dt_max,
            time_scale:  1.0,
            paused:      false,
            last_t:      None,
            initialized: false,
        }
    }

    /// Simulated seconds per real second.  Takes effect on the next frame.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.time_scale = scale;
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Process one host frame at timestamp `t` (seconds, monotonic).
    ///
    /// The first frame only records the baseline; paused and post-verdict
    /// frames keep the baseline fresh so unpausing doesn't produce a jump.
    pub fn on_frame<P, O>(&mut self, t: f64, world: &mut World, program: &mut P, observer: &mut O)
    where
        P: ControlProgram,
        O: SimObserver,
    {
        let Some(last) = self.last_t.replace(t) else {
            return;
        };
        if self.paused || world.challenge_ended() {
            return;
        }
        let dt = (t - last).min(self.dt_max) * self.time_scale;

        if !self.initialized {
            self.initialized = true;
            if !self.guarded(world, program, observer, |p, ctx| p.init(ctx)) {
                return;
            }
        }

        world.update(dt, observer);

        if !self.guarded(world, program, observer, |p, ctx| p.update(dt, ctx)) {
            return;
        }
        world.flush_events(observer);

        // Route buffered events through the program hooks.  Hooks may raise
        // further events (queueing work, re-checking queues), so loop until
        // the outbox stays empty.
        loop {
            let events = world.take_program_events();
            if events.is_empty() {
                break;
            }
            for event in &events {
                if !self.guarded(world, program, observer, |p, ctx| dispatch_event(p, event, ctx))
                {
                    return;
                }
            }
            world.flush_events(observer);
        }

        if world.take_stats_dirty() {
            observer.on_stats(world.stats());
            let status = world.evaluate_challenge();
            if status != ChallengeStatus::InProgress {
                world.set_challenge_ended(true);
                self.paused = true;
                observer.on_challenge_end(status == ChallengeStatus::Succeeded, world.stats());
            }
        }

        observer.on_tick_end(world.stats().elapsed_time);
    }

    /// Pump frames from `frames` until the source ends or the challenge
    /// reaches a verdict.
    pub fn run<S, P, O>(
        &mut self,
        frames:   &mut S,
        world:    &mut World,
        program:  &mut P,
        observer: &mut O,
    ) where
        S: FrameSource,
        P: ControlProgram,
        O: SimObserver,
    {
        while let Some(t) = frames.next_timestamp() {
            self.on_frame(t, world, program, observer);
            if world.challenge_ended() {
                break;
            }
        }
    }

    /// Run one control-program call behind a panic fence.
    ///
    /// Returns `false` on a fault, after reporting it and pausing; the
    /// caller abandons the rest of the frame.  The pause is permanent as far
    /// as the controller is concerned — faulty programs don't get resumed.
    fn guarded<P, O, F>(
        &mut self,
        world:    &mut World,
        program:  &mut P,
        observer: &mut O,
        call:     F,
    ) -> bool
    where
        P: ControlProgram,
        O: SimObserver,
        F: FnOnce(&mut P, &mut ControlContext<'_>) -> ControlResult<()>,
    {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut ctx = world.control_context();
            call(program, &mut ctx)
        }));
        let fault = match outcome {
            Ok(Ok(())) => return true,
            Ok(Err(fault)) => fault,
            Err(payload) => ControlError::Panicked(panic_message(payload)),
        };
        observer.on_usercode_error(&fault);
        self.paused = true;
        false
    }
}

/// Best-effort extraction of a panic payload's message.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}
