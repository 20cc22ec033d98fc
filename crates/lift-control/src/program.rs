//! `ControlProgram` — the contract user scheduling code implements.
//!
//! The world collects notable happenings into [`ProgramEvent`]s during each
//! tick and the controller routes them through the matching hook after the
//! program's `update`.  All hooks default to doing nothing, so a minimal
//! program only implements `update` (or even leaves that empty and reacts
//! purely to events).

use lift_motion::Direction;

use crate::{ControlContext, ControlResult};

/// An event routed to a control program, identifying entities by index into
/// the context's elevator/floor lists.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgramEvent {
    /// The elevator's destination queue ran empty.
    Idle { elevator: usize },

    /// A rider pressed a destination button inside the elevator.
    FloorButton { elevator: usize, floor: usize },

    /// The elevator is about to pass `floor` without stopping.
    PassingFloor {
        elevator:  usize,
        floor:     usize,
        direction: Direction,
    },

    /// The elevator settled aligned with `floor`.
    StoppedAtFloor { elevator: usize, floor: usize },

    /// Someone pressed a call button on a floor.
    CallButton { floor: usize, direction: Direction },
}

/// User-supplied scheduling logic.
///
/// Hooks run single-threaded within the tick; a returned error (or a panic,
/// which the controller catches) pauses the simulation permanently.
pub trait ControlProgram {
    /// Runs once before the first update.
    fn init(&mut self, ctx: &mut ControlContext<'_>) -> ControlResult<()> {
        let _ = ctx;
        Ok(())
    }

    /// Runs every tick after the world's physics update.
    fn update(&mut self, dt: f64, ctx: &mut ControlContext<'_>) -> ControlResult<()>;

    fn on_idle(&mut self, elevator: usize, ctx: &mut ControlContext<'_>) -> ControlResult<()> {
        let _ = (elevator, ctx);
        Ok(())
    }

    fn on_floor_button(
        &mut self,
        elevator: usize,
        floor:    usize,
        ctx:      &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        let _ = (elevator, floor, ctx);
        Ok(())
    }

    fn on_passing_floor(
        &mut self,
        elevator:  usize,
        floor:     usize,
        direction: Direction,
        ctx:       &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        let _ = (elevator, floor, direction, ctx);
        Ok(())
    }

    fn on_stopped_at_floor(
        &mut self,
        elevator: usize,
        floor:    usize,
        ctx:      &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        let _ = (elevator, floor, ctx);
        Ok(())
    }

    fn on_call_button(
        &mut self,
        floor:     usize,
        direction: Direction,
        ctx:       &mut ControlContext<'_>,
    ) -> ControlResult<()> {
        let _ = (floor, direction, ctx);
        Ok(())
    }
}

/// Route one event to the matching hook.
pub fn dispatch_event<P: ControlProgram + ?Sized>(
    program: &mut P,
    event:   &ProgramEvent,
    ctx:     &mut ControlContext<'_>,
) -> ControlResult<()> {
    match *event {
        ProgramEvent::Idle { elevator } => program.on_idle(elevator, ctx),
        ProgramEvent::FloorButton { elevator, floor } => {
            program.on_floor_button(elevator, floor, ctx)
        }
        ProgramEvent::PassingFloor { elevator, floor, direction } => {
            program.on_passing_floor(elevator, floor, direction, ctx)
        }
        ProgramEvent::StoppedAtFloor { elevator, floor } => {
            program.on_stopped_at_floor(elevator, floor, ctx)
        }
        ProgramEvent::CallButton { floor, direction } => {
            program.on_call_button(floor, direction, ctx)
        }
    }
}
