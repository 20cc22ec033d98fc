//! Motion events — plain data pushed by actors and drained by the world.

use std::fmt;

/// Vertical travel direction.
///
/// Note the coordinate system is screen-like (y grows downward), so an
/// elevator travelling *up* has negative velocity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up   => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Events emitted by an [`Elevator`][crate::Elevator] during movement and
/// arrival handling.
///
/// Ordering inside the buffer is meaningful: on arrival at a floor the
/// elevator pushes `Stopped`, `StoppedAtFloor`, `ExitAvailable`,
/// `EntranceAvailable` in exactly that order, so riders leaving free their
/// boarding slots before waiting users claim them in the same tick.
#[derive(Clone, Debug, PartialEq)]
pub enum ElevatorEvent {
    /// The elevator settled at its destination (possibly between floors).
    /// Consumed by the destination scheduler; never shown to control code.
    Stopped { exact_floor: f64 },

    /// The elevator settled exactly aligned with `floor`.
    StoppedAtFloor { floor: usize },

    /// Riders whose destination is `floor` may leave now.
    ExitAvailable { floor: usize },

    /// Boarding slots may be claimed by users waiting on the current floor.
    EntranceAvailable,

    /// The rounded current floor changed while moving.
    NewCurrentFloor { floor: usize },

    /// The elevator is about to pass `floor` without stopping there.
    PassingFloor { floor: usize, direction: Direction },

    /// An in-elevator destination button transitioned to pressed.
    FloorButtonPressed { floor: usize },
}

/// Events emitted by a [`Floor`][crate::Floor]'s call buttons.
#[derive(Clone, Debug, PartialEq)]
pub enum FloorEvent {
    /// An up or down call button transitioned to pressed.
    CallButtonPressed { floor: usize, direction: Direction },
}
