//! `Floor` — the up/down call-button state machine for one building level.

use crate::events::{Direction, FloorEvent};

/// One building level with two latching call buttons.
///
/// A button latches on the first press and clears only when an elevator
/// whose matching direction indicator is lit becomes available at the
/// level; repeated presses while latched are silent.
#[derive(Debug)]
pub struct Floor {
    level:      usize,
    y_position: f64,

    up_pressed:   bool,
    down_pressed: bool,

    events: Vec<FloorEvent>,
}

impl Floor {
    pub fn new(level: usize, y_position: f64) -> Self {
        Self {
            level,
            y_position,
            up_pressed: false,
            down_pressed: false,
            events: Vec::new(),
        }
    }

    /// Latch the up button, firing only on the unset→pressed transition.
    pub fn press_up_button(&mut self) {
        if !self.up_pressed {
            self.up_pressed = true;
            self.events.push(FloorEvent::CallButtonPressed {
                floor:     self.level,
                direction: Direction::Up,
            });
        }
    }

    /// Latch the down button, firing only on the unset→pressed transition.
    pub fn press_down_button(&mut self) {
        if !self.down_pressed {
            self.down_pressed = true;
            self.events.push(FloorEvent::CallButtonPressed {
                floor:     self.level,
                direction: Direction::Down,
            });
        }
    }

    /// An elevator opened its doors here: clear whichever latched buttons
    /// its indicators claim to serve.
    pub fn elevator_available(&mut self, going_up: bool, going_down: bool) {
        if going_up && self.up_pressed {
            self.up_pressed = false;
        }
        if going_down && self.down_pressed {
            self.down_pressed = false;
        }
    }

    pub fn floor_num(&self) -> usize {
        self.level
    }

    pub fn y_position(&self) -> f64 {
        self.y_position
    }

    /// Where spawned users stand while waiting (slightly below the landing).
    pub fn spawn_pos_y(&self) -> f64 {
        self.y_position + 30.0
    }

    pub fn up_pressed(&self) -> bool {
        self.up_pressed
    }

    pub fn down_pressed(&self) -> bool {
        self.down_pressed
    }

    /// Drain this tick's buffered events.
    pub fn take_events(&mut self) -> Vec<FloorEvent> {
        std::mem::take(&mut self.events)
    }
}
