//! Frame sources — where the controller's timestamps come from.

/// A host loop abstracted to a stream of monotonic timestamps (seconds).
pub trait FrameSource {
    /// The next frame's timestamp, or `None` when the host loop ends.
    fn next_timestamp(&mut self) -> Option<f64>;
}

/// A synthetic frame source ticking at a fixed step for a bounded number of
/// frames.  This is how tests and headless runs drive the controller.
pub struct FixedStepFrames {
    step:      f64,
    remaining: usize,
    now:       f64,
}

impl FixedStepFrames {
    pub fn new(step: f64, frames: usize) -> Self {
        Self { step, remaining: frames, now: 0.0 }
    }
}

impl FrameSource for FixedStepFrames {
    fn next_timestamp(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let t = self.now;
        self.now += self.step;
        Some(t)
    }
}
