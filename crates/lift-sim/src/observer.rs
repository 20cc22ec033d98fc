//! Simulation observer trait for progress reporting and data collection.

use lift_control::ControlError;
use lift_core::UserId;

use crate::WorldStats;

/// Callbacks invoked by the world and the
/// [`WorldController`][crate::WorldController] at key points in the frame
/// loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait SimObserver {
    /// Called at the end of every simulated frame with the elapsed world
    /// time.
    fn on_tick_end(&mut self, _elapsed: f64) {}

    /// A new user appeared on `floor`, bound for `destination`.
    fn on_user_spawned(&mut self, _user: UserId, _floor: usize, _destination: usize) {}

    /// A user reached their destination after waiting `wait_time` in total.
    fn on_user_transported(&mut self, _user: UserId, _wait_time: f64) {}

    /// The running statistics changed this frame.
    fn on_stats(&mut self, _stats: &WorldStats) {}

    /// The control program faulted; the controller has paused permanently.
    fn on_usercode_error(&mut self, _error: &ControlError) {}

    /// The challenge reached a verdict.
    fn on_challenge_end(&mut self, _succeeded: bool, _stats: &WorldStats) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to drive a world
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
