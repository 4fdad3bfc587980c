//! Time management utilities
//!
//! The engine never reads a wall clock during a frame. The host measures the
//! frame and hands a [`FrameTime`] to the scene, which makes every update
//! pass reproducible in tests.

use std::time::Duration;

/// Time elapsed since the previous frame, supplied by the host loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameTime {
    delta: Duration,
}

impl FrameTime {
    /// Create a frame time from a duration
    pub const fn new(delta: Duration) -> Self {
        Self { delta }
    }

    /// Create a frame time from seconds (negative and NaN inputs become zero)
    pub fn from_secs_f32(seconds: f32) -> Self {
        Self::new(Duration::try_from_secs_f32(seconds).unwrap_or(Duration::ZERO))
    }

    /// Create a frame time from whole milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Get the time since the last frame
    pub const fn delta(&self) -> Duration {
        self.delta
    }

    /// Get the time since the last frame in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

/// Run state of a [`Countdown`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Not counting; `advance` has no effect
    Idle,
    /// Counting down towards zero
    Running,
    /// Reached zero and fired; stays here until re-activated
    Finished,
}

/// Countdown that fires exactly once per activation
///
/// `advance` returns `true` on the single call that brings the remaining
/// time to zero. Further calls return `false` until [`Countdown::activate`]
/// is called again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: Duration,
    remaining: Duration,
    state: CountdownState,
}

impl Countdown {
    /// Create an idle countdown
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            remaining: duration,
            state: CountdownState::Idle,
        }
    }

    /// Create an idle countdown from milliseconds
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Start (or restart) counting from the full duration
    pub fn activate(&mut self) {
        self.remaining = self.duration;
        self.state = CountdownState::Running;
    }

    /// Stop counting without firing
    pub fn deactivate(&mut self) {
        self.state = CountdownState::Idle;
    }

    /// Advance by `delta`; returns `true` only on the call that completes it
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(delta);
        if self.remaining.is_zero() {
            self.state = CountdownState::Finished;
            true
        } else {
            false
        }
    }

    /// Current state
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    /// Whether the countdown is running
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Time left before firing
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Full duration of one activation
    pub const fn duration(&self) -> Duration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_time_from_seconds() {
        let time = FrameTime::from_secs_f32(0.5);
        assert_relative_eq!(time.delta_secs(), 0.5);
        assert_eq!(time.delta(), Duration::from_millis(500));
    }

    #[test]
    fn test_frame_time_rejects_negative() {
        assert_eq!(FrameTime::from_secs_f32(-1.0).delta(), Duration::ZERO);
        assert_eq!(FrameTime::from_secs_f32(f32::NAN).delta(), Duration::ZERO);
    }

    #[test]
    fn test_countdown_fires_once_on_exact_sum() {
        let mut countdown = Countdown::from_millis(1000);
        countdown.activate();

        let fired: Vec<bool> = (0..4).map(|_| countdown.advance(Duration::from_millis(250))).collect();
        assert_eq!(fired, vec![false, false, false, true]);

        // Past the deadline nothing fires again
        assert!(!countdown.advance(Duration::from_millis(250)));
        assert!(!countdown.advance(Duration::from_millis(250)));
        assert_eq!(countdown.state(), CountdownState::Finished);
    }

    #[test]
    fn test_countdown_overshoot_fires_once() {
        let mut countdown = Countdown::from_millis(100);
        countdown.activate();
        assert!(countdown.advance(Duration::from_millis(160)));
        assert!(!countdown.advance(Duration::from_millis(160)));
    }

    #[test]
    fn test_idle_countdown_never_fires() {
        let mut countdown = Countdown::from_millis(10);
        assert!(!countdown.advance(Duration::from_secs(1)));
        assert_eq!(countdown.state(), CountdownState::Idle);
    }

    #[test]
    fn test_reactivation_fires_again() {
        let mut countdown = Countdown::from_millis(10);
        countdown.activate();
        assert!(countdown.advance(Duration::from_millis(10)));

        countdown.activate();
        assert_eq!(countdown.remaining(), Duration::from_millis(10));
        assert!(countdown.advance(Duration::from_millis(10)));
    }

    #[test]
    fn test_deactivate_stops_without_firing() {
        let mut countdown = Countdown::from_millis(10);
        countdown.activate();
        countdown.deactivate();
        assert!(!countdown.advance(Duration::from_millis(50)));
        assert!(!countdown.is_running());
    }
}
