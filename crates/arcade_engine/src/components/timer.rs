//! Timer component
//!
//! Wraps a [`Countdown`] with the action to take when it completes. The
//! scene ticks timers with the frame delta before the owner's behavior
//! runs; a timer fires at most once per activation.

use std::fmt;
use std::time::Duration;

use crate::foundation::time::{Countdown, CountdownState};

/// What happens when a timer completes
pub enum TimerAction {
    /// Queue the owner for removal (lifetimes)
    DestroyOwner,
    /// Run a zero-argument callback
    Invoke(Box<dyn FnMut()>),
}

impl fmt::Debug for TimerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DestroyOwner => f.write_str("DestroyOwner"),
            Self::Invoke(_) => f.write_str("Invoke(..)"),
        }
    }
}

/// Result of a tick that completed the countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The owner asked to be destroyed
    OwnerDestroyRequested,
    /// The callback ran
    CallbackInvoked,
}

/// Countdown plus completion action
#[derive(Debug)]
pub struct TimerComponent {
    countdown: Countdown,
    action: TimerAction,
}

impl TimerComponent {
    /// Create an idle timer
    pub fn new(duration: Duration, action: TimerAction) -> Self {
        Self {
            countdown: Countdown::new(duration),
            action,
        }
    }

    /// Create an idle timer from milliseconds
    pub fn from_millis(millis: u64, action: TimerAction) -> Self {
        Self::new(Duration::from_millis(millis), action)
    }

    /// Builder pattern: start counting immediately
    #[must_use]
    pub fn activated(mut self) -> Self {
        self.activate();
        self
    }

    /// Start (or restart) the countdown
    pub fn activate(&mut self) {
        self.countdown.activate();
    }

    /// Stop the countdown without firing
    pub fn deactivate(&mut self) {
        self.countdown.deactivate();
    }

    /// Whether the countdown is running
    pub fn is_activated(&self) -> bool {
        self.countdown.is_running()
    }

    /// Whether the countdown completed since its last activation
    pub fn has_fired(&self) -> bool {
        self.countdown.state() == CountdownState::Finished
    }

    /// Time left before firing
    pub fn remaining(&self) -> Duration {
        self.countdown.remaining()
    }

    /// Advance by `delta`, running the action on completion
    ///
    /// `DestroyOwner` is reported back instead of executed because the
    /// timer cannot reach its owner's scene.
    pub fn tick(&mut self, delta: Duration) -> Option<TimerEvent> {
        if !self.countdown.advance(delta) {
            return None;
        }

        match &mut self.action {
            TimerAction::DestroyOwner => Some(TimerEvent::OwnerDestroyRequested),
            TimerAction::Invoke(callback) => {
                callback();
                Some(TimerEvent::CallbackInvoked)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_callback_runs_once() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut timer = TimerComponent::from_millis(
            100,
            TimerAction::Invoke(Box::new(move || counter.set(counter.get() + 1))),
        )
        .activated();

        for _ in 0..10 {
            timer.tick(Duration::from_millis(25));
        }
        assert_eq!(calls.get(), 1);
        assert!(timer.has_fired());
    }

    #[test]
    fn test_inactive_timer_does_nothing() {
        let mut timer = TimerComponent::from_millis(10, TimerAction::DestroyOwner);
        assert_eq!(timer.tick(Duration::from_secs(1)), None);
        assert!(!timer.has_fired());
    }

    #[test]
    fn test_destroy_owner_is_reported() {
        let mut timer = TimerComponent::from_millis(20, TimerAction::DestroyOwner).activated();
        assert_eq!(timer.tick(Duration::from_millis(10)), None);
        assert_eq!(timer.tick(Duration::from_millis(10)), Some(TimerEvent::OwnerDestroyRequested));
        assert_eq!(timer.tick(Duration::from_millis(10)), None);
    }
}
