//! Input sources
//!
//! The host polls its window library and exposes the result through
//! [`InputSource`]. Positions are in screen pixels.

use std::collections::HashSet;

use crate::foundation::math::{Vec2, Vec2Ext};

/// Logical game actions bound by the host to keys or buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move up
    Up,
    /// Move down
    Down,
    /// Move left
    Left,
    /// Move right
    Right,
    /// Shoot
    Fire,
}

/// Read-only view of the input state for the current frame
pub trait InputSource {
    /// Pointer position in screen pixels
    fn pointer_position(&self) -> Vec2;

    /// Whether the primary pointer button is held
    fn is_pointer_pressed(&self) -> bool;

    /// Whether an action is held
    fn is_action_held(&self, action: Action) -> bool;

    /// Unit-length movement direction from the directional actions
    fn movement_axis(&self) -> Vec2 {
        let mut axis = Vec2::zeros();
        if self.is_action_held(Action::Left) {
            axis.x -= 1.0;
        }
        if self.is_action_held(Action::Right) {
            axis.x += 1.0;
        }
        if self.is_action_held(Action::Up) {
            axis.y -= 1.0;
        }
        if self.is_action_held(Action::Down) {
            axis.y += 1.0;
        }
        axis.normalize_or_zero()
    }
}

/// Plain input state, filled by the host each frame or by tests
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    /// Pointer position in screen pixels
    pub pointer: Vec2,
    /// Primary pointer button state
    pub pointer_pressed: bool,
    held: HashSet<Action>,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        Self {
            pointer: Vec2::zeros(),
            pointer_pressed: false,
            held: HashSet::new(),
        }
    }
}

impl InputSnapshot {
    /// Empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set pointer position and button state
    #[must_use]
    pub fn with_pointer(mut self, position: Vec2, pressed: bool) -> Self {
        self.pointer = position;
        self.pointer_pressed = pressed;
        self
    }

    /// Builder pattern: hold an action
    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    /// Set or clear an action
    pub fn set_action(&mut self, action: Action, held: bool) {
        if held {
            self.held.insert(action);
        } else {
            self.held.remove(&action);
        }
    }
}

impl InputSource for InputSnapshot {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn is_pointer_pressed(&self) -> bool {
        self.pointer_pressed
    }

    fn is_action_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}
