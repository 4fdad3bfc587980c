//! Transform component
//!
//! Holds the world position of a game object. Screen positions are derived
//! from the [`ScreenMapping`] on every read and never stored.

use crate::foundation::math::Vec2;
use crate::render::ScreenMapping;

/// World position holder with screen-space projection
#[derive(Debug, Clone, PartialEq)]
pub struct TransformComponent {
    world_position: Vec2,
    screen_pin: Option<Vec2>,
}

impl Default for TransformComponent {
    fn default() -> Self {
        Self::from_position(Vec2::zeros())
    }
}

impl TransformComponent {
    /// Create from a world position
    pub fn from_position(world_position: Vec2) -> Self {
        Self {
            world_position,
            screen_pin: None,
        }
    }

    /// Current world position
    pub fn world_position(&self) -> Vec2 {
        self.world_position
    }

    /// Replace the world position
    pub fn move_world_position(&mut self, position: Vec2) {
        self.world_position = position;
    }

    /// Add `delta` to the world position
    pub fn translate_world_position(&mut self, delta: Vec2) {
        self.world_position += delta;
    }

    /// Pin the object to a fixed screen point (menus, buttons)
    ///
    /// A pinned object ignores the camera: its screen position stays put
    /// whatever mapping is in effect.
    pub fn fix_on_screen(&mut self, screen_position: Vec2) {
        self.screen_pin = Some(screen_position);
    }

    /// Undo [`fix_on_screen`](Self::fix_on_screen)
    pub fn release_from_screen(&mut self) {
        self.screen_pin = None;
    }

    /// Whether the object is pinned to the screen
    pub fn is_fixed_on_screen(&self) -> bool {
        self.screen_pin.is_some()
    }

    /// Screen position under `mapping`
    pub fn screen_position(&self, mapping: &ScreenMapping) -> Vec2 {
        self.screen_pin
            .unwrap_or_else(|| mapping.world_to_screen(self.world_position))
    }

    /// Whether the projected center lies inside the viewport
    pub fn is_on_screen(&self, mapping: &ScreenMapping) -> bool {
        mapping.is_visible(self.screen_position(mapping))
    }
}
