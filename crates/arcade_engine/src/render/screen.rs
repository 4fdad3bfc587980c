//! World-to-screen mapping
//!
//! The host owns the window and decides how the virtual game surface is
//! scaled into it. Each frame it hands the scene a [`ScreenMapping`]; every
//! screen-space query is recomputed from it, so a resize between frames
//! never leaves stale positions behind.

use crate::foundation::math::Vec2;
use crate::physics::Rect;

/// Scale + origin offset projection with the visible viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenMapping {
    /// Uniform scale from world units to screen pixels
    pub scale: f32,
    /// Screen position of the world origin
    pub origin_offset: Vec2,
    /// Visible screen area
    pub viewport: Rect,
}

impl ScreenMapping {
    /// Create a new mapping
    pub const fn new(scale: f32, origin_offset: Vec2, viewport: Rect) -> Self {
        Self { scale, origin_offset, viewport }
    }

    /// Identity mapping over a `width` x `height` viewport
    pub fn identity(width: f32, height: f32) -> Self {
        Self::new(1.0, Vec2::zeros(), Rect::new(0.0, 0.0, width, height))
    }

    /// Project a world position to the screen
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.scale + self.origin_offset
    }

    /// Inverse projection; a zero scale maps everything to the world origin
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        if self.scale == 0.0 {
            return Vec2::zeros();
        }
        (screen - self.origin_offset) / self.scale
    }

    /// Whether a screen point lies inside the viewport
    pub fn is_visible(&self, screen: Vec2) -> bool {
        self.viewport.contains_point(screen)
    }

    /// Viewport expressed in world coordinates
    ///
    /// A negative scale mirrors the projection; the corners are reordered so
    /// the rect never has a negative size.
    pub fn world_bounds(&self) -> Rect {
        let a = self.screen_to_world(Vec2::new(self.viewport.left(), self.viewport.top()));
        let b = self.screen_to_world(Vec2::new(self.viewport.right(), self.viewport.bottom()));
        let min = a.inf(&b);
        let max = a.sup(&b);
        Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self::identity(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_projection_applies_scale_then_offset() {
        let mapping = ScreenMapping::new(2.0, Vec2::new(10.0, -5.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(mapping.world_to_screen(Vec2::new(3.0, 4.0)), Vec2::new(16.0, 3.0));
    }

    #[test]
    fn test_screen_to_world_inverts() {
        let mapping = ScreenMapping::new(0.5, Vec2::new(40.0, 20.0), Rect::new(0.0, 0.0, 100.0, 100.0));
        let world = Vec2::new(12.0, -8.0);
        let back = mapping.screen_to_world(mapping.world_to_screen(world));
        assert_relative_eq!(back.x, world.x);
        assert_relative_eq!(back.y, world.y);
    }

    #[test]
    fn test_mirrored_mapping_has_ordered_world_bounds() {
        let mapping = ScreenMapping::new(-1.0, Vec2::new(1280.0, 720.0), Rect::new(0.0, 0.0, 1280.0, 720.0));
        let bounds = mapping.world_bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 1280.0, 720.0));
        assert!(bounds.left() <= bounds.right() && bounds.top() <= bounds.bottom());

        let mirrored_x = ScreenMapping::new(-2.0, Vec2::new(100.0, 0.0), Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(mirrored_x.world_bounds(), Rect::new(0.0, -25.0, 50.0, 25.0));
    }

    #[test]
    fn test_world_bounds_of_scaled_viewport() {
        let mapping = ScreenMapping::new(2.0, Vec2::zeros(), Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(mapping.world_bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
    }
}
