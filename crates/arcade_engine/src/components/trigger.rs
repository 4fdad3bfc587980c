//! Trigger and collider components
//!
//! A trigger is a rect or circle placed at an offset from its owner. Its
//! absolute shape is derived from the owner's transform at query time, so
//! a trigger can never disagree with the object it belongs to.
//!
//! A collider is not a separate type: it is a trigger with `blocking` set.
//! Queries that want "triggers that are not colliders" filter on
//! [`Capabilities`], not on a type hierarchy.

use crate::components::{Capabilities, TransformComponent};
use crate::foundation::math::Vec2;
use crate::physics::{Circle, Rect, Shape};
use crate::render::ScreenMapping;

/// Local geometry of a trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerShape {
    /// Rectangle centered on the trigger position
    Rect {
        /// Width
        width: f32,
        /// Height
        height: f32,
    },
    /// Circle centered on the trigger position
    Circle {
        /// Radius
        radius: f32,
    },
}

/// Overlap volume attached to a game object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerComponent {
    /// Local geometry
    pub shape: TriggerShape,
    /// Offset from the owner's position
    pub offset: Vec2,
    /// Blocks movement (collider) rather than only detecting overlap
    pub blocking: bool,
}

impl TriggerComponent {
    /// Rect trigger with the given offset and size
    pub fn rect(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            shape: TriggerShape::Rect { width, height },
            offset: Vec2::new(offset_x, offset_y),
            blocking: false,
        }
    }

    /// Circle trigger with the given offset and radius
    pub fn circle(offset_x: f32, offset_y: f32, radius: f32) -> Self {
        Self {
            shape: TriggerShape::Circle { radius },
            offset: Vec2::new(offset_x, offset_y),
            blocking: false,
        }
    }

    /// Rect collider with the given offset and size
    pub fn rect_collider(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self::rect(offset_x, offset_y, width, height).as_collider()
    }

    /// Builder pattern: mark as blocking
    #[must_use]
    pub fn as_collider(mut self) -> Self {
        self.blocking = true;
        self
    }

    /// Capabilities this trigger provides
    pub fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::TRIGGER;
        if self.blocking {
            caps |= Capabilities::COLLIDER;
        }
        caps | match self.shape {
            TriggerShape::Rect { .. } => Capabilities::RECT,
            TriggerShape::Circle { .. } => Capabilities::CIRCLE,
        }
    }

    /// Short kind name used in debug labels
    pub fn kind_name(&self) -> &'static str {
        match (self.shape, self.blocking) {
            (TriggerShape::Rect { .. }, true) => "RectCollider",
            (TriggerShape::Rect { .. }, false) => "RectTrigger",
            (TriggerShape::Circle { .. }, true) => "CircleCollider",
            (TriggerShape::Circle { .. }, false) => "CircleTrigger",
        }
    }

    /// Shape placed at `anchor + offset`
    pub fn shape_at(&self, anchor: Vec2) -> Shape {
        let position = anchor + self.offset;
        match self.shape {
            TriggerShape::Rect { width, height } => Shape::Rect(Rect::from_center(position, width, height)),
            TriggerShape::Circle { radius } => Shape::Circle(Circle::new(position, radius)),
        }
    }

    /// Absolute shape in world space
    pub fn world_shape(&self, owner: &TransformComponent) -> Shape {
        self.shape_at(owner.world_position())
    }

    /// Absolute shape in screen space (pointer hit-tests, gizmos)
    pub fn screen_shape(&self, owner: &TransformComponent, mapping: &ScreenMapping) -> Shape {
        self.shape_at(owner.screen_position(mapping))
    }

    /// World-space point overlap
    pub fn is_there_overlap_with_point(&self, owner: &TransformComponent, point: Vec2) -> bool {
        self.world_shape(owner).contains_point(point)
    }

    /// World-space overlap with another absolute shape
    pub fn is_there_overlap_with_shape(&self, owner: &TransformComponent, other: &Shape) -> bool {
        self.world_shape(owner).intersects(other)
    }

    /// World-space overlap with a rect
    pub fn is_there_overlap_with_rect(&self, owner: &TransformComponent, rect: &Rect) -> bool {
        self.is_there_overlap_with_shape(owner, &Shape::Rect(*rect))
    }
}
