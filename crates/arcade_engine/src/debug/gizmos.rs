//! Debug gizmos
//!
//! Outlines of image rects, colliders and triggers plus transform points,
//! all in screen space, each labelled `"<name>'s <Kind>"`.

use crate::components::{Capabilities, TriggerComponent};
use crate::foundation::collections::GameObjectId;
use crate::foundation::math::Vec2;
use crate::physics::{Circle, Rect, Shape};
use crate::render::ScreenMapping;
use crate::scene::{GameObject, Scene};

/// Horizontal gap between a shape's center and its label
const LABEL_GAP: f32 = 30.0;

/// Gizmo palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GizmoColor {
    /// Image rects
    Red,
    /// Colliders
    Yellow,
    /// Non-blocking triggers
    Green,
    /// Transform points
    White,
}

impl GizmoColor {
    /// RGBA in `0.0..=1.0`
    pub const fn rgba(self) -> [f32; 4] {
        match self {
            Self::Red => [1.0, 0.0, 0.0, 1.0],
            Self::Yellow => [1.0, 1.0, 0.0, 1.0],
            Self::Green => [0.0, 1.0, 0.0, 1.0],
            Self::White => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Shape to outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoKind {
    /// Rectangle outline
    Rect(Rect),
    /// Circle outline
    Circle(Circle),
    /// Filled dot
    Point {
        /// Dot center
        center: Vec2,
        /// Dot radius
        radius: f32,
    },
}

impl From<Shape> for GizmoKind {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Rect(rect) => Self::Rect(rect),
            Shape::Circle(circle) => Self::Circle(circle),
        }
    }
}

/// One overlay element
#[derive(Debug, Clone, PartialEq)]
pub struct Gizmo {
    /// Object the gizmo describes
    pub owner: GameObjectId,
    /// Outline
    pub kind: GizmoKind,
    /// Color
    pub color: GizmoColor,
    /// Label text
    pub label: String,
    /// Top-left of the label in screen pixels
    pub label_position: Vec2,
}

/// Collects gizmos for every live object of a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoCollector {
    enabled: bool,
    font_size: f32,
    point_radius: f32,
}

impl Default for GizmoCollector {
    fn default() -> Self {
        Self {
            enabled: true,
            font_size: 15.0,
            point_radius: 5.0,
        }
    }
}

impl GizmoCollector {
    /// Create an enabled collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: enable or disable collection
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder pattern: label font size used for label placement
    #[must_use]
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Whether collection is on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle collection
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Gizmos for every live object, in creation order
    pub fn collect(&self, scene: &Scene) -> Vec<Gizmo> {
        let mut gizmos = Vec::new();
        if !self.enabled {
            return gizmos;
        }

        let mapping = scene.screen_mapping();
        for (id, object) in scene.objects() {
            self.collect_object(id, object, &mapping, &mut gizmos);
        }
        gizmos
    }

    fn collect_object(&self, id: GameObjectId, object: &GameObject, mapping: &ScreenMapping, out: &mut Vec<Gizmo>) {
        let screen_position = object.transform().screen_position(mapping);
        let name = object.name();

        if let Some(rect) = object.image_rect(mapping) {
            out.push(Gizmo {
                owner: id,
                kind: GizmoKind::Rect(rect),
                color: GizmoColor::Red,
                label: format!("{name}'s image_rect"),
                label_position: Vec2::new(rect.left(), rect.top() - self.font_size * 2.0),
            });
        }

        if object.has_capability(Capabilities::COLLIDER) {
            for trigger in object.triggers_with(Capabilities::COLLIDER) {
                self.push_trigger(id, object, trigger, mapping, GizmoColor::Yellow, out);
            }
        }

        if object.has_capability(Capabilities::TRIGGER) {
            for trigger in object.triggers_with(Capabilities::empty()).filter(|trigger| !trigger.blocking) {
                self.push_trigger(id, object, trigger, mapping, GizmoColor::Green, out);
            }
        }

        if object.transform().is_on_screen(mapping) {
            out.push(Gizmo {
                owner: id,
                kind: GizmoKind::Point {
                    center: screen_position,
                    radius: self.point_radius,
                },
                color: GizmoColor::White,
                label: format!("{name}'s TransformComponent"),
                label_position: Vec2::new(
                    screen_position.x + LABEL_GAP,
                    screen_position.y - self.font_size + 3.0,
                ),
            });
        }
    }

    fn push_trigger(
        &self,
        id: GameObjectId,
        object: &GameObject,
        trigger: &TriggerComponent,
        mapping: &ScreenMapping,
        color: GizmoColor,
        out: &mut Vec<Gizmo>,
    ) {
        let shape = trigger.screen_shape(object.transform(), mapping);
        let center = shape.center();
        let label_y = if trigger.blocking {
            center.y + (self.font_size / 2.0).floor()
        } else {
            center.y - self.font_size * 2.0
        };

        out.push(Gizmo {
            owner: id,
            kind: shape.into(),
            color,
            label: format!("{}'s {}", object.name(), trigger.kind_name()),
            label_position: Vec2::new(center.x + LABEL_GAP, label_y),
        });

        if let Shape::Rect(_) = shape {
            out.push(Gizmo {
                owner: id,
                kind: GizmoKind::Point {
                    center,
                    radius: self.point_radius,
                },
                color,
                label: String::new(),
                label_position: center,
            });
        }
    }
}
