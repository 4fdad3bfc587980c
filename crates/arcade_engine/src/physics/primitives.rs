//! Primitive overlap shapes and intersection algorithms
//!
//! Edge conventions:
//! - [`Rect`] is half-open: `x in [left, right)`, `y in [top, bottom)`.
//!   A zero-size rect therefore contains no point.
//! - [`Circle`] is closed: a point at exactly `radius` is inside. A
//!   zero-radius circle contains its center and nothing else.
//!
//! Screen-style coordinates are assumed (y grows downwards), so `top` is
//! the smaller y.

use crate::foundation::math::Vec2;

/// Axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x: f32,
    /// Top edge (inclusive)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Creates a rect from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rect of the given size centered on `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Right edge (exclusive)
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Bottom edge (exclusive)
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Half-open point containment
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left() && point.x < self.right()
            && point.y >= self.top() && point.y < self.bottom()
    }

    /// Half-open AABB overlap: touching edges do not overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right() && other.left() < self.right()
            && self.top() < other.bottom() && other.top() < self.bottom()
    }

    /// Closest point of the closed rect to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.left()).min(self.right()),
            point.y.max(self.top()).min(self.bottom()),
        )
    }
}

/// Circle given by center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// Center point
    pub center: Vec2,
    /// Radius
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Closed point containment (distance ≤ radius)
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).magnitude_squared() <= self.radius * self.radius
    }

    /// Check if this circle intersects with another
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared <= radius_sum * radius_sum
    }

    /// Clamp-and-distance test against an axis-aligned rect
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let closest = rect.closest_point(self.center);
        self.contains_point(closest)
    }

    /// Axis-aligned bounding box of the circle
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_center(self.center, self.radius * 2.0, self.radius * 2.0)
    }
}

/// Either primitive, resolved to an absolute position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect(Rect),
    /// Circle
    Circle(Circle),
}

impl Shape {
    /// Point containment using the primitive's edge convention
    pub fn contains_point(&self, point: Vec2) -> bool {
        match self {
            Self::Rect(rect) => rect.contains_point(point),
            Self::Circle(circle) => circle.contains_point(point),
        }
    }

    /// Overlap test between any two primitives
    pub fn intersects(&self, other: &Shape) -> bool {
        match (self, other) {
            (Self::Rect(a), Self::Rect(b)) => a.intersects(b),
            (Self::Circle(a), Self::Circle(b)) => a.intersects_circle(b),
            (Self::Circle(c), Self::Rect(r)) | (Self::Rect(r), Self::Circle(c)) => c.intersects_rect(r),
        }
    }

    /// Center of the shape
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Rect(rect) => rect.center(),
            Self::Circle(circle) => circle.center,
        }
    }

    /// Axis-aligned bounds
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Self::Rect(rect) => *rect,
            Self::Circle(circle) => circle.bounding_rect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_point_half_open_edges() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(0.0, 0.0)));
        assert!(rect.contains_point(Vec2::new(9.0, 9.0)));
        assert!(!rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains_point(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(-0.01, 5.0)));
    }

    #[test]
    fn test_circle_point_boundary_inclusive() {
        let circle = Circle::new(Vec2::zeros(), 5.0);
        assert!(circle.contains_point(Vec2::new(5.0, 0.0)));
        assert!(circle.contains_point(Vec2::new(0.0, -5.0)));
        assert!(circle.contains_point(Vec2::new(3.0, 4.0)));
        assert!(!circle.contains_point(Vec2::new(5.01, 0.0)));
    }

    #[test]
    fn test_rect_rect_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(a.intersects(&Rect::new(2.0, 2.0, 2.0, 2.0)));
        // Touching edges do not overlap under the half-open rule
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 5.0, 5.0)));
        assert!(!a.intersects(&Rect::new(20.0, 20.0, 1.0, 1.0)));
    }

    #[test]
    fn test_from_center() {
        let rect = Rect::from_center(Vec2::new(10.0, 10.0), 4.0, 6.0);
        assert_eq!(rect, Rect::new(8.0, 7.0, 4.0, 6.0));
        assert_eq!(rect.center(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_circle_rect_overlap() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Center inside
        assert!(Circle::new(Vec2::new(5.0, 5.0), 1.0).intersects_rect(&rect));
        // Touching the right edge from outside
        assert!(Circle::new(Vec2::new(12.0, 5.0), 2.0).intersects_rect(&rect));
        assert!(!Circle::new(Vec2::new(12.1, 5.0), 2.0).intersects_rect(&rect));
        // Corner region uses the euclidean distance, not the box
        assert!(!Circle::new(Vec2::new(12.0, 12.0), 2.0).intersects_rect(&rect));
        assert!(Circle::new(Vec2::new(12.0, 12.0), 3.0).intersects_rect(&rect));
    }

    #[test]
    fn test_circle_circle_overlap() {
        let a = Circle::new(Vec2::zeros(), 2.0);
        assert!(a.intersects_circle(&Circle::new(Vec2::new(5.0, 0.0), 3.0)));
        assert!(!a.intersects_circle(&Circle::new(Vec2::new(5.1, 0.0), 3.0)));
    }

    #[test]
    fn test_degenerate_shapes() {
        let empty = Rect::new(3.0, 3.0, 0.0, 0.0);
        assert!(!empty.contains_point(Vec2::new(3.0, 3.0)));

        let dot = Circle::new(Vec2::new(1.0, 1.0), 0.0);
        assert!(dot.contains_point(Vec2::new(1.0, 1.0)));
        assert!(!dot.contains_point(Vec2::new(1.0, 1.001)));
        assert!(dot.intersects_rect(&Rect::new(0.0, 0.0, 2.0, 2.0)));
    }

    #[test]
    fn test_shape_dispatch_is_symmetric() {
        let rect = Shape::Rect(Rect::new(0.0, 0.0, 4.0, 4.0));
        let circle = Shape::Circle(Circle::new(Vec2::new(5.0, 2.0), 1.0));
        assert_eq!(rect.intersects(&circle), circle.intersects(&rect));
        assert!(rect.intersects(&circle));
    }
}
