//! Math utilities and types
//!
//! Provides the 2D vector type used for positions, offsets and directions.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Extension methods for [`Vec2`] with explicit degenerate-case behavior
pub trait Vec2Ext {
    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero
    ///
    /// nalgebra's `normalize` divides by zero and yields NaN components for
    /// a zero vector; gameplay code relies on this never happening.
    fn normalize_or_zero(&self) -> Vec2;

    /// Component-wise clamp into the closed box `[min, max]`
    fn clamp_to(&self, min: Vec2, max: Vec2) -> Vec2;
}

impl Vec2Ext for Vec2 {
    fn normalize_or_zero(&self) -> Vec2 {
        self.try_normalize(0.0).unwrap_or_else(Vec2::zeros)
    }

    fn clamp_to(&self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(utils::clamp(self.x, min.x, max.x), utils::clamp(self.y, min.y, max.y))
    }
}

/// Math utility functions
pub mod utils {
    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        let v = Vec2::zeros().normalize_or_zero();
        assert_eq!(v, Vec2::zeros());
        assert!(!v.x.is_nan() && !v.y.is_nan());
    }

    #[test]
    fn test_normalize_regular_vector() {
        let v = Vec2::new(3.0, 4.0).normalize_or_zero();
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.y, 0.8);
        assert_relative_eq!(v.magnitude(), 1.0);
    }

    #[test]
    fn test_clamp_to_box() {
        let v = Vec2::new(-5.0, 50.0).clamp_to(Vec2::zeros(), Vec2::new(10.0, 10.0));
        assert_eq!(v, Vec2::new(0.0, 10.0));
    }
}
