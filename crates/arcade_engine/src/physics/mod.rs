//! Physics module for overlap detection
//!
//! Provides the 2D primitives triggers and colliders are tested with. There
//! is no collision response here: overlap queries only.

pub mod primitives;

pub use primitives::{Circle, Rect, Shape};
