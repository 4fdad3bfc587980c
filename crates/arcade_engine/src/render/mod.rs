//! Rendering-facing types
//!
//! The engine does not draw. It exposes the world-to-screen mapping it is
//! handed by the host and the layer ordering the host renderer consumes.

pub mod screen;

pub use screen::ScreenMapping;

/// Rendering layer; lower layers are drawn first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RenderLayer(pub u8);

impl RenderLayer {
    /// Backdrop layer
    pub const BACKGROUND: Self = Self(0);
    /// Default layer for gameplay objects
    pub const DEFAULT: Self = Self(10);
    /// Layer drawn above gameplay objects
    pub const OVERLAY: Self = Self(20);
    /// Menus and buttons
    pub const UI: Self = Self(30);
}
