//! Sprite component
//!
//! Names the image the host should draw for the owner and keeps its
//! displayed size. Scaling is absolute with respect to the source image, so
//! calling `change_image` and `scale_itself` with the same arguments every
//! frame (as buttons do) leaves the sprite unchanged.

use crate::assets::ImageSource;
use crate::foundation::math::Vec2;
use crate::physics::Rect;

/// Image reference with source size and display scale
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    path: String,
    base_size: Vec2,
    scale: f32,
}

impl SpriteComponent {
    /// Create a sprite for `path`, sizing it from `images`
    pub fn new(path: impl Into<String>, images: &dyn ImageSource) -> Self {
        let path = path.into();
        let base_size = lookup_size(&path, images);
        Self {
            path,
            base_size,
            scale: 1.0,
        }
    }

    /// Current image path
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Current display scale
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Displayed size (source size times scale)
    pub fn size(&self) -> Vec2 {
        self.base_size * self.scale
    }

    /// Displayed width
    pub fn width(&self) -> f32 {
        self.size().x
    }

    /// Displayed height
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Switch to another image; a no-op when the path is unchanged
    pub fn change_image(&mut self, path: &str, images: &dyn ImageSource) {
        if self.path == path {
            return;
        }
        self.base_size = lookup_size(path, images);
        self.path = path.to_string();
    }

    /// Set the display scale relative to the source image
    pub fn scale_itself(&mut self, factor: f32) {
        self.scale = factor;
    }

    /// Image rectangle centered on `center`
    pub fn image_rect(&self, center: Vec2) -> Rect {
        let size = self.size();
        Rect::from_center(center, size.x, size.y)
    }
}

fn lookup_size(path: &str, images: &dyn ImageSource) -> Vec2 {
    images.dimensions(path).unwrap_or_else(|| {
        log::warn!("Image '{}' not found, sprite will have zero size", path);
        Vec2::zeros()
    })
}
