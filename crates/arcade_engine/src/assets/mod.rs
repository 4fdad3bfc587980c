//! Asset lookup
//!
//! Decoding images is the host's job. The engine only needs image
//! dimensions to size sprites and the triggers derived from them, and it
//! addresses images by path string without checking that they exist.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::foundation::math::Vec2;

/// Source of image dimensions keyed by path
pub trait ImageSource {
    /// Pixel size of the image at `path`, if known
    fn dimensions(&self, path: &str) -> Option<Vec2>;
}

/// In-memory table of image sizes
///
/// Loadable from RON or TOML through [`Config`], e.g.
/// `(images: {"game_res/meteor.png": (24.0, 24.0)})`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageTable {
    images: HashMap<String, (f32, f32)>,
}

impl ImageTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: register an image size
    #[must_use]
    pub fn with_image(mut self, path: impl Into<String>, width: f32, height: f32) -> Self {
        self.insert(path, width, height);
        self
    }

    /// Register or replace an image size
    pub fn insert(&mut self, path: impl Into<String>, width: f32, height: f32) {
        self.images.insert(path.into(), (width, height));
    }

    /// Number of registered images
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ImageSource for ImageTable {
    fn dimensions(&self, path: &str) -> Option<Vec2> {
        self.images.get(path).map(|&(width, height)| Vec2::new(width, height))
    }
}

impl Config for ImageTable {}
