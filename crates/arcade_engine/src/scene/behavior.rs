//! Per-object behaviors
//!
//! A behavior is the per-frame logic of one game object. During its update
//! it is detached from the object, so it can borrow the whole scene through
//! [`UpdateContext`] without aliasing itself.

use std::any::Any;

use thiserror::Error;

use crate::foundation::collections::GameObjectId;
use crate::foundation::math::Vec2;
use crate::foundation::time::FrameTime;
use crate::input::InputSource;
use crate::render::ScreenMapping;
use crate::scene::{GameObject, GameObjectBuilder, Scene, SceneError, SceneId};

/// Failure raised by a behavior update
///
/// The scene logs it and continues with the next object.
#[derive(Error, Debug)]
pub enum UpdateError {
    /// A scene query failed
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Behavior-specific failure
    #[error("{0}")]
    Failed(String),

    /// Failure from a collaborator (storage, assets)
    #[error("{0}")]
    External(Box<dyn std::error::Error>),
}

impl UpdateError {
    /// Wrap a collaborator error
    pub fn external(error: impl std::error::Error + 'static) -> Self {
        Self::External(Box::new(error))
    }
}

/// Per-frame logic attached to a game object
pub trait Behavior: Any {
    /// Run once per update pass while the owner is live
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError>;

    /// Downcasting support
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcasting support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Everything a behavior may touch during its update
pub struct UpdateContext<'a> {
    scene: &'a mut Scene,
    this: GameObjectId,
    time: FrameTime,
    input: &'a dyn InputSource,
}

impl<'a> UpdateContext<'a> {
    /// Create a context for `this`
    pub fn new(scene: &'a mut Scene, this: GameObjectId, time: FrameTime, input: &'a dyn InputSource) -> Self {
        Self { scene, this, time, input }
    }

    /// Id of the object being updated
    pub fn this(&self) -> GameObjectId {
        self.this
    }

    /// Frame time
    pub fn time(&self) -> FrameTime {
        self.time
    }

    /// Frame delta in seconds
    pub fn delta_secs(&self) -> f32 {
        self.time.delta_secs()
    }

    /// Input for this frame
    pub fn input(&self) -> &dyn InputSource {
        self.input
    }

    /// The owning scene
    pub fn scene(&self) -> &Scene {
        &*self.scene
    }

    /// The owning scene, mutable
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut *self.scene
    }

    /// Current world-to-screen mapping
    pub fn screen_mapping(&self) -> ScreenMapping {
        self.scene.screen_mapping()
    }

    /// The object being updated
    pub fn me(&self) -> Result<&GameObject, SceneError> {
        self.scene.get(self.this).ok_or(SceneError::UnknownObject(self.this))
    }

    /// The object being updated, mutable
    pub fn me_mut(&mut self) -> Result<&mut GameObject, SceneError> {
        let this = self.this;
        self.scene.get_mut(this).ok_or(SceneError::UnknownObject(this))
    }

    /// World position of the object being updated
    pub fn position(&self) -> Result<Vec2, SceneError> {
        Ok(self.me()?.transform().world_position())
    }

    /// Spawn an object; it is updated from the next pass on
    pub fn spawn(&mut self, builder: GameObjectBuilder) -> GameObjectId {
        self.scene.spawn(builder)
    }

    /// Destroy another object at the end of this pass
    pub fn destroy(&mut self, id: GameObjectId) {
        self.scene.destroy(id);
    }

    /// Destroy the object being updated at the end of this pass
    pub fn destroy_self(&mut self) {
        self.scene.destroy(self.this);
    }

    /// Ask the scene manager to switch scenes after this pass
    pub fn request_scene(&mut self, scene: SceneId) {
        self.scene.request_transition(scene);
    }
}
