//! Scene module
//!
//! Game objects, the behaviors that drive them, the scene that owns them and
//! the manager that switches between scenes.
//!
//! # Update pass
//!
//! 1. Objects spawned since the last pass become live.
//! 2. Every live object, in creation order, ticks its timers and then runs
//!    its behavior once.
//! 3. Objects destroyed during the pass are removed at its end.
//!
//! Nothing is inserted into or removed from the iterated list while the pass
//! runs, so behaviors may spawn and destroy freely.

pub mod game_object;
pub mod behavior;
#[allow(clippy::module_inception)]
pub mod scene;
pub mod scene_manager;

pub use crate::foundation::collections::GameObjectId;
pub use game_object::{GameObject, GameObjectBuilder, LifecycleState};
pub use behavior::{Behavior, UpdateContext, UpdateError};
pub use scene::{FrameReport, Scene, SceneError, SceneId};
pub use scene_manager::{SceneFactory, SceneManager};
