//! # Arcade Engine
//!
//! A small 2D engine core for arcade games: game objects with attachable
//! components, trigger/collider geometry, timers, and a scene update loop
//! that tolerates objects being spawned and destroyed mid-frame.
//!
//! ## Features
//!
//! - **Scene Arena**: Slot-map backed game objects with deferred add/remove
//! - **Capability Components**: Sprite, rect/circle triggers, colliders, timers
//! - **Screen Mapping**: World-to-screen projection recomputed on every read
//! - **Debug Gizmos**: Overlay data collected by component capability
//!
//! Rendering, audio and windowing are left to the host. The host feeds a
//! [`FrameTime`](foundation::time::FrameTime) and an
//! [`InputSource`](input::InputSource) into the [`SceneManager`] every frame.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! let mut scene = Scene::new("main");
//! let ship = scene.spawn(GameObjectBuilder::new("ship").at(Vec2::new(10.0, 20.0)));
//! let report = scene.update(&FrameTime::from_secs_f32(1.0 / 60.0), &InputSnapshot::default());
//! assert_eq!(report.updated, 1);
//! assert!(scene.is_live(ship));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod assets;
pub mod input;
pub mod render;
pub mod physics;
pub mod components;
pub mod scene;
pub mod debug;
pub mod ui;

pub use scene::{
    Behavior, FrameReport, GameObject, GameObjectBuilder, GameObjectId, Scene, SceneError,
    SceneId, SceneManager, UpdateContext, UpdateError,
};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        assets::{ImageSource, ImageTable},
        components::{
            Capabilities, Component, ComponentId, SpriteComponent, TimerAction, TimerComponent,
            TransformComponent, TriggerComponent, TriggerShape,
        },
        core::config::EngineConfig,
        foundation::{
            math::{Vec2, Vec2Ext},
            time::{Countdown, FrameTime},
        },
        input::{Action, InputSnapshot, InputSource},
        physics::{Circle, Rect, Shape},
        render::{RenderLayer, ScreenMapping},
        scene::{
            Behavior, FrameReport, GameObject, GameObjectBuilder, GameObjectId, LifecycleState,
            Scene, SceneError, SceneId, SceneManager, UpdateContext, UpdateError,
        },
    };
}
