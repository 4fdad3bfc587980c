//! # Scene
//!
//! Owns every game object of one screen of the game and runs the update
//! pass over them. Objects live in a slot-map arena; iteration follows
//! creation order, kept separately in `order`.
//!
//! Spawns made while a pass is running are queued and join the iteration at
//! the start of the next pass. Destroys mark the object immediately, so
//! later objects in the same pass already see it as gone, and the object
//! leaves the arena when the pass ends.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::components::{Capabilities, TimerEvent};
use crate::foundation::collections::{GameObjectId, ObjectArena};
use crate::foundation::time::FrameTime;
use crate::input::InputSource;
use crate::render::ScreenMapping;
use crate::scene::{Behavior, GameObject, UpdateContext};

/// Name of a scene registered with the [`SceneManager`](crate::scene::SceneManager)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneId(pub &'static str);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Scene lookup and management errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The id does not name an object in this scene
    #[error("no game object with id {0:?}")]
    UnknownObject(GameObjectId),

    /// The object is queued for removal
    #[error("game object {0:?} is being destroyed")]
    DestroyedObject(GameObjectId),

    /// No live object is registered for the role
    #[error("no live game object registered as '{0}'")]
    MissingSingleton(&'static str),

    /// The role already has a live object
    #[error("role '{0}' is already registered")]
    DuplicateSingleton(&'static str),

    /// The object has no component with the requested capabilities
    #[error("game object {id:?} has no component providing {capabilities:?}")]
    MissingComponent {
        /// Object queried
        id: GameObjectId,
        /// Capabilities requested
        capabilities: Capabilities,
    },

    /// The object has no behavior of the requested type
    #[error("game object {0:?} has no behavior of the requested type")]
    BehaviorMismatch(GameObjectId),

    /// No factory is registered for the scene
    #[error("no scene registered as '{0}'")]
    UnknownScene(SceneId),

    /// The manager has not been started
    #[error("no scene is running")]
    NoActiveScene,

    /// A scene factory could not build its scene
    #[error("failed to set up scene '{scene}': {reason}")]
    Setup {
        /// Scene being built
        scene: SceneId,
        /// What went wrong
        reason: String,
    },
}

/// Summary of one update pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    /// Pass number, starting at 1
    pub frame: u64,

    /// Queued objects that joined the scene at the start of the pass
    pub activated: usize,

    /// Live objects visited by the pass
    pub updated: usize,

    /// Objects spawned during the pass (live from the next one)
    pub spawned: usize,

    /// Objects removed at the end of the pass
    pub removed: usize,

    /// Behavior updates that returned an error
    pub failed: usize,

    /// Scene switch requested during the pass
    pub transition: Option<SceneId>,
}

/// Game objects plus the update pass that drives them
pub struct Scene {
    /// Scene name, used in logs
    name: String,

    /// Every attached object, including queued and dying ones
    objects: ObjectArena<GameObject>,

    /// Live iteration order (creation order)
    order: Vec<GameObjectId>,

    /// Spawned during a pass, waiting for the next one
    pending_add: Vec<GameObjectId>,

    /// Destroyed, waiting for the end-of-pass sweep
    pending_remove: Vec<GameObjectId>,

    /// Role name to object, for well-known objects such as the player
    singletons: HashMap<&'static str, GameObjectId>,

    /// World-to-screen projection
    screen: ScreenMapping,

    /// Set while `update` iterates
    updating: bool,

    /// Scene switch requested by a behavior
    requested_transition: Option<SceneId>,

    /// Number of passes run so far
    frame: u64,
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("live", &self.order.len())
            .field("pending_add", &self.pending_add.len())
            .field("pending_remove", &self.pending_remove.len())
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objects: ObjectArena::with_key(),
            order: Vec::new(),
            pending_add: Vec::new(),
            pending_remove: Vec::new(),
            singletons: HashMap::new(),
            screen: ScreenMapping::default(),
            updating: false,
            requested_transition: None,
            frame: 0,
        }
    }

    /// Scene name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of passes run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// World-to-screen projection
    pub fn screen_mapping(&self) -> ScreenMapping {
        self.screen
    }

    /// Replace the world-to-screen projection
    pub fn set_screen_mapping(&mut self, mapping: ScreenMapping) {
        self.screen = mapping;
    }

    /// Attach an object
    ///
    /// Outside a pass it is live immediately. During a pass it is queued and
    /// first updated by the next pass.
    pub fn spawn(&mut self, object: impl Into<GameObject>) -> GameObjectId {
        let object = object.into();
        log::trace!("Scene '{}': spawning '{}'", self.name, object.name());
        let id = self.objects.insert(object);
        if self.updating {
            self.pending_add.push(id);
        } else {
            self.order.push(id);
        }
        id
    }

    /// Queue an object for removal at the end of the current (or next) pass
    ///
    /// The object stops being live right away. Destroying an unknown or
    /// already destroyed object is a caller bug: it asserts in debug builds
    /// and is ignored otherwise.
    pub fn destroy(&mut self, id: GameObjectId) {
        let destroyable = self.objects.get(id).map(|object| !object.is_pending_destroy());
        debug_assert_eq!(
            destroyable,
            Some(true),
            "destroy called on {id:?}, which is unknown or already destroyed"
        );

        match self.objects.get_mut(id) {
            Some(object) if !object.is_pending_destroy() => {
                log::trace!("Scene '{}': destroying '{}'", self.name, object.name());
                object.mark_pending_destroy();
                self.pending_remove.push(id);
            }
            _ => log::warn!("Scene '{}': ignoring destroy of {id:?}", self.name),
        }
    }

    /// Whether `id` is attached and not destroyed
    pub fn is_live(&self, id: GameObjectId) -> bool {
        self.objects.get(id).is_some_and(|object| !object.is_pending_destroy())
    }

    /// Whether `id` was spawned during a pass and waits for the next one
    pub fn is_pending_add(&self, id: GameObjectId) -> bool {
        self.pending_add.contains(&id)
    }

    /// Object by id, in any lifecycle state
    pub fn get(&self, id: GameObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Mutable object by id, in any lifecycle state
    pub fn get_mut(&mut self, id: GameObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Object by id, or [`SceneError::UnknownObject`]
    pub fn try_get(&self, id: GameObjectId) -> Result<&GameObject, SceneError> {
        self.objects.get(id).ok_or(SceneError::UnknownObject(id))
    }

    /// Mutable object by id, or [`SceneError::UnknownObject`]
    pub fn try_get_mut(&mut self, id: GameObjectId) -> Result<&mut GameObject, SceneError> {
        self.objects.get_mut(id).ok_or(SceneError::UnknownObject(id))
    }

    /// Live objects in creation order
    ///
    /// Objects queued by the running pass are not included yet.
    pub fn objects(&self) -> impl Iterator<Item = (GameObjectId, &GameObject)> {
        self.order.iter().filter_map(move |&id| {
            self.objects
                .get(id)
                .filter(|object| !object.is_pending_destroy())
                .map(|object| (id, object))
        })
    }

    /// First live object named `name`, in creation order
    pub fn get_game_object_by_name(&self, name: &str) -> Option<GameObjectId> {
        self.objects()
            .find(|(_, object)| object.name() == name)
            .map(|(id, _)| id)
    }

    /// Every live object named `name`, in creation order
    pub fn live_objects_named(&self, name: &str) -> Vec<GameObjectId> {
        self.objects()
            .filter(|(_, object)| object.name() == name)
            .map(|(id, _)| id)
            .collect()
    }

    /// Number of live objects
    pub fn live_count(&self) -> usize {
        self.objects().count()
    }

    /// Number of attached objects, including queued and dying ones
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether nothing is attached
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Register `id` as the object playing `role`
    ///
    /// A role whose previous object died may be registered again. An object
    /// already queued for removal cannot take a role.
    pub fn register_singleton(&mut self, role: &'static str, id: GameObjectId) -> Result<(), SceneError> {
        match self.objects.get(id) {
            None => return Err(SceneError::UnknownObject(id)),
            Some(object) if object.is_pending_destroy() => return Err(SceneError::DestroyedObject(id)),
            Some(_) => {}
        }
        if let Some(&existing) = self.singletons.get(role) {
            if self.is_live(existing) {
                return Err(SceneError::DuplicateSingleton(role));
            }
        }
        self.singletons.insert(role, id);
        Ok(())
    }

    /// Live object registered for `role`
    pub fn singleton(&self, role: &'static str) -> Result<GameObjectId, SceneError> {
        self.singletons
            .get(role)
            .copied()
            .filter(|&id| self.is_live(id))
            .ok_or(SceneError::MissingSingleton(role))
    }

    /// Behavior of `id` downcast to `T`
    ///
    /// Returns `None` for the object whose behavior is currently running.
    pub fn behavior<T: Behavior>(&self, id: GameObjectId) -> Option<&T> {
        self.objects.get(id)?.behavior.as_deref()?.as_any().downcast_ref::<T>()
    }

    /// Mutable behavior of `id` downcast to `T`
    pub fn behavior_mut<T: Behavior>(&mut self, id: GameObjectId) -> Option<&mut T> {
        self.objects
            .get_mut(id)?
            .behavior
            .as_deref_mut()?
            .as_any_mut()
            .downcast_mut::<T>()
    }

    /// Ask for a scene switch once the current pass ends
    pub fn request_transition(&mut self, scene: SceneId) {
        if let Some(previous) = self.requested_transition.replace(scene) {
            log::debug!("Scene '{}': transition to '{previous}' replaced by '{scene}'", self.name);
        }
    }

    /// Live, rendering objects ordered by layer, then creation order
    pub fn render_queue(&self) -> Vec<GameObjectId> {
        let mut queue: Vec<_> = self
            .objects()
            .filter(|(_, object)| object.is_rendering())
            .map(|(id, object)| (object.layer(), id))
            .collect();
        queue.sort_by_key(|&(layer, _)| layer);
        queue.into_iter().map(|(_, id)| id).collect()
    }

    /// Run one update pass
    ///
    /// Behavior errors are logged and counted; they never stop the pass.
    pub fn update(&mut self, time: &FrameTime, input: &dyn InputSource) -> FrameReport {
        debug_assert!(!self.updating, "Scene::update re-entered");
        self.frame += 1;

        let mut report = FrameReport {
            frame: self.frame,
            activated: self.flush_pending_additions(),
            ..FrameReport::default()
        };

        self.updating = true;
        let snapshot = self.order.clone();
        for id in snapshot {
            if !self.is_live(id) {
                continue;
            }
            self.tick_timers(id, time.delta());
            if !self.is_live(id) {
                continue;
            }
            report.updated += 1;

            let Some(mut behavior) = self.objects.get_mut(id).and_then(|object| object.behavior.take()) else {
                continue;
            };

            let result = behavior.update(&mut UpdateContext::new(self, id, *time, input));

            if let Some(object) = self.objects.get_mut(id) {
                object.behavior = Some(behavior);
            }

            if let Err(error) = result {
                report.failed += 1;
                let name = self.objects.get(id).map_or("<removed>", |object| object.name());
                log::error!("Scene '{}': update of '{name}' failed: {error}", self.name);
            }
        }
        self.updating = false;

        report.spawned = self.pending_add.len();
        report.removed = self.sweep_pending_removals();
        report.transition = self.requested_transition.take();

        if report.failed > 0 {
            log::warn!("Scene '{}': {} update(s) failed in frame {}", self.name, report.failed, self.frame);
        }
        report
    }

    /// Apply queued additions and removals outside a pass
    pub fn flush(&mut self) -> (usize, usize) {
        debug_assert!(!self.updating, "Scene::flush called during a pass");
        let added = self.flush_pending_additions();
        let removed = self.sweep_pending_removals();
        (added, removed)
    }

    fn flush_pending_additions(&mut self) -> usize {
        let count = self.pending_add.len();
        self.order.append(&mut self.pending_add);
        count
    }

    fn sweep_pending_removals(&mut self) -> usize {
        if self.pending_remove.is_empty() {
            return 0;
        }

        let mut removed = 0;
        for id in self.pending_remove.drain(..) {
            if self.objects.remove(id).is_some() {
                removed += 1;
            }
        }

        let objects = &self.objects;
        self.order.retain(|id| objects.contains_key(*id));
        self.pending_add.retain(|id| objects.contains_key(*id));
        self.singletons.retain(|_, id| objects.contains_key(*id));
        removed
    }

    fn tick_timers(&mut self, id: GameObjectId, delta: Duration) {
        let Some(object) = self.objects.get_mut(id) else {
            return;
        };
        if !object.has_capability(Capabilities::TIMED) {
            return;
        }

        let mut destroy_owner = false;
        for component in object.components_mut() {
            if let Some(timer) = component.as_timer_mut() {
                if timer.tick(delta) == Some(TimerEvent::OwnerDestroyRequested) {
                    destroy_owner = true;
                }
            }
        }

        if destroy_owner {
            log::debug!("Scene '{}': lifetime of '{}' expired", self.name, object.name());
            self.destroy(id);
        }
    }
}
