//! # Scene Manager
//!
//! Switches between scenes. Each scene is registered as a factory; entering
//! a scene always builds it fresh, so returning to the main scene starts a
//! new game.

use std::collections::HashMap;
use std::fmt;

use crate::foundation::time::FrameTime;
use crate::input::InputSource;
use crate::render::ScreenMapping;
use crate::scene::{FrameReport, Scene, SceneError, SceneId};

/// Builds a scene from scratch
pub type SceneFactory = Box<dyn FnMut() -> Result<Scene, SceneError>>;

/// Owns the running scene and the factories for every other one
pub struct SceneManager {
    /// Registered scene factories
    factories: HashMap<SceneId, SceneFactory>,

    /// Running scene, if started
    current: Option<(SceneId, Scene)>,

    /// Projection handed to every scene before its pass
    screen: ScreenMapping,

    /// Number of scene switches performed
    transitions: u64,
}

impl fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneManager")
            .field("scenes", &self.factories.keys().collect::<Vec<_>>())
            .field("current", &self.current_id())
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneManager {
    /// Create a manager with no scenes
    pub fn new() -> Self {
        Self::with_screen_mapping(ScreenMapping::default())
    }

    /// Create a manager using `screen` for every scene
    pub fn with_screen_mapping(screen: ScreenMapping) -> Self {
        Self {
            factories: HashMap::new(),
            current: None,
            screen,
            transitions: 0,
        }
    }

    /// Register (or replace) the factory for `id`
    pub fn register_scene<F>(&mut self, id: SceneId, factory: F)
    where
        F: FnMut() -> Result<Scene, SceneError> + 'static,
    {
        if self.factories.insert(id, Box::new(factory)).is_some() {
            log::warn!("Scene '{id}' registered twice; keeping the latest factory");
        }
    }

    /// Whether a factory is registered for `id`
    pub fn has_scene(&self, id: SceneId) -> bool {
        self.factories.contains_key(&id)
    }

    /// Build `id` and make it the running scene
    pub fn set_current_scene(&mut self, id: SceneId) -> Result<(), SceneError> {
        let factory = self.factories.get_mut(&id).ok_or(SceneError::UnknownScene(id))?;
        let mut scene = factory()?;
        scene.set_screen_mapping(self.screen);

        match self.current.replace((id, scene)) {
            Some((previous, _)) => {
                self.transitions += 1;
                log::info!("Switched scene '{previous}' -> '{id}'");
            }
            None => log::info!("Started scene '{id}'"),
        }
        Ok(())
    }

    /// Id of the running scene
    pub fn current_id(&self) -> Option<SceneId> {
        self.current.as_ref().map(|(id, _)| *id)
    }

    /// Running scene
    pub fn current_scene(&self) -> Option<&Scene> {
        self.current.as_ref().map(|(_, scene)| scene)
    }

    /// Running scene, mutable
    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.current.as_mut().map(|(_, scene)| scene)
    }

    /// Number of scene switches performed
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Projection used for every scene
    pub fn screen_mapping(&self) -> ScreenMapping {
        self.screen
    }

    /// Change the projection (for example after a window resize)
    pub fn set_screen_mapping(&mut self, screen: ScreenMapping) {
        self.screen = screen;
        if let Some((_, scene)) = self.current.as_mut() {
            scene.set_screen_mapping(screen);
        }
    }

    /// Run one pass of the running scene and apply any requested switch
    pub fn frame(&mut self, time: &FrameTime, input: &dyn InputSource) -> Result<FrameReport, SceneError> {
        let (_, scene) = self.current.as_mut().ok_or(SceneError::NoActiveScene)?;
        let report = scene.update(time, input);

        if let Some(next) = report.transition {
            self.set_current_scene(next)?;
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;
    use crate::scene::GameObjectBuilder;

    const MAIN: SceneId = SceneId("main");
    const SCORE: SceneId = SceneId("score");

    fn manager() -> SceneManager {
        let mut manager = SceneManager::new();
        manager.register_scene(MAIN, || {
            let mut scene = Scene::new("main");
            scene.spawn(GameObjectBuilder::new("player"));
            scene.request_transition(SCORE);
            Ok(scene)
        });
        manager.register_scene(SCORE, || Ok(Scene::new("score")));
        manager
    }

    #[test]
    fn test_frame_without_scene_fails() {
        let mut manager = manager();
        let result = manager.frame(&FrameTime::from_millis(16), &InputSnapshot::default());
        assert_eq!(result, Err(SceneError::NoActiveScene));
    }

    #[test]
    fn test_unknown_scene() {
        let mut manager = SceneManager::new();
        assert_eq!(manager.set_current_scene(MAIN), Err(SceneError::UnknownScene(MAIN)));
    }

    #[test]
    fn test_transition_builds_target_scene() {
        let mut manager = manager();
        manager.set_current_scene(MAIN).unwrap();
        assert_eq!(manager.current_id(), Some(MAIN));

        let report = manager.frame(&FrameTime::from_millis(16), &InputSnapshot::default()).unwrap();
        assert_eq!(report.transition, Some(SCORE));
        assert_eq!(manager.current_id(), Some(SCORE));
        assert_eq!(manager.transitions(), 1);
        assert!(manager.current_scene().is_some_and(Scene::is_empty));
    }
}
