//! Score counter

use std::any::Any;

use arcade_engine::prelude::*;

/// Object name and singleton role of the score counter
pub const SCORE_NAME: &str = "score";

/// Points collected in the current run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Score {
    points: u32,
}

impl Score {
    /// Builder for the score object, pinned to `screen_position`
    pub fn build(screen_position: Vec2) -> GameObjectBuilder {
        GameObjectBuilder::new(SCORE_NAME)
            .fixed_on_screen(screen_position)
            .layer(RenderLayer::UI)
            .with_behavior(Self::default())
    }

    /// Points so far
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Add `points`
    pub fn add_to_score(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
        log::debug!("Score: +{points} -> {}", self.points);
    }
}

/// Points of the registered score object of `scene`
pub fn current_points(scene: &Scene) -> Result<u32, SceneError> {
    let id = scene.singleton(SCORE_NAME)?;
    scene
        .behavior::<Score>(id)
        .map(Score::points)
        .ok_or(SceneError::BehaviorMismatch(id))
}

/// Add `points` to the registered score object of `scene`
pub fn add_points(scene: &mut Scene, points: u32) -> Result<u32, SceneError> {
    let id = scene.singleton(SCORE_NAME)?;
    let score = scene.behavior_mut::<Score>(id).ok_or(SceneError::BehaviorMismatch(id))?;
    score.add_to_score(points);
    Ok(score.points())
}

impl Behavior for Score {
    fn update(&mut self, _ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
