//! Player bullets

use std::any::Any;

use arcade_engine::prelude::*;

use crate::services::GameServices;

/// Object name of every bullet; meteors look bullets up by it
pub const BULLET_NAME: &str = "bullet";

/// Straight-flying shot
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    direction: Vec2,
    speed: f32,
}

impl Bullet {
    /// Builder for a bullet at `position` flying along `direction`
    pub fn build(services: &GameServices, position: Vec2, direction: Vec2) -> GameObjectBuilder {
        let gameplay = services.gameplay();
        GameObjectBuilder::new(BULLET_NAME)
            .at(position)
            .with_component(SpriteComponent::new(services.assets().bullet_image.as_str(), services.image_source()))
            .with_component(TimerComponent::new(gameplay.bullet_lifetime(), TimerAction::DestroyOwner).activated())
            .with_behavior(Self {
                direction: direction.normalize_or_zero(),
                speed: gameplay.bullet_speed,
            })
    }

    /// Unit flight direction
    pub fn direction(&self) -> Vec2 {
        self.direction
    }
}

impl Behavior for Bullet {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        let step = self.direction * self.speed * ctx.delta_secs();
        let mapping = ctx.screen_mapping();

        let transform = ctx.me_mut()?.transform_mut();
        transform.translate_world_position(step);
        if !transform.is_on_screen(&mapping) {
            log::trace!("Bullet left the screen");
            ctx.destroy_self();
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
