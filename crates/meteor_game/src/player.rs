//! Player ship

use std::any::Any;
use std::rc::Rc;

use arcade_engine::prelude::*;

use crate::bullet::Bullet;
use crate::services::GameServices;

/// Object name and singleton role of the player
pub const PLAYER_NAME: &str = "player";

/// Ship steered by the directional actions, shooting on `Fire`
pub struct Player {
    speed: f32,
    facing: Vec2,
    cooldown: Countdown,
    shots_fired: u32,
    services: Rc<GameServices>,
}

impl Player {
    /// Builder for the player: sprite plus a blocking rect trigger of the
    /// same size
    pub fn build(services: &Rc<GameServices>, position: Vec2) -> GameObjectBuilder {
        let gameplay = services.gameplay();
        let sprite = SpriteComponent::new(services.assets().player_image.as_str(), services.image_source());
        let collider = TriggerComponent::rect_collider(0.0, 0.0, sprite.width(), sprite.height());

        GameObjectBuilder::new(PLAYER_NAME)
            .at(position)
            .with_component(sprite)
            .with_component(collider)
            .with_behavior(Self {
                speed: gameplay.player_speed,
                facing: Vec2::new(0.0, -1.0),
                cooldown: Countdown::new(gameplay.fire_cooldown()),
                shots_fired: 0,
                services: Rc::clone(services),
            })
    }

    /// Direction bullets are fired in (last movement direction)
    pub fn facing(&self) -> Vec2 {
        self.facing
    }

    /// Bullets fired so far
    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }
}

impl Behavior for Player {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        let axis = ctx.input().movement_axis();
        let fire = ctx.input().is_action_held(Action::Fire);
        let delta = ctx.time().delta();
        let step = axis * self.speed * delta.as_secs_f32();
        let bounds = ctx.screen_mapping().world_bounds();

        if axis != Vec2::zeros() {
            self.facing = axis;
        }

        let me = ctx.me_mut()?;
        let half_height = me.sprite().map_or(0.0, |sprite| sprite.height() / 2.0);
        let transform = me.transform_mut();
        let moved = (transform.world_position() + step).clamp_to(
            Vec2::new(bounds.left(), bounds.top()),
            Vec2::new(bounds.right(), bounds.bottom()),
        );
        transform.move_world_position(moved);

        self.cooldown.advance(delta);
        if fire && !self.cooldown.is_running() {
            let muzzle = moved + self.facing * half_height;
            ctx.spawn(Bullet::build(&self.services, muzzle, self.facing));
            self.cooldown.activate();
            self.shots_fired += 1;
            log::trace!("Player fired shot {}", self.shots_fired);
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
