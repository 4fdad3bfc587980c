//! Meteor spawner
//!
//! Drops a big meteor at a random point of the screen border at a fixed
//! interval, aimed at a random point of the screen's central area.

use std::any::Any;
use std::rc::Rc;

use arcade_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::meteor::{Meteor, MeteorRank};
use crate::services::GameServices;

/// Object name of the spawner
pub const SPAWNER_NAME: &str = "meteor_spawner";

/// Periodic big-meteor source
pub struct MeteorSpawner {
    rng: StdRng,
    interval: Countdown,
    spawned: u32,
    services: Rc<GameServices>,
}

impl MeteorSpawner {
    /// Builder for the spawner; the first meteor comes after one interval
    pub fn build(services: &Rc<GameServices>) -> GameObjectBuilder {
        let gameplay = services.gameplay();
        let mut interval = Countdown::new(gameplay.spawn_interval());
        interval.activate();

        GameObjectBuilder::new(SPAWNER_NAME).with_behavior(Self {
            rng: StdRng::seed_from_u64(gameplay.seed),
            interval,
            spawned: 0,
            services: Rc::clone(services),
        })
    }

    /// Meteors spawned so far
    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Random border point and a direction towards the central area
    fn pick_entry(&mut self, bounds: Rect) -> (Vec2, Vec2) {
        let along_x = self.rng.gen_range(bounds.left()..=bounds.right());
        let along_y = self.rng.gen_range(bounds.top()..=bounds.bottom());
        let position = match self.rng.gen_range(0..4) {
            0 => Vec2::new(along_x, bounds.top()),
            1 => Vec2::new(along_x, bounds.bottom()),
            2 => Vec2::new(bounds.left(), along_y),
            _ => Vec2::new(bounds.right(), along_y),
        };

        let center = bounds.center();
        let target = Vec2::new(
            center.x + self.rng.gen_range(-0.25_f32..=0.25) * bounds.width,
            center.y + self.rng.gen_range(-0.25_f32..=0.25) * bounds.height,
        );
        (position, (target - position).normalize_or_zero())
    }
}

impl Behavior for MeteorSpawner {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        if !self.interval.advance(ctx.time().delta()) {
            return Ok(());
        }
        self.interval.activate();

        let (position, direction) = self.pick_entry(ctx.screen_mapping().world_bounds());
        ctx.spawn(Meteor::build(&self.services, MeteorRank::Big, position, direction));
        self.spawned += 1;
        log::debug!("Spawned meteor #{} at ({:.0}, {:.0})", self.spawned, position.x, position.y);
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
