//! Meteors
//!
//! A meteor drifts in a straight line until its lifetime runs out. A bullet
//! inside its circle breaks it into smaller meteors and scores points; a
//! meteor touching the player ends the run.

use std::any::Any;
use std::rc::Rc;

use arcade_engine::prelude::*;

use crate::bullet::BULLET_NAME;
use crate::player::PLAYER_NAME;
use crate::scenes::SCORE_SCENE;
use crate::score;
use crate::score_sheet::RankingThreshold;
use crate::services::GameServices;

/// Object name of every meteor
pub const METEOR_NAME: &str = "meteor";

/// Distance the children of a big meteor are pushed along their direction
const BIG_SPLIT_OFFSET: f32 = 10.0;

/// Meteor size tier
///
/// The discriminant is the sprite scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeteorRank {
    /// Smallest; does not split
    Small = 1,
    /// Splits into five small meteors
    Mid = 2,
    /// Splits into three mid meteors
    Big = 4,
}

/// One child produced by a split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteorSpawn {
    /// Child tier
    pub rank: MeteorRank,
    /// Offset from the parent position
    pub offset: Vec2,
    /// Child direction
    pub direction: Vec2,
}

impl MeteorRank {
    /// Sprite scale factor
    pub fn scale(self) -> f32 {
        f32::from(self as u8)
    }

    /// Points awarded for destroying a meteor of this tier
    pub fn points(self) -> u32 {
        match self {
            Self::Big => 10,
            Self::Mid => 20,
            Self::Small => 30,
        }
    }

    /// Tier of the children
    pub fn split_into(self) -> Option<Self> {
        match self {
            Self::Big => Some(Self::Mid),
            Self::Mid => Some(Self::Small),
            Self::Small => None,
        }
    }

    /// Children spawned when a meteor flying along `direction` is destroyed
    ///
    /// Big meteors fan out by 40% and their children start ten steps along
    /// their unnormalized fan direction. Mid meteors fan out by 40% and 80%
    /// from the parent position.
    pub fn split_plan(self, direction: Vec2) -> Vec<MeteorSpawn> {
        let Some(child) = self.split_into() else {
            return Vec::new();
        };

        match self {
            Self::Big => {
                let (wide, narrow) = deflect(direction, 0.4);
                vec![
                    MeteorSpawn { rank: child, offset: direction * BIG_SPLIT_OFFSET, direction },
                    MeteorSpawn {
                        rank: child,
                        offset: wide * BIG_SPLIT_OFFSET,
                        direction: wide.normalize_or_zero(),
                    },
                    MeteorSpawn {
                        rank: child,
                        offset: narrow * BIG_SPLIT_OFFSET,
                        direction: narrow.normalize_or_zero(),
                    },
                ]
            }
            _ => {
                let (wide, narrow) = deflect(direction, 0.4);
                let (wider, narrower) = deflect(direction, 0.8);
                std::iter::once(direction)
                    .chain([wide, narrow, wider, narrower].map(|d| d.normalize_or_zero()))
                    .map(|direction| MeteorSpawn { rank: child, offset: Vec2::zeros(), direction })
                    .collect()
            }
        }
    }
}

/// `(x + x*k, y - y*k)` and `(x - x*k, y + y*k)`
fn deflect(direction: Vec2, k: f32) -> (Vec2, Vec2) {
    (
        Vec2::new(direction.x + direction.x * k, direction.y - direction.y * k),
        Vec2::new(direction.x - direction.x * k, direction.y + direction.y * k),
    )
}

/// Meteor behavior
pub struct Meteor {
    rank: MeteorRank,
    direction: Vec2,
    speed: f32,
    services: Rc<GameServices>,
}

impl Meteor {
    /// Builder for a meteor: scaled sprite, circle trigger of half the
    /// sprite width and a lifetime timer
    pub fn build(services: &Rc<GameServices>, rank: MeteorRank, position: Vec2, direction: Vec2) -> GameObjectBuilder {
        let gameplay = services.gameplay();
        let mut sprite = SpriteComponent::new(services.assets().meteor_image.as_str(), services.image_source());
        sprite.scale_itself(rank.scale());
        let radius = (sprite.width() / 2.0).floor();

        GameObjectBuilder::new(METEOR_NAME)
            .at(position)
            .layer(RenderLayer::OVERLAY)
            .with_component(sprite)
            .with_component(TriggerComponent::circle(0.0, 0.0, radius))
            .with_component(TimerComponent::new(gameplay.meteor_lifetime(), TimerAction::DestroyOwner).activated())
            .with_behavior(Self {
                rank,
                direction,
                speed: gameplay.meteor_speed,
                services: Rc::clone(services),
            })
    }

    /// Size tier
    pub fn rank(&self) -> MeteorRank {
        self.rank
    }

    /// Flight direction
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    fn break_apart(&self, ctx: &mut UpdateContext<'_>, position: Vec2) -> Result<(), UpdateError> {
        let total = score::add_points(ctx.scene_mut(), self.rank.points())?;
        let children = self.rank.split_plan(self.direction);
        log::debug!(
            "{:?} meteor destroyed: +{} points ({total} total), {} children",
            self.rank,
            self.rank.points(),
            children.len()
        );

        for child in children {
            ctx.spawn(Self::build(&self.services, child.rank, position + child.offset, child.direction));
        }
        Ok(())
    }

    fn end_run(&self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        let points = score::current_points(ctx.scene())?;
        let threshold = self
            .services
            .score_sheet
            .rows()
            .and_then(|rows| RankingThreshold::from_rows(&rows));

        // An unreadable ranking still ends the run, just without registration
        let qualified = match threshold {
            Ok(threshold) => {
                if let RankingThreshold::Unavailable { index, total } = threshold {
                    log::warn!("Ranking threshold row {index:?} missing from a table of {total} rows; run qualifies");
                }
                log::info!("Player hit with {points} points (threshold {threshold:?})");
                threshold.admits(points)
            }
            Err(error) => {
                log::error!("Cannot read the ranking, run with {points} points does not qualify: {error}");
                false
            }
        };
        log::info!("Run ended, qualified for ranking: {qualified}");

        self.services.registration.borrow_mut().record_run(qualified, points);
        ctx.request_scene(SCORE_SCENE);
        Ok(())
    }
}

impl Behavior for Meteor {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        let step = self.direction * self.speed * ctx.delta_secs();
        let this = ctx.this();
        let me = ctx.me_mut()?;
        me.transform_mut().translate_world_position(step);

        let position = me.transform().world_position();
        let circle = me
            .first_trigger_with(Capabilities::CIRCLE)
            .ok_or(SceneError::MissingComponent {
                id: this,
                capabilities: Capabilities::CIRCLE | Capabilities::TRIGGER,
            })?
            .world_shape(me.transform());

        let hit = ctx.scene().live_objects_named(BULLET_NAME).into_iter().find(|&bullet| {
            ctx.scene()
                .get(bullet)
                .is_some_and(|object| circle.contains_point(object.transform().world_position()))
        });
        if let Some(bullet) = hit {
            ctx.destroy(bullet);
            self.break_apart(ctx, position)?;
            ctx.destroy_self();
            return Ok(());
        }

        let player = ctx.scene().singleton(PLAYER_NAME)?;
        let player_object = ctx.scene().try_get(player)?;
        let player_hit = player_object
            .triggers_with(Capabilities::COLLIDER | Capabilities::RECT)
            .any(|collider| circle.intersects(&collider.world_shape(player_object.transform())));
        if player_hit {
            self.end_run(ctx)?;
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
