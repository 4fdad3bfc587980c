//! Scene construction
//!
//! Both scenes are rebuilt from scratch every time they are entered.

use std::any::Any;
use std::rc::Rc;

use arcade_engine::prelude::*;
use arcade_engine::ui::{Button, ButtonConfig};

use crate::player::{Player, PLAYER_NAME};
use crate::score::{Score, SCORE_NAME};
use crate::score_sheet::register_score;
use crate::services::GameServices;
use crate::spawner::MeteorSpawner;

/// Gameplay scene
pub const MAIN_SCENE: SceneId = SceneId("main");

/// Scene shown after the player is hit
pub const SCORE_SCENE: SceneId = SceneId("score");

/// Object name of the registration panel
pub const REGISTRATION_PANEL_NAME: &str = "score_registration_panel";

/// Register both scenes with `manager`
pub fn register_scenes(manager: &mut SceneManager, services: &Rc<GameServices>) {
    let main_services = Rc::clone(services);
    manager.register_scene(MAIN_SCENE, move || build_main_scene(&main_services));

    let score_services = Rc::clone(services);
    manager.register_scene(SCORE_SCENE, move || build_score_scene(&score_services));
}

/// Player, score counter and meteor spawner
///
/// Registers the `player` and `score` singletons meteors rely on.
pub fn build_main_scene(services: &Rc<GameServices>) -> Result<Scene, SceneError> {
    services.registration.borrow_mut().reset();

    let screen = &services.config.engine.screen;
    let mut scene = Scene::new(MAIN_SCENE.0);

    let player = scene.spawn(Player::build(services, Vec2::new(screen.width / 2.0, screen.height * 0.8)));
    scene.register_singleton(PLAYER_NAME, player)?;

    let score = scene.spawn(Score::build(Vec2::new(20.0, 20.0)));
    scene.register_singleton(SCORE_NAME, score)?;

    scene.spawn(MeteorSpawner::build(services));
    log::debug!("Built main scene with {} objects", scene.len());
    Ok(scene)
}

/// Registration panel (shown only for a qualifying run) and "play again"
pub fn build_score_scene(services: &Rc<GameServices>) -> Result<Scene, SceneError> {
    let screen = &services.config.engine.screen;
    let assets = services.assets();
    let center = Vec2::new(screen.width / 2.0, screen.height / 2.0);
    let mut scene = Scene::new(SCORE_SCENE.0);

    let registration = services.registration.borrow().clone();
    let mut panel = GameObjectBuilder::new(REGISTRATION_PANEL_NAME)
        .fixed_on_screen(center)
        .layer(RenderLayer::UI)
        .with_component(SpriteComponent::new(
            assets.registration_panel_image.as_str(),
            services.image_source(),
        ))
        .with_behavior(ScoreRegistrationPanel {
            total_points: registration.total_points,
            services: Rc::clone(services),
        });
    if !registration.show {
        panel = panel.hidden();
    }
    scene.spawn(panel);

    let button = ButtonConfig::new(
        assets.play_again_image.as_str(),
        assets.play_again_active_image.as_str(),
        Vec2::new(center.x, screen.height * 0.8),
    );
    scene.spawn(Button::build(button, Rc::clone(&services.images), |ctx| {
        ctx.request_scene(MAIN_SCENE);
        Ok(())
    }));

    log::debug!(
        "Built score scene (registration {})",
        if registration.show { "shown" } else { "hidden" }
    );
    Ok(scene)
}

/// Saves a qualifying run once a name has been submitted
pub struct ScoreRegistrationPanel {
    total_points: u32,
    services: Rc<GameServices>,
}

impl ScoreRegistrationPanel {
    /// Points of the run being registered
    pub fn total_points(&self) -> u32 {
        self.total_points
    }
}

impl Behavior for ScoreRegistrationPanel {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        if !ctx.me()?.is_rendering() {
            return Ok(());
        }

        let Some(name) = self.services.registration.borrow_mut().submitted_name.take() else {
            return Ok(());
        };

        let rank = register_score(self.services.score_sheet.as_ref(), &name, self.total_points)?;
        {
            let mut registration = self.services.registration.borrow_mut();
            registration.show = false;
            registration.registered_rank = Some(rank);
        }
        ctx.me_mut()?.stop_rendering_this_game_object();
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
