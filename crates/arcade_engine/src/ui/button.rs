//! Button prefab - clickable screen-pinned sprite
//!
//! The button swaps between its normal and active image while the pointer
//! hovers its rect trigger and runs its action every frame the pointer
//! button is held over it.

use std::any::Any;
use std::rc::Rc;

use crate::assets::ImageSource;
use crate::components::{Capabilities, SpriteComponent, TriggerComponent};
use crate::foundation::collections::GameObjectId;
use crate::foundation::math::Vec2;
use crate::render::RenderLayer;
use crate::scene::{Behavior, GameObjectBuilder, Scene, SceneError, UpdateContext, UpdateError};

/// Object name given to every button
pub const BUTTON_NAME: &str = "menu_button";

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Pointer is hovering over the button
    Hovered,
    /// Pointer button is held over the button
    Pressed,
    /// Button is deactivated (no logic, not rendered)
    Disabled,
}

/// Click handler; runs with the button's update context
pub type ButtonAction = Box<dyn FnMut(&mut UpdateContext<'_>) -> Result<(), UpdateError>>;

/// Images, placement and scale of a button
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    /// Image shown at rest
    pub normal_image: String,
    /// Image shown while hovered
    pub active_image: String,
    /// Screen position of the button center
    pub position: Vec2,
    /// Display scale of both images
    pub scale: f32,
    /// Render layer
    pub layer: RenderLayer,
}

impl ButtonConfig {
    /// Create a config with scale 1 on the UI layer
    pub fn new(normal_image: impl Into<String>, active_image: impl Into<String>, position: Vec2) -> Self {
        Self {
            normal_image: normal_image.into(),
            active_image: active_image.into(),
            position,
            scale: 1.0,
            layer: RenderLayer::UI,
        }
    }

    /// Builder pattern: set the display scale
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Button behavior
pub struct Button {
    config: ButtonConfig,
    images: Rc<dyn ImageSource>,
    action: ButtonAction,
    state: ButtonState,
}

impl Button {
    /// Builder for a button object: scaled sprite plus a rect trigger of the
    /// same size, pinned to `config.position` on screen
    pub fn build<F>(config: ButtonConfig, images: Rc<dyn ImageSource>, action: F) -> GameObjectBuilder
    where
        F: FnMut(&mut UpdateContext<'_>) -> Result<(), UpdateError> + 'static,
    {
        let mut sprite = SpriteComponent::new(config.normal_image.as_str(), images.as_ref());
        sprite.scale_itself(config.scale);
        let trigger = TriggerComponent::rect(0.0, 0.0, sprite.width(), sprite.height());

        GameObjectBuilder::new(BUTTON_NAME)
            .fixed_on_screen(config.position)
            .layer(config.layer)
            .with_component(sprite)
            .with_component(trigger)
            .with_behavior(Self {
                config,
                images,
                action: Box::new(action),
                state: ButtonState::Normal,
            })
    }

    /// Current visual state
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Whether the button reacts to the pointer
    pub fn is_active(&self) -> bool {
        self.state != ButtonState::Disabled
    }
}

/// Stop the button's logic and rendering
pub fn deactivate(scene: &mut Scene, id: GameObjectId) -> Result<(), SceneError> {
    set_active(scene, id, false)
}

/// Resume the button's logic and rendering
pub fn activate(scene: &mut Scene, id: GameObjectId) -> Result<(), SceneError> {
    set_active(scene, id, true)
}

fn set_active(scene: &mut Scene, id: GameObjectId, active: bool) -> Result<(), SceneError> {
    let button = scene.behavior_mut::<Button>(id).ok_or(SceneError::BehaviorMismatch(id))?;
    button.state = if active { ButtonState::Normal } else { ButtonState::Disabled };

    let object = scene.try_get_mut(id)?;
    if active {
        object.start_rendering_this_game_object();
    } else {
        object.stop_rendering_this_game_object();
    }
    Ok(())
}

impl Behavior for Button {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        if !self.is_active() {
            return Ok(());
        }

        let mapping = ctx.screen_mapping();
        let pointer = ctx.input().pointer_position();
        let pressed = ctx.input().is_pointer_pressed();
        let this = ctx.this();

        let me = ctx.me_mut()?;
        let hovered = me
            .first_trigger_with(Capabilities::RECT)
            .ok_or(SceneError::MissingComponent {
                id: this,
                capabilities: Capabilities::RECT | Capabilities::TRIGGER,
            })?
            .screen_shape(me.transform(), &mapping)
            .contains_point(pointer);

        let image = if hovered { &self.config.active_image } else { &self.config.normal_image };
        if let Some(sprite) = me.sprite_mut() {
            sprite.change_image(image, self.images.as_ref());
            sprite.scale_itself(self.config.scale);
        }

        self.state = match (hovered, pressed) {
            (true, true) => ButtonState::Pressed,
            (true, false) => ButtonState::Hovered,
            _ => ButtonState::Normal,
        };

        if self.state == ButtonState::Pressed {
            (self.action)(ctx)?;
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::ImageTable;
    use crate::foundation::time::FrameTime;
    use crate::input::InputSnapshot;
    use crate::scene::SceneId;
    use approx::assert_relative_eq;

    const TARGET: SceneId = SceneId("main");

    fn images() -> Rc<dyn ImageSource> {
        Rc::new(
            ImageTable::new()
                .with_image("button.png", 100.0, 40.0)
                .with_image("button_active.png", 110.0, 44.0),
        )
    }

    fn scene_with_button() -> (Scene, GameObjectId) {
        let mut scene = Scene::new("menu");
        let config = ButtonConfig::new("button.png", "button_active.png", Vec2::new(200.0, 100.0)).with_scale(0.5);
        let id = scene.spawn(Button::build(config, images(), |ctx| {
            ctx.request_scene(TARGET);
            Ok(())
        }));
        (scene, id)
    }

    fn frame() -> FrameTime {
        FrameTime::from_millis(16)
    }

    #[test]
    fn test_trigger_matches_scaled_image() {
        let (scene, id) = scene_with_button();
        let object = scene.get(id).unwrap();
        let sprite = object.sprite().unwrap();
        assert_relative_eq!(sprite.width(), 50.0);
        assert_relative_eq!(sprite.height(), 20.0);
        assert_eq!(object.name(), BUTTON_NAME);
        assert!(object.transform().is_fixed_on_screen());
    }

    #[test]
    fn test_hover_swaps_image_without_clicking() {
        let (mut scene, id) = scene_with_button();
        let hover = InputSnapshot::new().with_pointer(Vec2::new(210.0, 105.0), false);

        let report = scene.update(&frame(), &hover);
        assert_eq!(report.transition, None);
        assert_eq!(scene.get(id).unwrap().sprite().unwrap().path(), "button_active.png");
        assert_eq!(scene.behavior::<Button>(id).unwrap().state(), ButtonState::Hovered);

        scene.update(&frame(), &InputSnapshot::new().with_pointer(Vec2::new(0.0, 0.0), false));
        assert_eq!(scene.get(id).unwrap().sprite().unwrap().path(), "button.png");
    }

    #[test]
    fn test_click_runs_action() {
        let (mut scene, _) = scene_with_button();
        let click = InputSnapshot::new().with_pointer(Vec2::new(200.0, 100.0), true);
        assert_eq!(scene.update(&frame(), &click).transition, Some(TARGET));
    }

    #[test]
    fn test_press_outside_does_nothing() {
        let (mut scene, _) = scene_with_button();
        let click = InputSnapshot::new().with_pointer(Vec2::new(260.0, 100.0), true);
        assert_eq!(scene.update(&frame(), &click).transition, None);
    }

    #[test]
    fn test_deactivated_button_ignores_clicks_and_hides() {
        let (mut scene, id) = scene_with_button();
        deactivate(&mut scene, id).unwrap();
        assert!(!scene.get(id).unwrap().is_rendering());

        let click = InputSnapshot::new().with_pointer(Vec2::new(200.0, 100.0), true);
        assert_eq!(scene.update(&frame(), &click).transition, None);

        activate(&mut scene, id).unwrap();
        assert!(scene.get(id).unwrap().is_rendering());
        assert_eq!(scene.update(&frame(), &click).transition, Some(TARGET));
    }
}
