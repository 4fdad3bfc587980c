//! Game objects
//!
//! A game object owns its transform, its components (in attach order) and
//! optionally a behavior. Identity is the
//! [`GameObjectId`](crate::scene::GameObjectId) handed out by the
//! scene; names are labels and may repeat.

use crate::components::{
    Capabilities, Component, ComponentId, SpriteComponent, TransformComponent, TriggerComponent,
};
use crate::foundation::math::Vec2;
use crate::physics::Rect;
use crate::render::{RenderLayer, ScreenMapping};
use crate::scene::Behavior;

/// Lifecycle of an attached game object
///
/// Construction happens in [`GameObjectBuilder`]; removal is the object
/// leaving the scene arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Updated and rendered
    Active,
    /// Updated but skipped by the renderer
    RenderingSuspended,
    /// Waiting for the end-of-pass sweep; never updated or queried again
    PendingDestroy,
}

/// Transform + components + lifecycle + optional behavior
pub struct GameObject {
    name: String,
    transform: TransformComponent,
    components: Vec<Component>,
    capabilities: Capabilities,
    state: LifecycleState,
    layer: RenderLayer,
    pub(crate) behavior: Option<Box<dyn Behavior>>,
}

impl std::fmt::Debug for GameObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameObject")
            .field("name", &self.name)
            .field("transform", &self.transform)
            .field("components", &self.components)
            .field("state", &self.state)
            .field("layer", &self.layer)
            .field("has_behavior", &self.behavior.is_some())
            .finish()
    }
}

impl GameObject {
    /// Create a bare object at the world origin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: TransformComponent::default(),
            components: Vec::new(),
            capabilities: Capabilities::empty(),
            state: LifecycleState::Active,
            layer: RenderLayer::DEFAULT,
            behavior: None,
        }
    }

    /// Object name (not unique)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Transform
    pub fn transform(&self) -> &TransformComponent {
        &self.transform
    }

    /// Mutable transform
    pub fn transform_mut(&mut self) -> &mut TransformComponent {
        &mut self.transform
    }

    /// Render layer
    pub fn layer(&self) -> RenderLayer {
        self.layer
    }

    /// Attach a component and record its capabilities on the owner
    pub fn attach(&mut self, component: impl Into<Component>) -> ComponentId {
        let component = component.into();
        self.capabilities |= component.capabilities();
        self.components.push(component);
        ComponentId(self.components.len() - 1)
    }

    /// Union of the capabilities of every attached component
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Quick pre-filter: some components together cover `caps`
    ///
    /// Use [`components_with`](Self::components_with) when a single
    /// component must provide all of them.
    pub fn has_capability(&self, caps: Capabilities) -> bool {
        self.capabilities.contains(caps)
    }

    /// All components in attach order
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Component by id
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.get(id.0)
    }

    /// Mutable component by id
    pub fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.get_mut(id.0)
    }

    pub(crate) fn components_mut(&mut self) -> impl Iterator<Item = &mut Component> {
        self.components.iter_mut()
    }

    /// Components providing every capability in `caps`, in attach order
    pub fn components_with(&self, caps: Capabilities) -> impl Iterator<Item = (ComponentId, &Component)> {
        self.components
            .iter()
            .enumerate()
            .filter(move |(_, component)| component.provides(caps))
            .map(|(index, component)| (ComponentId(index), component))
    }

    /// Triggers providing every capability in `caps`
    pub fn triggers_with(&self, caps: Capabilities) -> impl Iterator<Item = &TriggerComponent> {
        self.components_with(caps | Capabilities::TRIGGER)
            .filter_map(|(_, component)| component.as_trigger())
    }

    /// First trigger providing `caps`
    pub fn first_trigger_with(&self, caps: Capabilities) -> Option<&TriggerComponent> {
        self.triggers_with(caps).next()
    }

    /// First sprite, if any
    pub fn sprite(&self) -> Option<&SpriteComponent> {
        self.components.iter().find_map(Component::as_sprite)
    }

    /// First sprite, mutable
    pub fn sprite_mut(&mut self) -> Option<&mut SpriteComponent> {
        self.components.iter_mut().find_map(Component::as_sprite_mut)
    }

    /// Screen rectangle covered by the first sprite
    pub fn image_rect(&self, mapping: &ScreenMapping) -> Option<Rect> {
        self.sprite().map(|sprite| sprite.image_rect(self.transform.screen_position(mapping)))
    }

    /// Lifecycle state
    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Whether the object waits for removal
    pub fn is_pending_destroy(&self) -> bool {
        self.state == LifecycleState::PendingDestroy
    }

    /// Whether the renderer should draw this object
    pub fn is_rendering(&self) -> bool {
        self.state == LifecycleState::Active
    }

    /// Skip this object when rendering; updates keep running
    pub fn stop_rendering_this_game_object(&mut self) {
        if self.state == LifecycleState::Active {
            self.state = LifecycleState::RenderingSuspended;
        }
    }

    /// Resume rendering after [`stop_rendering_this_game_object`](Self::stop_rendering_this_game_object)
    pub fn start_rendering_this_game_object(&mut self) {
        if self.state == LifecycleState::RenderingSuspended {
            self.state = LifecycleState::Active;
        }
    }

    pub(crate) fn mark_pending_destroy(&mut self) {
        self.state = LifecycleState::PendingDestroy;
    }

    /// Whether a behavior is installed (it is absent while it runs)
    pub fn has_behavior(&self) -> bool {
        self.behavior.is_some()
    }
}

/// Builder for game objects; the `Constructing` stage of the lifecycle
pub struct GameObjectBuilder {
    object: GameObject,
}

impl GameObjectBuilder {
    /// Start building an object named `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            object: GameObject::new(name),
        }
    }

    /// Initial world position
    #[must_use]
    pub fn at(mut self, position: Vec2) -> Self {
        self.object.transform.move_world_position(position);
        self
    }

    /// Pin to a screen point (also sets the world position to it)
    #[must_use]
    pub fn fixed_on_screen(mut self, position: Vec2) -> Self {
        self.object.transform.move_world_position(position);
        self.object.transform.fix_on_screen(position);
        self
    }

    /// Render layer
    #[must_use]
    pub fn layer(mut self, layer: RenderLayer) -> Self {
        self.object.layer = layer;
        self
    }

    /// Attach a component
    #[must_use]
    pub fn with_component(mut self, component: impl Into<Component>) -> Self {
        self.object.attach(component);
        self
    }

    /// Install the behavior driving this object
    #[must_use]
    pub fn with_behavior(mut self, behavior: impl Behavior) -> Self {
        self.object.behavior = Some(Box::new(behavior));
        self
    }

    /// Start with rendering suspended
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.object.stop_rendering_this_game_object();
        self
    }

    /// Finish construction
    pub fn build(self) -> GameObject {
        self.object
    }
}

impl From<GameObjectBuilder> for GameObject {
    fn from(builder: GameObjectBuilder) -> Self {
        builder.build()
    }
}
