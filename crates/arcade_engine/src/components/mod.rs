//! Components module
//!
//! Components are owned by exactly one game object and kept in attach
//! order. Instead of inspecting concrete types, systems ask a component (or
//! its owner) for [`Capabilities`].

pub mod transform;
pub mod sprite;
pub mod trigger;
pub mod timer;

pub use transform::TransformComponent;
pub use sprite::SpriteComponent;
pub use trigger::{TriggerComponent, TriggerShape};
pub use timer::{TimerAction, TimerComponent, TimerEvent};

bitflags::bitflags! {
    /// Capability set a component declares
    ///
    /// A game object's capability set is the union over its components, so
    /// "does anything here collide" is a single bit test.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Capabilities: u8 {
        /// Drawn by the host renderer
        const RENDERABLE = 1 << 0;
        /// Detects overlap
        const TRIGGER = 1 << 1;
        /// Trigger that also blocks movement
        const COLLIDER = 1 << 2;
        /// Rectangular shape
        const RECT = 1 << 3;
        /// Circular shape
        const CIRCLE = 1 << 4;
        /// Counts down with frame time
        const TIMED = 1 << 5;
    }
}

/// Index of a component inside its owner, stable for the owner's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(pub(crate) usize);

impl ComponentId {
    /// Position in attach order
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A capability unit attached to a game object
#[derive(Debug)]
pub enum Component {
    /// Image drawn at the owner's position
    Sprite(SpriteComponent),
    /// Rect or circle trigger, optionally blocking (collider)
    Trigger(TriggerComponent),
    /// Countdown with a completion action
    Timer(TimerComponent),
}

impl Component {
    /// Capabilities this component provides
    pub fn capabilities(&self) -> Capabilities {
        match self {
            Self::Sprite(_) => Capabilities::RENDERABLE,
            Self::Trigger(trigger) => trigger.capabilities(),
            Self::Timer(_) => Capabilities::TIMED,
        }
    }

    /// Whether this component provides every capability in `required`
    pub fn provides(&self, required: Capabilities) -> bool {
        self.capabilities().contains(required)
    }

    /// Short kind name used in debug labels
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Sprite(_) => "SpriteComponent",
            Self::Trigger(trigger) => trigger.kind_name(),
            Self::Timer(_) => "TimerComponent",
        }
    }

    /// Sprite view
    pub fn as_sprite(&self) -> Option<&SpriteComponent> {
        match self {
            Self::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    /// Mutable sprite view
    pub fn as_sprite_mut(&mut self) -> Option<&mut SpriteComponent> {
        match self {
            Self::Sprite(sprite) => Some(sprite),
            _ => None,
        }
    }

    /// Trigger view
    pub fn as_trigger(&self) -> Option<&TriggerComponent> {
        match self {
            Self::Trigger(trigger) => Some(trigger),
            _ => None,
        }
    }

    /// Mutable trigger view
    pub fn as_trigger_mut(&mut self) -> Option<&mut TriggerComponent> {
        match self {
            Self::Trigger(trigger) => Some(trigger),
            _ => None,
        }
    }

    /// Timer view
    pub fn as_timer(&self) -> Option<&TimerComponent> {
        match self {
            Self::Timer(timer) => Some(timer),
            _ => None,
        }
    }

    /// Mutable timer view
    pub fn as_timer_mut(&mut self) -> Option<&mut TimerComponent> {
        match self {
            Self::Timer(timer) => Some(timer),
            _ => None,
        }
    }
}

impl From<SpriteComponent> for Component {
    fn from(sprite: SpriteComponent) -> Self {
        Self::Sprite(sprite)
    }
}

impl From<TriggerComponent> for Component {
    fn from(trigger: TriggerComponent) -> Self {
        Self::Trigger(trigger)
    }
}

impl From<TimerComponent> for Component {
    fn from(timer: TimerComponent) -> Self {
        Self::Timer(timer)
    }
}
