//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle to a game object inside a scene arena
    ///
    /// Handles of removed objects never alias a newer object: the slot map
    /// bumps the slot generation on removal.
    pub struct GameObjectId;
}

/// Arena of values addressed by [`GameObjectId`]
pub type ObjectArena<T> = SlotMap<GameObjectId, T>;
