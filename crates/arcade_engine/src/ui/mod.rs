//! UI prefabs built from game objects

pub mod button;

pub use button::{Button, ButtonAction, ButtonConfig, ButtonState};
