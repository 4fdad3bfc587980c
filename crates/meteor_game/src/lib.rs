//! # Meteor Game
//!
//! An asteroids-style arcade game on top of [`arcade_engine`]: the player
//! shoots meteors that split into smaller ones, and getting hit sends the
//! run to the score scene, where a good enough score may be registered.
//!
//! The crate is a library so the game logic can be driven headlessly (see
//! [`session`]); `src/main.rs` is a thin binary around it.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod services;
pub mod score_sheet;
pub mod score;
pub mod bullet;
pub mod meteor;
pub mod player;
pub mod spawner;
pub mod scenes;
pub mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use services::{GameServices, ScoreRegistration};
