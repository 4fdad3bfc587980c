//! Game configuration
//!
//! Defaults are the stock game tuning. Any subset of the
//! fields may be given in a TOML or RON file; missing ones keep their
//! defaults.

use std::time::Duration;

use arcade_engine::assets::ImageTable;
use arcade_engine::config::{Config, ConfigError};
use arcade_engine::core::EngineConfig;
use serde::{Deserialize, Serialize};

/// Complete game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings (logging, gizmos, virtual screen)
    pub engine: EngineConfig,

    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// Asset and data file paths
    pub assets: AssetConfig,

    /// Headless session settings
    pub session: SessionConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Meteor speed in world units per second
    pub meteor_speed: f32,

    /// Meteor lifetime (seconds)
    pub meteor_lifetime: f32,

    /// Bullet speed in world units per second
    pub bullet_speed: f32,

    /// Bullet lifetime (seconds)
    pub bullet_lifetime: f32,

    /// Player speed in world units per second
    pub player_speed: f32,

    /// Minimum time between two shots (seconds)
    pub fire_cooldown: f32,

    /// Time between two spawned meteors (seconds)
    pub spawn_interval: f32,

    /// Seed for the meteor spawner
    pub seed: u64,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            meteor_speed: 100.0,
            meteor_lifetime: 20.0,
            bullet_speed: 600.0,
            bullet_lifetime: 3.0,
            player_speed: 300.0,
            fire_cooldown: 0.25,
            spawn_interval: 2.0,
            seed: 42,
        }
    }
}

impl GameplayConfig {
    /// Meteor lifetime as a duration
    pub fn meteor_lifetime(&self) -> Duration {
        secs(self.meteor_lifetime)
    }

    /// Bullet lifetime as a duration
    pub fn bullet_lifetime(&self) -> Duration {
        secs(self.bullet_lifetime)
    }

    /// Fire cooldown as a duration
    pub fn fire_cooldown(&self) -> Duration {
        secs(self.fire_cooldown)
    }

    /// Spawn interval as a duration
    pub fn spawn_interval(&self) -> Duration {
        secs(self.spawn_interval)
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

/// Asset and data file configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Meteor sprite
    pub meteor_image: String,
    /// Bullet sprite
    pub bullet_image: String,
    /// Player sprite
    pub player_image: String,
    /// Score registration panel sprite
    pub registration_panel_image: String,
    /// "Play again" button at rest
    pub play_again_image: String,
    /// "Play again" button while hovered
    pub play_again_active_image: String,
    /// Image size table (RON or TOML); built-in sizes are used when absent
    pub image_table: String,
    /// Ranking table (RON)
    pub score_sheet: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            meteor_image: "game_res/meteor.png".to_string(),
            bullet_image: "game_res/bullet.png".to_string(),
            player_image: "game_res/player.png".to_string(),
            registration_panel_image: "game_res/score_registration.png".to_string(),
            play_again_image: "game_res/play_again.png".to_string(),
            play_again_active_image: "game_res/play_again_active.png".to_string(),
            image_table: "game_data/images.ron".to_string(),
            score_sheet: "game_data/score_sheet.ron".to_string(),
        }
    }
}

impl AssetConfig {
    /// Sizes of the stock game images
    pub fn builtin_image_table(&self) -> ImageTable {
        ImageTable::new()
            .with_image(self.meteor_image.as_str(), 24.0, 24.0)
            .with_image(self.bullet_image.as_str(), 4.0, 12.0)
            .with_image(self.player_image.as_str(), 48.0, 36.0)
            .with_image(self.registration_panel_image.as_str(), 420.0, 240.0)
            .with_image(self.play_again_image.as_str(), 200.0, 60.0)
            .with_image(self.play_again_active_image.as_str(), 200.0, 60.0)
    }

    /// Image table from [`image_table`](Self::image_table), or the built-in one
    pub fn load_image_table(&self) -> Result<ImageTable, ConfigError> {
        let table = ImageTable::load_or_default(&self.image_table)?;
        if table.is_empty() {
            return Ok(self.builtin_image_table());
        }
        Ok(table)
    }
}

/// Headless session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Frames to simulate
    pub frames: u32,

    /// Fixed frame delta (seconds)
    pub fixed_delta: f32,

    /// Frames the scripted pilot holds each direction before turning
    pub sweep_frames: u32,

    /// Frames spent on the score scene before pressing "play again"
    pub score_scene_frames: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            frames: 3600,
            fixed_delta: 1.0 / 60.0,
            sweep_frames: 90,
            score_scene_frames: 120,
        }
    }
}

impl GameConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;

        let gameplay = &self.gameplay;
        let positive = [
            ("meteor_speed", gameplay.meteor_speed),
            ("meteor_lifetime", gameplay.meteor_lifetime),
            ("bullet_speed", gameplay.bullet_speed),
            ("bullet_lifetime", gameplay.bullet_lifetime),
            ("player_speed", gameplay.player_speed),
            ("spawn_interval", gameplay.spawn_interval),
            ("fixed_delta", self.session.fixed_delta),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if gameplay.fire_cooldown < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "fire_cooldown cannot be negative, got {}",
                gameplay.fire_cooldown
            )));
        }
        Ok(())
    }
}

impl Config for GameConfig {}
