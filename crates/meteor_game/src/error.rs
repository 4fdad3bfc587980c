//! Game-level errors

use arcade_engine::config::ConfigError;
use arcade_engine::SceneError;
use thiserror::Error;

use crate::score_sheet::ScoreSheetError;

/// Errors surfaced by game setup and the headless session
#[derive(Error, Debug)]
pub enum GameError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Score sheet could not be read or written
    #[error("score sheet error: {0}")]
    ScoreSheet(#[from] ScoreSheetError),

    /// Scene setup or switching failed
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}
