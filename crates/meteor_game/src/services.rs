//! Shared game state injected into scenes and behaviors

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use arcade_engine::assets::ImageSource;

use crate::config::{AssetConfig, GameConfig, GameplayConfig};
use crate::score_sheet::ScoreSheet;

/// Outcome of the last run, handed from the main scene to the score scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRegistration {
    /// Whether the registration panel is shown
    pub show: bool,

    /// Points of the qualifying run (zero otherwise)
    pub total_points: u32,

    /// Name entered for the ranking, waiting to be saved
    pub submitted_name: Option<String>,

    /// Rank the run was saved at
    pub registered_rank: Option<usize>,
}

impl ScoreRegistration {
    /// Record how a run ended
    pub fn record_run(&mut self, qualified: bool, points: u32) {
        *self = Self {
            show: qualified,
            total_points: if qualified { points } else { 0 },
            ..Self::default()
        };
    }

    /// Enter the name to save the qualifying run under
    pub fn submit(&mut self, name: impl Into<String>) {
        if self.show {
            self.submitted_name = Some(name.into());
        } else {
            log::warn!("Ignoring ranking name: the last run did not qualify");
        }
    }

    /// Forget the last run
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Collaborators shared by every scene of one game
pub struct GameServices {
    /// Configuration
    pub config: GameConfig,

    /// Image sizes
    pub images: Rc<dyn ImageSource>,

    /// Ranking storage
    pub score_sheet: Rc<dyn ScoreSheet>,

    /// Outcome of the last run
    pub registration: RefCell<ScoreRegistration>,
}

impl fmt::Debug for GameServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameServices")
            .field("config", &self.config)
            .field("registration", &self.registration)
            .finish_non_exhaustive()
    }
}

impl GameServices {
    /// Bundle the collaborators of one game
    pub fn new(config: GameConfig, images: Rc<dyn ImageSource>, score_sheet: Rc<dyn ScoreSheet>) -> Self {
        Self {
            config,
            images,
            score_sheet,
            registration: RefCell::new(ScoreRegistration::default()),
        }
    }

    /// Gameplay tuning
    pub fn gameplay(&self) -> &GameplayConfig {
        &self.config.gameplay
    }

    /// Asset paths
    pub fn assets(&self) -> &AssetConfig {
        &self.config.assets
    }

    /// Image source as a plain reference
    pub fn image_source(&self) -> &dyn ImageSource {
        self.images.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_run_clears_previous_submission() {
        let mut registration = ScoreRegistration::default();
        registration.record_run(true, 120);
        registration.submit("ANA");
        assert_eq!(registration.submitted_name.as_deref(), Some("ANA"));

        registration.record_run(false, 80);
        assert!(!registration.show);
        assert_eq!(registration.total_points, 0);
        assert_eq!(registration.submitted_name, None);
    }

    #[test]
    fn test_submit_requires_qualifying_run() {
        let mut registration = ScoreRegistration::default();
        registration.submit("BOB");
        assert_eq!(registration.submitted_name, None);
    }
}
