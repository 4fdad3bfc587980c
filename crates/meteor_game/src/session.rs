//! Headless game session
//!
//! Drives the scene manager with a fixed frame delta and scripted input: the
//! pilot sweeps left and right while firing, submits a name when a run
//! qualifies for the ranking, and presses "play again" after a while.

use std::rc::Rc;

use arcade_engine::debug::GizmoCollector;
use arcade_engine::prelude::*;

use crate::error::GameError;
use crate::scenes::{self, MAIN_SCENE, SCORE_SCENE};
use crate::score;
use crate::services::GameServices;

/// Name the scripted pilot registers under
pub const PILOT_NAME: &str = "PILOT";

/// What happened during a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Frames simulated
    pub frames: u32,

    /// Points of every finished run, in order
    pub runs: Vec<u32>,

    /// Runs saved to the ranking
    pub registered: u32,

    /// Behavior updates that failed
    pub failed_updates: usize,

    /// Gizmos collected over the session (zero when disabled)
    pub gizmos: usize,
}

impl SessionSummary {
    /// Best finished run
    pub fn best_run(&self) -> Option<u32> {
        self.runs.iter().copied().max()
    }
}

/// Scripted input source
#[derive(Debug, Clone)]
pub struct ScriptedPilot {
    sweep_frames: u32,
    score_scene_frames: u32,
    play_again_at: Vec2,
    frames_in_scene: u32,
}

impl ScriptedPilot {
    /// Pilot for `services`' session settings and screen
    pub fn new(services: &GameServices) -> Self {
        let screen = &services.config.engine.screen;
        Self {
            sweep_frames: services.config.session.sweep_frames.max(1),
            score_scene_frames: services.config.session.score_scene_frames,
            play_again_at: Vec2::new(screen.width / 2.0, screen.height * 0.8),
            frames_in_scene: 0,
        }
    }

    /// Input for the next frame of `scene`
    pub fn input(&mut self, scene: SceneId, services: &GameServices) -> InputSnapshot {
        self.frames_in_scene += 1;
        let mut input = InputSnapshot::new();

        if scene == MAIN_SCENE {
            let leftwards = (self.frames_in_scene / self.sweep_frames) % 2 == 0;
            input.set_action(if leftwards { Action::Left } else { Action::Right }, true);
            input.set_action(Action::Fire, true);
        } else if scene == SCORE_SCENE {
            let mut registration = services.registration.borrow_mut();
            if registration.show && registration.submitted_name.is_none() {
                registration.submit(PILOT_NAME);
            }
            let pressed = self.frames_in_scene > self.score_scene_frames;
            input = input.with_pointer(self.play_again_at, pressed);
        }
        input
    }

    /// Restart the per-scene frame count
    pub fn scene_changed(&mut self) {
        self.frames_in_scene = 0;
    }
}

/// Run the configured number of frames starting in the main scene
pub fn run_session(services: &Rc<GameServices>) -> Result<SessionSummary, GameError> {
    let session = &services.config.session;
    let time = FrameTime::from_secs_f32(session.fixed_delta);
    let gizmos = GizmoCollector::new().with_enabled(services.config.engine.debug_gizmos);

    let mut manager = SceneManager::with_screen_mapping(services.config.engine.screen.identity_mapping());
    scenes::register_scenes(&mut manager, services);
    manager.set_current_scene(MAIN_SCENE)?;

    let mut pilot = ScriptedPilot::new(services);
    let mut summary = SessionSummary::default();
    let mut last_points = 0;

    for _ in 0..session.frames {
        let current = manager.current_id().ok_or(SceneError::NoActiveScene)?;
        let input = pilot.input(current, services);

        let report = manager.frame(&time, &input)?;
        summary.frames += 1;
        summary.failed_updates += report.failed;

        if current == MAIN_SCENE {
            if let Some(scene) = manager.current_scene().filter(|_| report.transition.is_none()) {
                last_points = score::current_points(scene).unwrap_or(last_points);
            }
        } else if services.registration.borrow().registered_rank.is_some() {
            summary.registered += 1;
            services.registration.borrow_mut().registered_rank = None;
        }

        if let Some(next) = report.transition {
            if current == MAIN_SCENE && next == SCORE_SCENE {
                log::info!("Run {} ended with {last_points} points", summary.runs.len() + 1);
                summary.runs.push(last_points);
                last_points = 0;
            }
            pilot.scene_changed();
        }

        if gizmos.is_enabled() {
            if let Some(scene) = manager.current_scene() {
                summary.gizmos += gizmos.collect(scene).len();
            }
        }
    }

    log::info!(
        "Session finished: {} frames, {} runs, best {:?}, {} registered, {} failed updates",
        summary.frames,
        summary.runs.len(),
        summary.best_run(),
        summary.registered,
        summary.failed_updates
    );
    Ok(summary)
}
