//! Headless meteor game
//!
//! Usage: `meteor_game [config.toml|config.ron]`

use std::process::ExitCode;
use std::rc::Rc;

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use meteor_game::score_sheet::RonScoreSheet;
use meteor_game::session::run_session;
use meteor_game::{GameConfig, GameError, GameServices};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Game failed: {e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_from_file(&path)?,
        None => GameConfig::default(),
    };
    logging::init_with_level(&config.engine.log_level);
    config.validate()?;

    log::info!("Starting meteor game ({} frames)", config.session.frames);
    let images = Rc::new(config.assets.load_image_table()?);
    let score_sheet = Rc::new(RonScoreSheet::new(&config.assets.score_sheet));
    let services = Rc::new(GameServices::new(config, images, score_sheet));

    let summary = run_session(&services)?;
    if let Some(best) = summary.best_run() {
        log::info!("Best run: {best} points");
    }
    Ok(())
}
