//! Meteor splitting, scoring and run ending inside a real main scene

use std::rc::Rc;

use arcade_engine::prelude::*;
use meteor_game::bullet::Bullet;
use meteor_game::config::GameConfig;
use meteor_game::meteor::{Meteor, MeteorRank, METEOR_NAME};
use meteor_game::scenes::{build_main_scene, SCORE_SCENE};
use meteor_game::score::current_points;
use meteor_game::score_sheet::MemoryScoreSheet;
use meteor_game::GameServices;

fn services(sheet: MemoryScoreSheet) -> Rc<GameServices> {
    let mut config = GameConfig::default();
    config.gameplay.spawn_interval = 10_000.0;
    let images = Rc::new(config.assets.builtin_image_table());
    Rc::new(GameServices::new(config, images, Rc::new(sheet)))
}

fn frame() -> FrameTime {
    FrameTime::from_secs_f32(1.0 / 60.0)
}

#[test]
fn test_big_meteor_chain_scores_520_over_19_meteors() {
    for direction in [Vec2::new(1.0, 0.0), Vec2::new(0.6, 0.8), Vec2::zeros()] {
        let services = services(MemoryScoreSheet::default());
        let mut scene = build_main_scene(&services).unwrap();
        scene.spawn(Meteor::build(&services, MeteorRank::Big, Vec2::new(200.0, 200.0), direction));

        let mut live_per_wave = Vec::new();
        for _ in 0..4 {
            scene.flush();
            let meteors = scene.live_objects_named(METEOR_NAME);
            live_per_wave.push(meteors.len());

            for id in meteors {
                let position = scene.get(id).unwrap().transform().world_position();
                scene.spawn(Bullet::build(&services, position, Vec2::new(0.0, -1.0)));
            }
            let report = scene.update(&frame(), &InputSnapshot::default());
            assert_eq!(report.failed, 0, "direction {direction:?}");
            assert_eq!(report.transition, None, "direction {direction:?}");
        }

        assert_eq!(live_per_wave, [1_usize, 3, 15, 0], "direction {direction:?}");
        assert_eq!(live_per_wave.iter().sum::<usize>(), 19);
        assert_eq!(current_points(&scene), Ok(520), "direction {direction:?}");
    }
}

#[test]
fn test_mid_children_fan_out_from_parent() {
    let services = services(MemoryScoreSheet::default());
    let mut scene = build_main_scene(&services).unwrap();
    let parent = Vec2::new(300.0, 300.0);
    scene.spawn(Meteor::build(&services, MeteorRank::Mid, parent, Vec2::new(0.0, 1.0)));
    scene.spawn(Bullet::build(&services, parent, Vec2::new(0.0, -1.0)));

    scene.update(&frame(), &InputSnapshot::default());
    scene.flush();

    let children = scene.live_objects_named(METEOR_NAME);
    assert_eq!(children.len(), 5);
    for id in children {
        let meteor = scene.behavior::<Meteor>(id).unwrap();
        assert_eq!(meteor.rank(), MeteorRank::Small);
        assert!((meteor.direction().magnitude() - 1.0).abs() < 1e-5);
    }
    assert_eq!(current_points(&scene), Ok(20));
}

#[test]
fn test_meteor_hitting_player_ends_run() {
    let sheet = MemoryScoreSheet::from_scores((0..11).map(|i| ("P", 1000 - i * 90)));
    let services = services(sheet);
    let mut scene = build_main_scene(&services).unwrap();

    let player = scene.singleton("player").unwrap();
    let position = scene.get(player).unwrap().transform().world_position();
    scene.spawn(Meteor::build(&services, MeteorRank::Small, position, Vec2::new(1.0, 0.0)));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.transition, Some(SCORE_SCENE));

    let registration = services.registration.borrow();
    assert!(!registration.show);
    assert_eq!(registration.total_points, 0);
}

#[test]
fn test_qualifying_run_is_flagged_for_registration() {
    let services = services(MemoryScoreSheet::from_scores([("A", 5)]));
    let mut scene = build_main_scene(&services).unwrap();
    meteor_game::score::add_points(&mut scene, 30).unwrap();

    let player = scene.singleton("player").unwrap();
    let position = scene.get(player).unwrap().transform().world_position();
    scene.spawn(Meteor::build(&services, MeteorRank::Big, position, Vec2::new(0.0, 1.0)));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.transition, Some(SCORE_SCENE));

    let registration = services.registration.borrow();
    assert!(registration.show);
    assert_eq!(registration.total_points, 30);
}

#[test]
fn test_unreadable_ranking_still_ends_run() {
    let sheet = MemoryScoreSheet::new(vec![("ANA".to_string(), "lots".to_string())]);
    let services = services(sheet);
    let mut scene = build_main_scene(&services).unwrap();
    meteor_game::score::add_points(&mut scene, 60).unwrap();

    let player = scene.singleton("player").unwrap();
    let position = scene.get(player).unwrap().transform().world_position();
    scene.spawn(Meteor::build(&services, MeteorRank::Small, position, Vec2::new(1.0, 0.0)));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.failed, 0);
    assert_eq!(report.transition, Some(SCORE_SCENE));

    let registration = services.registration.borrow();
    assert!(!registration.show);
    assert_eq!(registration.total_points, 0);
}

#[test]
fn test_meteor_expires_after_lifetime() {
    let services = services(MemoryScoreSheet::default());
    let mut scene = build_main_scene(&services).unwrap();
    let meteor = scene.spawn(Meteor::build(&services, MeteorRank::Small, Vec2::new(100.0, 100.0), Vec2::zeros()));

    let second = FrameTime::from_millis(1000);
    for _ in 0..19 {
        scene.update(&second, &InputSnapshot::default());
    }
    assert!(scene.is_live(meteor));

    let report = scene.update(&second, &InputSnapshot::default());
    assert_eq!(report.removed, 1);
    assert!(!scene.is_live(meteor));
}
