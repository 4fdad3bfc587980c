//! Update pass behavior observed through the public API

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use arcade_engine::prelude::*;

type Log = Rc<RefCell<Vec<String>>>;

/// Records its name every update and runs an optional one-shot hook
struct Probe {
    log: Log,
    hook: Option<Box<dyn FnMut(&mut UpdateContext<'_>) -> Result<(), UpdateError>>>,
}

impl Probe {
    fn new(log: &Log) -> Self {
        Self { log: Rc::clone(log), hook: None }
    }

    fn with_hook<F>(log: &Log, hook: F) -> Self
    where
        F: FnMut(&mut UpdateContext<'_>) -> Result<(), UpdateError> + 'static,
    {
        Self {
            log: Rc::clone(log),
            hook: Some(Box::new(hook)),
        }
    }
}

impl Behavior for Probe {
    fn update(&mut self, ctx: &mut UpdateContext<'_>) -> Result<(), UpdateError> {
        let name = ctx.me()?.name().to_string();
        self.log.borrow_mut().push(name);
        match self.hook.take() {
            Some(mut hook) => hook(ctx),
            None => Ok(()),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn frame() -> FrameTime {
    FrameTime::from_secs_f32(1.0 / 60.0)
}

fn names(log: &Log) -> Vec<String> {
    log.borrow_mut().drain(..).collect()
}

#[test]
fn test_objects_update_in_creation_order() {
    let log = Log::default();
    let mut scene = Scene::new("order");
    for name in ["a", "b", "c"] {
        scene.spawn(GameObjectBuilder::new(name).with_behavior(Probe::new(&log)));
    }

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.updated, 3);
    assert_eq!(names(&log), ["a", "b", "c"]);
}

#[test]
fn test_destroyed_later_object_is_skipped_in_same_pass() {
    let log = Log::default();
    let mut scene = Scene::new("destroy");
    let victim_slot: Rc<RefCell<Option<GameObjectId>>> = Rc::default();

    let slot = Rc::clone(&victim_slot);
    scene.spawn(GameObjectBuilder::new("killer").with_behavior(Probe::with_hook(&log, move |ctx| {
        if let Some(victim) = *slot.borrow() {
            ctx.destroy(victim);
        }
        Ok(())
    })));
    let victim = scene.spawn(GameObjectBuilder::new("victim").with_behavior(Probe::new(&log)));
    *victim_slot.borrow_mut() = Some(victim);

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(names(&log), ["killer"]);
    assert_eq!(report.removed, 1);
    assert!(scene.get(victim).is_none());
}

#[test]
fn test_destroying_already_visited_object_removes_it_at_pass_end() {
    let log = Log::default();
    let mut scene = Scene::new("destroy_earlier");
    let victim = scene.spawn(GameObjectBuilder::new("victim").with_behavior(Probe::new(&log)));
    scene.spawn(GameObjectBuilder::new("killer").with_behavior(Probe::with_hook(&log, move |ctx| {
        ctx.destroy(victim);
        Ok(())
    })));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(names(&log), ["victim", "killer"]);
    assert_eq!(report.removed, 1);
    assert!(scene.get(victim).is_none());

    scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(names(&log), ["killer"]);
}

#[test]
fn test_self_destroy_finishes_update_then_leaves() {
    let log = Log::default();
    let mut scene = Scene::new("self");
    let id = scene.spawn(GameObjectBuilder::new("once").with_behavior(Probe::with_hook(&log, |ctx| {
        ctx.destroy_self();
        ctx.me_mut()?.transform_mut().translate_world_position(Vec2::new(1.0, 0.0));
        Ok(())
    })));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.removed, 1);
    assert!(!scene.is_live(id));
    assert!(scene.update(&frame(), &InputSnapshot::default()).updated == 0);
    assert_eq!(names(&log), ["once"]);
}

#[test]
fn test_spawn_during_pass_joins_next_pass() {
    let log = Log::default();
    let mut scene = Scene::new("spawn");
    let spawned: Rc<RefCell<Option<GameObjectId>>> = Rc::default();

    let child_log = Rc::clone(&log);
    let slot = Rc::clone(&spawned);
    scene.spawn(GameObjectBuilder::new("parent").with_behavior(Probe::with_hook(&log, move |ctx| {
        let child = ctx.spawn(GameObjectBuilder::new("child").with_behavior(Probe::new(&child_log)));
        *slot.borrow_mut() = Some(child);
        Ok(())
    })));

    let first = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(names(&log), ["parent"]);
    assert_eq!(first.spawned, 1);

    let child = spawned.borrow().unwrap();
    assert!(scene.is_pending_add(child));
    assert_eq!(scene.get_game_object_by_name("child"), None);

    let second = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(second.activated, 1);
    assert_eq!(names(&log), ["parent", "child"]);
    assert_eq!(scene.get_game_object_by_name("child"), Some(child));
}

#[test]
fn test_failing_behavior_does_not_stop_pass() {
    let log = Log::default();
    let mut scene = Scene::new("errors");
    scene.spawn(GameObjectBuilder::new("broken").with_behavior(Probe::with_hook(&log, |_| {
        Err(UpdateError::Failed("boom".to_string()))
    })));
    scene.spawn(GameObjectBuilder::new("fine").with_behavior(Probe::new(&log)));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.failed, 1);
    assert_eq!(report.updated, 2);
    assert_eq!(names(&log), ["broken", "fine"]);

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.failed, 0);
}

#[test]
fn test_missing_singleton_is_a_recoverable_error() {
    let log = Log::default();
    let mut scene = Scene::new("singleton");
    scene.spawn(GameObjectBuilder::new("needs_player").with_behavior(Probe::with_hook(&log, |ctx| {
        ctx.scene().singleton("player")?;
        Ok(())
    })));

    let report = scene.update(&frame(), &InputSnapshot::default());
    assert_eq!(report.failed, 1);
    assert_eq!(scene.live_count(), 1);
}

#[test]
fn test_name_lookup_returns_first_live_match() {
    let mut scene = Scene::new("names");
    let first = scene.spawn(GameObjectBuilder::new("meteor"));
    let second = scene.spawn(GameObjectBuilder::new("meteor"));
    scene.spawn(GameObjectBuilder::new("bullet"));

    assert_eq!(scene.get_game_object_by_name("meteor"), Some(first));
    assert_eq!(scene.live_objects_named("meteor"), vec![first, second]);

    scene.destroy(first);
    assert_eq!(scene.get_game_object_by_name("meteor"), Some(second));
    assert_eq!(scene.get_game_object_by_name("player"), None);
}

#[test]
fn test_timer_callback_runs_before_behavior() {
    let log = Log::default();
    let mut scene = Scene::new("timers");
    let timer_log = Rc::clone(&log);
    scene.spawn(
        GameObjectBuilder::new("ticking")
            .with_component(
                TimerComponent::from_millis(
                    10,
                    TimerAction::Invoke(Box::new(move || timer_log.borrow_mut().push("timer".to_string()))),
                )
                .activated(),
            )
            .with_behavior(Probe::new(&log)),
    );

    scene.update(&FrameTime::from_millis(16), &InputSnapshot::default());
    scene.update(&FrameTime::from_millis(16), &InputSnapshot::default());
    assert_eq!(names(&log), ["timer", "ticking", "ticking"]);
}

#[test]
fn test_scene_manager_switches_on_request() {
    const MAIN: SceneId = SceneId("main");
    const SCORE: SceneId = SceneId("score");

    let log = Log::default();
    let hook_log = Rc::clone(&log);
    let mut manager = SceneManager::new();
    manager.register_scene(MAIN, move || {
        let mut scene = Scene::new("main");
        scene.spawn(GameObjectBuilder::new("exit").with_behavior(Probe::with_hook(&hook_log, |ctx| {
            ctx.request_scene(SCORE);
            Ok(())
        })));
        Ok(scene)
    });
    manager.register_scene(SCORE, || Ok(Scene::new("score")));

    manager.set_current_scene(MAIN).unwrap();
    let report = manager.frame(&frame(), &InputSnapshot::default()).unwrap();
    assert_eq!(report.transition, Some(SCORE));
    assert_eq!(manager.current_id(), Some(SCORE));
    assert_eq!(names(&log), ["exit"]);
}
