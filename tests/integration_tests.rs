//! Integration tests for whole sessions

use std::collections::VecDeque;
use std::io;

use egg_catch::core::{Flow, GameConfig, RoundController};
use egg_catch::engine::{FixedStepScheduler, Session, SessionEnd};
use egg_catch::term::{GameView, SceneSurface, Viewport};
use egg_catch::types::{ElementId, InputEvent, InputSource, Key};

#[derive(Default)]
struct Script {
    queue: VecDeque<InputEvent>,
}

impl Script {
    fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }
}

impl InputSource for Script {
    fn dispatch(&mut self, handler: &mut dyn FnMut(InputEvent)) -> io::Result<()> {
        while let Some(event) = self.queue.pop_front() {
            handler(event);
        }
        Ok(())
    }
}

fn new_session(seed: u64) -> Session<SceneSurface, Script> {
    Session::new(
        GameConfig::default(),
        seed,
        SceneSurface::new(),
        Script::default(),
    )
    .unwrap()
}

/// Move the catcher to the far side of the surface from the item.
fn dodge(scene: &SceneSurface, input: &mut Script) {
    let key = if scene.get(ElementId::Item).x < 360.0 {
        Key::ArrowRight
    } else {
        Key::ArrowLeft
    };
    for _ in 0..40 {
        input.push(InputEvent::Key(key));
    }
}

#[test]
fn test_full_game_typing_then_losing() {
    let mut session = new_session(2024);

    // Type every label until ten items are caught.
    while session.round().score() < 10 {
        let label = session.round().item().label();
        session.input_mut().push(InputEvent::Key(Key::Char(label)));
        assert_eq!(session.frame(16).unwrap(), Flow::Continue);
    }
    assert_eq!(session.round().misses(), 0);
    // Two speed-ups: 3 -> 4 at five catches, 4 -> 5 at ten.
    assert_eq!(session.round().item().fall_speed(), 5.0);
    assert_eq!(session.surface().text(ElementId::Score), "Score: 10");

    // Now let everything drop.
    let mut sched = FixedStepScheduler::new(16);
    let end = session
        .run(&mut sched, |scene, input| {
            dodge(scene, input);
            Ok(())
        })
        .unwrap();

    assert_eq!(
        end,
        SessionEnd::Lost {
            score: 10,
            misses: 5
        }
    );
    assert_eq!(session.surface().text(ElementId::Misses), "Misses: 5");
    assert!(session.surface().is_visible(ElementId::GameOver));

    let fb = GameView::default().render(session.surface(), Viewport::new(82, 33));
    assert!(fb.to_text().contains("You lose! Score: 10"));
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u64| {
        let mut session = new_session(seed);
        let mut trace = Vec::new();
        for frame in 0..2_000u32 {
            if frame % 3 == 0 {
                let label = session.round().item().label();
                session.input_mut().push(InputEvent::Key(Key::Char(label)));
            } else {
                session.input_mut().push(InputEvent::Key(Key::ArrowLeft));
            }
            if session.frame(16).unwrap() == Flow::Terminal {
                break;
            }
            let item = session.round().item();
            trace.push((item.x(), item.y(), item.label(), session.round().score()));
        }
        trace
    };

    assert_eq!(play(77), play(77));
    assert_ne!(play(77), play(78));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = new_session(1);
    let mut b = new_session(1);

    let label = a.round().item().label();
    a.input_mut().push(InputEvent::Key(Key::Char(label)));
    for _ in 0..200 {
        a.frame(16).unwrap();
        b.frame(16).unwrap();
    }

    assert_ne!(a.round().catcher().x(), b.round().catcher().x());
    assert_eq!(a.round().ticks(), b.round().ticks());
}

#[test]
fn test_quit_is_not_a_loss() {
    let mut session = new_session(9);
    session.input_mut().push(InputEvent::Key(Key::ArrowLeft));
    session.input_mut().push(InputEvent::Quit);
    // Events after quit in the same batch are still delivered but the
    // frame does not tick.
    session.input_mut().push(InputEvent::Key(Key::ArrowLeft));

    let mut sched = FixedStepScheduler::new(16);
    let end = session.run(&mut sched, |_, _| Ok(())).unwrap();

    assert_eq!(end, SessionEnd::Quit { score: 0 });
    assert_eq!(session.round().ticks(), 0);
    assert!(!session.surface().is_visible(ElementId::GameOver));
}

#[test]
fn test_round_controller_catch_and_miss_timing() {
    // At speed 3 the item crosses the catch line on tick 187 and the
    // floor on tick 200.
    let mut round = RoundController::new(GameConfig::default(), 3).unwrap();

    let label = round.item().label();
    round.handle_key(Key::Char(label));
    let mut ticks = 0;
    while round.score() == 0 {
        round.tick();
        ticks += 1;
    }
    assert_eq!(ticks, 187);
    assert_eq!(round.misses(), 0);

    // Park the catcher on the side away from the new drop.
    let step = if round.item().x() < 360.0 {
        Key::ArrowRight
    } else {
        Key::ArrowLeft
    };
    for _ in 0..40 {
        round.handle_key(step);
    }
    let mut ticks = 0;
    while round.misses() == 0 {
        round.tick();
        ticks += 1;
    }
    assert_eq!(ticks, 200);
    assert_eq!(round.score(), 1);
}

#[test]
fn test_invalid_config_cannot_start_a_session() {
    let config = GameConfig {
        miss_limit: 0,
        ..GameConfig::default()
    };
    assert!(Session::new(config, 1, SceneSurface::new(), Script::default()).is_err());
}

#[test]
fn test_config_file_shortens_the_game() {
    let json = serde_json::json!({ "miss_limit": 2, "miss_notice_ms": 100 });
    let config = egg_catch::engine::settings::parse_config(&json.to_string()).unwrap();
    assert_eq!(config.catch_line, 560.0);

    let mut session = Session::new(config, 4, SceneSurface::new(), Script::default()).unwrap();
    let mut sched = FixedStepScheduler::new(16);
    let end = session
        .run(&mut sched, |scene, input| {
            dodge(scene, input);
            Ok(())
        })
        .unwrap();

    assert_eq!(end, SessionEnd::Lost { score: 0, misses: 2 });
    assert_eq!(session.round().ticks(), 400);
}
