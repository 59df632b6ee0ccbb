use dino_run::feedback::Cue;
use dino_run::sim::{CharacterState, GamePhase, ObstacleKind};
use dino_run::{FixedStepClock, GameSession, InputEvent, ScriptedClock, TickInput, Tuning};

const DT: f32 = 0.01;

/// Tuning with spawning switched off so runs only end when a test says so
fn no_spawns() -> Tuning {
    Tuning {
        spawn_rate_factor: 0.0,
        ..Default::default()
    }
}

fn started(seed: u64, tuning: Tuning) -> GameSession<Vec<Cue>> {
    let mut session = GameSession::new(seed, tuning, Vec::new());
    assert!(session.start());
    for _ in 0..1000 {
        if session.is_running() {
            break;
        }
        session.tick(&TickInput::default(), DT);
    }
    assert!(session.is_running(), "start sequence did not finish");
    session
}

fn run_ticks<F: dino_run::FeedbackSink>(session: &mut GameSession<F>, n: u32) {
    for _ in 0..n {
        session.tick(&TickInput::default(), DT);
    }
}

fn crash<F: dino_run::FeedbackSink>(session: &mut GameSession<F>) {
    let x = session.state().character.pos.x;
    session.place_obstacle(ObstacleKind::GroundLarge(3), x + 20.0);
    session.tick(&TickInput::default(), DT);
    assert_eq!(session.phase(), GamePhase::GameOver);
}

#[test]
fn end_to_end_thousand_ticks_then_crash() {
    let mut session = started(2024, no_spawns());
    let base = session.tuning().base_speed;

    run_ticks(&mut session, 1000);
    assert!(session.is_running());
    assert_eq!(session.score(), 100);
    assert!((session.speed() - (base + 1.0)).abs() < 1e-3);
    assert_eq!(
        session.feedback().iter().filter(|c| **c == Cue::Milestone).count(),
        1
    );

    crash(&mut session);
    assert!(!session.is_running());
    assert_eq!(session.high_score(), 100);
    assert_eq!(session.score(), 0);
    assert_eq!(session.speed(), base);

    let view = session.view();
    assert!(view.restart_available);
    assert_eq!(view.high_score_text.as_deref(), Some("HI 00100"));
}

#[test]
fn high_score_survives_a_worse_run() {
    let mut session = started(7, no_spawns());

    run_ticks(&mut session, 1200);
    assert_eq!(session.score(), 120);
    crash(&mut session);
    assert_eq!(session.high_score(), 120);

    assert!(session.restart());
    run_ticks(&mut session, 800);
    assert_eq!(session.score(), 80);
    crash(&mut session);
    assert_eq!(session.high_score(), 120);
}

#[test]
fn restart_resets_run_state_in_one_step() {
    let mut session = started(8, Tuning::default());
    run_ticks(&mut session, 50);
    crash(&mut session);

    session.tick(&TickInput::single(InputEvent::RestartActivated), 0.0);
    let state = session.state();
    assert_eq!(state.phase, GamePhase::Running);
    assert_eq!(state.score, 0);
    assert_eq!(state.speed, session.tuning().base_speed);
    assert_eq!(state.spawn_timer, 0.0);
    assert_eq!(state.score_timer_ms, 0.0);
    assert!(state.obstacles.is_empty());
}

#[test]
fn restart_ignored_while_running() {
    let mut session = started(9, no_spawns());
    run_ticks(&mut session, 30);
    session.tick(&TickInput::single(InputEvent::RestartActivated), DT);
    assert!(session.is_running());
    assert_eq!(session.score(), 3);
}

#[test]
fn obstacle_from_far_right_is_retired() {
    let mut session = started(10, no_spawns());
    let width = session.tuning().viewport.width;
    // Flyers are placed at their highest line, clear over a standing character
    let id = session.place_obstacle(ObstacleKind::Flying, width + 600.0);

    let mut seen_left_of_screen = false;
    for _ in 0..200 {
        session.tick(&TickInput::default(), DT);
        assert!(session.is_running());
        if let Some(o) = session.state().obstacles.iter().find(|o| o.id == id) {
            seen_left_of_screen |= o.pos.x < 0.0;
        }
    }
    assert!(seen_left_of_screen);
    assert!(session.state().obstacles.iter().all(|o| o.id != id));
}

#[test]
fn duck_needs_the_pickup() {
    let mut session = started(11, no_spawns());
    assert!(!session.state().character.can_duck);

    session.tick(&TickInput::single(InputEvent::DuckPressed), DT);
    let view = session.view();
    assert_eq!(view.character.hitbox.h, 94.0);
    assert_eq!(view.character.state, CharacterState::Running);
}

#[test]
fn autopilot_plays_with_clock() {
    let mut session = GameSession::new(4242, Tuning::default(), Vec::<Cue>::new());
    let mut clock = FixedStepClock::default();
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    for _ in 0..3600 {
        session.tick_clock(&mut clock, &input);
    }
    assert_ne!(session.phase(), GamePhase::Idle);
    assert!(session.feedback().contains(&Cue::Jump));

    // 60 s at 10 points per second bounds every run
    assert!(session.score() <= 600);
    assert!(session.high_score() <= 600);

    let hits = session.feedback().iter().filter(|c| **c == Cue::Hit).count();
    if hits == 0 {
        // Only the trigger jump and the ground unroll come before scoring
        assert_eq!(session.high_score(), 0);
        assert!(session.score() >= 550, "score {}", session.score());
    } else {
        // The first obstacle spawns past the right edge and needs several
        // seconds to reach the character
        assert!(session.high_score() >= 30, "best {}", session.high_score());
    }
}

#[test]
fn bad_clock_deltas_do_not_move_anything() {
    let mut session = started(12, no_spawns());
    let before = session.state().clone();
    let mut clock = ScriptedClock::new(vec![-1.0, f32::INFINITY, f32::NAN]);
    for _ in 0..3 {
        session.tick_clock(&mut clock, &TickInput::default());
    }
    let after = session.state();
    assert_eq!(after.score, before.score);
    assert_eq!(after.score_timer_ms, before.score_timer_ms);
    assert_eq!(after.character.pos, before.character.pos);
}

#[test]
fn score_text_is_zero_padded() {
    let mut session = started(13, no_spawns());
    run_ticks(&mut session, 70);
    assert_eq!(session.view().score_text.as_deref(), Some("00007"));
}
