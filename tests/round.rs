mod common;

use common::{Screen, Script, confirm, up};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use frogger_badge::{Config, Engine, Event, GameState, Phase, Vehicle};

/// Park a lane-0 vehicle so the next tick drives it into a frog at x = 100.
fn line_up_a_hit(state: &mut GameState) {
    state.frog.track = 3;
    state.frog.x = 100;
    state.lanes_mut()[0][0] = Vehicle::parked(94);
}

/// Any white text pixel where "GAME OVER" is printed.
fn banner_shown(screen: &Screen) -> bool {
    (50..60).any(|y| (100..154).any(|x| screen.at(x, y) == Rgb565::WHITE))
}

fn line_up_goal(state: &mut GameState, x: u8) {
    state.frog.track = 3;
    state.frog.hi_track = 3;
    state.frog.x = x;
}

#[test]
fn three_hits_end_the_round_until_confirm() {
    let config = Config::CLASSIC;
    let mut engine = Engine::new(&config).unwrap();
    let mut screen = Screen::new();
    let mut input = Script::default();
    engine.start_round(&mut screen).unwrap();

    line_up_goal(engine.state_mut(), 126);
    input.push(up());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();
    assert_eq!(engine.state().session.score, 100);
    assert_eq!(screen.at(120, 40), Rgb565::CSS_LIME_GREEN);

    let mut phase = Phase::Playing;
    for hit in 1..=3 {
        assert_eq!(phase, Phase::Playing);
        line_up_a_hit(engine.state_mut());
        phase = engine
            .dispatch(Event::Tick, &mut screen, &mut input)
            .unwrap();
        assert_eq!(engine.state().session.lives, 3 - hit);
    }
    assert_eq!(phase, Phase::GameOver);

    assert!(banner_shown(&screen));

    // The round is over: a lined-up hop changes nothing.
    line_up_goal(engine.state_mut(), 76);
    input.push(up());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();
    engine.dispatch(Event::Stats, &mut screen, &mut input).unwrap();
    assert_eq!(engine.state().session.score, 100);
    assert!(!engine.state().goals()[1].reached);
    assert_eq!(engine.state().session.lives, 0);

    input.push(confirm());
    let phase = engine
        .dispatch(Event::Tick, &mut screen, &mut input)
        .unwrap();
    assert_eq!(phase, Phase::Playing);

    let state = engine.state();
    assert_eq!(state.session.lives, 3);
    assert_eq!(state.session.score, 100);
    assert!(state.session.collision_enabled);
    assert!(state.goals().iter().all(|g| !g.reached));
    assert_eq!(screen.at(120, 40), Rgb565::CSS_DARK_GREEN);
    assert!(!banner_shown(&screen));
}

#[test]
fn taken_goal_cannot_be_taken_again() {
    let config = Config::CLASSIC;
    let mut engine = Engine::new(&config).unwrap();
    let mut screen = Screen::new();
    let mut input = Script::default();

    line_up_goal(engine.state_mut(), 126);
    input.push(up());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();
    assert!(engine.state().goals()[2].reached);

    screen.fills.clear();
    line_up_goal(engine.state_mut(), 126);
    input.push(up());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();

    // Only the climb bonus is paid and the goal strip is not repainted.
    assert_eq!(engine.state().session.score, 110);
    assert_eq!(engine.state().goals().iter().filter(|g| g.reached).count(), 1);
    assert!(screen.fills_in_row(34).is_empty());
    assert_eq!(engine.state().frog.track, 2);
}

#[test]
fn endless_round_never_ends() {
    let config = Config::ENDLESS;
    let mut engine = Engine::new(&config).unwrap();
    let mut screen = Screen::new();
    let mut input = Script::default();

    for _ in 0..10 {
        line_up_a_hit(engine.state_mut());
        let phase = engine
            .dispatch(Event::Tick, &mut screen, &mut input)
            .unwrap();
        assert_eq!(phase, Phase::Playing);
    }
    assert_eq!(engine.state().session.lives, 3u8.wrapping_sub(10));
    assert!(engine.state().session.collision_enabled);
}

#[test]
fn disabled_hit_detection_spares_the_frog() {
    let config = Config::CLASSIC;
    let mut engine = Engine::new(&config).unwrap();
    let mut screen = Screen::new();
    let mut input = Script::default();

    input.push(confirm());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();
    assert!(!engine.state().session.collision_enabled);

    line_up_a_hit(engine.state_mut());
    engine.dispatch(Event::Tick, &mut screen, &mut input).unwrap();
    assert_eq!(engine.state().session.lives, 3);
    assert_eq!(engine.state().frog.track, 3);
}
