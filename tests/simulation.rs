//! End-to-end simulation scenarios driven through the public API.

use glam::Vec2;
use penger_jet::Tuning;
use penger_jet::consts::SIM_DT_MS;
use penger_jet::sim::{
    Collision, FrameClock, GameEvent, GameState, SequenceSource, TickInput, Viewport, tick,
};
use proptest::prelude::*;

const VIEWPORT: Viewport = Viewport::new(800.0, 450.0);

fn new_game() -> GameState {
    GameState::new(Tuning::default(), VIEWPORT, Vec2::new(40.0, 40.0))
}

#[test]
fn recycled_obstacle_lands_at_right_edge_minus_scroll() {
    let mut state = new_game();
    state.actor.pos.y = 200.0;
    state.obstacles[0].pos.x = -1.0;
    let mut rng = SequenceSource::new([0.5]);

    let events = tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);

    let expected_x = VIEWPORT.width - state.actor.vel.x * SIM_DT_MS;
    assert!((state.obstacles[0].pos.x - expected_x).abs() < 1e-3);
    assert_eq!(state.score, 10);
    assert_eq!(events, vec![GameEvent::ObstacleRecycled { index: 0, score: 10 }]);
}

#[test]
fn free_fall_ends_on_the_floor_exactly_when_it_crosses() {
    let mut state = new_game();
    state.actor.pos.y = VIEWPORT.height / 2.0;
    // Keep the obstacle out of the way
    state.obstacles[0].pos.y = -10_000.0;
    let mut rng = SequenceSource::new([0.0]);

    let mut steps = 0;
    loop {
        let was_inside = state.actor.pos.y + state.actor.size.y <= VIEWPORT.height;
        assert!(was_inside, "over flag missed the floor crossing");
        let events = tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);
        steps += 1;

        let crossed = state.actor.pos.y + state.actor.size.y > VIEWPORT.height;
        assert_eq!(state.over, crossed);
        if state.over {
            assert!(events.iter().any(|e| matches!(
                e,
                GameEvent::GameOver {
                    cause: Collision::Floor,
                    ..
                }
            )));
            break;
        }
        assert!(steps < 10_000);
    }
}

#[test]
fn hitting_an_obstacle_ends_the_run() {
    let mut state = new_game();
    state.actor.pos.y = 200.0;
    state.obstacles[0].pos = Vec2::new(state.actor.pos.x + 20.0, 150.0);
    let mut rng = SequenceSource::new([0.5]);

    let events = tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);

    assert!(state.over);
    assert!(events.contains(&GameEvent::GameOver {
        cause: Collision::Obstacle { index: 0 },
        score: 0
    }));
}

#[test]
fn over_is_terminal() {
    let mut state = new_game();
    state.actor.pos.y = 0.0;
    state.actor.vel.y = -0.5;
    let mut rng = SequenceSource::new([0.5]);

    tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);
    assert!(state.over);
    let frozen = state.clone();

    for _ in 0..10 {
        let events = tick(&mut state, &TickInput { thrust: true }, &mut rng, SIM_DT_MS);
        assert!(events.is_empty());
        assert!(state.over);
    }
    assert_eq!(state.actor.pos, frozen.actor.pos);
    assert_eq!(state.score, frozen.score);
}

#[test]
fn resize_mid_run_keeps_score_and_position() {
    let mut state = new_game();
    state.actor.pos.y = 200.0;
    let mut rng = SequenceSource::new([0.5]);
    for _ in 0..5 {
        tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);
    }
    let y = state.actor.pos.y;
    let obstacle_x = state.obstacles[0].pos.x;

    state.resize(Viewport::new(1600.0, 900.0), Vec2::new(40.0, 40.0));

    assert_eq!(state.actor.pos.y, y);
    assert_eq!(state.obstacles[0].pos.x, obstacle_x);
    assert_eq!(state.viewport.height, 900.0);
    assert!(!state.over);
}

#[test]
fn frame_clock_drives_fixed_steps() {
    let mut state = new_game();
    state.actor.pos.y = 100.0;
    state.obstacles[0].pos.y = -10_000.0;
    let mut rng = SequenceSource::new([0.5]);
    let mut clock = FrameClock::new();

    let mut total = 0;
    for frame in 0..30 {
        let steps = clock.advance(frame as f64 * 1000.0 / 60.0);
        for _ in 0..steps {
            tick(&mut state, &TickInput::default(), &mut rng, SIM_DT_MS);
        }
        total += steps;
    }

    assert!((29..=30).contains(&total));
    assert_eq!(state.elapsed_ms, SIM_DT_MS);
    assert!(state.actor.pos.y > 100.0);
}

proptest! {
    #[test]
    fn score_only_moves_in_increments(
        thrusts in prop::collection::vec(any::<bool>(), 1..600),
        draws in prop::collection::vec(0.0f32..1.0, 1..8),
    ) {
        let mut state = new_game();
        state.actor.pos.y = 200.0;
        let mut rng = SequenceSource::new(draws);

        for thrust in thrusts {
            let before = state.score;
            let events = tick(&mut state, &TickInput { thrust }, &mut rng, SIM_DT_MS);
            let recycles = events
                .iter()
                .filter(|e| matches!(e, GameEvent::ObstacleRecycled { .. }))
                .count() as u64;
            prop_assert_eq!(state.score, before + recycles * state.score_increment);
            prop_assert!(state.actor.vel.y <= state.max_velocity);
            if state.over {
                break;
            }
        }
    }
}
