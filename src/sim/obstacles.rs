//! Obstacle scrolling, recycling and scoring

use super::random::RandomSource;
use super::state::{GameEvent, GameState};

/// Scroll every obstacle left by one step
///
/// An obstacle whose left edge has crossed `x = 0` is first recycled: the
/// player scores, and it jumps back to the right edge at a random height that
/// may start up to `spawn_margin` of the viewport above the top. The recycled
/// obstacle still receives this step's leftward movement.
pub fn advance_obstacles(
    state: &mut GameState,
    rng: &mut dyn RandomSource,
    dt: f32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let scroll = state.actor.vel.x * dt;
    let width = state.viewport.width;
    let height = state.viewport.height;
    let margin = state.tuning.spawn_margin * height;

    for (index, obstacle) in state.obstacles.iter_mut().enumerate() {
        if obstacle.pos.x < 0.0 {
            state.score += state.score_increment;
            obstacle.pos.x = width;
            obstacle.pos.y = rng.next_f32() * height - margin;
            events.push(GameEvent::ObstacleRecycled {
                index,
                score: state.score,
            });
        }
        obstacle.pos.x -= scroll;
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::random::SequenceSource;
    use crate::sim::state::Viewport;
    use glam::Vec2;

    const DT: f32 = 1000.0 / 60.0;

    fn state() -> GameState {
        GameState::new(Tuning::default(), Viewport::new(800.0, 450.0), Vec2::new(64.0, 64.0))
    }

    #[test]
    fn obstacles_move_left() {
        let mut state = state();
        let mut rng = SequenceSource::new([0.5]);
        let events = advance_obstacles(&mut state, &mut rng, DT);
        assert!(events.is_empty());
        assert!((state.obstacles[0].pos.x - (800.0 - 0.25 * DT)).abs() < 1e-3);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn recycle_then_advance() {
        let mut state = state();
        state.obstacles[0].pos.x = -1.0;
        let mut rng = SequenceSource::new([0.5]);

        let events = advance_obstacles(&mut state, &mut rng, DT);

        assert_eq!(events, vec![GameEvent::ObstacleRecycled { index: 0, score: 10 }]);
        assert_eq!(state.score, 10);
        assert!((state.obstacles[0].pos.x - (800.0 - 0.25 * DT)).abs() < 1e-3);
        // 0.5 * 450 - 0.1 * 450
        assert!((state.obstacles[0].pos.y - 180.0).abs() < 1e-3);
    }

    #[test]
    fn spawn_height_range() {
        let mut state = state();
        let mut rng = SequenceSource::new([0.0, 0.999_999]);

        state.obstacles[0].pos.x = -1.0;
        advance_obstacles(&mut state, &mut rng, DT);
        assert!((state.obstacles[0].pos.y - -45.0).abs() < 1e-3);

        state.obstacles[0].pos.x = -1.0;
        advance_obstacles(&mut state, &mut rng, DT);
        assert!(state.obstacles[0].pos.y < 405.0);
        assert!(state.obstacles[0].pos.y > 404.0);
    }

    #[test]
    fn zero_is_not_recycled() {
        let mut state = state();
        state.obstacles[0].pos.x = 0.0;
        let mut rng = SequenceSource::new([0.5]);
        advance_obstacles(&mut state, &mut rng, DT);
        assert_eq!(state.score, 0);
        assert!(state.obstacles[0].pos.x < 0.0);
    }

    #[test]
    fn one_recycle_per_crossing() {
        let mut state = state();
        let mut rng = SequenceSource::new([0.3, 0.6]);
        let steps_per_pass = (800.0 / (0.25 * DT)).ceil() as usize + 1;

        let mut recycles = 0;
        for _ in 0..steps_per_pass * 3 {
            let before = state.obstacles[0].pos.x;
            let events = advance_obstacles(&mut state, &mut rng, DT);
            if events.is_empty() {
                assert!(state.obstacles[0].pos.x < before);
            }
            recycles += events.len();
        }
        assert_eq!(state.score, recycles as u64 * 10);
        assert!((2..=3).contains(&recycles));
    }

    #[test]
    fn each_obstacle_scores_once() {
        let tuning = Tuning {
            obstacle_count: 3,
            ..Default::default()
        };
        let mut state = GameState::new(tuning, Viewport::new(900.0, 450.0), Vec2::ONE);
        for obstacle in &mut state.obstacles {
            obstacle.pos.x = -5.0;
        }
        let mut rng = SequenceSource::new([0.1, 0.2, 0.3]);
        let events = advance_obstacles(&mut state, &mut rng, DT);
        assert_eq!(events.len(), 3);
        assert_eq!(state.score, 30);
        assert_eq!(events[2], GameEvent::ObstacleRecycled { index: 2, score: 30 });
    }
}
