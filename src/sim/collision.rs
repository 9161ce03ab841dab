//! Collision detection
//!
//! The actor loses by leaving the play area through the floor or the ceiling,
//! or by touching an obstacle. All shapes are axis-aligned boxes.

use super::state::{GameEvent, GameState, Rect};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Actor's bottom edge went below the viewport
    Floor,
    /// Actor's top edge reached or passed the top of the viewport
    Ceiling,
    /// Actor overlapped the obstacle at `index`
    Obstacle { index: usize },
}

impl Rect {
    /// Strict overlap test: boxes that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }
}

/// First collision in check order (floor, ceiling, obstacles), if any
pub fn detect(state: &GameState) -> Option<Collision> {
    let actor = state.actor.rect();

    if actor.bottom() > state.viewport.height {
        return Some(Collision::Floor);
    }
    if actor.y <= 0.0 {
        return Some(Collision::Ceiling);
    }

    state
        .obstacles
        .iter()
        .position(|o| actor.intersects(&state.obstacle_rect(o)))
        .map(|index| Collision::Obstacle { index })
}

/// Run detection and end the game on a hit
pub fn apply_collisions(state: &mut GameState) -> Option<GameEvent> {
    let cause = detect(state)?;
    state.finish();
    log::info!("GAME OVER ({:?}) - score {}", cause, state.score);
    Some(GameEvent::GameOver {
        cause,
        score: state.score,
    })
}
