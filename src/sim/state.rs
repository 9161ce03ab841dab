//! Game state and core simulation types
//!
//! Everything the simulation mutates lives in [`GameState`], which the driver
//! owns and hands to each step by `&mut`.

use glam::Vec2;

use super::collision::Collision;
use crate::Tuning;
use crate::layout::actor_size;

/// Play-area size in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(
            crate::consts::DEFAULT_VIEWPORT_WIDTH,
            crate::consts::DEFAULT_VIEWPORT_HEIGHT,
        )
    }
}

/// Axis-aligned box, y grows downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Which acceleration the actor is under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccelMode {
    /// Gravity only
    #[default]
    Falling,
    /// A thrust impulse is still stronger than gravity alone
    Thrusting,
}

/// The player-controlled penger
#[derive(Debug, Clone)]
pub struct Actor {
    pub pos: Vec2,
    /// x is the scroll speed, y the vertical speed
    pub vel: Vec2,
    /// Acceleration used by the last step (fed back into the next one)
    pub acceleration: f32,
    pub mode: AccelMode,
    /// Rendered (and collided) size
    pub size: Vec2,
}

impl Actor {
    pub fn new(start_x: f32, scroll_speed: f32, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(start_x, 0.0),
            vel: Vec2::new(scroll_speed, 0.0),
            acceleration: 0.0,
            mode: AccelMode::Falling,
            size,
        }
    }

    /// Fire the jetpack. Overrides whatever acceleration was stored.
    pub fn thrust(&mut self, thrust_acceleration: f32) {
        self.acceleration = thrust_acceleration;
        self.mode = AccelMode::Thrusting;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// A scrolling obstacle. Size is shared by all obstacles (see [`Tuning`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
}

/// Something the renderer or shell may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Thrust input was applied this step
    Thrust,
    /// An obstacle left the screen and was respawned on the right
    ObstacleRecycled { index: usize, score: u64 },
    /// The run ended
    GameOver { cause: Collision, score: u64 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Terminal flag; once set the session is finished
    pub over: bool,
    /// Delta used by the most recent step (ms)
    pub elapsed_ms: f32,
    pub score: u64,
    pub score_increment: u64,
    pub max_velocity: f32,
    pub viewport: Viewport,
    pub actor: Actor,
    pub obstacles: Vec<Obstacle>,
    pub tuning: Tuning,
}

impl GameState {
    /// Fresh session. `sprite_size` is the actor image's intrinsic size.
    pub fn new(tuning: Tuning, viewport: Viewport, sprite_size: Vec2) -> Self {
        let actor = Actor::new(
            tuning.actor_start_x,
            tuning.scroll_speed,
            actor_size(sprite_size, tuning.actor_scale),
        );

        // Spread obstacles over one screen width, first one at the right edge
        let count = tuning.obstacle_count.max(1);
        let spacing = viewport.width / count as f32;
        let obstacles = (0..count)
            .map(|i| Obstacle {
                pos: Vec2::new(viewport.width + i as f32 * spacing, 0.0),
            })
            .collect();

        Self {
            over: false,
            elapsed_ms: 0.0,
            score: 0,
            score_increment: tuning.score_increment,
            max_velocity: tuning.max_velocity,
            viewport,
            actor,
            obstacles,
            tuning,
        }
    }

    /// Apply a new viewport. Only derived sizes change.
    pub fn resize(&mut self, viewport: Viewport, sprite_size: Vec2) {
        self.viewport = viewport;
        self.actor.size = actor_size(sprite_size, self.tuning.actor_scale);
    }

    pub fn obstacle_size(&self) -> Vec2 {
        Vec2::new(self.tuning.obstacle_width, self.tuning.obstacle_height)
    }

    pub fn obstacle_rect(&self, obstacle: &Obstacle) -> Rect {
        Rect::from_pos_size(obstacle.pos, self.obstacle_size())
    }

    /// Latch the terminal flag. There is no way back.
    pub(crate) fn finish(&mut self) {
        self.over = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state() {
        let state = GameState::new(
            Tuning::default(),
            Viewport::new(800.0, 450.0),
            Vec2::new(100.0, 80.0),
        );
        assert!(!state.over);
        assert_eq!(state.score, 0);
        assert_eq!(state.score_increment, 10);
        assert_eq!(state.actor.pos, Vec2::new(10.0, 0.0));
        assert_eq!(state.actor.vel, Vec2::new(0.25, 0.0));
        assert_eq!(state.actor.acceleration, 0.0);
        assert_eq!(state.actor.mode, AccelMode::Falling);
        assert_eq!(state.actor.size, Vec2::new(75.0, 60.0));
        assert_eq!(state.obstacles, vec![Obstacle { pos: Vec2::new(800.0, 0.0) }]);
    }

    #[test]
    fn many_obstacles_are_spaced() {
        let tuning = Tuning {
            obstacle_count: 4,
            ..Default::default()
        };
        let state = GameState::new(tuning, Viewport::new(800.0, 450.0), Vec2::ONE);
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs, vec![800.0, 1000.0, 1200.0, 1400.0]);
    }

    #[test]
    fn resize_keeps_simulation() {
        let mut state = GameState::new(
            Tuning::default(),
            Viewport::new(800.0, 450.0),
            Vec2::new(100.0, 100.0),
        );
        state.actor.pos.y = 123.0;
        state.actor.vel.y = 0.5;
        state.score = 30;

        state.resize(Viewport::new(1600.0, 900.0), Vec2::new(200.0, 100.0));

        assert_eq!(state.viewport, Viewport::new(1600.0, 900.0));
        assert_eq!(state.actor.size, Vec2::new(150.0, 75.0));
        assert_eq!(state.actor.pos.y, 123.0);
        assert_eq!(state.actor.vel.y, 0.5);
        assert_eq!(state.score, 30);
        assert_eq!(state.max_velocity, 2.0);
    }

    #[test]
    fn thrust_sets_mode() {
        let mut actor = Actor::new(0.0, 0.25, Vec2::ONE);
        actor.thrust(-0.004);
        assert_eq!(actor.mode, AccelMode::Thrusting);
        assert_eq!(actor.acceleration, -0.004);
    }
}
