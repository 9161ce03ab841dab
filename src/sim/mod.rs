//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Explicit state passed by `&mut`
//! - Injected randomness
//! - Time in milliseconds, distances in canvas pixels

pub mod clock;
pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod random;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Collision, apply_collisions, detect};
pub use obstacles::advance_obstacles;
pub use physics::integrate;
pub use random::{PcgSource, RandomSource, SequenceSource};
pub use state::{AccelMode, Actor, GameEvent, GameState, Obstacle, Rect, Viewport};
pub use tick::{TickInput, tick};
