//! Penger Jet - a side-scrolling jetpack arcade game
//!
//! Core modules:
//! - `sim`: Simulation (physics, obstacles, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Browser asset loading
//! - `layout`: Canvas letterboxing and sprite sizing
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod layout;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use tuning::Tuning;

/// Engine constants (gameplay values live in [`Tuning`])
///
/// Simulation time is in milliseconds, distances in canvas pixels.
pub mod consts {
    /// Fixed simulation timestep (one 60 Hz display frame)
    pub const SIM_DT_MS: f32 = 1000.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Host frame deltas above this are treated as a stall (background tab)
    pub const MAX_FRAME_MS: f64 = 100.0;
    /// Largest dt a single tick will integrate
    pub const MAX_STEP_MS: f32 = 50.0;

    /// Canvas aspect ratio (width / height)
    pub const ASPECT_RATIO: f32 = 16.0 / 9.0;

    /// Play-area size used before the first resize and by the headless runner
    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

    /// Actor sprite
    pub const ACTOR_IMAGE_PATH: &str = "assets/penger.png";

    /// LocalStorage key for tuning overrides
    pub const TUNING_STORAGE_KEY: &str = "penger_tuning";
}
