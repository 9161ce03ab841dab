//! Game balance values
//!
//! Defaults reproduce the classic feel. A JSON override can be stored in
//! LocalStorage; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::GameError;

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    /// Downward acceleration (px/ms²)
    pub gravity: f32,
    /// Acceleration applied by one thrust press (px/ms², negative is up)
    pub thrust_acceleration: f32,
    /// Upper bound on vertical speed (px/ms)
    pub max_velocity: f32,
    /// Horizontal scroll speed shared by obstacles (px/ms)
    pub scroll_speed: f32,
    /// Fixed horizontal position of the actor
    pub actor_start_x: f32,
    /// Sprite pixels to canvas pixels
    pub actor_scale: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    /// Number of obstacles in flight
    pub obstacle_count: usize,
    /// Fraction of the viewport height a respawn may start above the top edge
    pub spawn_margin: f32,

    // === Score ===
    pub score_increment: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 0.0004,
            thrust_acceleration: -0.004,
            max_velocity: 2.0,
            scroll_speed: 0.25,
            actor_start_x: 10.0,
            actor_scale: 0.75,

            obstacle_width: 30.0,
            obstacle_height: 160.0,
            obstacle_count: 1,
            spawn_margin: 0.1,

            score_increment: 10,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values the simulation cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("gravity", self.gravity),
            ("max_velocity", self.max_velocity),
            ("scroll_speed", self.scroll_speed),
            ("actor_scale", self.actor_scale),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.thrust_acceleration.is_finite() && self.thrust_acceleration < 0.0) {
            return Err(GameError::InvalidTuning(format!(
                "thrust_acceleration must be negative (upward), got {}",
                self.thrust_acceleration
            )));
        }
        if !self.actor_start_x.is_finite() {
            return Err(GameError::InvalidTuning("actor_start_x must be finite".into()));
        }
        if !(0.0..1.0).contains(&self.spawn_margin) {
            return Err(GameError::InvalidTuning(format!(
                "spawn_margin must be in [0, 1), got {}",
                self.spawn_margin
            )));
        }
        if self.obstacle_count == 0 {
            return Err(GameError::InvalidTuning("obstacle_count must be at least 1".into()));
        }
        Ok(())
    }

    /// Load tuning override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(crate::consts::TUNING_STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {e}"),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
