//! Error types for startup and asset handling
//!
//! Nothing in the simulation itself can fail: collisions are game states.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to load asset `{path}`")]
    AssetLoad { path: String },
    #[error("asset `{path}` has zero size")]
    EmptyAsset { path: String },
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("failed to create render surface")]
    CreateSurface {
        #[from]
        source: wgpu::CreateSurfaceError,
    },
    #[error("no suitable GPU adapter")]
    RequestAdapter {
        #[from]
        source: wgpu::RequestAdapterError,
    },
    #[error("failed to create GPU device")]
    RequestDevice {
        #[from]
        source: wgpu::RequestDeviceError,
    },
    #[error("malformed tuning JSON")]
    TuningParse {
        #[from]
        source: serde_json::Error,
    },
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for GameError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        GameError::Dom(format!("{:?}", value))
    }
}
