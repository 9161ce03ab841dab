//! WebGPU rendering module
//!
//! Draws the game as textured quads: obstacles sample a white texel, the
//! actor samples its sprite. The score is shown by the page HUD, not here.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use shapes::{Scene, build_scene};
pub use vertex::Vertex;
