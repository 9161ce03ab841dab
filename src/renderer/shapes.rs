//! Scene building: game state to vertex lists
//!
//! Pure CPU code, testable without a GPU.

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect, Viewport};

/// Vertices for one frame, grouped by texture
#[derive(Debug, Default)]
pub struct Scene {
    /// Untextured quads (obstacles)
    pub solid: Vec<Vertex>,
    /// Quads sampling the actor sprite
    pub sprite: Vec<Vertex>,
}

/// Canvas pixels (origin top-left, y down) to normalized device coordinates
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, viewport: Viewport) -> (f32, f32) {
    (
        x / viewport.width * 2.0 - 1.0,
        1.0 - y / viewport.height * 2.0,
    )
}

/// Two triangles covering `rect`, with the full texture mapped onto it
pub fn quad(rect: Rect, viewport: Viewport, color: [f32; 4]) -> [Vertex; 6] {
    let (x0, y0) = pixel_to_ndc(rect.x, rect.y, viewport);
    let (x1, y1) = pixel_to_ndc(rect.right(), rect.bottom(), viewport);

    let top_left = Vertex::new(x0, y0, 0.0, 0.0, color);
    let top_right = Vertex::new(x1, y0, 1.0, 0.0, color);
    let bottom_left = Vertex::new(x0, y1, 0.0, 1.0, color);
    let bottom_right = Vertex::new(x1, y1, 1.0, 1.0, color);

    [
        top_left,
        bottom_left,
        top_right,
        top_right,
        bottom_left,
        bottom_right,
    ]
}

/// Build the frame: obstacles first, actor on top
pub fn build_scene(state: &GameState) -> Scene {
    let viewport = state.viewport;
    let mut scene = Scene::default();

    scene.solid.reserve(state.obstacles.len() * 6);
    for obstacle in &state.obstacles {
        let rect = state.obstacle_rect(obstacle);
        scene
            .solid
            .extend_from_slice(&quad(rect, viewport, colors::OBSTACLE));
    }

    scene
        .sprite
        .extend_from_slice(&quad(state.actor.rect(), viewport, colors::SPRITE));

    scene
}
