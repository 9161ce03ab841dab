//! Canvas layout: fit a fixed aspect ratio inside the window

use glam::Vec2;

/// Largest `ratio`-shaped box that fits inside `width` x `height`
///
/// A window wider than `ratio` keeps its height and gets pillarboxed; a
/// narrower one keeps its width and gets letterboxed.
pub fn fit_aspect(width: f32, height: f32, ratio: f32) -> (f32, f32) {
    if height <= 0.0 || width <= 0.0 {
        return (0.0, 0.0);
    }
    if width / height > ratio {
        (ratio * height, height)
    } else {
        (width, width / ratio)
    }
}

/// On-screen size of the actor sprite
#[inline]
pub fn actor_size(sprite_size: Vec2, scale: f32) -> Vec2 {
    sprite_size * scale
}
