//! Platform layer
//!
//! Loads the actor sprite in the browser and hands it over as plain RGBA
//! pixels, so the renderer never touches the DOM.

use glam::Vec2;

/// Decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct SpriteImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    /// Single-colour placeholder (headless runs, tests)
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Self {
        let rgba = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self { width, height, rgba }
    }

    /// Intrinsic size in pixels
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

    use super::SpriteImage;
    use crate::GameError;

    /// Load an image through the browser and read back its pixels
    pub async fn load_image(src: &str) -> Result<SpriteImage, GameError> {
        let image = HtmlImageElement::new()?;
        let promise = js_sys::Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(src);

        JsFuture::from(promise)
            .await
            .map_err(|_| GameError::AssetLoad {
                path: src.to_string(),
            })?;
        image.set_onload(None);
        image.set_onerror(None);

        let (width, height) = (image.natural_width(), image.natural_height());
        if width == 0 || height == 0 {
            return Err(GameError::EmptyAsset {
                path: src.to_string(),
            });
        }
        log::info!("Loaded {src} ({width}x{height})");

        // Decode by drawing onto a scratch canvas
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| GameError::Dom("no document".into()))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| GameError::Dom("scratch canvas is not a canvas".into()))?;
        canvas.set_width(width);
        canvas.set_height(height);
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| GameError::Dom("2d context unavailable".into()))?
            .dyn_into()
            .map_err(|_| GameError::Dom("unexpected 2d context type".into()))?;
        ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)?;
        let data = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;

        Ok(SpriteImage {
            width,
            height,
            rgba: data.data().0,
        })
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::load_image;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_fills_every_pixel() {
        let image = SpriteImage::solid(3, 2, [1, 2, 3, 4]);
        assert_eq!(image.rgba.len(), 24);
        assert!(image.rgba.chunks(4).all(|px| px == [1, 2, 3, 4]));
        assert_eq!(image.size(), Vec2::new(3.0, 2.0));
    }
}
