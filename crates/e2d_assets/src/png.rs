use std::path::Path;

use anyhow::{Context, Result};
use nalgebra::Vector2;
use rgb::ComponentBytes;

use crate::texture::{Texture, TextureLoader};

pub fn decode_png(png: &[u8]) -> Result<(Vec<u8>, (u32, u32))> {
    let image = lodepng::decode32(png)?;
    let size = (image.width as u32, image.height as u32);
    let image = image.buffer.as_bytes().to_owned();

    Ok((image, size))
}

/// Loads PNG files from the file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngLoader;

impl TextureLoader for PngLoader {
    fn load(&self, path: &Path) -> Result<Texture> {
        let png = std::fs::read(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        let (pixels, (w, h)) =
            decode_png(&png).with_context(|| format!("Unable to decode {}", path.display()))?;

        Ok(Texture::new(pixels, Vector2::new(w, h)))
    }
}
