use std::path::Path;

use anyhow::Result;
use derive_more::Constructor;
use nalgebra::Vector2;

/// A decoded image kept in memory. Pixels are tightly packed RGBA8 rows.
#[derive(Debug, Clone, Constructor)]
pub struct Texture {
    pub pixels: Vec<u8>,
    pub size: Vector2<u32>,
}

impl Texture {
    #[inline]
    pub fn width(&self) -> u32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.y
    }
}

/// Decodes image files into textures.
///
/// An error means that the file is missing or its format is not supported.
pub trait TextureLoader {
    fn load(&self, path: &Path) -> Result<Texture>;
}

impl<F> TextureLoader for F
where
    F: Fn(&Path) -> Result<Texture>,
{
    fn load(&self, path: &Path) -> Result<Texture> {
        self(path)
    }
}
