use derive_more::Constructor;
use nalgebra::Vector2;

/// A rectangle in normalized texture space, from the top left corner `a`
/// to the bottom right corner `b`.
#[derive(Constructor, Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub a: [f32; 2],
    pub b: [f32; 2],
}

/// A sub-image of a texture in pixels, with the origin in the top left corner.
///
/// Sprite rectangles are not clipped to the texture they were cut from,
/// so `right()` and `bottom()` may lie past the texture edge.
#[derive(Constructor, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRect {
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    #[inline]
    pub fn size(&self) -> Vector2<u32> {
        Vector2::new(self.w, self.h)
    }

    /// Converts the rectangle to normalized texture space of a texture
    /// with the given size. `a` is the top left corner, `b` the bottom right.
    pub fn to_texture_space(&self, texture_size: Vector2<u32>) -> Rect {
        let texel = [1. / texture_size.x as f32, 1. / texture_size.y as f32];

        Rect::new(
            [self.x as f32 * texel[0], self.y as f32 * texel[1]],
            [self.right() as f32 * texel[0], self.bottom() as f32 * texel[1]],
        )
    }
}
