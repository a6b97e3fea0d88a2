use e2d_geometry::SpriteRect;
use nalgebra::Vector2;

/// Frames of a single animation state, ordered left to right.
pub type AnimationState = Vec<SpriteRect>;

/// Animation states of an atlas, ordered top to bottom.
pub type Grid = Vec<AnimationState>;

/// Splits a texture of `size` into a grid of `cell` sized sprites.
/// Each horizontal line of cells becomes a separate animation state.
///
/// Cells in the trailing row and column keep the full `cell` size even if
/// the texture ends before them, so the grid is always
/// `ceil(height / cell.y)` rows of `ceil(width / cell.x)` frames.
///
/// Returns `None` if any dimension of `cell` is zero or bigger than the texture.
pub fn slice(size: Vector2<u32>, cell: Vector2<u32>) -> Option<Grid> {
    if cell.x == 0 || cell.y == 0 || cell.x > size.x || cell.y > size.y {
        return None;
    }

    let grid = (0..size.y)
        .step_by(cell.y as usize)
        .map(|y| {
            (0..size.x)
                .step_by(cell.x as usize)
                .map(|x| SpriteRect::new(x, y, cell.x, cell.y))
                .collect()
        })
        .collect();

    Some(grid)
}
