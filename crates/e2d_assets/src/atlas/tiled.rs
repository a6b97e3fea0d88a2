//! Tilesets exported by the [Tiled](https://www.mapeditor.org) map editor in its JSON format.

use e2d_geometry::SpriteRect;
use serde::Deserialize;

use super::slicer::Grid;

#[derive(Deserialize, Debug, Clone)]
pub struct TiledTileset {
    #[serde(default)]
    pub name: String,
    /// Image path relative to the tileset file
    pub image: String,
    #[serde(rename = "imagewidth")]
    pub image_width: u32,
    #[serde(rename = "imageheight")]
    pub image_height: u32,
    #[serde(rename = "tilewidth")]
    pub tile_width: u32,
    #[serde(rename = "tileheight")]
    pub tile_height: u32,
    #[serde(rename = "tilecount")]
    pub tile_count: u32,
    pub columns: u32,
    /// Pixels between the image edge and the first tile
    #[serde(default)]
    pub margin: u32,
    /// Pixels between adjacent tiles
    #[serde(default)]
    pub spacing: u32,
}

impl TiledTileset {
    pub fn decode(json: &str) -> serde_json::Result<TiledTileset> {
        serde_json::from_str(json)
    }

    /// Lays the tiles out as animation states, one per row of the tileset.
    /// The last row only holds the tiles that remain after the full rows.
    ///
    /// Returns `None` if the tileset has no tiles, no columns or zero sized tiles,
    /// or if a tile lies outside of the `u32` pixel range.
    pub fn to_grid(&self) -> Option<Grid> {
        if self.tile_count == 0 || self.columns == 0 || self.tile_width == 0 || self.tile_height == 0 {
            return None;
        }

        let stride = [
            self.tile_width.checked_add(self.spacing)?,
            self.tile_height.checked_add(self.spacing)?,
        ];

        let tile = |t: u32| {
            let (row, column) = (t / self.columns, t % self.columns);
            let x = column.checked_mul(stride[0])?.checked_add(self.margin)?;
            let y = row.checked_mul(stride[1])?.checked_add(self.margin)?;

            // Both edges have to be representable too
            x.checked_add(self.tile_width)?;
            y.checked_add(self.tile_height)?;

            Some(SpriteRect::new(x, y, self.tile_width, self.tile_height))
        };

        (0..self.tile_count)
            .step_by(self.columns as usize)
            .map(|first| {
                let last = first.saturating_add(self.columns).min(self.tile_count);
                (first..last).map(&tile).collect::<Option<_>>()
            })
            .collect()
    }
}
