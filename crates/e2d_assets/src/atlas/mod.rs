use std::{
    path::{Path, PathBuf},
    rc::Rc,
};

use e2d_core::{Id, IdAllocator};
use e2d_geometry::{Rect, SpriteRect};
use log::{debug, warn};
use nalgebra::Vector2;
use thiserror::Error;

use crate::{
    png::PngLoader,
    texture::{Texture, TextureLoader},
};

use self::{
    bindings::EntityBindings, index::SpriteIndex, slicer::Grid, store::AtlasStore,
    tiled::TiledTileset,
};

pub mod bindings;
pub mod index;
pub mod settings;
pub mod slicer;
pub mod store;
pub mod tiled;

pub use settings::AtlasSettings;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The image is missing or its format is not supported.
    #[error("unable to load texture {}", .path.display())]
    Texture {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("unable to read tileset {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed tileset {}", .path.display())]
    Tileset {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("sprite size {cell:?} doesn't fit into an atlas of size {size:?}")]
    InvalidCellSize { cell: [u32; 2], size: [u32; 2] },
}

/// Stores all of the loaded atlases and classifies their sprites by animation state.
///
/// An atlas is an image split into a grid of equally sized sprites. Each
/// horizontal line of the grid is an animation state (idle, walk...),
/// addressed by its number starting from 0 at the top. Sprites within a
/// state are numbered from 0 at the left.
///
/// Loading is transactional: a failed load leaves no trace in any query.
/// Atlases are never unloaded.
///
/// All queries are total. Unknown atlases and out of range states or
/// sprites give `None` (or `false`) rather than panicking.
pub struct Atlases<L = PngLoader> {
    loader: L,
    store: AtlasStore,
    index: SpriteIndex,
    bindings: EntityBindings,
}

impl Atlases<PngLoader> {
    pub fn new(ids: Rc<IdAllocator>) -> Self {
        Self::with_loader(ids, PngLoader)
    }
}

impl<L: TextureLoader> Atlases<L> {
    pub fn with_loader(ids: Rc<IdAllocator>, loader: L) -> Self {
        Self::with_settings(ids, loader, AtlasSettings::default())
    }

    pub fn with_settings(ids: Rc<IdAllocator>, loader: L, settings: AtlasSettings) -> Self {
        Self {
            loader,
            store: AtlasStore::with_capacity(ids, settings.capacity),
            index: SpriteIndex::with_capacity(settings.capacity),
            bindings: EntityBindings::default(),
        }
    }

    /// Loads an image and splits it into `cell_size` sprites.
    ///
    /// Fails if the file doesn't exist, its format is not supported,
    /// or any dimension of `cell_size` is 0 or bigger than the image.
    pub fn load(&mut self, path: impl AsRef<Path>, cell_size: Vector2<u32>) -> Result<Id, LoadError> {
        let path = path.as_ref();
        let id = self.store.add(path, &self.loader).map_err(|e| {
            warn!("Unable to load atlas {}: {e:#}", path.display());
            e
        })?;

        let size = self.store.get(id).map_or_else(Vector2::zeros, |t| t.size);
        self.commit(id, slicer::slice(size, cell_size), cell_size)
    }

    /// Loads a tileset made by the Tiled map editor, one animation state per tileset row.
    /// The tileset image is resolved relative to the tileset file.
    pub fn load_tiled_tileset(&mut self, path: impl AsRef<Path>) -> Result<Id, LoadError> {
        let path = path.as_ref();
        let tileset = std::fs::read_to_string(path)
            .map_err(|source| LoadError::Io {
                path: path.to_owned(),
                source,
            })
            .and_then(|json| {
                TiledTileset::decode(&json).map_err(|source| LoadError::Tileset {
                    path: path.to_owned(),
                    source,
                })
            })
            .map_err(|e| {
                warn!("Unable to load tileset {}: {e:#}", path.display());
                e
            })?;

        let cell_size = Vector2::new(tileset.tile_width, tileset.tile_height);
        let Some(grid) = tileset.to_grid() else {
            warn!("Tileset {} has an invalid layout", path.display());
            return Err(LoadError::InvalidCellSize {
                cell: cell_size.into(),
                size: [tileset.image_width, tileset.image_height],
            });
        };

        let image = path.parent().unwrap_or(Path::new("")).join(&tileset.image);
        let id = self.store.add(&image, &self.loader).map_err(|e| {
            warn!("Unable to load tileset image {}: {e:#}", image.display());
            e
        })?;
        self.commit(id, Some(grid), cell_size)
    }

    /// Indexes a freshly stored atlas, or rolls the store back if there is nothing to index.
    fn commit(&mut self, id: Id, grid: Option<Grid>, cell_size: Vector2<u32>) -> Result<Id, LoadError> {
        let Some(grid) = grid else {
            let size = self.store.pop().map_or_else(Vector2::zeros, |(_, t)| t.size);
            warn!("Sprite size {cell_size:?} doesn't fit into atlas {id} of size {size:?}, rolled back");

            return Err(LoadError::InvalidCellSize {
                cell: cell_size.into(),
                size: size.into(),
            });
        };

        debug!(
            "Loaded atlas {id}: {} animation states of {} sprites",
            grid.len(),
            grid.first().map(Vec::len).unwrap_or_default()
        );

        self.index.insert(id, grid);
        Ok(id)
    }

    /// Records that `entity` draws from `atlas`.
    /// Returns `false` without recording anything if `atlas` is unknown.
    pub fn bind_entity(&mut self, entity: Id, atlas: Id) -> bool {
        if !self.is_valid_atlas(atlas) {
            debug!("Refusing to bind entity {entity} to unknown atlas {atlas}");
            return false;
        }

        self.bindings.bind(entity, atlas);
        true
    }
}

impl<L> Atlases<L> {
    #[inline]
    pub fn is_valid_atlas(&self, id: Id) -> bool {
        self.store.contains(id)
    }

    pub fn is_valid_animation_state(&self, id: Id, state: usize) -> bool {
        self.animation_states(id).map_or(false, |states| state < states)
    }

    pub fn is_valid_sprite(&self, id: Id, state: usize, idx: usize) -> bool {
        self.frames_in_state(id, state).map_or(false, |frames| idx < frames)
    }

    /// Number of animation states of an atlas.
    pub fn animation_states(&self, id: Id) -> Option<usize> {
        if !self.is_valid_atlas(id) {
            return None;
        }
        self.index.animation_states(id)
    }

    /// Number of sprites in an animation state of an atlas.
    pub fn frames_in_state(&self, id: Id, state: usize) -> Option<usize> {
        if !self.is_valid_atlas(id) {
            return None;
        }
        self.index.frames_in_state(id, state)
    }

    /// Pixel coordinates of the `idx`th sprite of an animation state.
    pub fn sprite(&self, id: Id, state: usize, idx: usize) -> Option<SpriteRect> {
        if !self.is_valid_atlas(id) {
            return None;
        }
        self.index.sprite(id, state, idx)
    }

    /// A sprite by its id in a Tiled map, counting row by row from the top left sprite.
    pub fn sprite_by_tile_id(&self, id: Id, tile_id: usize) -> Option<SpriteRect> {
        let columns = self.frames_in_state(id, 0).filter(|&c| c > 0)?;
        self.sprite(id, tile_id / columns, tile_id % columns)
    }

    /// Same as [`Atlases::sprite`], normalized to the atlas texture size.
    pub fn sprite_uv(&self, id: Id, state: usize, idx: usize) -> Option<Rect> {
        let size = self.texture(id)?.size;
        Some(self.sprite(id, state, idx)?.to_texture_space(size))
    }

    pub fn texture(&self, id: Id) -> Option<&Texture> {
        self.store.get(id)
    }

    /// Entities bound to `atlas`, in the order they were bound.
    pub fn bound_entities(&self, atlas: Id) -> &[Id] {
        self.bindings.entities(atlas)
    }

    pub fn bindings_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn atlas_count(&self) -> usize {
        self.store.len()
    }

    /// Identities of all loaded atlases, in load order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.store.ids()
    }

    pub fn index(&self) -> &SpriteIndex {
        &self.index
    }
}
