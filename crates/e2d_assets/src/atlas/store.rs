use std::{path::Path, rc::Rc};

use e2d_collections::IndexedMap;
use e2d_core::{Id, IdAllocator};

use super::LoadError;
use crate::texture::{Texture, TextureLoader};

/// Owns decoded atlas textures in the order they were loaded.
///
/// The store is append-only. The only removal is the crate-private
/// [`AtlasStore::pop`], used to roll back a load that failed half way.
#[derive(Debug)]
pub struct AtlasStore {
    ids: Rc<IdAllocator>,
    atlases: IndexedMap<Id, Texture>,
}

impl AtlasStore {
    pub fn new(ids: Rc<IdAllocator>) -> Self {
        Self::with_capacity(ids, 0)
    }

    pub fn with_capacity(ids: Rc<IdAllocator>, capacity: usize) -> Self {
        Self {
            ids,
            atlases: IndexedMap::with_capacity(capacity),
        }
    }

    /// Decodes a texture with `loader` and stores it under a fresh identity.
    /// The store is left untouched if decoding fails.
    pub fn add<L: TextureLoader + ?Sized>(&mut self, path: &Path, loader: &L) -> Result<Id, LoadError> {
        let texture = loader.load(path).map_err(|source| LoadError::Texture {
            path: path.to_owned(),
            source,
        })?;

        Ok(self.insert(texture))
    }

    pub(crate) fn insert(&mut self, texture: Texture) -> Id {
        let id = self.ids.next();
        self.atlases.insert(id, texture);
        id
    }

    pub(crate) fn pop(&mut self) -> Option<(Id, Texture)> {
        self.atlases.pop()
    }

    #[inline]
    pub fn contains(&self, id: Id) -> bool {
        self.atlases.contains_key(&id)
    }

    pub fn get(&self, id: Id) -> Option<&Texture> {
        self.atlases.get_by_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atlases.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atlases.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.atlases.iter().map(|(id, _)| *id)
    }
}
