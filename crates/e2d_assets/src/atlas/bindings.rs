use std::collections::HashMap;

use e2d_core::Id;

/// Records which entities draw from which atlas.
///
/// The table holds plain identities and never owns the entities.
/// Entries are not deduplicated.
#[derive(Debug, Default)]
pub struct EntityBindings {
    bound: HashMap<Id, Vec<Id>>,
    len: usize,
}

impl EntityBindings {
    pub(crate) fn bind(&mut self, entity: Id, atlas: Id) {
        self.bound.entry(atlas).or_default().push(entity);
        self.len += 1;
    }

    /// Entities bound to `atlas` in the order they were bound.
    pub fn entities(&self, atlas: Id) -> &[Id] {
        self.bound.get(&atlas).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of bindings over all atlases.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
