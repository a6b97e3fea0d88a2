use std::collections::HashMap;

use e2d_core::Id;
use e2d_geometry::SpriteRect;

use super::slicer::{AnimationState, Grid};

/// Sprites of every atlas, grouped by animation state.
#[derive(Debug, Default)]
pub struct SpriteIndex {
    grids: HashMap<Id, Grid>,
}

impl SpriteIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            grids: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, id: Id, grid: Grid) {
        self.grids.insert(id, grid);
    }

    #[inline]
    pub fn contains(&self, id: Id) -> bool {
        self.grids.contains_key(&id)
    }

    pub fn grid(&self, id: Id) -> Option<&Grid> {
        self.grids.get(&id)
    }

    pub fn animation_state(&self, id: Id, state: usize) -> Option<&AnimationState> {
        self.grid(id)?.get(state)
    }

    pub fn animation_states(&self, id: Id) -> Option<usize> {
        self.grid(id).map(Vec::len)
    }

    pub fn frames_in_state(&self, id: Id, state: usize) -> Option<usize> {
        self.animation_state(id, state).map(Vec::len)
    }

    pub fn sprite(&self, id: Id, state: usize, frame: usize) -> Option<SpriteRect> {
        self.animation_state(id, state)?.get(frame).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}
