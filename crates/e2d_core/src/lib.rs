use std::cell::Cell;

use derive_more::{Deref, Display};

/// An opaque handle identifying an atlas or a game entity.
/// Handles issued by the same [`IdAllocator`] never compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Display)]
#[display(fmt = "#{}", _0)]
pub struct Id(u64);

/// Issues unique identities. Identities are never reused for the
/// lifetime of the allocator.
///
/// The allocator is meant to be shared behind an `Rc` by everything that
/// needs fresh identities (atlas managers, entity spawners), so that
/// identities issued to different kinds of objects never collide.
/// Tests can create their own allocator to get a deterministic sequence.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: Cell<u64>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an allocator whose first issued identity is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Cell::new(first),
        }
    }

    pub fn next(&self) -> Id {
        let id = self.next.get();
        self.next.set(id + 1);
        Id(id)
    }

    /// Number of the identity that will be issued next.
    #[inline]
    pub fn peek(&self) -> u64 {
        self.next.get()
    }
}
