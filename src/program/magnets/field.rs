//! Bounded, position-sorted magnet collection

use core::ops::{Index, IndexMut};

use heapless::Vec;

use super::magnet::Magnet;

/// Maximum number of live magnets.
pub const MAX_MAGNETS: usize = 3;

/// The magnet collection.
///
/// Invariant: live magnets are always sorted by ascending position, so array
/// adjacency reflects spatial adjacency for the force and collision passes.
/// Sorted insertion, motion, and merge compaction all preserve it.
#[derive(Clone, Default)]
pub struct MagnetField {
    slots: Vec<Magnet, MAX_MAGNETS>,
}

impl MagnetField {
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == MAX_MAGNETS
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&Magnet> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Magnet> {
        self.slots.iter()
    }

    /// Insert a magnet at the index that keeps the collection sorted by
    /// position. Returns `false` when the collection is already full.
    pub fn insert_sorted(&mut self, magnet: Magnet) -> bool {
        let index = self
            .slots
            .iter()
            .position(|m| magnet.position() < m.position())
            .unwrap_or(self.slots.len());
        self.slots.insert(index, magnet).is_ok()
    }

    /// Mutable access to the adjacent pair starting at `index`.
    pub(crate) fn pair_mut(&mut self, index: usize) -> (&mut Magnet, &mut Magnet) {
        let (head, tail) = self.slots.split_at_mut(index + 1);
        (&mut head[index], &mut tail[0])
    }

    /// Drop invalidated magnets, keeping the survivors in order.
    ///
    /// Must run after a merge, before the next pair is evaluated.
    pub fn compact(&mut self) {
        self.slots.retain(Magnet::is_alive);
    }

    /// Whether the sort invariant currently holds. Intended for tests and
    /// debug assertions.
    pub fn is_sorted(&self) -> bool {
        self.slots
            .windows(2)
            .all(|pair| pair[0].position() <= pair[1].position())
    }
}

impl Index<usize> for MagnetField {
    type Output = Magnet;

    fn index(&self, index: usize) -> &Magnet {
        &self.slots[index]
    }
}

impl IndexMut<usize> for MagnetField {
    fn index_mut(&mut self, index: usize) -> &mut Magnet {
        &mut self.slots[index]
    }
}
