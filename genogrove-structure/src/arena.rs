//! Stable storage for inserted values.
//!
//! Records live in fixed-capacity blocks. A block is allocated once with its
//! full capacity and never grows past it, so a record is never moved or copied
//! after [`RecordArena::alloc`] returns, and its [`RecordId`] stays valid for the
//! lifetime of the arena. There is no deallocation.

use std::ops::Index;

use crate::consts::DEFAULT_BLOCK_SIZE;

/// Handle to a record inside a [`RecordArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(usize);

impl RecordId {
    /// Position of the record in allocation order.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
pub struct RecordArena<T> {
    blocks: Vec<Vec<T>>,
    block_capacity: usize,
    len: usize,
}

// a derived clone would shrink each block to its length, so the next alloc
// into the last block would reallocate it
impl<T: Clone> Clone for RecordArena<T> {
    fn clone(&self) -> Self {
        let blocks = self
            .blocks
            .iter()
            .map(|block| {
                let mut copy = Vec::with_capacity(self.block_capacity);
                copy.extend_from_slice(block);
                copy
            })
            .collect();
        RecordArena {
            blocks,
            block_capacity: self.block_capacity,
            len: self.len,
        }
    }
}

impl<T> Default for RecordArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RecordArena<T> {
    pub fn new() -> Self {
        Self::with_block_capacity(DEFAULT_BLOCK_SIZE)
    }

    /// Create an arena whose blocks hold `block_capacity` records each.
    /// A capacity of zero is bumped to one.
    pub fn with_block_capacity(block_capacity: usize) -> Self {
        RecordArena {
            blocks: Vec::new(),
            block_capacity: block_capacity.max(1),
            len: 0,
        }
    }

    /// Store `value`, returning its permanent handle. Amortized O(1); existing
    /// records are never relocated.
    pub fn alloc(&mut self, value: T) -> RecordId {
        let needs_block = self
            .blocks
            .last()
            .is_none_or(|block| block.len() == self.block_capacity);
        if needs_block {
            self.blocks.push(Vec::with_capacity(self.block_capacity));
        }

        // the block was either just created or has spare capacity
        if let Some(block) = self.blocks.last_mut() {
            block.push(value);
        }

        let id = RecordId(self.len);
        self.len += 1;
        id
    }

    #[inline]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.blocks
            .get(id.0 / self.block_capacity)?
            .get(id.0 % self.block_capacity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn block_capacity(&self) -> usize {
        self.block_capacity
    }

    /// Records in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &T)> + '_ {
        self.blocks
            .iter()
            .flatten()
            .enumerate()
            .map(|(i, value)| (RecordId(i), value))
    }
}

impl<T> Index<RecordId> for RecordArena<T> {
    type Output = T;

    #[inline]
    fn index(&self, id: RecordId) -> &T {
        &self.blocks[id.0 / self.block_capacity][id.0 % self.block_capacity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_alloc_and_get() {
        let mut arena = RecordArena::with_block_capacity(2);
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");

        assert_eq!(arena.len(), 3);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena[b], "b");
        assert_eq!(arena[c], "c");
        assert_eq!(arena.get(RecordId(3)), None);
    }

    #[rstest]
    fn test_records_never_move() {
        let mut arena = RecordArena::with_block_capacity(4);
        let first = arena.alloc(7u64);
        let addr = &arena[first] as *const u64;

        for i in 0..1000u64 {
            arena.alloc(i);
        }

        assert_eq!(&arena[first] as *const u64, addr);
        assert_eq!(arena[first], 7);
    }

    #[rstest]
    fn test_cloned_arena_keeps_records_in_place() {
        let mut arena = RecordArena::with_block_capacity(8);
        arena.alloc(1u64);
        let first = arena.alloc(2u64);

        let mut cloned = arena.clone();
        assert_eq!(cloned.block_capacity(), 8);
        assert_eq!(cloned.blocks.iter().all(|b| b.capacity() >= 8), true);
        assert_eq!(cloned.len(), 2);
        assert_eq!(cloned[first], 2);

        let addr = &cloned[first] as *const u64;
        // fill the rest of the cloned block
        for i in 0..6u64 {
            cloned.alloc(i);
        }

        assert_eq!(&cloned[first] as *const u64, addr);
        assert_eq!(cloned[first], 2);
        assert_eq!(cloned.len(), 8);
        assert_eq!(arena.len(), 2);
    }

    #[rstest]
    fn test_iter_in_allocation_order() {
        let mut arena = RecordArena::with_block_capacity(3);
        for i in 0..10u32 {
            arena.alloc(i * 10);
        }
        let collected: Vec<(usize, u32)> = arena.iter().map(|(id, v)| (id.as_usize(), *v)).collect();
        let expected: Vec<(usize, u32)> = (0..10).map(|i| (i as usize, i * 10)).collect();
        assert_eq!(collected, expected);
    }

    #[rstest]
    fn test_empty_arena() {
        let arena: RecordArena<u8> = RecordArena::default();
        assert_eq!(arena.is_empty(), true);
        assert_eq!(arena.block_capacity(), 1024);
        assert_eq!(arena.get(RecordId(0)), None);
    }

    #[rstest]
    fn test_zero_capacity_is_bumped() {
        let mut arena = RecordArena::with_block_capacity(0);
        let id = arena.alloc(1u8);
        assert_eq!(arena.block_capacity(), 1);
        assert_eq!(arena[id], 1);
    }
}
