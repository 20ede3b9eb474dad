// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the arena the labels of one pricing call live in: a
//! bump allocator carving fixed size label slots out of large blocks, with a
//! staging step so that candidates rejected by a dominance check never
//! consume any memory.

use crate::{Label, LabelId};

/// The byte size of one block of the arena. Blocks are big enough for the
/// amortized cost of acquiring a slot to be negligible.
const BLOCK_SIZE: usize = 10 * 1024 * 1024;

/// A bump allocated pool of labels, scoped to one pricing call.
///
/// The pool hands slots out in two steps: `acquire` stages a fresh slot (the
/// same one over and over until it is committed) and `commit` makes the
/// staged slot permanent. A candidate label which turns out to be dominated
/// is simply never committed and its slot is recycled by the next `acquire`.
///
/// `reset` discards the content of the whole pool at once while keeping its
/// blocks allocated for the next call. Every `LabelId` obtained before a
/// reset is invalidated by it; callers must not hold handles across resets.
pub struct LabelPool {
    blocks: Vec<Vec<Label>>,
    /// The block holding the staged slot (or the next slot to stage)
    block: usize,
    /// Whether a slot is currently staged and awaiting commit
    staged: bool,
    /// The number of committed labels
    committed: usize,
    labels_per_block: usize,
}

impl LabelPool {
    pub fn new() -> Self {
        Self::with_block_capacity(BLOCK_SIZE / std::mem::size_of::<Label>())
    }

    /// Creates a pool whose blocks hold `labels_per_block` labels each. The
    /// search always uses the default sizing; tests use tiny blocks to
    /// exercise the block boundaries cheaply.
    pub(crate) fn with_block_capacity(labels_per_block: usize) -> Self {
        debug_assert!(labels_per_block > 0);
        Self {
            blocks: vec![Vec::with_capacity(labels_per_block)],
            block: 0,
            staged: false,
            committed: 0,
            labels_per_block,
        }
    }

    /// Discards every label at once. The blocks stay allocated so that the
    /// next pricing call does not pay the allocation again.
    pub fn reset(&mut self) {
        for block in self.blocks.iter_mut() {
            block.clear();
        }
        self.block = 0;
        self.staged = false;
        self.committed = 0;
    }

    /// Stages a zeroed label slot and returns its handle. Calling `acquire`
    /// again without committing recycles the same slot (and the same
    /// handle), so a discarded candidate costs nothing.
    pub fn acquire(&mut self) -> LabelId {
        if self.staged {
            let slot = self.blocks[self.block].last_mut().unwrap();
            *slot = Label::default();
        } else {
            if self.blocks[self.block].len() == self.labels_per_block {
                self.block += 1;
                if self.block == self.blocks.len() {
                    self.blocks.push(Vec::with_capacity(self.labels_per_block));
                }
            }
            self.blocks[self.block].push(Label::default());
            self.staged = true;
        }
        self.staged_id()
    }

    /// Finalizes the staged slot: its handle stays valid until the next
    /// reset and the next `acquire` will stage a fresh slot.
    pub fn commit(&mut self) -> LabelId {
        debug_assert!(self.staged);
        let id = self.staged_id();
        self.staged = false;
        self.committed += 1;
        id
    }

    /// The number of committed labels
    pub fn len(&self) -> usize {
        self.committed
    }
    pub fn is_empty(&self) -> bool {
        self.committed == 0
    }

    /// Resolves a handle (committed or currently staged)
    pub fn get(&self, id: LabelId) -> &Label {
        &self.blocks[id.0 / self.labels_per_block][id.0 % self.labels_per_block]
    }
    /// Resolves a handle (committed or currently staged), mutably
    pub fn get_mut(&mut self, id: LabelId) -> &mut Label {
        &mut self.blocks[id.0 / self.labels_per_block][id.0 % self.labels_per_block]
    }

    fn staged_id(&self) -> LabelId {
        LabelId(self.block * self.labels_per_block + self.blocks[self.block].len() - 1)
    }
}

impl Default for LabelPool {
    fn default() -> Self {
        Self::new()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_label_pool {
    use super::*;

    #[test]
    fn by_default_it_is_empty() {
        let pool = LabelPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
    }
    #[test]
    fn committed_slots_never_overlap() {
        let mut pool = LabelPool::with_block_capacity(4);
        let mut ids = vec![];
        for i in 0..10 {
            let id = pool.acquire();
            pool.get_mut(id).cost = i as f64;
            let committed = pool.commit();
            assert_eq!(id, committed);
            ids.push(id);
        }
        // all handles are distinct and each one still holds what was written
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(pool.get(*id).cost, i as f64);
            for other in ids.iter().skip(i + 1) {
                assert_ne!(id, other);
            }
        }
        assert_eq!(pool.len(), 10);
    }
    #[test]
    fn an_uncommitted_slot_is_recycled() {
        let mut pool = LabelPool::with_block_capacity(4);
        let a = pool.acquire();
        pool.get_mut(a).cost = 42.0;

        // not committed: the next acquire returns the same, re-zeroed slot
        let b = pool.acquire();
        assert_eq!(a, b);
        assert_eq!(pool.get(b).cost, 0.0);
        assert_eq!(pool.len(), 0);
    }
    #[test]
    fn acquiring_across_a_block_boundary_allocates_a_new_block() {
        let mut pool = LabelPool::with_block_capacity(2);
        let mut ids = vec![];
        for _ in 0..5 {
            pool.acquire();
            ids.push(pool.commit());
        }
        assert_eq!(ids, vec![LabelId(0), LabelId(1), LabelId(2), LabelId(3), LabelId(4)]);
    }
    #[test]
    fn reset_discards_the_content_and_restarts_the_handles() {
        let mut pool = LabelPool::with_block_capacity(2);
        for _ in 0..5 {
            pool.acquire();
            pool.commit();
        }
        pool.reset();
        assert!(pool.is_empty());

        let id = pool.acquire();
        assert_eq!(id, LabelId(0));
    }
}
