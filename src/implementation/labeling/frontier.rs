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

//! This module provides the Pareto frontier maintained at every customer
//! vertex: the set of labels ending there which are not dominated by any
//! other. It is the pruning engine of the labeling search and by far its most
//! performance sensitive predicate, as every generated label is checked
//! against every non dominated label of its target vertex.

use crate::{Label, LabelId, LabelPool};

/// Returns true iff label `a` dominates label `b`: `a` is at least as good on
/// cost, load and time, and every customer `a` has given up on is also given
/// up on by `b` (so `a` can reach every customer `b` can). Two labels equal
/// on all four criteria dominate each other; the frontier keeps only one.
pub fn dominates(a: &Label, b: &Label) -> bool {
    a.cost <= b.cost
        && a.load <= b.load
        && a.time <= b.time
        && b.unreachable.contains_all(a.unreachable)
}

/// The set of mutually non dominated labels currently ending at one customer
/// vertex. The collection is unordered; eviction compacts it by swapping the
/// last element in.
#[derive(Default)]
pub struct ParetoFrontier {
    frontier: Vec<LabelId>,
}

impl ParetoFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every label; called at the start of each pricing call.
    pub fn reset(&mut self) {
        self.frontier.clear();
    }

    /// The handles of the labels currently on the frontier
    pub fn labels(&self) -> &[LabelId] {
        &self.frontier
    }
    pub fn len(&self) -> usize {
        self.frontier.len()
    }
    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Confronts the candidate (a staged label in the pool) with the current
    /// frontier. If some existing label dominates it, the candidate is
    /// rejected and nothing changes. Otherwise every existing label the
    /// candidate dominates is evicted (its `dominated` tombstone is set so
    /// that the search can cheaply skip it if it is still queued) and the
    /// candidate joins the frontier.
    ///
    /// Returns true iff the candidate was accepted; the caller must then
    /// commit it in the pool before staging anything else.
    pub fn add_label(&mut self, candidate: LabelId, pool: &mut LabelPool) -> bool {
        let new = *pool.get(candidate);

        let mut idx = 0;
        while idx < self.frontier.len() {
            let existing = pool.get(self.frontier[idx]);

            if dominates(existing, &new) {
                return false;
            }
            if dominates(&new, existing) {
                // Mark as dominated, then delete from the frontier.
                pool.get_mut(self.frontier[idx]).dominated = true;
                self.frontier.swap_remove(idx);
            } else {
                idx += 1;
            }
        }

        self.frontier.push(candidate);
        true
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
