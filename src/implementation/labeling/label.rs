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

//! This module defines the label: the state of one partial path of the
//! search, from the depot up to some vertex, along with the resources it has
//! consumed on the way.

use smallbitset::Set256;

use crate::{Cost, Load, Time, Vertex};

/// The handle of a label inside the arena of the current pricing call. It
/// replaces the raw parent pointer a manually managed implementation would
/// use; a handle is only meaningful until the arena is reset.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct LabelId(pub usize);

/// One node of the search tree of partial paths. Labels form a forest through
/// their parent handles: a completed route is recovered by walking the parent
/// chain from a sink label back to the source label and reversing it. A label
/// is never mutated once its children exist, except for the `dominated`
/// tombstone which lets the search lazily skip queue entries displaced from
/// their frontier.
#[derive(Clone, Copy)]
pub struct Label {
    /// The sum of the reduced costs of the edges traveled so far
    pub cost: Cost,
    /// The demand accumulated so far; never exceeds the vehicle capacity
    pub load: Load,
    /// The time at which service starts at `vertex`; never exceeds the
    /// latest service start of `vertex`
    pub time: Time,
    /// The vertex this partial path currently ends at
    pub vertex: Vertex,
    /// One bit per customer: set for every customer already visited by this
    /// partial path and for every customer provably unreachable from it
    /// (by capacity, time window, or time window of the return trip)
    pub unreachable: Set256,
    /// The label this one extends; None only for the source label
    pub parent: Option<LabelId>,
    /// Tombstone set when a frontier evicts this label after it was queued
    pub dominated: bool,
}

impl Default for Label {
    fn default() -> Self {
        Self {
            cost: 0.0,
            load: 0,
            time: 0,
            vertex: 0,
            unreachable: Set256::default(),
            parent: None,
            dominated: false,
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_label {
    use super::*;

    #[test]
    fn a_default_label_consumed_nothing() {
        let label = Label::default();
        assert_eq!(label.cost, 0.0);
        assert_eq!(label.load, 0);
        assert_eq!(label.time, 0);
        assert!(label.parent.is_none());
        assert!(!label.dominated);
        assert!((0..256).all(|k| !label.unreachable.contains(k)));
    }
}
