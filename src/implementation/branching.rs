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

//! This module provides the feasibility check of a route against a decision
//! taken by the external edge branching layer. It is the predicate both the
//! constraint propagation of the surrounding solver (to fix existing columns
//! to zero) and the pricing driver (to assert the routes it emits) rely upon.

use crate::{BranchDirection, Edge, Vertex};

/// Returns true iff the given route (an ordered vertex sequence) is
/// inconsistent with the decision fixing `edge` in the given direction.
///
/// When the edge is forbidden, the route violates the decision iff it
/// traverses the edge, i.e. iff tail and head appear as a consecutive pair.
///
/// When the edge is required, the edge's tail may only ever be left towards
/// the edge's head, and the edge's head may only ever be entered from the
/// edge's tail. Two special cases keep the depot endpoints usable: when the
/// tail is the first vertex of the route, only the entries into the head are
/// constrained; when the head is the last vertex, only the exits out of the
/// tail are. Everywhere else, a consecutive pair matching exactly one of the
/// two endpoints is a violation.
pub fn path_violates(edge: Edge, direction: BranchDirection, path: &[Vertex]) -> bool {
    debug_assert!(path.len() >= 2);

    match direction {
        BranchDirection::Forbid => path
            .windows(2)
            .any(|w| w[0] == edge.tail && w[1] == edge.head),
        BranchDirection::Require => {
            if edge.tail == path[0] {
                // Violated if anything enters the head from another tail.
                path.windows(2)
                    .any(|w| w[0] != edge.tail && w[1] == edge.head)
            } else if edge.head == path[path.len() - 1] {
                // Violated if the tail exits towards anything else.
                path.windows(2)
                    .any(|w| w[0] == edge.tail && w[1] != edge.head)
            } else {
                path.windows(2)
                    .any(|w| (w[0] == edge.tail) != (w[1] == edge.head))
            }
        }
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
