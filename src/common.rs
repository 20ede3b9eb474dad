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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client library is likely to work with.

/// The identifier of a vertex of the instance. Customers are identified with
/// an integer ranging from 0 until `instance.num_customers()`; the depot is
/// the vertex `instance.num_customers()`.
pub type Vertex = usize;
/// A coordinate of a vertex on the plane.
pub type Position = i32;
/// A quantity of demand carried by the vehicle.
pub type Load = i32;
/// A point (or duration) in discretized time.
pub type Time = i32;
/// The cost of an edge (equivalently, a reduced cost once dual prices have
/// been subtracted). A NaN cost means the edge must not be used at all.
pub type Cost = f64;

/// The tolerance under which two costs are considered equal. All comparisons
/// on costs go through the `is_*` helpers below so that the LP duals (which
/// are only known up to the master solver's own tolerance) never flip a
/// decision on noise.
pub const EPS: Cost = 1e-6;

/// True iff x and y are equal up to the global tolerance.
#[inline]
pub fn is_eq(x: Cost, y: Cost) -> bool {
    (x - y).abs() <= EPS
}
/// True iff x is less than y by more than the global tolerance.
#[inline]
pub fn is_lt(x: Cost, y: Cost) -> bool {
    x - y < -EPS
}
/// True iff x is less than or equal to y up to the global tolerance.
#[inline]
pub fn is_le(x: Cost, y: Cost) -> bool {
    x - y <= EPS
}
/// True iff x is greater than y by more than the global tolerance.
#[inline]
pub fn is_gt(x: Cost, y: Cost) -> bool {
    x - y > EPS
}
/// True iff x is greater than or equal to y up to the global tolerance.
#[inline]
pub fn is_ge(x: Cost, y: Cost) -> bool {
    x - y >= -EPS
}

// ----------------------------------------------------------------------------
// --- EDGE -------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A directed pair of vertices. This is the granularity at which the external
/// branching layer takes its decisions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Edge {
    /// The vertex the edge leaves from
    pub tail: Vertex,
    /// The vertex the edge points to
    pub head: Vertex,
}
impl Edge {
    pub fn new(tail: Vertex, head: Vertex) -> Self {
        Self { tail, head }
    }
}

// ----------------------------------------------------------------------------
// --- BRANCHING DECISION -----------------------------------------------------
// ----------------------------------------------------------------------------
/// The direction in which the branching layer fixed an edge: either the edge
/// may never be traversed, or it must be the unique successor/predecessor
/// relationship between its two endpoints.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BranchDirection {
    Forbid,
    Require,
}

/// A decision taken by the external branching layer. Any given decision should
/// be understood as "edge is forbidden" or "edge is required" within the
/// current branch-and-bound subtree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BranchingDecision {
    pub edge: Edge,
    pub direction: BranchDirection,
}

// ----------------------------------------------------------------------------
// --- MASTER STATE -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// The state of the restricted master LP at the moment the pricer is invoked.
/// When the master is feasible, pricing works on reduced costs (instance costs
/// minus dual prices) and may additionally compute a dual bound for the
/// current branch-and-bound node. When it is infeasible, pricing works on
/// Farkas multipliers over a zero cost baseline and a single priced route
/// suffices to make progress.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MasterState {
    Feasible {
        /// The objective value of the master LP, used to derive the node's
        /// dual bound
        lp_objective: Cost,
    },
    Infeasible,
}
impl MasterState {
    pub fn is_feasible(self) -> bool {
        matches!(self, MasterState::Feasible { .. })
    }
}

// ----------------------------------------------------------------------------
// --- RESULTS ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// Tells whether a pricing call made progress. `NoProgress` only ever occurs
/// when the external cutoff fired before a single route could be priced;
/// an exhausted queue with no negative reduced cost route is a legitimate
/// `Success` (it proves the master LP is optimally priced).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PricingStatus {
    Success,
    NoProgress,
}

/// The outcome of one pricing call.
#[derive(Clone, Debug, PartialEq)]
pub struct PricingOutcome {
    /// Whether the call made progress
    pub status: PricingStatus,
    /// The number of routes that were handed over to the column sink
    pub num_routes: usize,
    /// A valid (albeit weak) dual bound for the current branch-and-bound
    /// node. Only computed when the master was feasible, the queue was
    /// exhausted and at least one route was found.
    pub lower_bound: Option<Cost>,
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
