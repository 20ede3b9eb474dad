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

//! # ESPPRC
//! This crate implements the pricing engine at the heart of branch-and-price
//! solvers for the vehicle routing problem with time windows (VRPTW): a
//! labeling algorithm for the elementary shortest path problem with resource
//! constraints. Partial paths (labels) are explored best first, bounded by
//! the vehicle capacity and the customers' time windows, and pruned by a
//! Pareto dominance check at every vertex. The routes it prices out are the
//! columns a restricted master LP is asking for.
//!
//! The surrounding branch-and-bound tree, the LP itself, and the parsing of
//! instance files are deliberately out of scope: this crate is the
//! computational core those collaborators call into, thousands of times per
//! solve.
//!
//! ## Quick Example
//! The following prices one round of columns for a toy instance with a depot
//! and three customers placed on a line.
//!
//! ```
//! use espprc::*;
//!
//! // 1. Describe the instance: the depot comes first, then the customers.
//! let vertex = |name: &str, x: Position, load: Load| VertexData {
//!     name: name.to_string(),
//!     x,
//!     y: 0,
//!     load,
//!     earliest: 0,
//!     latest: 1000,
//!     service: 0,
//! };
//! let instance = Instance::new(
//!     "example",
//!     vec![
//!         vertex("depot", 0, 0),
//!         vertex("a", 10, 1),
//!         vertex("b", 20, 1),
//!         vertex("c", 30, 1),
//!     ],
//!     10,
//! )
//! .unwrap();
//!
//! // 2. Build a pricer for the instance; it is reused across all the
//! //    pricing calls of a solve.
//! let mut pricer = LabelingPricer::new(&instance);
//!
//! // 3. Price one round of columns: the master is feasible, its LP
//! //    objective is 100 and it hands us one dual value per customer.
//! let request = PricingRequest {
//!     master: MasterState::Feasible { lp_objective: 100.0 },
//!     duals: &[25.0, 5.0, 5.0],
//!     decisions: &[],
//! };
//! let mut columns = CollectedRoutes::new();
//! let outcome = pricer.price(&request, &NoCutoff, &mut columns);
//!
//! // 4. Exactly one route has a negative reduced cost: depot-a-depot.
//! assert_eq!(outcome.status, PricingStatus::Success);
//! assert_eq!(columns.routes(), &[(vec![3, 0, 3], -5.0)]);
//!
//! // 5. Because the queue was exhausted, the pricer also derived a valid
//! //    dual bound for the current branch-and-bound node.
//! assert_eq!(outcome.lower_bound, Some(85.0));
//! ```
//!
//! ## Going further
//! The engine is split along its natural seams: `Instance` is
//! the static resource model, `LabelingAlgorithm` the search itself (with
//! `LabelingConfig` for its stopping thresholds), `LabelingPricer` the
//! driver which turns duals and branching decisions into a reduced cost
//! matrix, and the `Cutoff` / `ColumnSink` traits are the two seams towards
//! the external branch-and-bound driver and master problem.

mod common;
mod abstraction;
mod implementation;

pub use common::*;
pub use abstraction::*;
pub use implementation::*;
