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

//! This module provides the pricing driver: the piece which translates the
//! dual information of the master LP and the active branching decisions into
//! the reduced cost matrix the labeling search runs on, and which relays the
//! priced routes back to the master problem.

use fxhash::FxHashSet;
use log::debug;

use crate::{
    path_violates, BranchDirection, BranchingDecision, ColumnSink, Cost, Cutoff, Instance,
    LabelingAlgorithm, LabelingConfig, MasterState, PricingOutcome, Vertex,
};

/// Everything one pricing call depends upon, gathered by the surrounding
/// branch-and-price driver.
#[derive(Debug, Clone)]
pub struct PricingRequest<'a> {
    /// Whether the master LP is feasible (and its objective if it is)
    pub master: MasterState,
    /// One dual value per customer cover constraint: LP duals when the
    /// master is feasible, Farkas multipliers when it is not
    pub duals: &'a [Cost],
    /// The branching decisions active on the current search tree path
    pub decisions: &'a [BranchingDecision],
}

/// The labeling pricer: owns the search engine for one instance and rebuilds
/// its reduced cost matrix before every call.
pub struct LabelingPricer<'a> {
    instance: &'a Instance,
    labeling: LabelingAlgorithm<'a>,
}

impl<'a> LabelingPricer<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance, labeling: LabelingAlgorithm::new(instance) }
    }
    pub fn with_config(instance: &'a Instance, config: LabelingConfig) -> Self {
        Self { instance, labeling: LabelingAlgorithm::with_config(instance, config) }
    }

    /// Runs one pricing call: assembles the reduced cost matrix from the
    /// request, then searches it and forwards every priced route to `sink`.
    pub fn price(
        &mut self,
        request: &PricingRequest,
        cutoff: &dyn Cutoff,
        sink: &mut dyn ColumnSink,
    ) -> PricingOutcome {
        let num_vertices = self.instance.num_vertices();
        let num_customers = self.instance.num_customers();
        let depot = self.instance.depot();
        debug_assert_eq!(request.duals.len(), num_customers);

        // Create the matrix of reduced costs.
        let instance = self.instance;
        let reduced_cost = self.labeling.reduced_costs();
        match request.master {
            MasterState::Feasible { .. } => {
                for i in 0..num_vertices {
                    for j in 0..num_vertices {
                        reduced_cost[(i, j)] = instance.cost(i, j);
                    }
                }
            }
            MasterState::Infeasible => {
                for i in 0..num_vertices {
                    for j in 0..num_vertices {
                        reduced_cost[(i, j)] =
                            if instance.is_valid(i, j) { 0.0 } else { Cost::NAN };
                    }
                }
            }
        }

        // Modify the reduced cost matrix for the customer cover duals.
        for (i, dual) in request.duals.iter().enumerate() {
            for j in 0..num_vertices {
                reduced_cost[(i, j)] -= dual;
            }
        }

        // Enforce the edge branching decisions.
        for decision in request.decisions {
            let edge = decision.edge;
            match decision.direction {
                BranchDirection::Forbid => {
                    reduced_cost[(edge.tail, edge.head)] = Cost::NAN;
                    debug!("disabling ({},{}) by branching", edge.tail, edge.head);
                }
                BranchDirection::Require => {
                    // Only the required edge may enter the head and leave
                    // the tail; the depot keeps all of its edges.
                    if edge.head != depot {
                        for i in 0..num_vertices {
                            if i != edge.tail {
                                reduced_cost[(i, edge.head)] = Cost::NAN;
                            }
                        }
                    }
                    if edge.tail != depot {
                        for j in 0..num_vertices {
                            if j != edge.head {
                                reduced_cost[(edge.tail, j)] = Cost::NAN;
                            }
                        }
                    }
                }
            }
        }

        // Solve. Routes go through a wrapper which, in debug builds, checks
        // that each one honors the active branching decisions and was not
        // already priced in this call.
        let mut checked = CheckedSink {
            inner: sink,
            decisions: request.decisions,
            seen: FxHashSet::default(),
        };
        self.labeling.solve(request.master, cutoff, &mut checked)
    }
}

/// Relays routes to the real sink; in debug builds it first asserts that the
/// route is consistent with every active branching decision and that the same
/// route was not emitted twice in the current call.
struct CheckedSink<'a, 'b> {
    inner: &'a mut dyn ColumnSink,
    decisions: &'b [BranchingDecision],
    seen: FxHashSet<Vec<Vertex>>,
}
impl ColumnSink for CheckedSink<'_, '_> {
    fn add_route(&mut self, route: &[Vertex], reduced_cost: Cost) {
        if cfg!(debug_assertions) {
            for decision in self.decisions {
                assert!(
                    !path_violates(decision.edge, decision.direction, route),
                    "priced route {:?} does not satisfy the {:?} decision on ({},{})",
                    route,
                    decision.direction,
                    decision.edge.tail,
                    decision.edge.head
                );
            }
            assert!(self.seen.insert(route.to_vec()), "route {route:?} priced twice");
        }
        self.inner.add_route(route, reduced_cost);
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
