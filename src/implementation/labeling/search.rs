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

//! This module provides the labeling search itself: a best first exploration
//! of the partial paths starting at the depot, pruned by per-vertex Pareto
//! dominance, which prices out the routes with a promising reduced cost.

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;
use derive_builder::Builder;
use log::{debug, trace};

use crate::{
    is_lt, ColumnSink, Cost, Cutoff, Instance, Label, LabelId, LabelPool, MasterState, Matrix,
    ParetoFrontier, PricingOutcome, PricingStatus, Time, Vertex,
};

/// A queue entry: the handle of a label along with the cost it was queued
/// with, so that ordering the queue never needs to chase the handle.
#[derive(Copy, Clone)]
struct QueuedLabel {
    cost: Cost,
    id: LabelId,
}

/// Orders queued labels by increasing cost and nothing else: the order among
/// labels of equal cost is unspecified. The comparison is reversed because
/// the binary heap pops its greatest element first.
#[derive(Copy, Clone, Default)]
struct MinCost;
impl Compare<QueuedLabel> for MinCost {
    fn compare(&self, a: &QueuedLabel, b: &QueuedLabel) -> Ordering {
        b.cost.partial_cmp(&a.cost).unwrap_or(Ordering::Equal)
    }
}

/// The tunable constants of the search. These are deliberately a per-engine
/// configuration rather than compile time constants so that the stopping
/// behavior can be tested (and tuned) without rebuilding.
#[derive(Debug, Clone, Builder)]
pub struct LabelingConfig {
    /// The hard cap on the number of routes priced in one call
    #[builder(default = "2000")]
    pub max_routes: usize,
    /// (routes, iterations) pairs: the search stops as soon as it has priced
    /// at least `routes` routes and spent at least `iterations` iterations,
    /// for any pair of the ladder
    #[builder(default = "vec![(100, 1000), (50, 5000), (20, 10000), (1, 20000)]")]
    pub stop_ladder: Vec<(usize, usize)>,
    /// A sink label is discarded unless its cost is strictly below the
    /// incumbent objective divided by this constant. This is a pruning
    /// heuristic, not a correctness requirement; note that with the
    /// incumbent still at its initial 0 it demands a strictly negative cost.
    #[builder(default = "1.3")]
    pub sink_divisor: Cost,
}
impl Default for LabelingConfig {
    fn default() -> Self {
        LabelingConfigBuilder::default().build().unwrap()
    }
}

/// The labeling search engine. One engine is built per instance and reused
/// across all the pricing calls of the surrounding branch-and-price; all of
/// its state (arena, frontiers, queue, incumbent) is reset at the top of each
/// call and owned exclusively by it for the duration of the call.
pub struct LabelingAlgorithm<'a> {
    // Instance
    instance: &'a Instance,
    reduced_cost: Matrix<Cost>,

    // Solver state
    config: LabelingConfig,
    storage: LabelPool,
    queue: BinaryHeap<QueuedLabel, MinCost>,
    pareto_frontier: Vec<ParetoFrontier>,
    obj: Cost,
}

impl<'a> LabelingAlgorithm<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self::with_config(instance, LabelingConfig::default())
    }

    pub fn with_config(instance: &'a Instance, config: LabelingConfig) -> Self {
        let num_vertices = instance.num_vertices();
        let mut pareto_frontier = Vec::with_capacity(instance.num_customers());
        for _ in 0..instance.num_customers() {
            pareto_frontier.push(ParetoFrontier::new());
        }
        Self {
            instance,
            reduced_cost: Matrix::new(num_vertices, Cost::NAN),
            config,
            storage: LabelPool::new(),
            queue: BinaryHeap::from_vec_cmp(vec![], MinCost),
            pareto_frontier,
            obj: 0.0,
        }
    }

    /// The reduced cost matrix the next call will search on. The driver
    /// rebuilds it before every call; it is read only while the search runs.
    /// A NaN entry means the edge must not be used at all, which every part
    /// of the search treats as absolute infeasibility rather than as a large
    /// cost.
    pub fn reduced_costs(&mut self) -> &mut Matrix<Cost> {
        &mut self.reduced_cost
    }

    /// The most negative completed route cost seen by the last call
    pub fn obj(&self) -> Cost {
        self.obj
    }

    /// Runs one pricing call: explores the partial paths best first and hands
    /// every promising completed route over to `sink`. See `PricingOutcome`
    /// for how progress is reported.
    pub fn solve(
        &mut self,
        master: MasterState,
        cutoff: &dyn Cutoff,
        sink: &mut dyn ColumnSink,
    ) -> PricingOutcome {
        let num_customers = self.instance.num_customers();
        let depot = self.instance.depot();
        let feasible_master = master.is_feasible();

        // Clear the solver state.
        for frontier in self.pareto_frontier.iter_mut() {
            frontier.reset();
        }
        self.storage.reset();
        self.queue.clear();
        self.obj = 0.0;

        // Create the starting label.
        self.create_source_label();

        // Main loop.
        let mut num_new_routes = 0;
        let mut route: Vec<Vertex> = Vec::new();
        let mut iter = 0;
        while !(!feasible_master && num_new_routes >= 1)
            && !(num_new_routes >= self.config.max_routes)
            && !self
                .config
                .stop_ladder
                .iter()
                .any(|&(routes, iterations)| num_new_routes >= routes && iter >= iterations)
            && !cutoff.must_stop()
            && !self.queue.is_empty()
        {
            // Pop the cheapest label off the queue.
            let current_id = self.queue.pop().unwrap().id;
            let current = *self.storage.get(current_id);
            let i = current.vertex;

            // Skip if dominated since it was queued.
            if current.dominated {
                continue;
            }
            trace!(
                "popped label at vertex {} (cost {}, load {}, time {})",
                i,
                current.cost,
                current.load,
                current.time
            );

            // Extend to customers.
            for j in 0..num_customers {
                if !self.reduced_cost[(i, j)].is_nan() && !current.unreachable.contains(j) {
                    if let Some(next) = self.extend_to_customer(current_id, &current, j) {
                        let cost = self.storage.get(next).cost;
                        self.queue.push(QueuedLabel { cost, id: next });
                    }
                }
            }

            // Extend to the depot.
            if !self.reduced_cost[(i, depot)].is_nan() {
                if let Some(sink_label) = self.extend_to_sink(current_id, &current) {
                    // Store the objective value.
                    self.obj = self.obj.min(sink_label.cost);

                    // Get the route by walking the parent chain backwards.
                    debug_assert!(route.is_empty());
                    route.push(sink_label.vertex);
                    let mut ancestor = sink_label.parent;
                    while let Some(id) = ancestor {
                        let label = self.storage.get(id);
                        route.push(label.vertex);
                        ancestor = label.parent;
                    }
                    route.reverse();
                    debug_assert!(route.len() >= 2);
                    debug_assert_eq!(route[0], depot);
                    debug_assert_eq!(route[route.len() - 1], depot);

                    // Add the new route.
                    num_new_routes += 1;
                    debug!(
                        "found route {} with reduced cost {}: {:?}",
                        num_new_routes, sink_label.cost, route
                    );
                    sink.add_route(&route, sink_label.cost);
                    route.clear();
                }
            }

            iter += 1;
        }

        // Set the time out status.
        let status = if num_new_routes > 0 || !cutoff.must_stop() {
            PricingStatus::Success
        } else {
            PricingStatus::NoProgress
        };

        // Compute the dual bound of the branch-and-bound node. Every one of
        // the customer cover duals contributes at most `obj` in the worst
        // case, which makes this a valid (if weak) bound; it is clamped to
        // stay non negative.
        let mut lower_bound = None;
        if let MasterState::Feasible { lp_objective } = master {
            if self.queue.is_empty() && num_new_routes > 0 {
                let bound = Cost::max(lp_objective + self.obj * num_customers as Cost, 0.0);
                debug!("computed lower bound {}", bound);
                lower_bound = Some(bound);
            }
        }

        PricingOutcome { status, num_routes: num_new_routes, lower_bound }
    }

    /// Creates the label every partial path extends: at the depot, with
    /// nothing consumed and every customer still reachable.
    fn create_source_label(&mut self) {
        let depot = self.instance.depot();

        let id = self.storage.acquire();
        {
            let label = self.storage.get_mut(id);
            label.time = self.instance.earliest(depot);
            label.vertex = depot;
        }
        let id = self.storage.commit();

        trace!("generated source label at vertex {}", depot);
        self.queue.push(QueuedLabel { cost: 0.0, id });
    }

    /// Extends `current` to the customer `j`: stages a new label, charges the
    /// edge and the resources, recomputes the unreachable customers and
    /// submits the result to the dominance frontier of `j`. Returns the
    /// committed handle if the frontier accepted it; a rejected candidate is
    /// discarded without consuming any arena memory.
    fn extend_to_customer(
        &mut self,
        current_id: LabelId,
        current: &Label,
        j: Vertex,
    ) -> Option<LabelId> {
        debug_assert!(j < self.instance.num_customers());
        debug_assert!(!current.unreachable.contains(j));
        debug_assert!(!current.dominated);

        let num_customers = self.instance.num_customers();
        let depot = self.instance.depot();
        let capacity = self.instance.capacity();
        let i = current.vertex;

        // Create the new label.
        let id = self.storage.acquire();
        {
            let next = self.storage.get_mut(id);
            *next = *current;
            next.parent = Some(current_id);
            next.vertex = j;
            next.dominated = false;

            // Calculate the resources.
            next.cost += self.reduced_cost[(i, j)];
            next.load += self.instance.load(j);
            next.time = Time::max(
                self.instance.earliest(j),
                next.time + self.instance.service_plus_travel(i, j),
            );
            debug_assert!(next.load <= capacity);
            debug_assert!(next.time <= self.instance.latest(j));
            debug_assert!(
                next.time + self.instance.service_plus_travel(j, depot)
                    <= self.instance.latest(depot)
            );

            // Update the unreachable customers.
            next.unreachable.add_inplace(j);
            let load = next.load;
            let time = next.time;
            for k in 0..num_customers {
                if !next.unreachable.contains(k) {
                    let load_j_k = load + self.instance.load(k);
                    let time_j_k = time + self.instance.service_plus_travel(j, k);
                    let time_j_k_depot = time_j_k + self.instance.service_plus_travel(k, depot);

                    if load_j_k > capacity
                        || time_j_k > self.instance.latest(k)
                        || time_j_k_depot > self.instance.latest(depot)
                    {
                        next.unreachable.add_inplace(k);
                    }
                }
            }
        }

        // Check dominance.
        if self.pareto_frontier[j].add_label(id, &mut self.storage) {
            // Commit label.
            Some(self.storage.commit())
        } else {
            // Discard label.
            None
        }
    }

    /// Extends `current` back to the depot, completing a route. The sink
    /// label never enters the arena nor any frontier: it either survives the
    /// incumbent based pruning and is immediately turned into a route, or it
    /// is dropped on the spot.
    fn extend_to_sink(&self, current_id: LabelId, current: &Label) -> Option<Label> {
        let depot = self.instance.depot();
        let i = current.vertex;

        // Create the new label.
        let mut next = *current;
        next.parent = Some(current_id);
        next.vertex = depot;

        // Calculate the resources.
        debug_assert_eq!(self.instance.load(depot), 0);
        next.cost += self.reduced_cost[(i, depot)];
        next.time = Time::max(
            self.instance.earliest(depot),
            next.time + self.instance.service_plus_travel(i, depot),
        );
        debug_assert!(next.time <= self.instance.latest(depot));

        // Discard the label if it is not sufficiently better than the
        // previously found routes.
        if !is_lt(next.cost, self.obj / self.config.sink_divisor) {
            return None;
        }
        Some(next)
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_labeling {
    use super::*;
    use crate::{CollectedRoutes, InstanceError, NoCutoff, VertexData};

    fn vertex(name: &str, x: i32, load: i32, earliest: Time, latest: Time) -> VertexData {
        VertexData {
            name: name.to_string(),
            x,
            y: 0,
            load,
            earliest,
            latest,
            service: 0,
        }
    }
    /// A depot at the origin and customers A, B, C at 10, 20, 30 on a line.
    /// After construction: A=0, B=1, C=2, depot=3.
    fn line_instance() -> Result<crate::Instance, InstanceError> {
        crate::Instance::new(
            "line",
            vec![
                vertex("D", 0, 0, 0, 1000),
                vertex("A", 10, 1, 0, 1000),
                vertex("B", 20, 1, 0, 1000),
                vertex("C", 30, 1, 0, 1000),
            ],
            10,
        )
    }
    /// Fills the engine's matrix with the instance costs minus the given
    /// per-customer duals (the feasible-master baseline).
    fn set_reduced_costs(engine: &mut LabelingAlgorithm, instance: &crate::Instance, duals: &[Cost]) {
        let n = instance.num_vertices();
        let rc = engine.reduced_costs();
        for i in 0..n {
            for j in 0..n {
                rc[(i, j)] = instance.cost(i, j);
            }
        }
        for (i, dual) in duals.iter().enumerate() {
            for j in 0..n {
                rc[(i, j)] -= dual;
            }
        }
    }
    /// Recomputes the reduced cost of a route from the engine's matrix
    fn route_cost(engine: &mut LabelingAlgorithm, route: &[Vertex]) -> Cost {
        route
            .windows(2)
            .map(|w| engine.reduced_costs()[(w[0], w[1])])
            .sum()
    }

    struct AlwaysStop;
    impl Cutoff for AlwaysStop {
        fn must_stop(&self) -> bool {
            true
        }
    }

    #[test]
    fn a_single_negative_route_is_priced_exactly() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        // only routes visiting A can be negative, and only D-A-D is
        set_reduced_costs(&mut engine, &instance, &[25.0, 5.0, 5.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );

        assert_eq!(outcome.status, PricingStatus::Success);
        assert_eq!(outcome.num_routes, 1);
        assert_eq!(sink.routes(), &[(vec![3, 0, 3], -5.0)]);
        assert!(engine.obj() <= 0.0);
        assert_eq!(engine.obj(), -5.0);
    }
    #[test]
    fn the_dual_bound_is_clamped_to_zero() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        set_reduced_costs(&mut engine, &instance, &[25.0, 5.0, 5.0]);

        let mut sink = CollectedRoutes::new();
        // obj = -5 over 3 customers: lp 100 gives the bound 100 - 15 = 85
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );
        assert_eq!(outcome.lower_bound, Some(85.0));

        // with a tiny lp objective the bound would go negative: clamped
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 3.0 },
            &NoCutoff,
            &mut sink,
        );
        assert_eq!(outcome.lower_bound, Some(0.0));
    }
    #[test]
    fn no_bound_is_computed_without_a_route() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        // zero duals: every reduced cost is non negative
        set_reduced_costs(&mut engine, &instance, &[0.0, 0.0, 0.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );

        assert_eq!(outcome.status, PricingStatus::Success);
        assert_eq!(outcome.num_routes, 0);
        assert_eq!(outcome.lower_bound, None);
        assert!(sink.is_empty());
    }
    #[test]
    fn a_zero_cost_route_is_rejected_while_the_incumbent_is_zero() {
        // Documents the pruning quirk: the threshold obj / 1.3 is still 0
        // when the first sink extension happens, so a route must price
        // strictly below zero to be emitted at all. A tour of all-zero
        // reduced costs is therefore never returned.
        let instance = crate::Instance::new(
            "stacked",
            vec![
                vertex("D", 0, 0, 0, 1000),
                vertex("A", 0, 1, 0, 1000),
            ],
            10,
        )
        .unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        set_reduced_costs(&mut engine, &instance, &[0.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 0.0 },
            &NoCutoff,
            &mut sink,
        );
        assert_eq!(outcome.num_routes, 0);
        assert!(sink.is_empty());
    }
    #[test]
    fn an_infeasible_master_stops_after_one_route() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        // Farkas pricing baseline: zero costs on valid edges
        {
            let n = instance.num_vertices();
            let rc = engine.reduced_costs();
            for i in 0..n {
                for j in 0..n {
                    rc[(i, j)] = if instance.is_valid(i, j) { 0.0 } else { Cost::NAN };
                }
            }
            for j in 0..n {
                rc[(0, j)] -= 1.0; // Farkas multiplier of customer A
            }
        }

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(MasterState::Infeasible, &NoCutoff, &mut sink);

        // one route suffices for Farkas pricing, even though several
        // negative ones exist
        assert_eq!(outcome.status, PricingStatus::Success);
        assert_eq!(outcome.num_routes, 1);
        assert_eq!(outcome.lower_bound, None);
    }
    #[test]
    fn the_route_cap_stops_the_search() {
        let instance = line_instance().unwrap();
        let config = LabelingConfigBuilder::default()
            .max_routes(1)
            .stop_ladder(vec![])
            .build()
            .unwrap();
        let mut engine = LabelingAlgorithm::with_config(&instance, config);
        // several negative routes exist with these duals
        set_reduced_costs(&mut engine, &instance, &[25.0, 45.0, 5.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );
        assert_eq!(outcome.num_routes, 1);

        // without the cap, the same duals price more than one route
        let mut engine = LabelingAlgorithm::new(&instance);
        set_reduced_costs(&mut engine, &instance, &[25.0, 45.0, 5.0]);
        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );
        assert!(outcome.num_routes > 1);
    }
    #[test]
    fn the_stop_ladder_stops_the_search() {
        let instance = line_instance().unwrap();
        // stop as soon as one route was priced, whatever the iteration count
        let config = LabelingConfigBuilder::default()
            .stop_ladder(vec![(1, 0)])
            .build()
            .unwrap();
        let mut engine = LabelingAlgorithm::with_config(&instance, config);
        set_reduced_costs(&mut engine, &instance, &[25.0, 45.0, 5.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );
        assert_eq!(outcome.num_routes, 1);
    }
    #[test]
    fn a_cutoff_before_any_route_reports_no_progress() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        set_reduced_costs(&mut engine, &instance, &[25.0, 5.0, 5.0]);

        let mut sink = CollectedRoutes::new();
        let outcome = engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &AlwaysStop,
            &mut sink,
        );
        assert_eq!(outcome.status, PricingStatus::NoProgress);
        assert_eq!(outcome.num_routes, 0);
        assert_eq!(outcome.lower_bound, None);
        assert!(sink.is_empty());
    }
    #[test]
    fn every_priced_route_is_an_elementary_depot_tour() {
        let instance = line_instance().unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        // aggressive duals pricing many routes
        set_reduced_costs(&mut engine, &instance, &[25.0, 45.0, 65.0]);

        let mut sink = CollectedRoutes::new();
        engine.solve(
            MasterState::Feasible { lp_objective: 100.0 },
            &NoCutoff,
            &mut sink,
        );

        assert!(!sink.is_empty());
        let depot = instance.depot();
        for (route, reduced_cost) in sink.routes().iter() {
            // starts and ends at the depot
            assert!(route.len() >= 2);
            assert_eq!(route[0], depot);
            assert_eq!(route[route.len() - 1], depot);
            // visits no customer twice
            let mut seen = std::collections::HashSet::new();
            for &v in &route[1..route.len() - 1] {
                assert!(seen.insert(v));
            }
            // stays within the vehicle capacity
            let load: i32 = route[1..route.len() - 1]
                .iter()
                .map(|&v| instance.load(v))
                .sum();
            assert!(load <= instance.capacity());
            // the reported cost is the sum of the traversed reduced costs
            let recomputed = route_cost(&mut engine, route);
            assert!(is_eq_cost(recomputed, *reduced_cost));
        }
    }
    #[test]
    fn capacity_exhaustion_prevents_multi_customer_routes() {
        let instance = crate::Instance::new(
            "heavy",
            vec![
                vertex("D", 0, 0, 0, 1000),
                vertex("A", 10, 6, 0, 1000),
                vertex("B", 20, 6, 0, 1000),
            ],
            10,
        )
        .unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        // both customers are attractive, but they cannot share a vehicle
        set_reduced_costs(&mut engine, &instance, &[100.0, 100.0]);

        let mut sink = CollectedRoutes::new();
        engine.solve(
            MasterState::Feasible { lp_objective: 0.0 },
            &NoCutoff,
            &mut sink,
        );

        assert!(!sink.is_empty());
        for (route, _) in sink.routes().iter() {
            assert_eq!(route.len(), 3);
        }
    }
    #[test]
    fn time_windows_prevent_infeasible_orderings() {
        // B must be served early: it can never follow C
        let instance = crate::Instance::new(
            "tw",
            vec![
                vertex("D", 0, 0, 0, 1000),
                vertex("A", 10, 1, 0, 1000),
                vertex("B", 20, 1, 0, 25),
                vertex("C", 30, 1, 0, 1000),
            ],
            10,
        )
        .unwrap();
        let mut engine = LabelingAlgorithm::new(&instance);
        set_reduced_costs(&mut engine, &instance, &[50.0, 100.0, 100.0]);

        let mut sink = CollectedRoutes::new();
        engine.solve(
            MasterState::Feasible { lp_objective: 0.0 },
            &NoCutoff,
            &mut sink,
        );

        assert!(!sink.is_empty());
        for (route, _) in sink.routes().iter() {
            let position_of = |v: Vertex| route.iter().position(|&x| x == v);
            if let (Some(c), Some(b)) = (position_of(2), position_of(1)) {
                assert!(b < c, "B can only be served before C in {route:?}");
            }
        }
    }

    fn is_eq_cost(x: Cost, y: Cost) -> bool {
        crate::is_eq(x, y)
    }
}
