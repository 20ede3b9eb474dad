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

//! This module defines the static resource model of a VRPTW instance: the
//! travel cost and travel time matrices, the per-vertex demands, service
//! durations and time windows, and the vehicle capacity. An instance is built
//! once at program start and read only from there on; parsing instance files
//! is deliberately left to the client.

use crate::{Cost, Load, Matrix, Position, Time, Vertex};

/// The largest number of customers a pricing subproblem can handle. The bound
/// comes from the fixed capacity of the bit set tracking the unreachable
/// customers of a label.
pub const MAX_CUSTOMERS: usize = 256;

/// The raw attributes of one vertex, as handed over by whatever parses the
/// instance. The depot must come first; customers follow in any order.
#[derive(Debug, Clone)]
pub struct VertexData {
    pub name: String,
    pub x: Position,
    pub y: Position,
    pub load: Load,
    pub earliest: Time,
    pub latest: Time,
    pub service: Time,
}

/// The reasons why a set of vertex data cannot make up a usable instance.
#[derive(Debug, thiserror::Error)]
pub enum InstanceError {
    #[error("an instance requires at least a depot vertex")]
    NoVertices,
    #[error("at most {MAX_CUSTOMERS} customers are supported, got {0}")]
    TooManyCustomers(usize),
    #[error("the depot {0} must have zero load, zero service duration and a time window starting at 0")]
    InvalidDepot(String),
    #[error("vertex name {0} is not unique")]
    DuplicateName(String),
    #[error("vertex {0} has a negative load, service duration or time window bound")]
    NegativeAttribute(String),
    #[error("vertex {0} has its latest start time before its earliest start time")]
    ReversedTimeWindow(String),
    #[error("customer {name} has its time window tightened to the empty interval [{earliest}, {latest}]")]
    EmptyTimeWindow { name: String, earliest: Time, latest: Time },
}

/// The immutable, process lifetime description of a VRPTW instance.
///
/// Customers are the vertices `0..num_customers()`; the depot is the vertex
/// `num_customers()` and acts as both the source and the sink of every route.
/// The `cost` matrix holds NaN for every ordered pair that can never be
/// traversed (loops, pairs whose combined demand exceeds the vehicle
/// capacity, pairs whose time windows cannot be chained); all other entries
/// are the rounded up euclidean distances.
#[derive(Debug, Clone)]
pub struct Instance {
    name: String,

    // Vertices data
    vertex_name: Vec<String>,
    vertex_x: Vec<Position>,
    vertex_y: Vec<Position>,
    vertex_load: Vec<Load>,
    vertex_earliest: Vec<Time>,
    vertex_latest: Vec<Time>,
    vertex_service: Vec<Time>,
    cost: Matrix<Cost>,
    service_plus_travel: Matrix<Time>,

    // Vehicles data
    vehicle_load_capacity: Load,
}

impl Instance {
    /// Builds an instance from raw vertex data (depot first) and the vehicle
    /// load capacity. This performs the whole preprocessing the labeling
    /// search relies upon: euclidean costs rounded up to integers, travel
    /// times including the service duration of the tail vertex, time windows
    /// tightened against the depot window, and structurally infeasible edges
    /// marked with a NaN cost.
    pub fn new(
        name: impl Into<String>,
        mut vertices: Vec<VertexData>,
        vehicle_load_capacity: Load,
    ) -> Result<Self, InstanceError> {
        if vertices.is_empty() {
            return Err(InstanceError::NoVertices);
        }
        if vertices.len() - 1 > MAX_CUSTOMERS {
            return Err(InstanceError::TooManyCustomers(vertices.len() - 1));
        }
        {
            let depot = &vertices[0];
            if depot.load != 0 || depot.service != 0 || depot.earliest != 0 {
                return Err(InstanceError::InvalidDepot(depot.name.clone()));
            }
        }
        for vertex in vertices.iter() {
            if vertex.load < 0 || vertex.service < 0 || vertex.earliest < 0 {
                return Err(InstanceError::NegativeAttribute(vertex.name.clone()));
            }
            if vertex.latest < vertex.earliest {
                return Err(InstanceError::ReversedTimeWindow(vertex.name.clone()));
            }
        }
        for i in 0..vertices.len() {
            for j in i + 1..vertices.len() {
                if vertices[i].name == vertices[j].name {
                    return Err(InstanceError::DuplicateName(vertices[i].name.clone()));
                }
            }
        }

        // Move the depot vertex to the end so that customers are 0..n.
        vertices.rotate_left(1);

        // Store the vertices.
        let num_vertices = vertices.len();
        let mut vertex_name = Vec::with_capacity(num_vertices);
        let mut vertex_x = Vec::with_capacity(num_vertices);
        let mut vertex_y = Vec::with_capacity(num_vertices);
        let mut vertex_load = Vec::with_capacity(num_vertices);
        let mut vertex_earliest = Vec::with_capacity(num_vertices);
        let mut vertex_latest = Vec::with_capacity(num_vertices);
        let mut vertex_service = Vec::with_capacity(num_vertices);
        for vertex in vertices {
            vertex_name.push(vertex.name);
            vertex_x.push(vertex.x);
            vertex_y.push(vertex.y);
            vertex_load.push(vertex.load);
            vertex_earliest.push(vertex.earliest);
            vertex_latest.push(vertex.latest);
            vertex_service.push(vertex.service);
        }
        let num_customers = num_vertices - 1;
        let depot = num_customers;

        // Calculate the resource matrices.
        let mut all_cost = Matrix::new(num_vertices, Cost::NAN);
        let mut service_plus_travel = Matrix::new(num_vertices, 0 as Time);
        for i in 0..num_vertices {
            for j in 0..num_vertices {
                let dx = (vertex_x[i] - vertex_x[j]) as Cost;
                let dy = (vertex_y[i] - vertex_y[j]) as Cost;

                all_cost[(i, j)] = (dx * dx + dy * dy).sqrt().ceil();
                service_plus_travel[(i, j)] =
                    (all_cost[(i, j)] + vertex_service[i] as Cost).ceil() as Time;
            }
        }

        // Tighten the time windows.
        for i in 0..num_customers {
            vertex_earliest[i] = Time::max(
                vertex_earliest[i],
                vertex_earliest[depot] + service_plus_travel[(depot, i)],
            );
            vertex_latest[i] = Time::min(
                vertex_latest[i],
                vertex_latest[depot] - service_plus_travel[(i, depot)],
            );
            if vertex_earliest[i] > vertex_latest[i] {
                return Err(InstanceError::EmptyTimeWindow {
                    name: vertex_name[i].clone(),
                    earliest: vertex_earliest[i],
                    latest: vertex_latest[i],
                });
            }
        }

        // Create the edges and remove the infeasible ones.
        let mut cost = all_cost;
        for i in 0..num_vertices {
            for j in 0..num_vertices {
                if (i == j) ||
                    (vertex_load[i] + vertex_load[j] > vehicle_load_capacity) ||
                    (vertex_earliest[i] + service_plus_travel[(i, j)] > vertex_latest[j])
                {
                    cost[(i, j)] = Cost::NAN;
                }
            }
        }

        Ok(Self {
            name: name.into(),
            vertex_name,
            vertex_x,
            vertex_y,
            vertex_load,
            vertex_earliest,
            vertex_latest,
            vertex_service,
            cost,
            service_plus_travel,
            vehicle_load_capacity,
        })
    }

    /// The name of the instance
    pub fn name(&self) -> &str {
        &self.name
    }
    /// The total number of vertices, depot included
    pub fn num_vertices(&self) -> usize {
        self.vertex_load.len()
    }
    /// The number of customer vertices
    pub fn num_customers(&self) -> usize {
        self.num_vertices() - 1
    }
    /// The vertex acting as both source and sink of every route
    pub fn depot(&self) -> Vertex {
        self.num_customers()
    }
    /// The load capacity of a vehicle
    pub fn capacity(&self) -> Load {
        self.vehicle_load_capacity
    }
    /// The name of the given vertex
    pub fn vertex_name(&self, i: Vertex) -> &str {
        &self.vertex_name[i]
    }
    /// The demand of the given vertex (zero for the depot)
    pub fn load(&self, i: Vertex) -> Load {
        self.vertex_load[i]
    }
    /// The earliest service start time at the given vertex
    pub fn earliest(&self, i: Vertex) -> Time {
        self.vertex_earliest[i]
    }
    /// The latest service start time at the given vertex
    pub fn latest(&self, i: Vertex) -> Time {
        self.vertex_latest[i]
    }
    /// The service duration at the given vertex
    pub fn service(&self, i: Vertex) -> Time {
        self.vertex_service[i]
    }
    /// The travel cost from i to j; NaN when the ordered pair can never be
    /// traversed by any feasible route
    pub fn cost(&self, i: Vertex, j: Vertex) -> Cost {
        self.cost[(i, j)]
    }
    /// The time spent between starting the service at i and being able to
    /// start the service at j (service duration of i plus travel time)
    pub fn service_plus_travel(&self, i: Vertex, j: Vertex) -> Time {
        self.service_plus_travel[(i, j)]
    }
    /// Whether the ordered pair (i, j) can appear in some feasible route
    pub fn is_valid(&self, i: Vertex, j: Vertex) -> bool {
        !self.cost(i, j).is_nan()
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_instance {
    use super::*;

    fn vertex(name: &str, x: Position, y: Position, load: Load, earliest: Time, latest: Time, service: Time) -> VertexData {
        VertexData { name: name.to_string(), x, y, load, earliest, latest, service }
    }
    /// A depot at the origin and three customers on a line, ten units apart
    fn line_instance() -> Instance {
        Instance::new(
            "line",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 10, 0, 1, 0, 1000, 0),
                vertex("B", 20, 0, 1, 0, 1000, 0),
                vertex("C", 30, 0, 1, 0, 1000, 0),
            ],
            10,
        )
        .unwrap()
    }

    #[test]
    fn the_depot_is_moved_to_the_last_index() {
        let inst = line_instance();
        assert_eq!(inst.num_vertices(), 4);
        assert_eq!(inst.num_customers(), 3);
        assert_eq!(inst.depot(), 3);
        assert_eq!(inst.vertex_name(3), "D");
        assert_eq!(inst.vertex_name(0), "A");
    }
    #[test]
    fn costs_are_euclidean_distances_rounded_up() {
        let inst = line_instance();
        assert_eq!(inst.cost(3, 0), 10.0);
        assert_eq!(inst.cost(0, 1), 10.0);
        assert_eq!(inst.cost(3, 2), 30.0);

        let diag = Instance::new(
            "diag",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 1, 1, 1, 0, 1000, 0),
            ],
            10,
        )
        .unwrap();
        // sqrt(2) rounds up to 2
        assert_eq!(diag.cost(1, 0), 2.0);
    }
    #[test]
    fn travel_time_includes_the_service_of_the_tail() {
        let inst = Instance::new(
            "svc",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 10, 0, 1, 0, 1000, 5),
                vertex("B", 20, 0, 1, 0, 1000, 0),
            ],
            10,
        )
        .unwrap();
        // A -> B: distance 10 plus 5 units of service at A
        assert_eq!(inst.service_plus_travel(0, 1), 15);
        // depot -> A: no service at the depot
        assert_eq!(inst.service_plus_travel(2, 0), 10);
    }
    #[test]
    fn time_windows_are_tightened_against_the_depot_window() {
        let inst = line_instance();
        // earliest arrival at A is the travel time from the depot
        assert_eq!(inst.earliest(0), 10);
        // latest start at A leaves enough time to drive back
        assert_eq!(inst.latest(0), 990);
        assert_eq!(inst.earliest(2), 30);
        assert_eq!(inst.latest(2), 970);
        // the depot window itself is untouched
        assert_eq!(inst.earliest(3), 0);
        assert_eq!(inst.latest(3), 1000);
    }
    #[test]
    fn loops_are_invalid() {
        let inst = line_instance();
        for i in 0..inst.num_vertices() {
            assert!(!inst.is_valid(i, i));
        }
    }
    #[test]
    fn edges_exceeding_the_capacity_are_invalid() {
        let inst = Instance::new(
            "heavy",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 10, 0, 6, 0, 1000, 0),
                vertex("B", 20, 0, 6, 0, 1000, 0),
            ],
            10,
        )
        .unwrap();
        assert!(!inst.is_valid(0, 1));
        assert!(!inst.is_valid(1, 0));
        // each customer alone still fits
        assert!(inst.is_valid(2, 0));
        assert!(inst.is_valid(0, 2));
    }
    #[test]
    fn edges_incompatible_with_time_windows_are_invalid() {
        let inst = Instance::new(
            "tw",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 10, 0, 1, 100, 1000, 0),
                vertex("B", 20, 0, 1, 0, 50, 0),
            ],
            10,
        )
        .unwrap();
        // leaving A at its earliest (100) reaches B way after B's latest
        assert!(!inst.is_valid(0, 1));
        // the other direction is fine
        assert!(inst.is_valid(1, 0));
    }
    #[test]
    fn an_empty_tightened_window_is_reported() {
        let result = Instance::new(
            "empty",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                // 50 units away but must be served before time 30
                vertex("A", 50, 0, 1, 0, 30, 0),
            ],
            10,
        );
        assert!(matches!(result, Err(InstanceError::EmptyTimeWindow { .. })));
    }
    #[test]
    fn a_depot_with_load_is_rejected() {
        let result = Instance::new(
            "bad",
            vec![vertex("D", 0, 0, 3, 0, 1000, 0)],
            10,
        );
        assert!(matches!(result, Err(InstanceError::InvalidDepot(_))));
    }
    #[test]
    fn duplicate_names_are_rejected() {
        let result = Instance::new(
            "dup",
            vec![
                vertex("D", 0, 0, 0, 0, 1000, 0),
                vertex("A", 10, 0, 1, 0, 1000, 0),
                vertex("A", 20, 0, 1, 0, 1000, 0),
            ],
            10,
        );
        assert!(matches!(result, Err(InstanceError::DuplicateName(_))));
    }
    #[test]
    fn too_many_customers_are_rejected() {
        let mut vertices = vec![vertex("D", 0, 0, 0, 0, 100000, 0)];
        for i in 0..MAX_CUSTOMERS + 1 {
            vertices.push(vertex(&format!("C{i}"), 1, 0, 0, 0, 100000, 0));
        }
        let result = Instance::new("big", vertices, 10);
        assert!(matches!(result, Err(InstanceError::TooManyCustomers(_))));
    }
    #[test]
    fn an_empty_vertex_list_is_rejected() {
        let result = Instance::new("none", vec![], 10);
        assert!(matches!(result, Err(InstanceError::NoVertices)));
    }
}
