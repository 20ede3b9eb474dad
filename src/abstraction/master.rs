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

//! This module defines the `ColumnSink` abstraction: the seam through which
//! the external master problem receives every route the labeling search
//! prices out.

use crate::{Cost, Vertex};

/// This trait stands for the master problem side of the column generation
/// scheme. Whenever the labeling search completes a route with a promising
/// reduced cost, it hands the route over to the sink, which is expected to
/// register it as a new decision variable (column) of the restricted master.
pub trait ColumnSink {
    /// Called once per priced route. The route is an ordered sequence of
    /// vertices which starts and ends at the depot; `reduced_cost` is the sum
    /// of the reduced costs of its consecutive vertex pairs.
    fn add_route(&mut self, route: &[Vertex], reduced_cost: Cost);
}

/// The simplest column sink you can think of: it keeps every priced route in
/// a vector. This is the implementation you want when unit testing a pricer
/// or when the master problem lives on the other side of an FFI boundary and
/// routes are better moved in bulk.
#[derive(Debug, Clone, Default)]
pub struct CollectedRoutes {
    routes: Vec<(Vec<Vertex>, Cost)>,
}
impl CollectedRoutes {
    pub fn new() -> Self {
        Self::default()
    }
    /// The routes collected so far, in the order they were priced
    pub fn routes(&self) -> &[(Vec<Vertex>, Cost)] {
        &self.routes
    }
    pub fn len(&self) -> usize {
        self.routes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
impl ColumnSink for CollectedRoutes {
    fn add_route(&mut self, route: &[Vertex], reduced_cost: Cost) {
        self.routes.push((route.to_vec(), reduced_cost));
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_collected_routes {
    use super::*;

    #[test]
    fn by_default_it_is_empty() {
        let sink = CollectedRoutes::new();
        assert!(sink.is_empty());
        assert_eq!(sink.len(), 0);
    }
    #[test]
    fn routes_are_kept_in_pricing_order() {
        let mut sink = CollectedRoutes::new();
        sink.add_route(&[3, 0, 3], -5.0);
        sink.add_route(&[3, 1, 2, 3], -1.5);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.routes()[0], (vec![3, 0, 3], -5.0));
        assert_eq!(sink.routes()[1], (vec![3, 1, 2, 3], -1.5));
    }
}
