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

//! This module defines the `Cutoff` abstraction: an externally owned
//! predicate deciding when the labeling search must give the hand back to the
//! branch-and-bound driver before it has exhausted its queue.

/// This trait encapsulates a criterion (external to the labeling search)
/// which imposes the premature stopping of one pricing call. Typical
/// implementations enforce a wall clock budget or relay the resource limits
/// of the surrounding solver.
///
/// Cancellation is cooperative: the search polls `must_stop` once per
/// iteration of its main loop and exits at the next iteration boundary, never
/// in the middle of extending the label it currently processes.
pub trait Cutoff {
    /// Returns true when the search must stop
    fn must_stop(&self) -> bool;
}
