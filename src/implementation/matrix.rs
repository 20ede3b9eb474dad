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

//! This module provides a minimal square matrix indexed by ordered vertex
//! pairs. It backs both the static resource matrices of an instance and the
//! per-call reduced cost matrix of the labeling search.

use std::ops::{Index, IndexMut};

use crate::Vertex;

/// A square matrix stored row major in one flat allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    dim: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a dim x dim matrix with every entry set to `value`
    pub fn new(dim: usize, value: T) -> Self {
        Self { dim, data: vec![value; dim * dim] }
    }
    /// Overwrites every entry of the matrix with `value`
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|x| *x = value.clone());
    }
}
impl<T> Matrix<T> {
    /// The number of rows (equivalently, columns) of the matrix
    pub fn dim(&self) -> usize {
        self.dim
    }
}

impl<T> Index<(Vertex, Vertex)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (Vertex, Vertex)) -> &T {
        debug_assert!(i < self.dim && j < self.dim);
        &self.data[i * self.dim + j]
    }
}
impl<T> IndexMut<(Vertex, Vertex)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (Vertex, Vertex)) -> &mut T {
        debug_assert!(i < self.dim && j < self.dim);
        &mut self.data[i * self.dim + j]
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_matrix {
    use super::*;

    #[test]
    fn new_fills_every_entry() {
        let m = Matrix::new(3, 7_i32);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 7);
            }
        }
    }
    #[test]
    fn entries_are_independent() {
        let mut m = Matrix::new(3, 0_i32);
        m[(0, 1)] = 4;
        m[(1, 0)] = 5;

        assert_eq!(m[(0, 1)], 4);
        assert_eq!(m[(1, 0)], 5);
        assert_eq!(m[(0, 0)], 0);
    }
    #[test]
    fn fill_overwrites_previous_content() {
        let mut m = Matrix::new(2, 1.0_f64);
        m[(1, 1)] = 9.0;
        m.fill(0.0);

        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }
}
