// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use std::iter::FusedIterator;

use crate::board::{Coordinate, BOARD_SIZE};

/// Axis a [`Span`] runs along.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Axis {
    /// Along a row, varying the column.
    Horizontal,
    /// Along a column, varying the row.
    Vertical,
}

/// The contiguous, inclusive run of cells between two endpoints on the same row or
/// column. Iterates from the endpoint nearest the top-left corner regardless of the
/// order the endpoints were given in.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Span {
    start: Coordinate,
    axis: Axis,
    len: usize,
    next: usize,
}

impl Span {
    /// Build the span between `a` and `b`. Returns `None` unless the endpoints share
    /// exactly one of row or column.
    pub fn between(a: Coordinate, b: Coordinate) -> Option<Self> {
        let (axis, start, len) = if a.row() == b.row() && a.col() != b.col() {
            let start = if a.col() < b.col() { a } else { b };
            (Axis::Horizontal, start, diff(a.col(), b.col()) + 1)
        } else if a.col() == b.col() && a.row() != b.row() {
            let start = if a.row() < b.row() { a } else { b };
            (Axis::Vertical, start, diff(a.row(), b.row()) + 1)
        } else {
            return None;
        };
        Some(Self {
            start,
            axis,
            len,
            next: 0,
        })
    }

    /// Get the axis this span runs along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Total number of cells in this span, including any already iterated.
    pub fn len(&self) -> usize {
        self.len
    }
}

fn diff(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl Iterator for Span {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Coordinate> {
        if self.next >= self.len {
            return None;
        }
        let offset = self.next;
        self.next += 1;
        let (row, col) = match self.axis {
            Axis::Horizontal => (self.start.row(), self.start.col() + offset),
            Axis::Vertical => (self.start.row() + offset, self.start.col()),
        };
        // Both endpoints were in bounds and every step lies between them.
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Coordinate::new(row, col)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.next;
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for Span {}
impl FusedIterator for Span {}
