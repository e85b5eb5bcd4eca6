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
use crate::board::Coordinate;

/// Axis along which a ship extends.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    /// `x` is fixed and `y` varies.
    Vertical,
    /// `y` is fixed and `x` varies.
    Horizontal,
}

/// A straight run of cells between two endpoints, inclusive.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Line {
    orientation: Orientation,
    /// Value of the axis that doesn't vary.
    fixed: usize,
    /// Lowest value of the varying axis.
    start: usize,
    /// Highest value of the varying axis.
    end: usize,
}

impl Line {
    /// Build the line between two endpoints, in either order. Returns `None` if the
    /// endpoints share neither axis.
    ///
    /// When both endpoints are the same cell the line is treated as vertical, since the
    /// shared `x` is checked first. No ship kind has length 1, so that case never
    /// produces a valid ship.
    pub fn between(a: Coordinate, b: Coordinate) -> Option<Self> {
        let (orientation, fixed, p, q) = if a.x == b.x {
            (Orientation::Vertical, a.x, a.y, b.y)
        } else if a.y == b.y {
            (Orientation::Horizontal, a.y, a.x, b.x)
        } else {
            return None;
        };
        Some(Line {
            orientation,
            fixed,
            start: p.min(q),
            end: p.max(q),
        })
    }

    /// Direction of this line.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells covered by this line.
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Enumerate the cells of this line from the lowest varying value to the highest.
    pub fn project(&self) -> Vec<Coordinate> {
        let fixed = self.fixed;
        match self.orientation {
            Orientation::Vertical => (self.start..=self.end)
                .map(|y| Coordinate::new(fixed, y))
                .collect(),
            Orientation::Horizontal => (self.start..=self.end)
                .map(|x| Coordinate::new(x, fixed))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: usize, y: usize) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn vertical_line() {
        let line = Line::between(c(0, 4), c(0, 0)).unwrap();
        assert_eq!(line.orientation(), Orientation::Vertical);
        assert_eq!(line.len(), 5);
        assert_eq!(
            line.project(),
            vec![c(0, 0), c(0, 1), c(0, 2), c(0, 3), c(0, 4)]
        );
    }

    #[test]
    fn horizontal_line() {
        let line = Line::between(c(7, 3), c(9, 3)).unwrap();
        assert_eq!(line.orientation(), Orientation::Horizontal);
        assert_eq!(line.project(), vec![c(7, 3), c(8, 3), c(9, 3)]);
    }

    #[test]
    fn diagonal_is_rejected() {
        assert_eq!(Line::between(c(0, 0), c(1, 1)), None);
    }

    #[test]
    fn single_cell_is_vertical() {
        let line = Line::between(c(2, 2), c(2, 2)).unwrap();
        assert_eq!(line.orientation(), Orientation::Vertical);
        assert_eq!(line.len(), 1);
    }
}
