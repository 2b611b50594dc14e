use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;

/// An immutable corner of a skyline path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T: Coordinate> Point<T> {
    /// Create a point from its coordinates.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// A point on the baseline at `x`.
    pub fn on_baseline(x: T) -> Self {
        Self { x, y: T::ZERO }
    }

    /// Returns `true` if the point lies on the baseline.
    pub fn is_on_baseline(&self) -> bool {
        self.y == T::ZERO
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T: fmt::Display> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A breakpoint: the x at which a height profile changes, and the height
/// that holds from there until the next breakpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step<T> {
    pub x: T,
    pub height: T,
}

impl<T: Coordinate> Step<T> {
    /// Create a step at `x` to `height`.
    pub fn new(x: T, height: T) -> Self {
        Self { x, height }
    }
}
