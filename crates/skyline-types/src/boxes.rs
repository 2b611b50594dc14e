use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::{SkylineError, SkylineResult, Violation};
use crate::point::Point;
use crate::skyline::Skyline;

/// A single rectangle standing on the baseline.
///
/// Assumes `left < right` and a positive height; [`SkylineBox::to_skyline`]
/// rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkylineBox<T> {
    /// Left x coordinate.
    pub left: T,
    /// Right x coordinate.
    pub right: T,
    /// Height of the box (its top y coordinate).
    pub height: T,
}

impl<T: Coordinate> SkylineBox<T> {
    /// Create a box spanning `left..right` with the given height.
    ///
    /// No checks happen here; see [`SkylineBox::is_proper`].
    pub fn new(left: T, right: T, height: T) -> Self {
        Self {
            left,
            right,
            height,
        }
    }

    /// The `(left, height)` corner.
    pub fn top_left(&self) -> Point<T> {
        Point::new(self.left, self.height)
    }

    /// The `(right, height)` corner.
    pub fn top_right(&self) -> Point<T> {
        Point::new(self.right, self.height)
    }

    /// The `(left, 0)` corner. Always on the baseline.
    pub fn bottom_left(&self) -> Point<T> {
        Point::on_baseline(self.left)
    }

    /// The `(right, 0)` corner. Always on the baseline.
    pub fn bottom_right(&self) -> Point<T> {
        Point::on_baseline(self.right)
    }

    /// Corners in skyline order: bottom-left, top-left, top-right, bottom-right.
    pub fn corners(&self) -> [Point<T>; 4] {
        [
            self.bottom_left(),
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
        ]
    }

    /// Returns `true` if the box encloses a positive area.
    pub fn is_proper(&self) -> bool {
        self.left < self.right && self.height > T::ZERO
    }

    /// The four-point skyline tracing this box.
    ///
    /// # Errors
    ///
    /// [`Violation::DegenerateBox`] unless the box [is proper](SkylineBox::is_proper).
    pub fn to_skyline(&self) -> SkylineResult<Skyline<T>> {
        if !self.is_proper() {
            return Err(Violation::DegenerateBox.into());
        }
        Skyline::new(self.corners().to_vec())
    }
}

impl<T: Coordinate> TryFrom<SkylineBox<T>> for Skyline<T> {
    type Error = SkylineError;

    fn try_from(b: SkylineBox<T>) -> SkylineResult<Self> {
        b.to_skyline()
    }
}
