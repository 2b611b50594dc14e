//! Validated skyline polygons.
//!
//! A [`Skyline`] is an ordered sequence of corners tracing a rectilinear step
//! function that sits on the baseline (`y = 0`).
//!
//! # Invariants
//!
//! - Consecutive points differ in exactly one coordinate.
//! - Segments alternate strictly between vertical and horizontal.
//! - x is non-decreasing and y is never negative.
//! - The first and last points lie on the baseline.
//!
//! A skyline may open or close with a run along the baseline. Such runs
//! enclose nothing, so they carry no breakpoints and [`Skyline::from_steps`]
//! never produces them; see [`Skyline::is_minimal`].

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coordinate::Coordinate;
use crate::error::{SkylineError, SkylineResult, Violation};
use crate::point::{Point, Step};

/// A rectilinear step-shaped polygon sitting on the baseline.
///
/// The only way to obtain a non-empty `Skyline` is through a validating
/// constructor, so every operation may rely on the module invariants.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Skyline<T> {
    points: Vec<Point<T>>,
}

impl<T: Coordinate> Skyline<T> {
    /// Validate a point sequence and wrap it.
    pub fn new(points: Vec<Point<T>>) -> SkylineResult<Self> {
        validate(&points)?;
        Ok(Self { points })
    }

    /// The skyline with no points: the union of nothing.
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Build the minimal skyline for a sequence of breakpoints.
    ///
    /// Steps must lie strictly left to right and the last one must bring the
    /// height back to the baseline. Steps that leave the height unchanged are
    /// dropped.
    pub fn from_steps<I>(steps: I) -> SkylineResult<Self>
    where
        I: IntoIterator<Item = Step<T>>,
    {
        let steps = steps.into_iter();
        let mut points = Vec::with_capacity(steps.size_hint().0 * 2);
        let mut current = T::ZERO;
        let mut last_x: Option<T> = None;

        for (index, step) in steps.enumerate() {
            if !step.x.is_comparable() || !step.height.is_comparable() {
                return Err(Violation::Incomparable { index }.into());
            }
            if step.height < T::ZERO {
                return Err(Violation::NegativeHeight { index }.into());
            }
            if let Some(prev) = last_x {
                if step.x.partial_cmp(&prev) != Some(Ordering::Greater) {
                    return Err(Violation::UnorderedSteps { index }.into());
                }
            }
            last_x = Some(step.x);

            if step.height == current {
                continue;
            }
            points.push(Point::new(step.x, current));
            points.push(Point::new(step.x, step.height));
            current = step.height;
        }

        if current != T::ZERO {
            return Err(Violation::DoesNotFall.into());
        }
        if points.is_empty() {
            return Err(Violation::Empty.into());
        }
        Ok(Self { points })
    }

    /// The corner points, left to right.
    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    /// Consume the skyline, returning its points.
    pub fn into_points(self) -> Vec<Point<T>> {
        self.points
    }

    /// Number of corner points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if this is the empty skyline.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The breakpoints of the height profile, one per vertical segment.
    ///
    /// Horizontal segments separate vertical ones, so breakpoint x is
    /// strictly increasing.
    pub fn steps(&self) -> impl Iterator<Item = Step<T>> + '_ {
        self.points
            .windows(2)
            .filter(|pair| pair[0].x == pair[1].x)
            .map(|pair| Step::new(pair[0].x, pair[1].y))
    }

    /// Returns `true` if no point can be dropped without changing the
    /// enclosed region.
    ///
    /// Alternation already rules out collinear runs in the interior, so only
    /// a leading or trailing baseline run can be redundant. A skyline with
    /// at most two points has nothing to drop.
    pub fn is_minimal(&self) -> bool {
        match self.points.as_slice() {
            [first, second, .., before_last, last] => {
                first.x == second.x && before_last.x == last.x
            }
            points => points.len() <= 2,
        }
    }

    /// Leftmost and rightmost x, or `None` for the empty skyline.
    pub fn x_range(&self) -> Option<(T, T)> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((first.x, last.x)),
            _ => None,
        }
    }

    /// Height of the profile at `x`.
    ///
    /// The profile is right-continuous: at a breakpoint the new height
    /// already applies. Outside the skyline's range the height is zero.
    pub fn height_at(&self, x: T) -> T {
        let mut height = T::ZERO;
        for step in self.steps() {
            if step.x > x {
                break;
            }
            height = step.height;
        }
        height
    }

    /// Tallest point of the profile (zero for the empty skyline).
    pub fn max_height(&self) -> T {
        self.points
            .iter()
            .fold(T::ZERO, |acc, point| acc.max_with(point.y))
    }

    /// Area enclosed between the skyline and the baseline.
    pub fn area(&self) -> T {
        self.steps()
            .zip(self.steps().skip(1))
            .fold(T::ZERO, |acc, (step, next)| {
                acc + (next.x - step.x) * step.height
            })
    }
}

fn validate<T: Coordinate>(points: &[Point<T>]) -> Result<(), Violation> {
    if points.is_empty() {
        return Err(Violation::Empty);
    }

    for (index, point) in points.iter().enumerate() {
        if !point.x.is_comparable() || !point.y.is_comparable() {
            return Err(Violation::Incomparable { index });
        }
        if point.y < T::ZERO {
            return Err(Violation::NegativeHeight { index });
        }
    }

    let len = points.len();
    if !points[0].is_on_baseline() {
        return Err(Violation::OffBaseline { index: 0 });
    }
    if !points[len - 1].is_on_baseline() {
        return Err(Violation::OffBaseline { index: len - 1 });
    }

    let mut prev_vertical: Option<bool> = None;
    for (index, pair) in points.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        let index = index + 1;

        let vertical = match (cur.x == prev.x, cur.y == prev.y) {
            (true, true) => return Err(Violation::RepeatedPoint { index }),
            (false, false) => return Err(Violation::DiagonalSegment { index }),
            (same_x, _) => same_x,
        };
        if cur.x < prev.x {
            return Err(Violation::DecreasingX { index });
        }
        if prev_vertical == Some(vertical) {
            return Err(Violation::BrokenAlternation { index });
        }
        prev_vertical = Some(vertical);
    }

    Ok(())
}

impl<T: Coordinate> TryFrom<Vec<Point<T>>> for Skyline<T> {
    type Error = SkylineError;

    fn try_from(points: Vec<Point<T>>) -> SkylineResult<Self> {
        Self::new(points)
    }
}

impl<T> From<Skyline<T>> for Vec<Point<T>> {
    fn from(skyline: Skyline<T>) -> Self {
        skyline.points
    }
}

impl<T: Serialize> Serialize for Skyline<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.points.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Skyline<T>
where
    T: Coordinate + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let points = Vec::<Point<T>>::deserialize(deserializer)?;
        Self::new(points).map_err(serde::de::Error::custom)
    }
}

impl<T: fmt::Debug> fmt::Debug for Skyline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Skyline").field(&self.points).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Skyline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, point) in self.points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point<i64>> {
        coords.iter().map(|&c| Point::from(c)).collect()
    }

    fn invalid(coords: &[(i64, i64)]) -> Violation {
        match Skyline::new(pts(coords)) {
            Err(SkylineError::InvalidInput(v)) => v,
            Ok(s) => panic!("expected violation, got {s:?}"),
        }
    }

    #[test]
    fn single_box_is_valid() {
        let s = Skyline::new(pts(&[(2, 0), (2, 2), (7, 2), (7, 0)])).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.x_range(), Some((2, 7)));
        assert_eq!(s.max_height(), 2);
        assert_eq!(s.area(), 10);
    }

    #[test]
    fn baseline_gap_is_valid() {
        let s = Skyline::new(pts(&[
            (2, 0), (2, 2), (7, 2), (7, 0),
            (13, 0), (13, 3), (18, 3), (18, 0),
        ]))
        .unwrap();
        assert_eq!(s.area(), 10 + 15);
        assert_eq!(s.height_at(10), 0);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(invalid(&[]), Violation::Empty);
    }

    #[test]
    fn accepts_leading_baseline_run() {
        let s = Skyline::new(pts(&[(0, 0), (2, 0), (2, 3), (5, 3), (5, 0)])).unwrap();
        assert_eq!(s.x_range(), Some((0, 5)));
        assert_eq!(s.steps().collect::<Vec<_>>(), vec![Step::new(2, 3), Step::new(5, 0)]);
        assert_eq!(s.height_at(1), 0);
        assert_eq!(s.area(), 9);
        assert!(!s.is_minimal());
    }

    #[test]
    fn accepts_trailing_baseline_run() {
        let s = Skyline::new(pts(&[(0, 0), (0, 3), (5, 3), (5, 0), (7, 0)])).unwrap();
        assert_eq!(s.steps().collect::<Vec<_>>(), vec![Step::new(0, 3), Step::new(5, 0)]);
        assert_eq!(s.height_at(6), 0);
        assert!(!s.is_minimal());
    }

    #[test]
    fn baseline_runs_normalise_away() {
        let s = Skyline::new(pts(&[
            (0, 0), (2, 0), (2, 3), (5, 3), (5, 0), (7, 0),
        ]))
        .unwrap();
        let minimal = Skyline::from_steps(s.steps()).unwrap();
        assert_eq!(minimal.points(), pts(&[(2, 0), (2, 3), (5, 3), (5, 0)]));
        assert!(minimal.is_minimal());
        assert_eq!(minimal.area(), s.area());
    }

    #[test]
    fn flat_skylines_are_valid() {
        let point = Skyline::new(pts(&[(4, 0)])).unwrap();
        assert_eq!(point.steps().count(), 0);
        assert!(point.is_minimal());

        let run = Skyline::new(pts(&[(0, 0), (3, 0)])).unwrap();
        assert_eq!(run.area(), 0);
        assert_eq!(run.max_height(), 0);
        assert!(run.is_minimal());
    }

    #[test]
    fn rejects_lone_vertical_segment() {
        assert_eq!(
            invalid(&[(0, 0), (0, 2)]),
            Violation::OffBaseline { index: 1 }
        );
    }

    #[test]
    fn rejects_off_baseline_endpoints() {
        assert_eq!(
            invalid(&[(0, 1), (0, 2), (3, 2), (3, 0)]),
            Violation::OffBaseline { index: 0 }
        );
        assert_eq!(
            invalid(&[(0, 0), (0, 2), (3, 2), (3, 1)]),
            Violation::OffBaseline { index: 3 }
        );
    }

    #[test]
    fn rejects_diagonal_and_repeated() {
        assert_eq!(
            invalid(&[(0, 0), (1, 2), (3, 2), (3, 0)]),
            Violation::DiagonalSegment { index: 1 }
        );
        assert_eq!(
            invalid(&[(0, 0), (0, 0), (3, 0), (3, 0)]),
            Violation::RepeatedPoint { index: 1 }
        );
    }

    #[test]
    fn rejects_broken_alternation() {
        assert_eq!(
            invalid(&[(0, 0), (0, 2), (0, 3), (3, 3), (3, 1), (3, 0)]),
            Violation::BrokenAlternation { index: 2 }
        );
    }

    #[test]
    fn rejects_decreasing_x() {
        assert_eq!(
            invalid(&[(5, 0), (5, 2), (3, 2), (3, 0)]),
            Violation::DecreasingX { index: 2 }
        );
    }

    #[test]
    fn rejects_negative_heights() {
        assert_eq!(
            invalid(&[(0, 0), (0, -2), (3, -2), (3, 0)]),
            Violation::NegativeHeight { index: 1 }
        );
    }

    #[test]
    fn rejects_double_baseline_run() {
        assert_eq!(
            invalid(&[(0, 0), (2, 0), (4, 0), (4, 3), (5, 3), (5, 0)]),
            Violation::BrokenAlternation { index: 2 }
        );
    }

    #[test]
    fn rejects_nan() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, f64::NAN),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        assert_eq!(
            Skyline::new(points),
            Err(SkylineError::InvalidInput(Violation::Incomparable { index: 1 }))
        );
    }

    #[test]
    fn steps_follow_vertical_segments() {
        let s = Skyline::new(pts(&[(2, 0), (2, 2), (4, 2), (4, 3), (9, 3), (9, 0)])).unwrap();
        let steps: Vec<_> = s.steps().collect();
        assert_eq!(
            steps,
            vec![Step::new(2, 2), Step::new(4, 3), Step::new(9, 0)]
        );
    }

    #[test]
    fn height_is_right_continuous() {
        let s = Skyline::new(pts(&[(2, 0), (2, 2), (4, 2), (4, 3), (9, 3), (9, 0)])).unwrap();
        assert_eq!(s.height_at(1), 0);
        assert_eq!(s.height_at(2), 2);
        assert_eq!(s.height_at(3), 2);
        assert_eq!(s.height_at(4), 3);
        assert_eq!(s.height_at(8), 3);
        assert_eq!(s.height_at(9), 0);
        assert_eq!(s.height_at(100), 0);
    }

    #[test]
    fn from_steps_collapses_unchanged_heights() {
        let s = Skyline::from_steps([
            Step::new(2, 2),
            Step::new(4, 2),
            Step::new(7, 3),
            Step::new(9, 0),
            Step::new(11, 0),
        ])
        .unwrap();
        assert_eq!(s.points(), pts(&[(2, 0), (2, 2), (7, 2), (7, 3), (9, 3), (9, 0)]));
        assert!(Skyline::new(s.points().to_vec()).is_ok());
    }

    #[test]
    fn from_steps_requires_return_to_baseline() {
        assert_eq!(
            Skyline::from_steps([Step::new(2, 2), Step::new(4, 3)]),
            Err(SkylineError::InvalidInput(Violation::DoesNotFall))
        );
    }

    #[test]
    fn from_steps_requires_strict_order() {
        assert_eq!(
            Skyline::from_steps([Step::new(2, 2), Step::new(2, 0)]),
            Err(SkylineError::InvalidInput(Violation::UnorderedSteps { index: 1 }))
        );
    }

    #[test]
    fn from_steps_all_flat_is_empty() {
        assert_eq!(
            Skyline::<i64>::from_steps([Step::new(2, 0)]),
            Err(SkylineError::InvalidInput(Violation::Empty))
        );
    }

    #[test]
    fn display_lists_points() {
        let s = Skyline::new(pts(&[(2, 0), (2, 2), (7, 2), (7, 0)])).unwrap();
        assert_eq!(s.to_string(), "[(2, 0), (2, 2), (7, 2), (7, 0)]");
        assert_eq!(Skyline::<i64>::empty().to_string(), "[]");
    }

    #[test]
    fn serde_validates_on_deserialize() {
        let ok: Skyline<i64> = serde_json::from_str("[[2,0],[2,2],[7,2],[7,0]]").unwrap();
        assert_eq!(ok.len(), 4);

        let bad = serde_json::from_str::<Skyline<i64>>("[[2,0],[3,2],[7,2],[7,0]]");
        assert!(bad.is_err());

        let json = serde_json::to_string(&ok).unwrap();
        assert_eq!(json, r#"[{"x":2,"y":0},{"x":2,"y":2},{"x":7,"y":2},{"x":7,"y":0}]"#);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn from_steps_output_revalidates(heights in prop::collection::vec(0i64..6, 1..20)) {
                let mut steps: Vec<_> = heights
                    .iter()
                    .enumerate()
                    .map(|(i, &h)| Step::new(i as i64 * 2, h))
                    .collect();
                steps.push(Step::new(heights.len() as i64 * 2, 0));

                match Skyline::from_steps(steps) {
                    Ok(s) => {
                        prop_assert!(Skyline::new(s.points().to_vec()).is_ok());
                        prop_assert!(s.is_minimal());
                        for (i, &h) in heights.iter().enumerate() {
                            prop_assert_eq!(s.height_at(i as i64 * 2 + 1), h);
                        }
                    }
                    Err(e) => prop_assert!(heights.iter().all(|&h| h == 0), "unexpected {:?}", e),
                }
            }
        }
    }
}
