//! Pairwise merge: the union of exactly two skylines.
//!
//! Both inputs are reduced to their breakpoints and swept left to right.
//! Each breakpoint is classified as belonging to the left input, the right
//! input, or both (same x); the sweep tracks the current height of each side
//! and emits the maximum at every breakpoint. [`Skyline::from_steps`] then
//! drops the breakpoints where the maximum does not change, along with any
//! baseline runs the inputs opened or closed with.

use std::cmp::Ordering;

use tracing::debug;

use skyline_types::{Coordinate, Point, Skyline, SkylineError, SkylineResult, Step, Violation};

use crate::range::{classify_ranges, RangeRelation};

/// Which input(s) the next breakpoint of the sweep comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
    Both,
}

impl Side {
    fn classify<T: Coordinate>(left: Option<&Step<T>>, right: Option<&Step<T>>) -> Option<Self> {
        match (left, right) {
            (None, None) => None,
            (Some(_), None) => Some(Self::Left),
            (None, Some(_)) => Some(Self::Right),
            (Some(l), Some(r)) => Some(match l.x.partial_cmp(&r.x) {
                Some(Ordering::Less) => Self::Left,
                Some(Ordering::Greater) => Self::Right,
                // Validated coordinates always compare.
                _ => Self::Both,
            }),
        }
    }

    fn takes_left(self) -> bool {
        matches!(self, Self::Left | Self::Both)
    }

    fn takes_right(self) -> bool {
        matches!(self, Self::Right | Self::Both)
    }
}

/// Merge two skylines into the skyline of their union.
///
/// The result's height at every x is the maximum of the two inputs' heights,
/// expressed with the minimal set of points. Inputs may be disjoint,
/// touching, overlapping, nested or identical.
///
/// # Errors
///
/// Returns [`SkylineError::InvalidInput`] if either skyline is empty.
///
/// [`SkylineError::InvalidInput`]: skyline_types::SkylineError::InvalidInput
pub fn merge_skylines<T: Coordinate>(
    left: &Skyline<T>,
    right: &Skyline<T>,
) -> SkylineResult<Skyline<T>> {
    let relation = classify_ranges(left, right).ok_or(Violation::Empty)?;

    let steps = match relation {
        RangeRelation::Disjoint => concatenate(left, right),
        _ => sweep(left, right),
    };
    let merged = finish(steps, left, right)?;

    debug!(
        left = left.len(),
        right = right.len(),
        merged = merged.len(),
        ?relation,
        "merged skylines"
    );
    Ok(merged)
}

/// Breakpoints of two skylines separated by a baseline gap, leftmost first.
fn concatenate<T: Coordinate>(a: &Skyline<T>, b: &Skyline<T>) -> Vec<Step<T>> {
    let (first, second) = match (a.x_range(), b.x_range()) {
        (Some((a_min, _)), Some((b_min, _))) if b_min < a_min => (b, a),
        _ => (a, b),
    };
    first.steps().chain(second.steps()).collect()
}

fn sweep<T: Coordinate>(left: &Skyline<T>, right: &Skyline<T>) -> Vec<Step<T>> {
    let mut left_steps = left.steps().peekable();
    let mut right_steps = right.steps().peekable();
    let mut left_height = T::ZERO;
    let mut right_height = T::ZERO;
    let mut merged = Vec::with_capacity((left.len() + right.len()) / 2);

    while let Some(side) = Side::classify(left_steps.peek(), right_steps.peek()) {
        let mut x = None;
        if side.takes_left() {
            if let Some(step) = left_steps.next() {
                left_height = step.height;
                x = Some(step.x);
            }
        }
        if side.takes_right() {
            if let Some(step) = right_steps.next() {
                right_height = step.height;
                x = Some(step.x);
            }
        }
        if let Some(x) = x {
            merged.push(Step::new(x, left_height.max_with(right_height)));
        }
    }

    merged
}

/// Collapse merged breakpoints into the minimal skyline.
///
/// When neither input ever leaves the baseline there is nothing to collapse
/// into; the result is then the flat run spanning both inputs.
fn finish<T: Coordinate>(
    steps: Vec<Step<T>>,
    left: &Skyline<T>,
    right: &Skyline<T>,
) -> SkylineResult<Skyline<T>> {
    match Skyline::from_steps(steps) {
        Err(SkylineError::InvalidInput(Violation::Empty)) => flat_span(left, right),
        result => result,
    }
}

fn flat_span<T: Coordinate>(left: &Skyline<T>, right: &Skyline<T>) -> SkylineResult<Skyline<T>> {
    let ((l_min, l_max), (r_min, r_max)) = left
        .x_range()
        .zip(right.x_range())
        .ok_or(Violation::Empty)?;
    let min = if r_min < l_min { r_min } else { l_min };
    let max = l_max.max_with(r_max);
    let points = if min == max {
        vec![Point::on_baseline(min)]
    } else {
        vec![Point::on_baseline(min), Point::on_baseline(max)]
    };
    Skyline::new(points)
}
