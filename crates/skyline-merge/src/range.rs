//! Classification of how two skylines' x-ranges relate.

use serde::{Deserialize, Serialize};

use skyline_types::{Coordinate, Skyline};

/// The relationship between the x-ranges of two skylines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeRelation {
    /// A gap of positive width separates the ranges.
    Disjoint,
    /// One range ends exactly where the other begins.
    Touching,
    /// The ranges share some, but not all, of their extent.
    Overlapping,
    /// One range lies within the other.
    Nested,
    /// Both ranges have the same endpoints.
    Identical,
}

/// Classify the x-ranges of two skylines.
///
/// Returns `None` if either skyline is empty.
pub fn classify_ranges<T: Coordinate>(a: &Skyline<T>, b: &Skyline<T>) -> Option<RangeRelation> {
    let (a_min, a_max) = a.x_range()?;
    let (b_min, b_max) = b.x_range()?;

    let relation = if a_min == b_min && a_max == b_max {
        RangeRelation::Identical
    } else if a_max < b_min || b_max < a_min {
        RangeRelation::Disjoint
    } else if a_max == b_min || b_max == a_min {
        RangeRelation::Touching
    } else if (a_min <= b_min && b_max <= a_max) || (b_min <= a_min && a_max <= b_max) {
        RangeRelation::Nested
    } else {
        RangeRelation::Overlapping
    };
    Some(relation)
}
