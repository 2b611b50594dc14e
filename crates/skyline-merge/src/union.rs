//! Divide-and-conquer union of many skylines.
//!
//! The input list is split into a left half of `⌈N/2⌉` skylines and a right
//! half of `⌊N/2⌋`, each half is resolved recursively, and the two results
//! are combined with [`merge_skylines`]. The split point is fixed, so every
//! strategy builds the same reduction tree and produces the same result.

use tracing::{debug, trace};

use skyline_types::{Coordinate, Skyline, SkylineBox, SkylineResult};

use crate::config::{UnionConfig, UnionStrategy};
use crate::pair::merge_skylines;

/// Union a list of skylines into a single skyline.
///
/// - no skylines: the empty skyline;
/// - one skyline: returned unchanged;
/// - two skylines: a single [`merge_skylines`];
/// - more: split, recurse, merge.
///
/// # Errors
///
/// Propagates [`SkylineError::InvalidInput`] from the underlying merges.
///
/// [`SkylineError::InvalidInput`]: skyline_types::SkylineError::InvalidInput
pub fn union_skylines<T: Coordinate>(skylines: &[Skyline<T>]) -> SkylineResult<Skyline<T>> {
    let union = reduce(skylines)?;
    debug!(inputs = skylines.len(), points = union.len(), "union complete");
    Ok(union)
}

/// Convert boxes to skylines and union them.
pub fn union_boxes<T: Coordinate>(boxes: &[SkylineBox<T>]) -> SkylineResult<Skyline<T>> {
    union_skylines(&box_skylines(boxes)?)
}

fn box_skylines<T: Coordinate>(boxes: &[SkylineBox<T>]) -> SkylineResult<Vec<Skyline<T>>> {
    boxes.iter().map(SkylineBox::to_skyline).collect()
}

fn reduce<T: Coordinate>(skylines: &[Skyline<T>]) -> SkylineResult<Skyline<T>> {
    match skylines {
        [] => Ok(Skyline::empty()),
        [only] => Ok(only.clone()),
        [left, right] => merge_skylines(left, right),
        _ => {
            let (left, right) = split(skylines);
            let left = reduce(left)?;
            let right = reduce(right)?;
            merge_skylines(&left, &right)
        }
    }
}

fn split<T>(items: &[T]) -> (&[T], &[T]) {
    let (left, right) = items.split_at(items.len().div_ceil(2));
    trace!(left = left.len(), right = right.len(), "split union");
    (left, right)
}

/// Runs unions under a [`UnionConfig`].
#[derive(Clone, Debug, Default)]
pub struct UnionEngine {
    config: UnionConfig,
}

impl UnionEngine {
    pub fn new(config: UnionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnionConfig {
        &self.config
    }

    /// Union a list of skylines using the configured strategy.
    ///
    /// The result is identical to [`union_skylines`] for every strategy.
    pub fn union<T: Coordinate>(&self, skylines: &[Skyline<T>]) -> SkylineResult<Skyline<T>> {
        let union = match self.config.strategy {
            UnionStrategy::Sequential => reduce(skylines)?,
            UnionStrategy::Parallel => self.reduce_parallel(skylines)?,
        };
        debug!(
            inputs = skylines.len(),
            points = union.len(),
            strategy = ?self.config.strategy,
            "union complete"
        );
        Ok(union)
    }

    /// Convert boxes to skylines and union them using the configured strategy.
    pub fn union_boxes<T: Coordinate>(&self, boxes: &[SkylineBox<T>]) -> SkylineResult<Skyline<T>> {
        self.union(&box_skylines(boxes)?)
    }

    fn reduce_parallel<T: Coordinate>(&self, skylines: &[Skyline<T>]) -> SkylineResult<Skyline<T>> {
        if skylines.len() <= 2 || skylines.len() < self.config.parallel_threshold {
            return reduce(skylines);
        }
        let (left, right) = split(skylines);
        let (left, right) = rayon::join(
            || self.reduce_parallel(left),
            || self.reduce_parallel(right),
        );
        merge_skylines(&left?, &right?)
    }
}
