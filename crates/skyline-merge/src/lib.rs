//! Merge engine for skyline unions.
//!
//! Combines skyline polygons into the silhouette of their union: a linear
//! sweep merge for two skylines, and a divide-and-conquer reduction that
//! brings any number of skylines down to one in `O(log N)` merge depth.
//!
//! # Key Types
//!
//! - [`merge_skylines`] -- Union of exactly two skylines
//! - [`union_skylines`] / [`union_boxes`] -- Union of a whole list
//! - [`UnionEngine`] / [`UnionConfig`] -- Configurable (optionally parallel) reduction
//! - [`RangeRelation`] -- How two skylines' x-ranges relate

pub mod config;
pub mod pair;
pub mod range;
pub mod union;

pub use config::{UnionConfig, UnionStrategy};
pub use pair::merge_skylines;
pub use range::{classify_ranges, RangeRelation};
pub use skyline_types::{SkylineError, SkylineResult};
pub use union::{union_boxes, union_skylines, UnionEngine};
