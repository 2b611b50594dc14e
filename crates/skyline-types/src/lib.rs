//! Foundation types for skyline unions.
//!
//! This crate provides the geometric value types shared by the merge engine
//! and the command-line tool. Every other skyline crate depends on
//! `skyline-types`.
//!
//! # Key Types
//!
//! - [`Coordinate`] -- Numeric types usable as skyline coordinates
//! - [`Point`] -- An immutable `(x, y)` corner
//! - [`Step`] -- A breakpoint of a height profile
//! - [`Skyline`] -- A validated rectilinear step polygon on the baseline
//! - [`SkylineBox`] -- A single rectangle, convertible to a four-point skyline
//! - [`SkylineError`] / [`Violation`] -- The invalid-input error and its cause

pub mod boxes;
pub mod coordinate;
pub mod error;
pub mod point;
pub mod skyline;

pub use boxes::SkylineBox;
pub use coordinate::Coordinate;
pub use error::{SkylineError, SkylineResult, Violation};
pub use point::{Point, Step};
pub use skyline::Skyline;
