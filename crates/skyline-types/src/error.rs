use thiserror::Error;

/// Errors produced by skyline construction and merging.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SkylineError {
    /// An argument broke one of the skyline structural invariants.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] Violation),
}

/// The specific invariant an input failed.
///
/// Indices refer to positions in the offending point (or step) sequence.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("skyline has no points")]
    Empty,

    #[error("point {index} repeats the previous point")]
    RepeatedPoint { index: usize },

    #[error("segment ending at point {index} is neither horizontal nor vertical")]
    DiagonalSegment { index: usize },

    #[error("segment ending at point {index} has the same orientation as the one before it")]
    BrokenAlternation { index: usize },

    #[error("x decreases at point {index}")]
    DecreasingX { index: usize },

    #[error("point {index} lies below the baseline")]
    NegativeHeight { index: usize },

    #[error("coordinate at index {index} is not comparable")]
    Incomparable { index: usize },

    #[error("endpoint {index} is not on the baseline")]
    OffBaseline { index: usize },

    #[error("skyline does not return to the baseline at its right edge")]
    DoesNotFall,

    #[error("step {index} does not lie strictly right of the previous step")]
    UnorderedSteps { index: usize },

    #[error("box needs left < right and a positive height")]
    DegenerateBox,
}

/// Convenience alias for skyline results.
pub type SkylineResult<T> = Result<T, SkylineError>;
