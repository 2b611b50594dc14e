use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Numeric type usable as a skyline coordinate.
///
/// Only a partial order is required of the type itself; validation rejects
/// values that are not comparable with themselves (NaN), so every validated
/// skyline is totally ordered on x.
pub trait Coordinate:
    Copy
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The baseline height.
    const ZERO: Self;

    /// Returns `true` if the value has a defined ordering.
    fn is_comparable(&self) -> bool {
        self.partial_cmp(self).is_some()
    }

    /// The larger of two values, preferring `self` on ties.
    fn max_with(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_coordinate {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Coordinate for $ty {
                const ZERO: Self = $zero;
            }
        )*
    };
}

impl_coordinate! {
    i32 => 0,
    i64 => 0,
    u32 => 0,
    u64 => 0,
    f32 => 0.0,
    f64 => 0.0,
}
