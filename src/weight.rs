/*!
# Weights

Edge weights are any totally-ordered `Copy` type implementing [`Weight`].
Each graph carries a pair of sentinels ([`WeightBounds`]):

- `min` is the identity for distance accumulation and the initial key of a search source,
- `max` marks both "no edge" in the edge matrix and "unreachable" during a search.

All accumulation goes through [`Weight::saturating_add_upto`] which never exceeds `max`,
so a long path can never wrap around and suddenly look cheap.
*/

use std::fmt::Debug;

use num::{Bounded, Zero};

/// A weight that can be stored in a graph and accumulated along paths.
///
/// Weights must be non-negative; comparison uses `PartialOrd` so that floating point types are
/// supported, but `NaN` weights are not.
pub trait Weight: Copy + PartialOrd + Debug {
    /// Returns `self + other`, or `limit` if the sum reaches or exceeds `limit` (or overflows).
    fn saturating_add_upto(self, other: Self, limit: Self) -> Self;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn saturating_add_upto(self, other: Self, limit: Self) -> Self {
                    match self.checked_add(other) {
                        Some(sum) if sum < limit => sum,
                        _ => limit,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                #[inline]
                fn saturating_add_upto(self, other: Self, limit: Self) -> Self {
                    let sum = self + other;
                    if sum < limit { sum } else { limit }
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_weight!(f32, f64);

/// The two sentinels of a weighted graph.
///
/// `WeightBounds` follows the *Builder* / *Setter* pattern:
/// ```
/// use wgraphs::prelude::*;
///
/// let bounds = WeightBounds::<u32>::default().max(1000);
/// assert_eq!(bounds.min_value(), 0);
/// assert_eq!(bounds.max_value(), 1000);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightBounds<W> {
    min: W,
    max: W,
}

impl<W: Weight> WeightBounds<W> {
    /// Creates bounds with distance identity `min` and unreachable sentinel `max`.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn new(min: W, max: W) -> Self {
        assert!(min < max, "min sentinel must be smaller than max sentinel");
        Self { min, max }
    }

    /// Sets the distance identity.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn set_min(&mut self, min: W) {
        assert!(min < self.max, "min sentinel must be smaller than max sentinel");
        self.min = min;
    }

    /// Sets the distance identity.
    pub fn min(mut self, min: W) -> Self {
        self.set_min(min);
        self
    }

    /// Sets the "no edge" / "unreachable" sentinel.
    ///
    /// # Panics
    /// Panics if `min >= max`.
    pub fn set_max(&mut self, max: W) {
        assert!(self.min < max, "min sentinel must be smaller than max sentinel");
        self.max = max;
    }

    /// Sets the "no edge" / "unreachable" sentinel.
    pub fn max(mut self, max: W) -> Self {
        self.set_max(max);
        self
    }

    /// Returns the distance identity
    #[inline]
    pub fn min_value(&self) -> W {
        self.min
    }

    /// Returns the "no edge" / "unreachable" sentinel
    #[inline]
    pub fn max_value(&self) -> W {
        self.max
    }

    /// Returns *true* if `w` is the "no edge" / "unreachable" sentinel (or beyond it)
    #[inline]
    pub fn is_unreachable(&self, w: W) -> bool {
        w >= self.max
    }

    /// Returns *true* if `w` can be stored as an edge weight, i.e. `min <= w < max`
    #[inline]
    pub fn admits(&self, w: W) -> bool {
        self.min <= w && w < self.max
    }

    /// Accumulates `a + b` without ever exceeding the `max` sentinel
    #[inline]
    pub fn accumulate(&self, a: W, b: W) -> W {
        a.saturating_add_upto(b, self.max)
    }
}

impl<W> Default for WeightBounds<W>
where
    W: Weight + Zero + Bounded,
{
    fn default() -> Self {
        Self {
            min: W::zero(),
            max: W::max_value(),
        }
    }
}
