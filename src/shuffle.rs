//! Compile-time lane reassembly.
//!
//! A permutation descriptor is an `[usize; N]` of per-output-lane source
//! indices. For the two-source [`Batch::shuffle2`], an index below
//! `CAPACITY` selects that lane of the first source and an index at or
//! above it selects `index - CAPACITY` from the second. Descriptors are
//! compile-time constants at every call site; after inlining, the
//! frequently used patterns (identity, pure second operand, low/high
//! interleaves) collapse to their dedicated fast paths and the general
//! case folds to a fixed lane gather.
//!
//! Output lanes beyond N are zeroed, re-establishing the padding
//! invariant for downstream consumers.

use crate::batch::Batch;
use crate::lanes::Lanes;
use crate::reg::Register;

#[inline(always)]
fn identity<const N: usize>() -> [usize; N] {
    core::array::from_fn(|i| i)
}

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    /// Single-source lane reassembly: output lane i takes `self` lane
    /// `index[i]` (`index[i] < CAPACITY`).
    #[inline(always)]
    pub fn swizzle(self, index: [usize; N]) -> Self {
        if index == identity::<N>() {
            return self.trim();
        }
        Self(T::Reg::from_fn(|i| {
            if i < N {
                debug_assert!(index[i] < T::CAPACITY, "swizzle index out of capacity");
                self.0.lane(index[i])
            } else {
                T::ZERO
            }
        }))
    }

    /// Two-source lane reassembly with the capacity-offset convention.
    #[inline(always)]
    pub fn shuffle2(self, other: Self, index: [usize; N]) -> Self {
        let cap = T::CAPACITY;
        let half = cap / 2;
        if index == identity::<N>() {
            return self.trim();
        }
        if index == core::array::from_fn(|i| cap + i) {
            return other.trim();
        }
        if index == core::array::from_fn(|i| if i % 2 == 0 { i / 2 } else { cap + i / 2 }) {
            return self.interleave_low(other);
        }
        let high = |i: usize| if i % 2 == 0 { half + i / 2 } else { cap + half + i / 2 };
        if index == core::array::from_fn(high) {
            return self.interleave_high(other);
        }
        Self(T::Reg::from_fn(|i| {
            if i < N {
                let src = index[i];
                debug_assert!(src < 2 * cap, "shuffle index out of combined capacity");
                if src < cap {
                    self.0.lane(src)
                } else {
                    other.0.lane(src - cap)
                }
            } else {
                T::ZERO
            }
        }))
    }

    /// Interleaves the low capacity halves of the two sources:
    /// `a0 b0 a1 b1 ...` over the first N output lanes; lanes beyond N
    /// are zeroed.
    #[inline(always)]
    pub fn interleave_low(self, other: Self) -> Self {
        Self(T::Reg::from_fn(|i| {
            if i < N {
                let lane = i / 2;
                if i % 2 == 0 {
                    self.0.lane(lane)
                } else {
                    other.0.lane(lane)
                }
            } else {
                T::ZERO
            }
        }))
    }

    /// Interleaves the high capacity halves of the two sources; lanes
    /// beyond N are zeroed.
    #[inline(always)]
    pub fn interleave_high(self, other: Self) -> Self {
        let half = T::CAPACITY / 2;
        Self(T::Reg::from_fn(|i| {
            if i < N {
                let lane = half + i / 2;
                if i % 2 == 0 {
                    self.0.lane(lane)
                } else {
                    other.0.lane(lane)
                }
            } else {
                T::ZERO
            }
        }))
    }

    /// The first N lanes in reverse order.
    #[inline(always)]
    pub fn reverse(self) -> Self {
        Self(T::Reg::from_fn(|i| {
            if i < N {
                self.0.lane(N - 1 - i)
            } else {
                T::ZERO
            }
        }))
    }

    /// Broadcasts lane `I` to all capacity lanes. Out-of-range indices
    /// are rejected at compile time.
    #[inline(always)]
    pub fn at<const I: usize>(self) -> Self {
        const {
            assert!(I < N, "broadcast lane index out of range");
        }
        self.broadcast_lane(I)
    }

    /// Extracts lane `I` as a scalar. Out-of-range indices are rejected
    /// at compile time.
    #[inline(always)]
    pub fn extract<const I: usize>(self) -> T {
        const {
            assert!(I < N, "extract lane index out of range");
        }
        self.0.lane(I)
    }
}
