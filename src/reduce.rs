//! Horizontal reductions.
//!
//! Each reduction folds the first N lanes to a single value and returns it
//! broadcast across all capacity lanes, so the result chains directly into
//! further lane-parallel code.
//!
//! Contract carried over from the register-level design: `hsum` and
//! `hprod` do not trim their input. Callers are expected to keep padding
//! lanes at the operation's identity (0 for sum, 1 for product, ±Infinity
//! for min/max) — see [`Batch::trim`] and [`Batch::pad_divisor`]. The fold
//! here touches only the first N lanes, so well-formed callers observe the
//! same results either way.

use crate::batch::Batch;
use crate::element::Float;
use crate::lanes::Lanes;
use crate::reg::Register;

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    #[inline(always)]
    fn fold_first_n(self, mut f: impl FnMut(T, T) -> T) -> T {
        let mut acc = self.0.lane(0);
        for i in 1..N {
            acc = f(acc, self.0.lane(i));
        }
        acc
    }

    /// Sum of the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn hsum(self) -> Self {
        Self::splat(self.fold_first_n(T::lane_add))
    }

    /// Product of the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn hprod(self) -> Self {
        Self::splat(self.fold_first_n(T::lane_mul))
    }

    /// Minimum of the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn hmin(self) -> Self {
        Self::splat(self.fold_first_n(T::lane_min))
    }

    /// Maximum of the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn hmax(self) -> Self {
        Self::splat(self.fold_first_n(T::lane_max))
    }

    /// Dot product over the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> Self {
        (self * rhs).hsum()
    }
}

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    /// Arithmetic mean of the first N lanes, broadcast to all lanes.
    #[inline(always)]
    pub fn havg(self) -> Self {
        self.hsum() * Self::splat(T::from_f64(1.0 / N as f64))
    }
}
