//! Lane masks, trimming and branch-free selection.
//!
//! A [`Mask`] rides in the same register shape as its batch; every lane is
//! either all-bits-set or all-bits-clear, never a partial pattern. Masks
//! are produced by the comparison operations and consumed by
//! [`Mask::select`], which merges per lane without a data-dependent
//! branch.

use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::batch::Batch;
use crate::element::Bits;
use crate::lanes::Lanes;
use crate::reg::Register;

/// Per-lane boolean register for `Batch<T, N>`.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Mask<T: Lanes<N>, const N: usize>(pub(crate) T::Reg);

impl<T: Lanes<N>, const N: usize> Mask<T, N> {
    /// Builds a mask lane-by-lane from a predicate over all capacity
    /// lanes.
    #[inline(always)]
    pub(crate) fn from_lane_fn(mut f: impl FnMut(usize) -> bool) -> Self {
        Self(T::Reg::from_fn(|i| {
            T::from_bits(if f(i) {
                <T::Bits as Bits>::ONES
            } else {
                <T::Bits as Bits>::ZERO
            })
        }))
    }

    /// Mask with the first N lanes set and the padding lanes clear.
    ///
    /// One fixed pattern exists per (element, N) specialization; there is
    /// no runtime branch on N.
    #[inline(always)]
    pub fn first_n() -> Self {
        Self::from_lane_fn(|i| i < N)
    }

    /// Mask with every capacity lane set.
    #[inline(always)]
    pub fn all_true() -> Self {
        Self::from_lane_fn(|_| true)
    }

    /// Mask with every capacity lane clear.
    #[inline(always)]
    pub fn all_false() -> Self {
        Self::from_lane_fn(|_| false)
    }

    /// Sign bits of the first N lanes packed into an integer bitmask.
    /// Bits beyond N are never consulted.
    #[inline(always)]
    pub fn bitmask(&self) -> u64 {
        let mut bits = 0u64;
        for i in 0..N {
            bits |= (self.0.lane(i).to_bits().high_bit() as u64) << i;
        }
        bits
    }

    /// Whether all of the first N lanes are set.
    #[inline(always)]
    pub fn all(&self) -> bool {
        self.bitmask() == low_bits(N)
    }

    /// Whether any of the first N lanes is set.
    #[inline(always)]
    pub fn any(&self) -> bool {
        self.bitmask() != 0
    }

    /// Whether none of the first N lanes is set.
    #[inline(always)]
    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Per-lane merge: lanes where the mask is set come from `if_true`,
    /// the rest from `if_false`.
    ///
    /// Implemented as `(if_true AND mask) OR (if_false ANDNOT mask)` on
    /// the raw bit patterns, so NaN payloads are carried through
    /// untouched.
    #[inline(always)]
    pub fn select(self, if_true: Batch<T, N>, if_false: Batch<T, N>) -> Batch<T, N> {
        Batch(T::Reg::from_fn(|i| {
            let m = self.0.lane(i).to_bits();
            let t = if_true.0.lane(i).to_bits();
            let f = if_false.0.lane(i).to_bits();
            T::from_bits((t & m) | (f & !m))
        }))
    }

    /// Reinterprets the mask's bit patterns as a batch.
    #[inline(always)]
    pub fn to_batch(self) -> Batch<T, N> {
        Batch(self.0)
    }
}

#[inline(always)]
fn low_bits(n: usize) -> u64 {
    if n >= 64 {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}

impl<T: Lanes<N>, const N: usize> BitAnd for Mask<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0.zip(rhs.0, |a, b| T::from_bits(a.to_bits() & b.to_bits())))
    }
}

impl<T: Lanes<N>, const N: usize> BitOr for Mask<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0.zip(rhs.0, |a, b| T::from_bits(a.to_bits() | b.to_bits())))
    }
}

impl<T: Lanes<N>, const N: usize> BitXor for Mask<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0.zip(rhs.0, |a, b| T::from_bits(a.to_bits() ^ b.to_bits())))
    }
}

impl<T: Lanes<N>, const N: usize> Not for Mask<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self(self.0.map(|a| T::from_bits(!a.to_bits())))
    }
}

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    /// The fixed first-N lane mask for this specialization.
    #[inline(always)]
    pub fn lane_mask() -> Mask<T, N> {
        Mask::first_n()
    }

    /// Zeroes the padding lanes. A no-op when N equals the register
    /// capacity.
    #[inline(always)]
    pub fn trim(self) -> Self {
        if N == T::CAPACITY {
            self
        } else {
            Self(T::Reg::from_fn(|i| {
                if i < N {
                    self.0.lane(i)
                } else {
                    T::ZERO
                }
            }))
        }
    }

    /// Replaces the padding lanes with the multiplicative identity so a
    /// following division cannot inject Infinity or NaN into them.
    #[inline(always)]
    pub fn pad_divisor(self) -> Self {
        if N == T::CAPACITY {
            self
        } else {
            Self(T::Reg::from_fn(|i| {
                if i < N {
                    self.0.lane(i)
                } else {
                    T::ONE
                }
            }))
        }
    }
}
