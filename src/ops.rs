//! Elementwise arithmetic and bitwise operations.
//!
//! All operations are lane-parallel over the full register capacity.
//! Integer arithmetic wraps silently on overflow; bounding inputs is the
//! caller's responsibility, not a reported error. Scalar right-hand sides
//! broadcast to every capacity lane before the elementwise op.

use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use crate::batch::Batch;
use crate::element::{Float, Int, Signed};
use crate::lanes::Lanes;
use crate::reg::Register;

impl<T: Lanes<N>, const N: usize> Add for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_add)
    }
}

impl<T: Lanes<N>, const N: usize> Sub for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_sub)
    }
}

impl<T: Lanes<N>, const N: usize> Mul for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_mul)
    }
}

impl<T: Lanes<N>, const N: usize> Div for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_div)
    }
}

// Scalar-broadcast overloads. The scalar covers all capacity lanes, not
// merely the first N.

impl<T: Lanes<N>, const N: usize> Add<T> for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: T) -> Self {
        self + Self::splat(rhs)
    }
}

impl<T: Lanes<N>, const N: usize> Sub<T> for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: T) -> Self {
        self - Self::splat(rhs)
    }
}

impl<T: Lanes<N>, const N: usize> Mul<T> for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: T) -> Self {
        self * Self::splat(rhs)
    }
}

impl<T: Lanes<N>, const N: usize> Div<T> for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: T) -> Self {
        self / Self::splat(rhs)
    }
}

// Bitwise operations act on the raw lane bit patterns; float lanes pass
// through unrenormalized.

impl<T: Lanes<N>, const N: usize> BitAnd for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, |a, b| T::from_bits(a.to_bits() & b.to_bits()))
    }
}

impl<T: Lanes<N>, const N: usize> BitOr for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, |a, b| T::from_bits(a.to_bits() | b.to_bits()))
    }
}

impl<T: Lanes<N>, const N: usize> BitXor for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, |a, b| T::from_bits(a.to_bits() ^ b.to_bits()))
    }
}

impl<T: Lanes<N>, const N: usize> Not for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        self.map_lanes(|a| T::from_bits(!a.to_bits()))
    }
}

impl<T: Signed + Lanes<N>, const N: usize> Neg for Batch<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map_lanes(T::lane_neg)
    }
}

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    /// `self AND NOT rhs` on the raw lane bit patterns.
    #[inline(always)]
    pub fn andnot(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, |a, b| T::from_bits(a.to_bits() & !b.to_bits()))
    }

    /// Lane minimum.
    #[inline(always)]
    pub fn min(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_min)
    }

    /// Lane maximum.
    #[inline(always)]
    pub fn max(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_max)
    }

    /// Clamps every lane into `[lo, hi]`.
    #[inline(always)]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

impl<T: Signed + Lanes<N>, const N: usize> Batch<T, N> {
    /// Lane absolute value.
    #[inline(always)]
    pub fn abs(self) -> Self {
        self.map_lanes(T::lane_abs)
    }
}

impl<T: Int + Lanes<N>, const N: usize> Batch<T, N> {
    /// Shifts every lane left by a uniform amount.
    #[inline(always)]
    pub fn shl(self, amount: u32) -> Self {
        self.map_lanes(|a| a.lane_shl(amount))
    }

    /// Shifts every lane right by a uniform amount (logical for unsigned
    /// elements, arithmetic for signed).
    #[inline(always)]
    pub fn shr(self, amount: u32) -> Self {
        self.map_lanes(|a| a.lane_shr(amount))
    }

    /// Lane saturating addition.
    #[inline(always)]
    pub fn saturating_add(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_saturating_add)
    }

    /// Lane saturating subtraction.
    #[inline(always)]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        self.zip_lanes(rhs, T::lane_saturating_sub)
    }
}

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    /// Fused `self * b + c`, one rounding step per lane.
    #[inline(always)]
    pub fn fmadd(self, b: Self, c: Self) -> Self {
        self.zip3_lanes(b, c, |a, b, c| a.mul_add(b, c))
    }

    /// Fused `self * b - c`.
    #[inline(always)]
    pub fn fmsub(self, b: Self, c: Self) -> Self {
        self.zip3_lanes(b, c, |a, b, c| a.mul_add(b, c.lane_neg()))
    }

    /// Fused `-(self * b) + c`.
    #[inline(always)]
    pub fn fnmadd(self, b: Self, c: Self) -> Self {
        self.zip3_lanes(b, c, |a, b, c| a.lane_neg().mul_add(b, c))
    }

    /// Fused `-(self * b) - c`.
    #[inline(always)]
    pub fn fnmsub(self, b: Self, c: Self) -> Self {
        self.zip3_lanes(b, c, |a, b, c| a.lane_neg().mul_add(b, c.lane_neg()))
    }

    /// Fused multiply with alternating combine: even lanes compute
    /// `self * b - c`, odd lanes `self * b + c`.
    #[inline(always)]
    pub fn fmaddsub(self, b: Self, c: Self) -> Self {
        Self(T::Reg::from_fn(|i| {
            let ci = c.0.lane(i);
            let ci = if i % 2 == 0 { ci.lane_neg() } else { ci };
            self.0.lane(i).mul_add(b.0.lane(i), ci)
        }))
    }

    /// Fused multiply with alternating combine: even lanes compute
    /// `self * b + c`, odd lanes `self * b - c`.
    #[inline(always)]
    pub fn fmsubadd(self, b: Self, c: Self) -> Self {
        Self(T::Reg::from_fn(|i| {
            let ci = c.0.lane(i);
            let ci = if i % 2 == 0 { ci } else { ci.lane_neg() };
            self.0.lane(i).mul_add(b.0.lane(i), ci)
        }))
    }

    /// Alternating add/subtract: even lanes `self - rhs`, odd lanes
    /// `self + rhs`.
    #[inline(always)]
    pub fn addsub(self, rhs: Self) -> Self {
        Self(T::Reg::from_fn(|i| {
            let a = self.0.lane(i);
            let b = rhs.0.lane(i);
            if i % 2 == 0 {
                a.lane_sub(b)
            } else {
                a.lane_add(b)
            }
        }))
    }

    /// Per-lane copysign: magnitude of `self`, sign of `sign`.
    #[inline(always)]
    pub fn copysign(self, sign: Self) -> Self {
        self.zip_lanes(sign, T::copysign)
    }

    /// Largest integer-valued float at or below each lane.
    #[inline(always)]
    pub fn floor(self) -> Self {
        self.map_lanes(T::floor)
    }

    /// Smallest integer-valued float at or above each lane.
    #[inline(always)]
    pub fn ceil(self) -> Self {
        self.map_lanes(T::ceil)
    }

    /// Each lane rounded toward zero.
    #[inline(always)]
    pub fn trunc(self) -> Self {
        self.map_lanes(T::trunc)
    }

    /// Branch-free round-to-nearest-even via the add-magic-subtract-magic
    /// trick; lanes already too large to carry a fraction pass through.
    #[inline(always)]
    pub fn round_nearest(self) -> Self {
        let magic = Self::splat(T::ROUND_MAGIC);
        let signed_magic = magic.copysign(self);
        let rounded = (self + signed_magic) - signed_magic;
        let already_integral = self.abs().ge(magic);
        already_integral.select(self, rounded)
    }

    /// Linear interpolation `self + (rhs - self) * t`, fused.
    #[inline(always)]
    pub fn lerp(self, rhs: Self, t: Self) -> Self {
        (rhs - self).fmadd(t, self)
    }
}
