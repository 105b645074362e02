//! Comparisons and predicates.
//!
//! Relational operations are lane-parallel and produce a [`Mask`]; the
//! boolean reductions (`all`/`any` on the mask) consult only the low N
//! bits of the packed sign bitmask, so padding lanes can never flip a
//! verdict. NaN and Infinity are ordinary representable values here,
//! surfaced only through the explicit predicates.

use crate::batch::Batch;
use crate::element::Float;
use crate::lanes::Lanes;
use crate::mask::Mask;
use crate::reg::Register;

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    #[inline(always)]
    fn compare(self, rhs: Self, mut f: impl FnMut(T, T) -> bool) -> Mask<T, N> {
        Mask::from_lane_fn(|i| f(self.0.lane(i), rhs.0.lane(i)))
    }

    /// Lane `self < rhs`.
    #[inline(always)]
    pub fn lt(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a < b)
    }

    /// Lane `self <= rhs`.
    #[inline(always)]
    pub fn le(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a <= b)
    }

    /// Lane `self > rhs`.
    #[inline(always)]
    pub fn gt(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a > b)
    }

    /// Lane `self >= rhs`.
    #[inline(always)]
    pub fn ge(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a >= b)
    }

    /// Lane equality. For floats this is IEEE equality: NaN lanes compare
    /// unequal to themselves and `-0 == +0`.
    #[inline(always)]
    pub fn eq(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a == b)
    }

    /// Lane inequality (IEEE semantics for floats).
    #[inline(always)]
    pub fn ne(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a != b)
    }

    /// Bit-exact lane sameness: distinguishes `+0` from `-0` and treats
    /// identical NaN patterns as the same value.
    #[inline(always)]
    pub fn same_value(self, rhs: Self) -> Mask<T, N> {
        self.compare(rhs, |a, b| a.to_bits() == b.to_bits())
    }

    /// Lanes whose most significant bit is set (the sign bit for signed
    /// and float elements).
    #[inline(always)]
    pub fn sign_bits(self) -> Mask<T, N> {
        Mask::from_lane_fn(|i| self.0.lane(i).sign_bit())
    }
}

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    /// Lanes holding NaN, detected as `v != v`.
    #[inline(always)]
    pub fn is_nan(self) -> Mask<T, N> {
        self.ne(self)
    }

    /// Lanes holding positive or negative infinity.
    #[inline(always)]
    pub fn is_inf(self) -> Mask<T, N> {
        self.abs().eq(Self::splat(T::INFINITY))
    }

    /// Whether any of the first N lanes holds NaN.
    #[inline(always)]
    pub fn has_nan(self) -> bool {
        self.is_nan().any()
    }
}
