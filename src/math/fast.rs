//! Fast polynomial tier.
//!
//! Minimax approximations evaluated through FMA chains, with branch-free
//! range reduction and select-driven sign/quadrant correction. Accuracy:
//! sin/cos stay within ~1e-6 absolute over [-2π, 2π]; the arctangent
//! family within ~1e-5. Callers that need the last few ULPs use the
//! precise tier instead — both tiers are part of the interface contract.

use crate::batch::Batch;
use crate::element::Float;
use crate::lanes::Lanes;

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    /// Reduces every lane into [-π, π] by subtracting the nearest
    /// multiple of 2π, without a data-dependent branch.
    #[inline(always)]
    fn reduce_angle(self) -> Self {
        let k = (self * Self::splat(T::INV_TAU)).round_nearest();
        k.fnmadd(Self::splat(T::TAU), self)
    }

    /// Reflects a [-π, π] angle into [-π/2, π/2].
    ///
    /// Returns the reflected angle and the mask of lanes that were
    /// reflected (where the cosine changes sign; the sine does not).
    #[inline(always)]
    fn reflect_half_pi(self) -> (Self, crate::mask::Mask<T, N>) {
        let signed_pi = Self::splat(T::PI).copysign(self);
        let reflect = self.abs().gt(Self::splat(T::FRAC_PI_2));
        let reflected = reflect.select(signed_pi - self, self);
        (reflected, reflect)
    }

    #[inline(always)]
    fn poly_sin(x: Self, x2: Self) -> Self {
        let mut p = Self::splat(T::SIN_COEFFS[0]);
        p = p.fmadd(x2, Self::splat(T::SIN_COEFFS[1]));
        p = p.fmadd(x2, Self::splat(T::SIN_COEFFS[2]));
        p = p.fmadd(x2, Self::splat(T::SIN_COEFFS[3]));
        p = p.fmadd(x2, Self::splat(T::SIN_COEFFS[4]));
        p = p.fmadd(x2, Self::splat(T::ONE));
        p * x
    }

    #[inline(always)]
    fn poly_cos(x2: Self) -> Self {
        let mut p = Self::splat(T::COS_COEFFS[0]);
        p = p.fmadd(x2, Self::splat(T::COS_COEFFS[1]));
        p = p.fmadd(x2, Self::splat(T::COS_COEFFS[2]));
        p = p.fmadd(x2, Self::splat(T::COS_COEFFS[3]));
        p = p.fmadd(x2, Self::splat(T::COS_COEFFS[4]));
        p.fmadd(x2, Self::splat(T::ONE))
    }

    /// Fast sine.
    #[inline(always)]
    pub fn fast_sin(self) -> Self {
        let (x, _) = self.reduce_angle().reflect_half_pi();
        Self::poly_sin(x, x * x)
    }

    /// Fast cosine.
    #[inline(always)]
    pub fn fast_cos(self) -> Self {
        let (x, reflected) = self.reduce_angle().reflect_half_pi();
        let c = Self::poly_cos(x * x);
        reflected.select(-c, c)
    }

    /// Fast sine and cosine sharing one range reduction.
    #[inline(always)]
    pub fn fast_sincos(self) -> (Self, Self) {
        let (x, reflected) = self.reduce_angle().reflect_half_pi();
        let x2 = x * x;
        let s = Self::poly_sin(x, x2);
        let c = Self::poly_cos(x2);
        (s, reflected.select(-c, c))
    }

    /// Fast tangent, computed as fast sine over fast cosine. Lanes at the
    /// poles inherit the division's Infinity/NaN behavior.
    #[inline(always)]
    pub fn fast_tan(self) -> Self {
        let (s, c) = self.fast_sincos();
        s / c
    }

    /// Arctangent of a ratio already reduced into [0, 1], with one octant
    /// fold at tan(π/8).
    #[inline(always)]
    fn atan_unit(r: Self) -> Self {
        let one = Self::splat(T::ONE);
        let fold = r.gt(Self::splat(T::TAN_PI_8));
        let num = fold.select(r - one, r);
        let den = fold.select(r + one, one);
        let t = num / den;
        let t2 = t * t;
        let mut p = Self::splat(T::ATAN_COEFFS[0]);
        p = p.fmadd(t2, Self::splat(T::ATAN_COEFFS[1]));
        p = p.fmadd(t2, Self::splat(T::ATAN_COEFFS[2]));
        p = p.fmadd(t2, Self::splat(T::ATAN_COEFFS[3]));
        p = p.fmadd(t2, Self::splat(T::ATAN_COEFFS[4]));
        p = p.fmadd(t2, one);
        let a = p * t;
        fold.select(a + Self::splat(T::FRAC_PI_4), a)
    }

    /// Fast arctangent.
    #[inline(always)]
    pub fn fast_atan(self) -> Self {
        let ax = self.abs();
        let invert = ax.gt(Self::splat(T::ONE));
        let r = invert.select(ax.recip(), ax);
        let a = Self::atan_unit(r);
        let a = invert.select(Self::splat(T::FRAC_PI_2) - a, a);
        a.copysign(self)
    }

    /// Fast four-quadrant arctangent of `self / x` (`self` is the y
    /// coordinate). Quadrants are resolved by sign-bit extraction and
    /// select, never by a data-dependent branch.
    #[inline(always)]
    pub fn fast_atan2(self, x: Self) -> Self {
        let ay = self.abs();
        let ax = x.abs();
        let v = ax.max(ay).max(Self::splat(T::SAFE_DIV_FLOOR));
        let u = ax.min(ay);
        let base = Self::atan_unit(u / v);
        let swapped = ay.gt(ax);
        let a = swapped.select(Self::splat(T::FRAC_PI_2) - base, base);
        let mirrored = x.sign_bits();
        let a = mirrored.select(Self::splat(T::PI) - a, a);
        a.copysign(self)
    }
}
