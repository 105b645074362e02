//! Transcendental and special functions.
//!
//! Two first-class tiers:
//!
//! - the **precise** tier in this module delegates per lane to the
//!   platform math library (`libm`), giving the accuracy of a scalar
//!   libm call in every lane;
//! - the **fast** tier (`fast` submodule) evaluates minimax polynomials
//!   through FMA chains with branch-free range reduction, trading a bounded,
//!   documented precision loss for the removal of every data-dependent
//!   branch.
//!
//! The tiers are intentionally different; the fast tier is never a
//! drop-in replacement for precision-critical callers.

mod fast;

use crate::batch::Batch;
use crate::element::{Bits, Float};
use crate::lanes::Lanes;

macro_rules! precise_unary {
    ($($(#[$meta:meta])* $name:ident => $op:ident),* $(,)?) => {$(
        $(#[$meta])*
        #[inline(always)]
        pub fn $name(self) -> Self {
            self.map_lanes(T::$op)
        }
    )*};
}

macro_rules! precise_binary {
    ($($(#[$meta:meta])* $name:ident => $op:ident),* $(,)?) => {$(
        $(#[$meta])*
        #[inline(always)]
        pub fn $name(self, rhs: Self) -> Self {
            self.zip_lanes(rhs, T::$op)
        }
    )*};
}

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    precise_unary! {
        /// Lane sine (precise tier).
        sin => sin,
        /// Lane cosine (precise tier).
        cos => cos,
        /// Lane tangent (precise tier).
        tan => tan,
        /// Lane arcsine (precise tier).
        asin => asin,
        /// Lane arccosine (precise tier).
        acos => acos,
        /// Lane arctangent (precise tier).
        atan => atan,
        /// Lane hyperbolic sine.
        sinh => sinh,
        /// Lane hyperbolic cosine.
        cosh => cosh,
        /// Lane hyperbolic tangent.
        tanh => tanh,
        /// Lane inverse hyperbolic sine.
        asinh => asinh,
        /// Lane inverse hyperbolic cosine.
        acosh => acosh,
        /// Lane inverse hyperbolic tangent.
        atanh => atanh,
        /// Lane natural logarithm.
        ln => ln,
        /// Lane base-2 logarithm.
        log2 => log2,
        /// Lane base-10 logarithm.
        log10 => log10,
        /// Lane natural exponential.
        exp => exp,
        /// Lane base-2 exponential.
        exp2 => exp2,
        /// Lane square root.
        sqrt => sqrt,
        /// Lane cube root.
        cbrt => cbrt,
    }

    precise_binary! {
        /// Lane `self` raised to `rhs`.
        powf => powf,
        /// Lane floating-point remainder of `self / rhs`.
        fmod => fmod,
        /// Lane `sqrt(self² + rhs²)` without intermediate overflow.
        hypot => hypot,
        /// Lane four-quadrant arctangent of `self / rhs` (precise tier).
        atan2 => atan2,
    }

    /// Lane reciprocal `1 / self`.
    #[inline(always)]
    pub fn recip(self) -> Self {
        Self::splat(T::ONE) / self
    }

    /// Lane reciprocal square root `1 / sqrt(self)`.
    #[inline(always)]
    pub fn rsqrt(self) -> Self {
        self.sqrt().recip()
    }

    /// Steps every lane to the next representable value toward positive
    /// infinity, in the integer bit domain.
    ///
    /// `next_up(-0)` equals `next_up(+0)` (the smallest positive
    /// subnormal); ±Infinity and NaN are fixed points.
    #[inline(always)]
    pub fn next_up(self) -> Self {
        self.map_lanes(next_up_lane)
    }

    /// Steps every lane to the next representable value toward negative
    /// infinity; the mirror of [`Self::next_up`].
    #[inline(always)]
    pub fn next_down(self) -> Self {
        self.map_lanes(next_down_lane)
    }
}

#[inline(always)]
fn next_up_lane<T: Float>(x: T) -> T {
    let bits = x.to_bits();
    // Inf and NaN lanes do not move.
    if bits & T::EXPONENT_MASK == T::EXPONENT_MASK {
        return x;
    }
    let stepped = if bits & T::SIGN_MASK != <T::Bits as Bits>::ZERO {
        if bits & (T::EXPONENT_MASK | T::FRACTION_MASK) == <T::Bits as Bits>::ZERO {
            // -0 steps to the smallest positive subnormal, same as +0.
            <T::Bits as Bits>::ZERO.incr()
        } else {
            bits.decr()
        }
    } else {
        bits.incr()
    };
    T::from_bits(stepped)
}

#[inline(always)]
fn next_down_lane<T: Float>(x: T) -> T {
    let bits = x.to_bits();
    if bits & T::EXPONENT_MASK == T::EXPONENT_MASK {
        return x;
    }
    let stepped = if bits & T::SIGN_MASK != <T::Bits as Bits>::ZERO {
        bits.incr()
    } else if bits & (T::EXPONENT_MASK | T::FRACTION_MASK) == <T::Bits as Bits>::ZERO {
        // +0 steps to the smallest negative subnormal, same as -0.
        T::SIGN_MASK.incr()
    } else {
        bits.decr()
    };
    T::from_bits(stepped)
}
