//! Scalar element contracts.
//!
//! Every lane of a register holds one of the ten supported scalar types.
//! The traits here pin down the lane-level semantics the wider operations
//! are built from: integers wrap silently, division by a zero lane yields
//! zero, and every element round-trips losslessly through its same-width
//! unsigned bit pattern.

use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::consts::FloatConsts;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Unsigned carrier for the raw bit pattern of a lane.
///
/// Mask construction, `select`, bit-exact comparison and ULP stepping all
/// operate in this domain so that float payloads (NaN bits included) are
/// never renormalized on the way through.
pub trait Bits:
    Copy
    + Eq
    + Ord
    + Debug
    + Send
    + Sync
    + 'static
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// All bits clear.
    const ZERO: Self;
    /// All bits set.
    const ONES: Self;

    /// Whether the most significant bit is set.
    fn high_bit(self) -> bool;

    /// Wrapping increment, used for stepping to the next representable float.
    fn incr(self) -> Self;

    /// Wrapping decrement.
    fn decr(self) -> Self;
}

macro_rules! impl_bits {
    ($($t:ty),*) => {$(
        impl Bits for $t {
            const ZERO: Self = 0;
            const ONES: Self = <$t>::MAX;

            #[inline(always)]
            fn high_bit(self) -> bool {
                self >> (<$t>::BITS - 1) != 0
            }

            #[inline(always)]
            fn incr(self) -> Self {
                self.wrapping_add(1)
            }

            #[inline(always)]
            fn decr(self) -> Self {
                self.wrapping_sub(1)
            }
        }
    )*};
}

impl_bits!(u8, u16, u32, u64);

/// A scalar type that can occupy a register lane.
///
/// Sealed: the enumerated set is signed/unsigned integers of 8/16/32/64
/// bits plus `f32`/`f64`. The `lane_*` methods define the exact per-lane
/// semantics of the elementwise operations.
pub trait Element:
    sealed::Sealed + Copy + PartialEq + PartialOrd + Default + Debug + Send + Sync + 'static
{
    /// Same-width unsigned bit-pattern type.
    type Bits: Bits;

    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity, used to pad divisor registers.
    const ONE: Self;
    /// Width of the lane in bits.
    const BITS: u32;

    /// Lane addition. Integers wrap silently; overflow is the caller's
    /// responsibility to bound, not a reported error.
    fn lane_add(self, rhs: Self) -> Self;
    /// Lane subtraction (wrapping for integers).
    fn lane_sub(self, rhs: Self) -> Self;
    /// Lane multiplication (wrapping for integers).
    fn lane_mul(self, rhs: Self) -> Self;
    /// Lane division. An integer divisor of zero yields zero; `MIN / -1`
    /// wraps. Floats follow IEEE 754 (Inf/NaN are ordinary values).
    fn lane_div(self, rhs: Self) -> Self;

    /// Lane minimum. For floats, returns `rhs` when either operand is NaN.
    fn lane_min(self, rhs: Self) -> Self;
    /// Lane maximum. For floats, returns `rhs` when either operand is NaN.
    fn lane_max(self, rhs: Self) -> Self;

    /// Raw bit pattern of the lane.
    fn to_bits(self) -> Self::Bits;
    /// Reconstructs a lane from a raw bit pattern, preserving it exactly.
    fn from_bits(bits: Self::Bits) -> Self;

    /// Whether the lane's most significant bit is set.
    #[inline(always)]
    fn sign_bit(self) -> bool {
        self.to_bits().high_bit()
    }
}

/// Integer refinements: shifts and saturating arithmetic.
pub trait Int: Element {
    /// Lane shift left by a uniform amount.
    fn lane_shl(self, amount: u32) -> Self;
    /// Lane shift right (logical for unsigned, arithmetic for signed).
    fn lane_shr(self, amount: u32) -> Self;
    /// Saturating addition.
    fn lane_saturating_add(self, rhs: Self) -> Self;
    /// Saturating subtraction.
    fn lane_saturating_sub(self, rhs: Self) -> Self;
}

/// Elements with a sign: negation and absolute value.
pub trait Signed: Element {
    /// Lane negation (wrapping for integers).
    fn lane_neg(self) -> Self;
    /// Lane absolute value (`MIN` stays `MIN` for integers).
    fn lane_abs(self) -> Self;
}

macro_rules! impl_int_element {
    ($($t:ty => $bits:ty),*) => {$(
        impl Element for $t {
            type Bits = $bits;

            const ZERO: Self = 0;
            const ONE: Self = 1;
            const BITS: u32 = <$t>::BITS;

            #[inline(always)]
            fn lane_add(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline(always)]
            fn lane_sub(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline(always)]
            fn lane_mul(self, rhs: Self) -> Self {
                self.wrapping_mul(rhs)
            }

            #[inline(always)]
            fn lane_div(self, rhs: Self) -> Self {
                if rhs == 0 { 0 } else { self.wrapping_div(rhs) }
            }

            #[inline(always)]
            fn lane_min(self, rhs: Self) -> Self {
                if rhs < self { rhs } else { self }
            }

            #[inline(always)]
            fn lane_max(self, rhs: Self) -> Self {
                if rhs > self { rhs } else { self }
            }

            #[inline(always)]
            fn to_bits(self) -> Self::Bits {
                self as $bits
            }

            #[inline(always)]
            fn from_bits(bits: Self::Bits) -> Self {
                bits as $t
            }
        }

        impl Int for $t {
            #[inline(always)]
            fn lane_shl(self, amount: u32) -> Self {
                self.wrapping_shl(amount)
            }

            #[inline(always)]
            fn lane_shr(self, amount: u32) -> Self {
                self.wrapping_shr(amount)
            }

            #[inline(always)]
            fn lane_saturating_add(self, rhs: Self) -> Self {
                self.saturating_add(rhs)
            }

            #[inline(always)]
            fn lane_saturating_sub(self, rhs: Self) -> Self {
                self.saturating_sub(rhs)
            }
        }
    )*};
}

impl_int_element!(
    i8 => u8, u8 => u8,
    i16 => u16, u16 => u16,
    i32 => u32, u32 => u32,
    i64 => u64, u64 => u64
);

macro_rules! impl_signed_int {
    ($($t:ty),*) => {$(
        impl Signed for $t {
            #[inline(always)]
            fn lane_neg(self) -> Self {
                self.wrapping_neg()
            }

            #[inline(always)]
            fn lane_abs(self) -> Self {
                self.wrapping_abs()
            }
        }
    )*};
}

impl_signed_int!(i8, i16, i32, i64);

/// Float refinements: the precise transcendental tier (delegated to
/// `libm`), single-rounding fused multiply-add, classification, and the
/// bit-field layout consumed by ULP stepping.
#[allow(missing_docs)]
pub trait Float: Element + Signed + FloatConsts {
    /// Sign bit of the encoding.
    const SIGN_MASK: Self::Bits;
    /// Exponent field of the encoding.
    const EXPONENT_MASK: Self::Bits;
    /// Fraction (mantissa) field of the encoding.
    const FRACTION_MASK: Self::Bits;

    /// `self * a + b` with a single rounding step. This is a numerical
    /// correctness requirement of the FMA operation family, not an
    /// optimization.
    fn mul_add(self, a: Self, b: Self) -> Self;

    fn sqrt(self) -> Self;
    fn cbrt(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    fn copysign(self, sign: Self) -> Self;

    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn powf(self, exponent: Self) -> Self;
    fn fmod(self, divisor: Self) -> Self;
    fn hypot(self, other: Self) -> Self;

    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;

    /// Widens an `f64` literal into this type. Lets generic code spell
    /// constants such as interpolation weights without per-type plumbing.
    fn from_f64(value: f64) -> Self;
}

impl Element for f32 {
    type Bits = u32;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const BITS: u32 = 32;

    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs { self } else { rhs }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs { self } else { rhs }
    }

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }
}

impl Signed for f32 {
    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_abs(self) -> Self {
        libm::fabsf(self)
    }
}

impl Float for f32 {
    const SIGN_MASK: u32 = 0x8000_0000;
    const EXPONENT_MASK: u32 = 0x7F80_0000;
    const FRACTION_MASK: u32 = 0x007F_FFFF;

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fmaf(self, a, b)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }

    #[inline(always)]
    fn cbrt(self) -> Self {
        libm::cbrtf(self)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        libm::floorf(self)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        libm::ceilf(self)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        libm::truncf(self)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysignf(self, sign)
    }

    #[inline(always)]
    fn sin(self) -> Self {
        libm::sinf(self)
    }

    #[inline(always)]
    fn cos(self) -> Self {
        libm::cosf(self)
    }

    #[inline(always)]
    fn tan(self) -> Self {
        libm::tanf(self)
    }

    #[inline(always)]
    fn asin(self) -> Self {
        libm::asinf(self)
    }

    #[inline(always)]
    fn acos(self) -> Self {
        libm::acosf(self)
    }

    #[inline(always)]
    fn atan(self) -> Self {
        libm::atanf(self)
    }

    #[inline(always)]
    fn atan2(self, other: Self) -> Self {
        libm::atan2f(self, other)
    }

    #[inline(always)]
    fn sinh(self) -> Self {
        libm::sinhf(self)
    }

    #[inline(always)]
    fn cosh(self) -> Self {
        libm::coshf(self)
    }

    #[inline(always)]
    fn tanh(self) -> Self {
        libm::tanhf(self)
    }

    #[inline(always)]
    fn asinh(self) -> Self {
        libm::asinhf(self)
    }

    #[inline(always)]
    fn acosh(self) -> Self {
        libm::acoshf(self)
    }

    #[inline(always)]
    fn atanh(self) -> Self {
        libm::atanhf(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        libm::logf(self)
    }

    #[inline(always)]
    fn log2(self) -> Self {
        libm::log2f(self)
    }

    #[inline(always)]
    fn log10(self) -> Self {
        libm::log10f(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        libm::expf(self)
    }

    #[inline(always)]
    fn exp2(self) -> Self {
        libm::exp2f(self)
    }

    #[inline(always)]
    fn powf(self, exponent: Self) -> Self {
        libm::powf(self, exponent)
    }

    #[inline(always)]
    fn fmod(self, divisor: Self) -> Self {
        libm::fmodf(self, divisor)
    }

    #[inline(always)]
    fn hypot(self, other: Self) -> Self {
        libm::hypotf(self, other)
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        self != self
    }

    #[inline(always)]
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Element for f64 {
    type Bits = u64;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const BITS: u32 = 64;

    #[inline(always)]
    fn lane_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline(always)]
    fn lane_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline(always)]
    fn lane_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline(always)]
    fn lane_div(self, rhs: Self) -> Self {
        self / rhs
    }

    #[inline(always)]
    fn lane_min(self, rhs: Self) -> Self {
        if self < rhs { self } else { rhs }
    }

    #[inline(always)]
    fn lane_max(self, rhs: Self) -> Self {
        if self > rhs { self } else { rhs }
    }

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }
}

impl Signed for f64 {
    #[inline(always)]
    fn lane_neg(self) -> Self {
        -self
    }

    #[inline(always)]
    fn lane_abs(self) -> Self {
        libm::fabs(self)
    }
}

impl Float for f64 {
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const EXPONENT_MASK: u64 = 0x7FF0_0000_0000_0000;
    const FRACTION_MASK: u64 = 0x000F_FFFF_FFFF_FFFF;

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        libm::fma(self, a, b)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }

    #[inline(always)]
    fn cbrt(self) -> Self {
        libm::cbrt(self)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        libm::floor(self)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        libm::ceil(self)
    }

    #[inline(always)]
    fn trunc(self) -> Self {
        libm::trunc(self)
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        libm::copysign(self, sign)
    }

    #[inline(always)]
    fn sin(self) -> Self {
        libm::sin(self)
    }

    #[inline(always)]
    fn cos(self) -> Self {
        libm::cos(self)
    }

    #[inline(always)]
    fn tan(self) -> Self {
        libm::tan(self)
    }

    #[inline(always)]
    fn asin(self) -> Self {
        libm::asin(self)
    }

    #[inline(always)]
    fn acos(self) -> Self {
        libm::acos(self)
    }

    #[inline(always)]
    fn atan(self) -> Self {
        libm::atan(self)
    }

    #[inline(always)]
    fn atan2(self, other: Self) -> Self {
        libm::atan2(self, other)
    }

    #[inline(always)]
    fn sinh(self) -> Self {
        libm::sinh(self)
    }

    #[inline(always)]
    fn cosh(self) -> Self {
        libm::cosh(self)
    }

    #[inline(always)]
    fn tanh(self) -> Self {
        libm::tanh(self)
    }

    #[inline(always)]
    fn asinh(self) -> Self {
        libm::asinh(self)
    }

    #[inline(always)]
    fn acosh(self) -> Self {
        libm::acosh(self)
    }

    #[inline(always)]
    fn atanh(self) -> Self {
        libm::atanh(self)
    }

    #[inline(always)]
    fn ln(self) -> Self {
        libm::log(self)
    }

    #[inline(always)]
    fn log2(self) -> Self {
        libm::log2(self)
    }

    #[inline(always)]
    fn log10(self) -> Self {
        libm::log10(self)
    }

    #[inline(always)]
    fn exp(self) -> Self {
        libm::exp(self)
    }

    #[inline(always)]
    fn exp2(self) -> Self {
        libm::exp2(self)
    }

    #[inline(always)]
    fn powf(self, exponent: Self) -> Self {
        libm::pow(self, exponent)
    }

    #[inline(always)]
    fn fmod(self, divisor: Self) -> Self {
        libm::fmod(self, divisor)
    }

    #[inline(always)]
    fn hypot(self, other: Self) -> Self {
        libm::hypot(self, other)
    }

    #[inline(always)]
    fn is_nan(self) -> bool {
        self != self
    }

    #[inline(always)]
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }

    #[inline(always)]
    fn from_f64(value: f64) -> Self {
        value
    }
}
