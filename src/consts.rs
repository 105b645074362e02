//! Per-float-family numeric constants.
//!
//! Angle constants, guard epsilons and the minimax coefficient tables used
//! by the fast polynomial tier. Everything here is a compile-time constant
//! shared freely by any number of readers; there is no runtime
//! initialization and no teardown.

/// Immutable constants carried by each float element family.
///
/// The polynomial tables are single-precision-grade minimax fits. The fast
/// tier trades a bounded, documented precision loss for being branch-free;
/// the same tables drive both `f32` and `f64` batches.
pub trait FloatConsts: Copy {
    /// π.
    const PI: Self;
    /// 2π.
    const TAU: Self;
    /// π/2.
    const FRAC_PI_2: Self;
    /// π/4.
    const FRAC_PI_4: Self;
    /// 1/(2π), the range-reduction scale.
    const INV_TAU: Self;
    /// Machine epsilon of the element type.
    const EPSILON: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;

    /// 2^mantissa-bits. Adding and subtracting this value rounds a float
    /// to the nearest integer without a data-dependent branch; only valid
    /// for magnitudes below the constant itself.
    const ROUND_MAGIC: Self;

    /// tan(π/8), the octant-reduction threshold for the fast arctangent.
    const TAN_PI_8: Self;

    /// Cosine threshold above which slerp falls back to linear
    /// interpolation to avoid dividing by a near-zero sin Ω.
    const SLERP_LERP_THRESHOLD: Self;

    /// Divisor floor used to keep atan2 and slerp free of 0/0 lanes.
    const SAFE_DIV_FLOOR: Self;

    /// Odd minimax coefficients for sin on [-π/2, π/2], highest degree
    /// first; the series is `x * (1 + x²·(c₄ + x²·(c₃ + ...)))`.
    const SIN_COEFFS: [Self; 5];

    /// Even minimax coefficients for cos on [-π/2, π/2], highest degree
    /// first; the series is `1 + x²·(c₄ + x²·(c₃ + ...))`.
    const COS_COEFFS: [Self; 5];

    /// Odd Taylor coefficients for atan on [0, tan(π/8)], highest degree
    /// first; the series is `t * (1 + t²·(c₄ + t²·(c₃ + ...)))`.
    const ATAN_COEFFS: [Self; 5];
}

macro_rules! impl_float_consts {
    ($t:ty, $round_magic:expr) => {
        impl FloatConsts for $t {
            const PI: Self = core::f64::consts::PI as $t;
            const TAU: Self = core::f64::consts::TAU as $t;
            const FRAC_PI_2: Self = core::f64::consts::FRAC_PI_2 as $t;
            const FRAC_PI_4: Self = core::f64::consts::FRAC_PI_4 as $t;
            const INV_TAU: Self = (1.0 / core::f64::consts::TAU) as $t;
            const EPSILON: Self = <$t>::EPSILON;
            const INFINITY: Self = <$t>::INFINITY;
            const NEG_INFINITY: Self = <$t>::NEG_INFINITY;

            const ROUND_MAGIC: Self = $round_magic;

            const TAN_PI_8: Self = 0.41421356237309503 as $t;

            const SLERP_LERP_THRESHOLD: Self = 0.99999 as $t;

            const SAFE_DIV_FLOOR: Self = 1e-35 as $t;

            const SIN_COEFFS: [Self; 5] = [
                -2.3889859e-08 as $t,
                2.7525562e-06 as $t,
                -0.00019840874 as $t,
                0.0083333310 as $t,
                -0.16666667 as $t,
            ];

            const COS_COEFFS: [Self; 5] = [
                -2.6051615e-07 as $t,
                2.4760495e-05 as $t,
                -0.0013888378 as $t,
                0.041666638 as $t,
                -0.5 as $t,
            ];

            const ATAN_COEFFS: [Self; 5] = [
                (-1.0 / 11.0) as $t,
                (1.0 / 9.0) as $t,
                (-1.0 / 7.0) as $t,
                (1.0 / 5.0) as $t,
                (-1.0 / 3.0) as $t,
            ];
        }
    };
}

impl_float_consts!(f32, 8388608.0);
impl_float_consts!(f64, 4503599627370496.0);
