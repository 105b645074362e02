//! Width/capacity resolver.
//!
//! Maps an (element type, logical length N) pair to the narrowest adequate
//! register tier: the narrow tier when N fits its native lane count,
//! otherwise the wide tier with capacity rounded up to the wide lane
//! multiple. Every decision here is a compile-time constant baked into the
//! trait impl for that exact pair; no runtime branch on N exists anywhere
//! in the crate.

use crate::element::Element;
use crate::reg::{Register, V128, V256};

/// Resolves a logical length `N` for an element type.
///
/// Implemented only for the enumerated (element, N) matrix below; an
/// unsupported pair fails to compile. `CAPACITY >= N` always holds, and
/// `ALIGN` is the alignment contract of the aligned load/store path.
pub trait Lanes<const N: usize>: Element {
    /// The resolved register tier.
    type Reg: Register<Self>;
    /// Lane capacity of the resolved register.
    const CAPACITY: usize;
    /// Required byte alignment for the aligned memory paths.
    const ALIGN: usize;
}

macro_rules! lane_matrix {
    ($t:ty : narrow($ncap:literal) = [$($n:literal)*], wide($wcap:literal) = [$($w:literal)*]) => {
        $(
            impl Lanes<$n> for $t {
                type Reg = V128<$t, $ncap>;
                const CAPACITY: usize = $ncap;
                const ALIGN: usize = 16;
            }
        )*
        $(
            impl Lanes<$w> for $t {
                type Reg = V256<$t, $wcap>;
                const CAPACITY: usize = $wcap;
                const ALIGN: usize = 32;
            }
        )*
    };
}

lane_matrix!(i8 : narrow(16) = [1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16],
                  wide(32) = [17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32]);
lane_matrix!(u8 : narrow(16) = [1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16],
                  wide(32) = [17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32]);

lane_matrix!(i16 : narrow(8) = [1 2 3 4 5 6 7 8],
                   wide(16) = [9 10 11 12 13 14 15 16]);
lane_matrix!(u16 : narrow(8) = [1 2 3 4 5 6 7 8],
                   wide(16) = [9 10 11 12 13 14 15 16]);

lane_matrix!(i32 : narrow(4) = [1 2 3 4], wide(8) = [5 6 7 8]);
lane_matrix!(u32 : narrow(4) = [1 2 3 4], wide(8) = [5 6 7 8]);

lane_matrix!(i64 : narrow(2) = [1 2], wide(4) = [3 4]);
lane_matrix!(u64 : narrow(2) = [1 2], wide(4) = [3 4]);

lane_matrix!(f32 : narrow(4) = [1 2 3 4], wide(8) = [5 6 7 8]);
lane_matrix!(f64 : narrow(2) = [1 2], wide(4) = [3 4]);
