//! Hardware register tiers.
//!
//! Two fixed-width lane containers model the narrow (128-bit) and wide
//! (256-bit) register tiers. Lanes are stored as a fixed-size array with
//! the tier's alignment; every operation above this module is expressed
//! through the tiny [`Register`] primitive set, monomorphizes flat, and
//! lowers onto the native vector ISA.
//!
//! Registers may hold more lanes than the logical length N. The invariant
//! maintained by every constructor in this crate: lanes beyond N are
//! populated only by explicit deterministic fill (zero, or the
//! multiplicative identity for divisor contexts), never by uninitialized
//! memory.

use crate::element::Element;

/// Primitive lane access for a fixed-capacity register.
///
/// Deliberately minimal: `from_fn`/`lane`/`map`/`zip` are total and every
/// higher operation is built from them, so the per-(element, N)
/// specialization matrix needs exactly one generic body per operation.
pub trait Register<T: Element>: Copy + Send + Sync + 'static {
    /// Number of lanes the register holds.
    const CAPACITY: usize;

    /// Register with every lane set to `value`.
    fn splat(value: T) -> Self;

    /// Register built lane-by-lane from `f(lane_index)`.
    fn from_fn(f: impl FnMut(usize) -> T) -> Self;

    /// Reads lane `i`. Callers index with compile-time constants; the
    /// bound `i < CAPACITY` is checked in debug builds.
    fn lane(&self, i: usize) -> T;

    /// Lane-parallel unary map.
    fn map(self, f: impl FnMut(T) -> T) -> Self;

    /// Lane-parallel binary combine.
    fn zip(self, rhs: Self, f: impl FnMut(T, T) -> T) -> Self;
}

macro_rules! impl_register {
    ($name:ident) => {
        impl<T: Element, const CAP: usize> Register<T> for $name<T, CAP> {
            const CAPACITY: usize = CAP;

            #[inline(always)]
            fn splat(value: T) -> Self {
                Self([value; CAP])
            }

            #[inline(always)]
            fn from_fn(f: impl FnMut(usize) -> T) -> Self {
                Self(core::array::from_fn(f))
            }

            #[inline(always)]
            fn lane(&self, i: usize) -> T {
                debug_assert!(i < CAP, "lane index {} out of capacity {}", i, CAP);
                self.0[i]
            }

            #[inline(always)]
            fn map(self, mut f: impl FnMut(T) -> T) -> Self {
                Self(core::array::from_fn(|i| f(self.0[i])))
            }

            #[inline(always)]
            fn zip(self, rhs: Self, mut f: impl FnMut(T, T) -> T) -> Self {
                Self(core::array::from_fn(|i| f(self.0[i], rhs.0[i])))
            }
        }
    };
}

/// Narrow 128-bit register tier.
#[derive(Copy, Clone)]
#[repr(C, align(16))]
pub struct V128<T: Element, const CAP: usize>(pub(crate) [T; CAP]);

/// Wide 256-bit register tier.
#[derive(Copy, Clone)]
#[repr(C, align(32))]
pub struct V256<T: Element, const CAP: usize>(pub(crate) [T; CAP]);

impl_register!(V128);
impl_register!(V256);
