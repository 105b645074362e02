//! The logical vector type.
//!
//! `Batch<T, N>` is N meaningful lanes of `T` riding in the narrowest
//! adequate register tier. The type is the instruction selector: every
//! supported (element, N) pair is its own monomorphization with its own
//! capacity and alignment, resolved entirely at compile time.
//!
//! Memory boundary rules: every load reads exactly N contiguous elements
//! and every store writes exactly N contiguous elements, even though the
//! backing register holds `CAPACITY >= N` lanes. Padding lanes are only
//! ever filled deterministically (zero by default, the multiplicative
//! identity via the divisor constructors).

use core::fmt;

use crate::lanes::Lanes;
use crate::reg::Register;

/// An N-lane logical vector of `T` backed by a fixed-width register.
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Batch<T: Lanes<N>, const N: usize>(pub(crate) T::Reg);

impl<T: Lanes<N>, const N: usize> Batch<T, N> {
    /// Lane capacity of the resolved register tier (`>= N`).
    pub const CAPACITY: usize = T::CAPACITY;

    /// Byte alignment contract of the aligned load/store path.
    pub const ALIGN: usize = T::ALIGN;

    /// Number of meaningful lanes.
    pub const LEN: usize = N;

    /// Batch with every lane (padding included) set to `value`.
    ///
    /// Scalar broadcasts deliberately cover all capacity lanes, not just
    /// the first N, so broadcast operands never reintroduce junk padding.
    #[inline(always)]
    pub fn splat(value: T) -> Self {
        Self(T::Reg::splat(value))
    }

    /// Batch with all lanes zero.
    #[inline(always)]
    pub fn zero() -> Self {
        Self(T::Reg::splat(T::ZERO))
    }

    /// Builds a batch from exactly N elements; padding lanes are zeroed.
    ///
    /// This is the construct-from-ordered-list factory: lane i gets
    /// `values[i]`.
    #[inline(always)]
    pub fn from_array(values: [T; N]) -> Self {
        Self(T::Reg::from_fn(|i| if i < N { values[i] } else { T::ZERO }))
    }

    /// Builds a batch whose first N lanes are `value` and whose padding
    /// lanes hold the multiplicative identity, so a following division
    /// cannot inject Infinity or NaN into the padding.
    #[inline(always)]
    pub fn fill_divisor(value: T) -> Self {
        Self(T::Reg::from_fn(|i| if i < N { value } else { T::ONE }))
    }

    /// Reads the first N elements of `src`; padding lanes are zeroed.
    ///
    /// # Panics
    /// If `src.len() < N`.
    #[inline(always)]
    pub fn from_slice(src: &[T]) -> Self {
        assert!(src.len() >= N, "source slice shorter than {} lanes", N);
        Self(T::Reg::from_fn(|i| if i < N { src[i] } else { T::ZERO }))
    }

    /// Reads exactly N contiguous elements from an aligned pointer.
    /// Padding lanes are zeroed; memory past element N-1 is never read.
    ///
    /// # Safety
    /// `src` must be valid for reads of N elements and aligned to
    /// [`Self::ALIGN`]. A misaligned pointer is undefined behavior, not a
    /// reported error.
    #[inline(always)]
    pub unsafe fn load(src: *const T) -> Self {
        debug_assert!(
            src as usize % T::ALIGN == 0,
            "aligned load requires {}-byte alignment",
            T::ALIGN
        );
        Self(T::Reg::from_fn(|i| {
            if i < N {
                // SAFETY: caller guarantees N readable elements.
                unsafe { src.add(i).read() }
            } else {
                T::ZERO
            }
        }))
    }

    /// [`Self::load`] without the alignment precondition.
    ///
    /// # Safety
    /// `src` must be valid for reads of N elements.
    #[inline(always)]
    pub unsafe fn load_unaligned(src: *const T) -> Self {
        Self(T::Reg::from_fn(|i| {
            if i < N {
                // SAFETY: caller guarantees N readable elements.
                unsafe { src.add(i).read_unaligned() }
            } else {
                T::ZERO
            }
        }))
    }

    /// Writes exactly N contiguous elements through an aligned pointer.
    /// Memory past element N-1 of the destination is never written.
    ///
    /// # Safety
    /// `dst` must be valid for writes of N elements and aligned to
    /// [`Self::ALIGN`].
    #[inline(always)]
    pub unsafe fn store(self, dst: *mut T) {
        debug_assert!(
            dst as usize % T::ALIGN == 0,
            "aligned store requires {}-byte alignment",
            T::ALIGN
        );
        for i in 0..N {
            // SAFETY: caller guarantees N writable elements.
            unsafe { dst.add(i).write(self.0.lane(i)) };
        }
    }

    /// [`Self::store`] without the alignment precondition.
    ///
    /// # Safety
    /// `dst` must be valid for writes of N elements.
    #[inline(always)]
    pub unsafe fn store_unaligned(self, dst: *mut T) {
        for i in 0..N {
            // SAFETY: caller guarantees N writable elements.
            unsafe { dst.add(i).write_unaligned(self.0.lane(i)) };
        }
    }

    /// Writes the first N lanes into the front of `dst`, leaving the rest
    /// of the slice untouched.
    ///
    /// # Panics
    /// If `dst.len() < N`.
    #[inline(always)]
    pub fn write_to_slice(self, dst: &mut [T]) {
        assert!(dst.len() >= N, "destination slice shorter than {} lanes", N);
        for i in 0..N {
            dst[i] = self.0.lane(i);
        }
    }

    /// The first N lanes as an array. Shares the N-bounded-write
    /// guarantee of the store family.
    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        core::array::from_fn(|i| self.0.lane(i))
    }

    /// The lane at the lowest position.
    #[inline(always)]
    pub fn first(self) -> T {
        self.0.lane(0)
    }

    /// Broadcasts lane `i` (a compile-time constant at every call site in
    /// this crate) to all capacity lanes.
    #[inline(always)]
    pub(crate) fn broadcast_lane(self, i: usize) -> Self {
        Self(T::Reg::splat(self.0.lane(i)))
    }

    /// Lane-parallel unary map over all capacity lanes.
    #[inline(always)]
    pub(crate) fn map_lanes(self, f: impl FnMut(T) -> T) -> Self {
        Self(self.0.map(f))
    }

    /// Lane-parallel binary combine over all capacity lanes.
    #[inline(always)]
    pub(crate) fn zip_lanes(self, rhs: Self, f: impl FnMut(T, T) -> T) -> Self {
        Self(self.0.zip(rhs.0, f))
    }

    /// Three-operand lane-parallel combine over all capacity lanes.
    #[inline(always)]
    pub(crate) fn zip3_lanes(self, b: Self, c: Self, mut f: impl FnMut(T, T, T) -> T) -> Self {
        Self(T::Reg::from_fn(|i| {
            f(self.0.lane(i), b.0.lane(i), c.0.lane(i))
        }))
    }
}

impl<T: Lanes<N>, const N: usize> fmt::Debug for Batch<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Batch{:?}", self.to_array())
    }
}

impl<T: Lanes<N>, const N: usize> Default for Batch<T, N> {
    #[inline(always)]
    fn default() -> Self {
        Self::zero()
    }
}
