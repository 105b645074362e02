//! Compile-time-specialized SIMD-style numeric kernels.
//!
//! The central type is [`Batch<T, N>`]: a logical N-lane vector of a
//! scalar element type, resolved at compile time onto one of two
//! fixed-width register tiers (128-bit for small N, 256-bit above the
//! narrow tier's capacity). N is a const generic, so the whole
//! (element type, N) matrix monomorphizes with no runtime dispatch:
//! every operation on a `Batch<f32, 3>` compiles to straight-line
//! four-lane code.
//!
//! Lanes beyond N are *padding*. The constructors and loads fill them
//! deterministically (zero, or one for divisor contexts via
//! [`Batch::fill_divisor`]), stores and slice writes never touch more
//! than N elements, and comparisons reduce over the low N mask bits
//! only. The horizontal folds `hsum`/`hprod` read just the first N
//! lanes and do not re-trim their input; that contract is documented on
//! the methods.
//!
//! ```
//! use lanewise::Batch;
//!
//! let a = Batch::<f32, 3>::from_array([1.0, 2.0, 3.0]);
//! let b = Batch::<f32, 3>::from_array([4.0, 5.0, 6.0]);
//! assert_eq!(a.dot(b).first(), 32.0);
//! assert_eq!(a.cross(b).to_array(), [-3.0, 6.0, -3.0]);
//! ```

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]
#![warn(missing_docs)]

mod batch;
mod cmp;
mod consts;
mod element;
mod geom;
mod lanes;
mod mask;
mod math;
mod ops;
mod reduce;
mod reg;
mod shuffle;

pub use batch::Batch;
pub use consts::FloatConsts;
pub use element::{Bits, Element, Float, Int, Signed};
pub use lanes::Lanes;
pub use mask::Mask;
pub use reg::{Register, V128, V256};
