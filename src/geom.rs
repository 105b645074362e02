//! Geometry combinators.
//!
//! Quaternions and homogeneous coordinates use the `(x, y, z, w)` lane
//! layout with the scalar/translation component in lane 3. Matrices are
//! four row batches; `transform_*` multiplies a row vector on the left,
//! accumulating through FMA chains.

use crate::batch::Batch;
use crate::element::Float;
use crate::lanes::Lanes;
use crate::mask::Mask;

impl<T: Float + Lanes<N>, const N: usize> Batch<T, N> {
    /// Outer product: row r is `self[r] * rhs`.
    ///
    /// Padding lanes of `rhs` are zero, so every row keeps the padding
    /// invariant.
    #[inline(always)]
    pub fn outer_product(self, rhs: Self) -> [Self; N] {
        core::array::from_fn(|r| self.broadcast_lane(r) * rhs)
    }
}

impl<T: Float + Lanes<2>> Batch<T, 2> {
    /// 2D cross product: the scalar determinant `x1*y2 - y1*x2`,
    /// broadcast to all lanes.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        self.at::<0>().fmsub(rhs.at::<1>(), self.at::<1>() * rhs.at::<0>())
    }
}

impl<T: Float + Lanes<3>> Batch<T, 3> {
    /// 3D cross product via cyclic permutes.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        let a_yzx = self.swizzle([1, 2, 0]);
        let b_yzx = rhs.swizzle([1, 2, 0]);
        let a_zxy = self.swizzle([2, 0, 1]);
        let b_zxy = rhs.swizzle([2, 0, 1]);
        a_yzx.fmsub(b_zxy, a_zxy * b_yzx)
    }

    /// A vector perpendicular to `self`, chosen branch-free from the
    /// dominant axis so it stays well-conditioned for any input.
    ///
    /// Where `|x| > |z|` the result is `(-y, x, 0)`, otherwise
    /// `(0, -z, y)`.
    #[inline(always)]
    pub fn orthogonal(self) -> Self {
        let a = self.abs();
        let use_xy = a.at::<0>().gt(a.at::<2>());
        let neg = T::ONE.lane_neg();
        let xy = self.swizzle([1, 0, 2]) * Self::from_array([neg, T::ONE, T::ZERO]);
        let zy = self.swizzle([0, 2, 1]) * Self::from_array([T::ZERO, neg, T::ONE]);
        use_xy.select(xy, zy)
    }
}

impl<T: Float + Lanes<4>> Batch<T, 4> {
    /// Hamilton product `self * rhs` of two `(x, y, z, w)` quaternions.
    ///
    /// Decomposed into four broadcast-multiply steps against fixed sign
    /// patterns; every step is a swizzle, a splat, and an FMA.
    #[inline(always)]
    pub fn quat_mul(self, rhs: Self) -> Self {
        let neg = T::ONE.lane_neg();
        let c1 = Self::from_array([T::ONE, neg, T::ONE, neg]);
        let c2 = Self::from_array([T::ONE, T::ONE, neg, neg]);
        let c3 = Self::from_array([neg, T::ONE, T::ONE, neg]);

        let r = self.at::<3>() * rhs;
        let r = (self.at::<0>() * rhs.swizzle([3, 2, 1, 0])).fmadd(c1, r);
        let r = (self.at::<1>() * rhs.swizzle([2, 3, 0, 1])).fmadd(c2, r);
        (self.at::<2>() * rhs.swizzle([1, 0, 3, 2])).fmadd(c3, r)
    }

    /// Cross product of the xyz components; lane 3 of the result is
    /// exactly zero.
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        let a_yzx = self.swizzle([1, 2, 0, 3]);
        let b_yzx = rhs.swizzle([1, 2, 0, 3]);
        let a_zxy = self.swizzle([2, 0, 1, 3]);
        let b_zxy = rhs.swizzle([2, 0, 1, 3]);
        let c = a_yzx.fmsub(b_zxy, a_zxy * b_yzx);
        let xyz: Mask<T, 4> = Mask::from_lane_fn(|i| i < 3);
        xyz.select(c, Self::zero())
    }

    /// Spherical linear interpolation between two unit quaternions.
    ///
    /// Takes the shorter arc (flips `rhs` when the dot product is
    /// negative) and falls back to ordinary linear interpolation when the
    /// inputs are nearly parallel, where the sin-weighted form loses
    /// precision. The fallback keeps `slerp(q, q, t) == q` exact.
    #[inline(always)]
    pub fn slerp(self, rhs: Self, t: T) -> Self {
        let one = Self::splat(T::ONE);
        let tb = Self::splat(t);

        let d = self.dot(rhs);
        let cos_o = d.abs();
        let q2 = d.sign_bits().select(-rhs, rhs);

        let sin_o = cos_o.fnmadd(cos_o, one).sqrt();
        let omega = sin_o.fast_atan2(cos_o);
        let inv_sin = sin_o.max(Self::splat(T::SAFE_DIV_FLOOR)).recip();
        let w1 = ((one - tb) * omega).fast_sin() * inv_sin;
        let w2 = (tb * omega).fast_sin() * inv_sin;
        let arc = self.fmadd(w1, q2 * w2);

        let near = cos_o.gt(Self::splat(T::SLERP_LERP_THRESHOLD));
        near.select(self.lerp(q2, tb), arc)
    }

    /// Transforms a direction vector by the matrix rows, ignoring the
    /// translation row.
    #[inline(always)]
    pub fn transform_vector(self, m: &[Self; 4]) -> Self {
        let r = self.at::<2>() * m[2];
        let r = self.at::<1>().fmadd(m[1], r);
        self.at::<0>().fmadd(m[0], r)
    }

    /// Transforms a point by the matrix rows, including the translation
    /// row, then divides by the homogeneous w lane.
    #[inline(always)]
    pub fn transform_point(self, m: &[Self; 4]) -> Self {
        let r = self.at::<2>().fmadd(m[2], m[3]);
        let r = self.at::<1>().fmadd(m[1], r);
        let r = self.at::<0>().fmadd(m[0], r);
        r / r.at::<3>()
    }

    /// Transforms a normal by the three linear rows of `m`, which the
    /// caller supplies as the inverse transpose of the model matrix.
    #[inline(always)]
    pub fn transform_normal(self, m: &[Self; 4]) -> Self {
        self.transform_vector(m)
    }
}
