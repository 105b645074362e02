//! Geometry combinator tests: quaternion product against a scalar
//! Hamilton reference, slerp invariants, cross/outer/orthogonal, and the
//! matrix transforms.

use lanewise::Batch;

/// Deterministic xorshift32; keeps the randomized tests reproducible
/// without pulling in an RNG crate.
struct XorShift(u32);

impl XorShift {
    fn next_f32(&mut self) -> f32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        // Map to [-1, 1).
        (x as f32 / u32::MAX as f32) * 2.0 - 1.0
    }

    fn unit_quat(&mut self) -> [f32; 4] {
        loop {
            let q = [
                self.next_f32(),
                self.next_f32(),
                self.next_f32(),
                self.next_f32(),
            ];
            let len2: f32 = q.iter().map(|c| c * c).sum();
            if len2 > 1e-4 {
                let inv = len2.sqrt().recip();
                return [q[0] * inv, q[1] * inv, q[2] * inv, q[3] * inv];
            }
        }
    }
}

/// Scalar Hamilton product in (x, y, z, w) layout.
fn quat_mul_ref(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    let [x1, y1, z1, w1] = a;
    let [x2, y2, z2, w2] = b;
    [
        w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
        w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
        w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
        w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
    ]
}

#[test]
fn quat_mul_matches_hamilton_reference() {
    let mut rng = XorShift(0x2545_f491);
    for _ in 0..200 {
        let a = rng.unit_quat();
        let b = rng.unit_quat();
        let got = Batch::<f32, 4>::from_array(a)
            .quat_mul(Batch::from_array(b))
            .to_array();
        let want = quat_mul_ref(a, b);
        for (g, w) in got.iter().zip(&want) {
            assert!(
                (g - w).abs() < 1e-5,
                "quat_mul {:?} * {:?}: got {:?}, want {:?}",
                a,
                b,
                got,
                want
            );
        }
    }
}

#[test]
fn quat_mul_identity() {
    let id = Batch::<f32, 4>::from_array([0.0, 0.0, 0.0, 1.0]);
    let q = Batch::<f32, 4>::from_array([0.1, -0.4, 0.7, 0.58]);
    assert_eq!(id.quat_mul(q).to_array(), q.to_array());
    assert_eq!(q.quat_mul(id).to_array(), q.to_array());
}

#[test]
fn quat_mul_ij_equals_k() {
    let i = Batch::<f32, 4>::from_array([1.0, 0.0, 0.0, 0.0]);
    let j = Batch::<f32, 4>::from_array([0.0, 1.0, 0.0, 0.0]);
    assert_eq!(i.quat_mul(j).to_array(), [0.0, 0.0, 1.0, 0.0], "i*j = k");
    assert_eq!(j.quat_mul(i).to_array(), [0.0, 0.0, -1.0, 0.0], "j*i = -k");
}

#[test]
fn slerp_of_equal_quaternions_is_identity() {
    let q = Batch::<f32, 4>::from_array([0.5, 0.5, 0.5, 0.5]);
    for t in [0.0f32, 0.25, 0.5, 0.75, 1.0] {
        assert_eq!(
            q.slerp(q, t).to_array(),
            q.to_array(),
            "slerp(q, q, {}) must be exactly q",
            t
        );
    }
}

#[test]
fn slerp_endpoints_and_midpoint() {
    // 90° apart around z: q1 = identity, q2 = rotate z by 90°.
    let q1 = Batch::<f32, 4>::from_array([0.0, 0.0, 0.0, 1.0]);
    let half = std::f32::consts::FRAC_PI_4; // half of 90°
    let q2 = Batch::<f32, 4>::from_array([0.0, 0.0, half.sin(), half.cos()]);

    let at0 = q1.slerp(q2, 0.0).to_array();
    let at1 = q1.slerp(q2, 1.0).to_array();
    for i in 0..4 {
        assert!((at0[i] - q1.to_array()[i]).abs() < 1e-5, "t=0 endpoint");
        assert!((at1[i] - q2.to_array()[i]).abs() < 1e-5, "t=1 endpoint");
    }

    // Midpoint of a 90° arc is the 45° rotation; also still unit length.
    let mid = q1.slerp(q2, 0.5);
    let eighth = std::f32::consts::FRAC_PI_4 / 2.0;
    let want = [0.0, 0.0, eighth.sin(), eighth.cos()];
    for (g, w) in mid.to_array().iter().zip(&want) {
        assert!((g - w).abs() < 1e-4, "midpoint: got {:?}, want {:?}", mid, want);
    }
    let len = mid.dot(mid).first().sqrt();
    assert!((len - 1.0).abs() < 1e-4, "slerp output drifted off the sphere");
}

#[test]
fn slerp_takes_the_shorter_arc() {
    // q and -q are the same rotation; interpolation toward -q2 must not
    // swing the long way around.
    let q1 = Batch::<f32, 4>::from_array([0.0, 0.0, 0.0, 1.0]);
    let half = std::f32::consts::FRAC_PI_4;
    let q2 = Batch::<f32, 4>::from_array([0.0, 0.0, half.sin(), half.cos()]);
    let neg_q2 = -q2;

    let a = q1.slerp(q2, 0.5).to_array();
    let b = q1.slerp(neg_q2, 0.5).to_array();
    for (x, y) in a.iter().zip(&b) {
        assert!((x - y).abs() < 1e-5, "sign flip changed the arc");
    }
}

#[test]
fn cross3_antisymmetry_and_orthogonality() {
    let mut rng = XorShift(0x9e37_79b9);
    for _ in 0..100 {
        let a = Batch::<f32, 3>::from_array([rng.next_f32(), rng.next_f32(), rng.next_f32()]);
        let b = Batch::<f32, 3>::from_array([rng.next_f32(), rng.next_f32(), rng.next_f32()]);
        let ab = a.cross(b);
        let ba = b.cross(a);
        for (x, y) in ab.to_array().iter().zip(ba.to_array()) {
            assert!((x + y).abs() < 1e-6, "cross must be antisymmetric");
        }
        assert!(ab.dot(a).first().abs() < 1e-5, "cross(a,b) . a must be ~0");
        assert!(ab.dot(b).first().abs() < 1e-5, "cross(a,b) . b must be ~0");
    }
}

#[test]
fn cross3_basis_vectors() {
    let x = Batch::<f32, 3>::from_array([1.0, 0.0, 0.0]);
    let y = Batch::<f32, 3>::from_array([0.0, 1.0, 0.0]);
    assert_eq!(x.cross(y).to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(y.cross(x).to_array(), [0.0, 0.0, -1.0]);
}

#[test]
fn cross2_is_the_broadcast_determinant() {
    let a = Batch::<f32, 2>::from_array([3.0, 1.0]);
    let b = Batch::<f32, 2>::from_array([1.0, 2.0]);
    assert_eq!(a.cross(b).to_array(), [5.0; 2]);
    assert_eq!(b.cross(a).to_array(), [-5.0; 2]);
}

#[test]
fn cross4_clears_the_w_lane() {
    let a = Batch::<f32, 4>::from_array([1.0, 2.0, 3.0, 7.0]);
    let b = Batch::<f32, 4>::from_array([4.0, 5.0, 6.0, -9.0]);
    let c = a.cross(b).to_array();
    assert_eq!(&c[..3], &[-3.0, 6.0, -3.0], "xyz part is the 3D cross");
    assert_eq!(c[3], 0.0, "w lane must be exactly zero regardless of inputs");
}

#[test]
fn outer_product_rows_match_scalar_products() {
    let a = Batch::<f32, 3>::from_array([1.0, 2.0, 3.0]);
    let b = Batch::<f32, 3>::from_array([4.0, 5.0, 6.0]);
    let m = a.outer_product(b);
    for (r, row) in m.iter().enumerate() {
        for (c, got) in row.to_array().iter().enumerate() {
            assert_eq!(*got, a.to_array()[r] * b.to_array()[c]);
        }
    }
}

#[test]
fn orthogonal_is_perpendicular_and_nonzero() {
    let mut rng = XorShift(0xdead_beef);
    for _ in 0..100 {
        let v = Batch::<f32, 3>::from_array([rng.next_f32(), rng.next_f32(), rng.next_f32()]);
        if v.dot(v).first() < 1e-6 {
            continue;
        }
        let p = v.orthogonal();
        assert!(
            v.dot(p).first().abs() < 1e-6,
            "orthogonal({:?}) = {:?} is not perpendicular",
            v,
            p
        );
        assert!(p.dot(p).first() > 1e-8, "orthogonal output degenerated");
    }

    // Axis-aligned edge cases, including the |x| == |z| tie.
    for v in [
        [1.0f32, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 1.0],
    ] {
        let b = Batch::<f32, 3>::from_array(v);
        let p = b.orthogonal();
        assert!(b.dot(p).first().abs() < 1e-6);
        assert!(p.dot(p).first() > 1e-8);
    }
}

#[test]
fn transform_vector_ignores_translation() {
    // Row-vector convention: rows 0..3 are the linear part, row 3 the
    // translation. Scale by (2, 3, 4) and translate by (10, 20, 30).
    let m = [
        Batch::<f32, 4>::from_array([2.0, 0.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 3.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 0.0, 4.0, 0.0]),
        Batch::<f32, 4>::from_array([10.0, 20.0, 30.0, 1.0]),
    ];
    let v = Batch::<f32, 4>::from_array([1.0, 1.0, 1.0, 0.0]);
    assert_eq!(v.transform_vector(&m).to_array(), [2.0, 3.0, 4.0, 0.0]);
}

#[test]
fn transform_point_applies_translation_and_divide() {
    let m = [
        Batch::<f32, 4>::from_array([2.0, 0.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 3.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 0.0, 4.0, 0.0]),
        Batch::<f32, 4>::from_array([10.0, 20.0, 30.0, 1.0]),
    ];
    let p = Batch::<f32, 4>::from_array([1.0, 1.0, 1.0, 1.0]);
    assert_eq!(p.transform_point(&m).to_array(), [12.0, 23.0, 34.0, 1.0]);
}

#[test]
fn transform_point_performs_perspective_divide() {
    // A projection-like matrix whose w column doubles w.
    let m = [
        Batch::<f32, 4>::from_array([1.0, 0.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 1.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 0.0, 1.0, 1.0]),
        Batch::<f32, 4>::from_array([0.0, 0.0, 0.0, 1.0]),
    ];
    let p = Batch::<f32, 4>::from_array([2.0, 4.0, 1.0, 1.0]);
    // Raw product is (2, 4, 1, 2); after the divide, w is 1.
    assert_eq!(p.transform_point(&m).to_array(), [1.0, 2.0, 0.5, 1.0]);
}

#[test]
fn transform_normal_uses_linear_rows_only() {
    let m = [
        Batch::<f32, 4>::from_array([0.5, 0.0, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 0.25, 0.0, 0.0]),
        Batch::<f32, 4>::from_array([0.0, 0.0, 2.0, 0.0]),
        Batch::<f32, 4>::from_array([99.0, 99.0, 99.0, 1.0]),
    ];
    let n = Batch::<f32, 4>::from_array([1.0, 2.0, 3.0, 0.0]);
    assert_eq!(n.transform_normal(&m).to_array(), [0.5, 0.5, 6.0, 0.0]);
}
