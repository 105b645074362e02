//! Accuracy tests for the fast polynomial tier against the precise tier.
//!
//! The interface contract: fast sin/cos stay within 1e-6 absolute of the
//! precise results over [-2π, 2π]; the arctangent family within 1e-5.
//! Bit-exact agreement between the tiers is explicitly not promised.

use lanewise::Batch;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

const TAU: f32 = 2.0 * PI;

fn max_abs_err(fast: impl Fn(Batch<f32, 4>) -> Batch<f32, 4>, reference: impl Fn(f32) -> f32) -> f32 {
    let mut worst = 0.0f32;
    // Dense sample of [-2π, 2π], four lanes at a time.
    let step = TAU / 1000.0;
    let mut x = -TAU;
    while x <= TAU {
        let inputs = [x, x + step / 4.0, x + step / 2.0, x + 3.0 * step / 4.0];
        let got = fast(Batch::from_array(inputs)).to_array();
        for (lane, &input) in got.iter().zip(&inputs) {
            let err = (lane - reference(input)).abs();
            if err > worst {
                worst = err;
            }
        }
        x += step;
    }
    worst
}

#[test]
fn fast_sin_within_1e6_of_precise() {
    let worst = max_abs_err(|v| v.fast_sin(), f32::sin);
    assert!(worst < 1e-6, "fast_sin worst error {} exceeds 1e-6", worst);
}

#[test]
fn fast_cos_within_1e6_of_precise() {
    let worst = max_abs_err(|v| v.fast_cos(), f32::cos);
    assert!(worst < 1e-6, "fast_cos worst error {} exceeds 1e-6", worst);
}

#[test]
fn fast_sincos_components_match_fast_sin_cos() {
    let v = Batch::<f32, 4>::from_array([0.25, -1.7, 3.0, -5.9]);
    let (s, c) = v.fast_sincos();
    assert_eq!(s.to_array(), v.fast_sin().to_array());
    assert_eq!(c.to_array(), v.fast_cos().to_array());
}

#[test]
fn fast_sin_known_values() {
    let v = Batch::<f32, 4>::from_array([0.0, FRAC_PI_2, PI, -FRAC_PI_2]);
    let s = v.fast_sin().to_array();
    assert!(s[0].abs() < 1e-6, "sin(0) ~ 0, got {}", s[0]);
    assert!((s[1] - 1.0).abs() < 1e-6, "sin(π/2) ~ 1, got {}", s[1]);
    assert!(s[2].abs() < 1e-6, "sin(π) ~ 0, got {}", s[2]);
    assert!((s[3] + 1.0).abs() < 1e-6, "sin(-π/2) ~ -1, got {}", s[3]);
}

#[test]
fn fast_cos_known_values() {
    let v = Batch::<f32, 4>::from_array([0.0, FRAC_PI_2, PI, TAU]);
    let c = v.fast_cos().to_array();
    assert!((c[0] - 1.0).abs() < 1e-6, "cos(0) ~ 1, got {}", c[0]);
    assert!(c[1].abs() < 1e-6, "cos(π/2) ~ 0, got {}", c[1]);
    assert!((c[2] + 1.0).abs() < 1e-6, "cos(π) ~ -1, got {}", c[2]);
    assert!((c[3] - 1.0).abs() < 1e-5, "cos(2π) ~ 1, got {}", c[3]);
}

#[test]
fn fast_tan_matches_precise_away_from_poles() {
    let inputs = [0.3f32, -0.9, 1.2, 2.5];
    let got = Batch::<f32, 4>::from_array(inputs).fast_tan().to_array();
    for (g, x) in got.iter().zip(&inputs) {
        let want = x.tan();
        assert!(
            (g - want).abs() < 1e-4 * want.abs().max(1.0),
            "fast_tan({}) = {}, precise {}",
            x,
            g,
            want
        );
    }
}

#[test]
fn fast_atan_covers_both_branches() {
    // Inputs straddle the |x| > 1 inversion and the tan(π/8) fold.
    let inputs = [0.2f32, 0.7, 1.0, 42.0];
    let got = Batch::<f32, 4>::from_array(inputs).fast_atan().to_array();
    for (g, x) in got.iter().zip(&inputs) {
        assert!(
            (g - x.atan()).abs() < 1e-5,
            "fast_atan({}) = {}, precise {}",
            x,
            g,
            x.atan()
        );
    }
    // Odd symmetry.
    let neg = Batch::<f32, 4>::from_array([-0.2, -0.7, -1.0, -42.0])
        .fast_atan()
        .to_array();
    for (n, p) in neg.iter().zip(&got) {
        assert_eq!(*n, -p, "fast_atan must be exactly odd");
    }
}

#[test]
fn fast_atan2_quadrants() {
    let y = Batch::<f32, 4>::from_array([1.0, 1.0, -1.0, -1.0]);
    let x = Batch::<f32, 4>::from_array([1.0, -1.0, -1.0, 1.0]);
    let a = y.fast_atan2(x).to_array();
    let want = [FRAC_PI_4, 3.0 * FRAC_PI_4, -3.0 * FRAC_PI_4, -FRAC_PI_4];
    for (g, w) in a.iter().zip(&want) {
        assert!((g - w).abs() < 1e-5, "atan2 quadrant: got {}, want {}", g, w);
    }
}

#[test]
fn fast_atan2_dense_agreement_with_precise() {
    let mut worst = 0.0f32;
    for i in -20i32..=20 {
        for j in -20i32..=20 {
            if i == 0 && j == 0 {
                continue;
            }
            let yv = i as f32 * 0.37;
            let xv = j as f32 * 0.53;
            let got = Batch::<f32, 1>::splat(yv)
                .fast_atan2(Batch::splat(xv))
                .first();
            let err = (got - yv.atan2(xv)).abs();
            if err > worst {
                worst = err;
            }
        }
    }
    assert!(worst < 1e-5, "fast_atan2 worst error {} exceeds 1e-5", worst);
}

#[test]
fn precise_tier_delegates_per_lane() {
    let v = Batch::<f64, 4>::from_array([0.5, 1.5, -0.25, 3.0]);
    let s = v.sin().to_array();
    for (got, x) in s.iter().zip(v.to_array()) {
        assert!((got - x.sin()).abs() < 1e-15);
    }

    let e = v.exp().to_array();
    for (got, x) in e.iter().zip(v.to_array()) {
        assert!((got - x.exp()).abs() < 1e-12 * x.exp().abs());
    }
}

#[test]
fn precise_binary_ops() {
    let a = Batch::<f32, 4>::from_array([2.0, 3.0, 4.0, 5.0]);
    let b = Batch::<f32, 4>::from_array([3.0, 2.0, 0.5, -1.0]);

    let p = a.powf(b).to_array();
    let want = [8.0f32, 9.0, 2.0, 0.2];
    for (got, w) in p.iter().zip(&want) {
        assert!((got - w).abs() < 1e-6 * w, "powf: got {}, want {}", got, w);
    }

    let h = Batch::<f32, 2>::from_array([3.0, 5.0])
        .hypot(Batch::from_array([4.0, 12.0]))
        .to_array();
    assert_eq!(h, [5.0, 13.0]);

    let m = Batch::<f32, 2>::from_array([7.5, -7.5])
        .fmod(Batch::splat(2.0))
        .to_array();
    assert_eq!(m, [1.5, -1.5]);
}

#[test]
fn recip_and_rsqrt() {
    let v = Batch::<f64, 2>::from_array([4.0, 0.25]);
    assert_eq!(v.recip().to_array(), [0.25, 4.0]);
    assert_eq!(v.rsqrt().to_array(), [0.5, 2.0]);
}
