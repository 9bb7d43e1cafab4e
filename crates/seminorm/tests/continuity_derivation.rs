//! Continuity derivation: the modulus `ε ↦ δ` for concrete seminorms.

use proptest::prelude::*;
use seminorm::continuity::{derive_continuity, ModulusCheck, NeighborhoodWitness};
use seminorm::geometry::line_probes;
use seminorm::norm_adapter::norm_seminorm;
use seminorm::{ContinuityError, Seminorm};

fn scaled_abs(c: u32) -> Seminorm<f64, f64> {
    Seminorm::of("|x|", |x: &f64| x.abs()).smul(c)
}

#[test]
fn absolute_value_has_the_identity_modulus() {
    let p = scaled_abs(1);
    let m = derive_continuity(&p, 1.0, NeighborhoodWitness::new(1.0).unwrap()).unwrap();
    for eps in [1.0, 0.1, 1e-3] {
        let delta = m.delta(eps).unwrap();
        assert_eq!(delta, eps);
        for y in line_probes(-delta * 0.99, delta * 0.99, delta / 8.0) {
            assert!(p.apply(&y) < eps);
        }
    }
}

#[test]
fn modulus_is_epsilon_over_c() {
    for eps in [0.2, 1.0, 3.5] {
        for c in [1u32, 2, 5, 10] {
            let witness = NeighborhoodWitness::from_norm_bound(f64::from(c), 1.0).unwrap();
            let m = derive_continuity(&scaled_abs(c), 1.0, witness).unwrap();
            let delta = m.delta(eps).unwrap();
            let expected = eps / f64::from(c);
            assert!((delta - expected).abs() <= 1e-15 * expected, "c = {c}: {delta} vs {expected}");
        }
    }
}

#[test]
fn ambient_norm_in_the_plane() {
    let p = norm_seminorm::<f64, [f64; 2]>();
    let m = derive_continuity(&p, 2.0, NeighborhoodWitness::from_norm_bound(1.0, 2.0).unwrap()).unwrap();
    let delta = m.delta(0.5).unwrap();
    let x = [1.0, -3.0];
    let y = [1.0 + delta * 0.5, -3.0 - delta * 0.5];
    assert_eq!(m.check_pair(&x, &y, 0.5).unwrap(), ModulusCheck::Holds);
}

#[test]
fn invalid_inputs_are_errors() {
    let p = scaled_abs(1);
    let w = NeighborhoodWitness::new(1.0).unwrap();
    assert_eq!(
        derive_continuity(&p, -1.0, w).unwrap_err(),
        ContinuityError::NonPositiveRadius { radius: -1.0 }
    );
    assert!(NeighborhoodWitness::new(-0.5).is_err());
    assert!(NeighborhoodWitness::from_norm_bound(0.0, 1.0).is_err());
    let m = derive_continuity(&p, 1.0, w).unwrap();
    assert!(m.delta(0.0).is_err());
    assert!(m.check_pair(&0.0, &0.0, f64::NAN).is_err());
}

proptest! {
    /// ‖x − y‖ < δ(ε) ⟹ |p(x) − p(y)| < ε for a true witness
    #[test]
    fn prop_uniform_modulus_holds(
        c in 1u32..20,
        x in -1e3f64..1e3,
        t in -0.99f64..0.99,
        eps in 1e-6f64..10.0,
    ) {
        let p = scaled_abs(c);
        let w = NeighborhoodWitness::from_norm_bound(f64::from(c), 1.0).unwrap();
        let m = derive_continuity(&p, 1.0, w).unwrap();
        let delta = m.delta(eps).unwrap();
        let y = x + t * delta;
        prop_assert_ne!(m.check_pair(&x, &y, eps).unwrap(), ModulusCheck::Violated);
    }
}
