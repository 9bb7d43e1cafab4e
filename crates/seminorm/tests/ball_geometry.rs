//! Ball geometry scenarios on the real line and in the plane.
//!
//! | Scenario | Expected set |
//! |----------|--------------|
//! | `ball |·| 0 1` | `(-1, 1)` |
//! | `closedBall |·| 0 1` | `[-1, 1]` |
//! | `ball (2 • |·|) 0 1` | `(-0.5, 0.5)` |
//! | `ball (|·| ⊔ 2|·|) 0 2` | `(-1, 1)` |

use proptest::prelude::*;
use seminorm::geometry::{
    ball_finset_sup, ball_sup, line_probes, set_eq_on, subset_on, Ball, ClosedBall, Region,
};
use seminorm::{GeometryError, Seminorm};

fn abs() -> Seminorm<f64, f64> {
    Seminorm::of("|x|", |x: &f64| x.abs())
}

struct Open(f64, f64);

impl Region<f64> for Open {
    fn contains(&self, y: &f64) -> bool {
        self.0 < *y && *y < self.1
    }
}

struct Closed(f64, f64);

impl Region<f64> for Closed {
    fn contains(&self, y: &f64) -> bool {
        self.0 <= *y && *y <= self.1
    }
}

fn probes() -> Vec<f64> {
    line_probes(-3.0, 3.0, 0.125)
}

// =============================================================================
// Concrete balls
// =============================================================================

#[test]
fn unit_balls_of_the_absolute_value() {
    assert!(set_eq_on(&Ball::new(abs(), 0.0, 1.0), &Open(-1.0, 1.0), &probes()));
    assert!(set_eq_on(&ClosedBall::new(abs(), 0.0, 1.0), &Closed(-1.0, 1.0), &probes()));
}

#[test]
fn doubled_seminorm_halves_the_ball() {
    let doubled = Ball::new(abs().smul(2u32), 0.0, 1.0);
    assert!(set_eq_on(&doubled, &Open(-0.5, 0.5), &probes()));
    let rewritten = Ball::of_smul(abs(), 2u32, 0.0, 1.0).unwrap();
    assert!(set_eq_on(&doubled, &rewritten, &probes()));
}

#[test]
fn join_ball_is_the_smaller_interval() {
    let (joined, parts) = ball_sup(&abs(), &abs().smul(2u32), &0.0, 2.0);
    assert!(set_eq_on(&joined, &Open(-1.0, 1.0), &probes()));
    assert!(set_eq_on(&joined, &parts, &probes()));
}

#[test]
fn empty_family_ball_is_everything() {
    let (joined, parts) = ball_finset_sup::<f64, f64>(&[], &0.0, 0.5).unwrap();
    assert!(parts.is_universe());
    assert!(probes().iter().all(|y| joined.contains(y)));
    assert_eq!(
        ball_finset_sup::<f64, f64>(&[], &0.0, 0.0).unwrap_err(),
        GeometryError::NonPositiveRadius { radius: 0.0 }
    );
}

#[test]
fn closed_ball_of_radius_zero_is_the_kernel_coset() {
    let first: Seminorm<f64, [f64; 2]> = Seminorm::of("|x₀|", |x: &[f64; 2]| x[0].abs());
    let cb = ClosedBall::new(first, [1.0, 0.0], 0.0);
    assert!(cb.contains(&[1.0, 0.0]));
    assert!(cb.contains(&[1.0, 7.5]));
    assert!(!cb.contains(&[1.5, 0.0]));
}

#[test]
fn minkowski_sum_is_contained() {
    let a = Ball::new(abs(), 1.0, 0.5);
    let b = Ball::new(abs(), -2.0, 0.25);
    let sum = a.add_ball(&b);
    for x in line_probes(0.5, 1.5, 0.0625) {
        for y in line_probes(-2.25, -1.75, 0.0625) {
            if a.contains(&x) && b.contains(&y) {
                assert!(sum.contains(&(x + y)));
            }
        }
    }
}

#[test]
fn closed_ball_scaling_round_trips() {
    let cb = ClosedBall::new(abs(), 0.0, 1.0);
    let scaled = cb.scale(0.25).unwrap();
    assert_eq!(scaled.radius(), 0.25);
    for y in probes() {
        assert_eq!(scaled.contains(&y), cb.contains_scaled_set(0.25, &y));
    }
    let back = scaled.scale(4.0).unwrap();
    assert!(set_eq_on(&back, &cb, &probes()));
}

#[test]
fn balls_absorb_every_point() {
    let b = Ball::new(abs(), 0.0, 1.0);
    let a = b.absorbing_scalar(&100.0).unwrap();
    assert_eq!(a, 101.0);
    assert!(b.contains_scaled_set(a, &100.0));
    for t in [201.0, -150.0, 1e3] {
        assert!(b.contains_scaled_set(t, &100.0));
    }
}

#[test]
fn centered_ball_is_balanced() {
    let b = Ball::new(abs(), 0.0, 1.0);
    assert!(b.is_balanced());
    for y in line_probes(-0.875, 0.875, 0.125) {
        for a in [-1.0, -0.5, 0.0, 0.5, 1.0] {
            let img = b.balanced_image(a, &y).unwrap();
            assert!(b.contains(&img));
        }
    }
}

// =============================================================================
// Monotonicity laws
// =============================================================================

proptest! {
    /// r₁ ≤ r₂ ⟹ ball p x r₁ ⊆ ball p x r₂
    #[test]
    fn prop_balls_grow_with_radius(x in -2.0f64..2.0, r in 0.0f64..2.0, extra in 0.0f64..2.0) {
        let small = Ball::new(abs(), x, r);
        let big = small.widen(r + extra).unwrap();
        prop_assert!(subset_on(&small, &big, &probes()));
        let small_c = ClosedBall::new(abs(), x, r);
        prop_assert!(subset_on(&small_c, &small_c.widen(r + extra).unwrap(), &probes()));
    }

    /// q ≤ p ⟹ ball p x r ⊆ ball q x r
    #[test]
    fn prop_balls_shrink_with_seminorm(x in -2.0f64..2.0, r in 0.0f64..2.0, k in 1u32..5) {
        let big = Ball::new(abs().smul(k), x, r);
        prop_assert!(subset_on(&big, &big.under(&abs()), &probes()));
    }

    /// ball (p ⊔ q) x r = ball p x r ∩ ball q x r
    #[test]
    fn prop_join_ball_is_intersection(x in -2.0f64..2.0, r in -1.0f64..3.0, k in 1u32..5) {
        let (joined, parts) = ball_sup(&abs(), &abs().smul(k), &x, r);
        prop_assert!(set_eq_on(&joined, &parts, &probes()));
    }
}
