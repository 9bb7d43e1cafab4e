//! Lattice scenarios: join, meet and suprema of families.

use seminorm::geometry::line_probes;
use seminorm::laws::check_seminorm_laws;
use seminorm::order::{ConditionallyCompleteLattice, JoinSemilattice, MeetSemilattice, SupSet};
use seminorm::{CompassSearch, CountableFamily, Family, Seminorm};

fn abs() -> Seminorm<f64, f64> {
    Seminorm::of("|x|", |x: &f64| x.abs())
}

fn scaled(n: usize) -> Seminorm<f64, f64> {
    Seminorm::of(format!("{n}|x|"), move |x: &f64| n as f64 * x.abs())
}

fn assert_lattice<L: ConditionallyCompleteLattice>() {}

// =============================================================================
// Meet and join
// =============================================================================

#[test]
fn meet_with_itself_is_itself() {
    let probes = line_probes(-5.0, 5.0, 0.25);
    let p = abs();
    assert!(p.meet(&p).eq_on(&p, &probes));
    assert!(p.join(&p).eq_on(&p, &probes));
}

#[test]
fn meet_of_comparable_seminorms_is_the_smaller() {
    let probes = line_probes(-5.0, 5.0, 0.25);
    let p = abs();
    let q = abs().smul(4u32);
    assert!(p.meet(&q).eq_on(&p, &probes));
    assert!(q.join(&p).eq_on(&q, &probes));
}

#[test]
fn meet_is_greatest_lower_bound_in_the_plane() {
    let l1: Seminorm<f64, [f64; 2]> = Seminorm::of("|x₀| + 2|x₁|", |x: &[f64; 2]| x[0].abs() + 2.0 * x[1].abs());
    let l2: Seminorm<f64, [f64; 2]> = Seminorm::of("2|x₀| + |x₁|", |x: &[f64; 2]| 2.0 * x[0].abs() + x[1].abs());
    let lower: Seminorm<f64, [f64; 2]> = Seminorm::of("|x₀| + |x₁|", |x: &[f64; 2]| x[0].abs() + x[1].abs());
    let probes = [[1.0, 1.0], [2.0, -1.0], [-0.5, 3.0], [0.0, 0.0]];
    for m in [l1.inf(&l2), l1.inf_with(&l2, CompassSearch::default())] {
        assert!(m.le_on(&l1, &probes));
        assert!(m.le_on(&l2, &probes));
        // The true meet is |x₀| + |x₁|, reached off the segment [0, x].
        assert!((m.apply(&[1.0, 1.0]) - 2.0).abs() < 1e-6);
        assert!(lower.le_on(&m, &probes));
    }
}

#[test]
fn meet_follows_a_valley_between_close_kernels() {
    let p: Seminorm<f64, [f64; 2]> = Seminorm::of("|x₀ − 2.5x₁|", |x: &[f64; 2]| (x[0] - 2.5 * x[1]).abs());
    let q: Seminorm<f64, [f64; 2]> = Seminorm::of("|x₀ − 2.4x₁|", |x: &[f64; 2]| (x[0] - 2.4 * x[1]).abs());
    let m = p.meet(&q);

    // (1, 0) = (25, 10) + (−24, −10) with (25, 10) ∈ ker p and (−24, −10) ∈ ker q.
    let (x, u, v) = ([1.0, 0.0], [25.0, 10.0], [-24.0, -10.0]);
    assert!(p.apply(&u) < 1e-12 && q.apply(&v) < 1e-12);
    assert!(m.apply(&x) < 1e-9, "meet at (1, 0) = {}", m.apply(&x));
    assert!(m.apply(&x) <= m.apply(&u) + m.apply(&v) + 1e-9);
    assert!(check_seminorm_laws(&m, &[x, u, v, [-3.0, 2.0]], &[-2.0, 0.5], 1e-6).is_ok());

    // The compass search stalls at the kink at the origin.
    let stalled = p.inf_with(&q, CompassSearch::default());
    assert!(stalled.apply(&x) > 0.5);
}

#[test]
fn join_is_least_upper_bound() {
    let probes = line_probes(-5.0, 5.0, 0.5);
    let p = abs().smul(2u32);
    let q = abs().smul(3u32);
    let j = p.join(&q);
    assert!(p.le_on(&j, &probes) && q.le_on(&j, &probes));
    let upper = abs().smul(3u32);
    assert!(j.le_on(&upper, &probes));
}

// =============================================================================
// Suprema of families
// =============================================================================

#[test]
fn unbounded_family_has_zero_supremum() {
    let family = Family::Countable(CountableFamily::unbounded(scaled));
    assert!(!<Seminorm<f64, f64> as SupSet>::bdd_above(&family));
    let sup = <Seminorm<f64, f64> as SupSet>::sup_of(&family);
    assert_eq!(sup.apply(&5.0), 0.0);
    assert_eq!(sup.apply(&-1e6), 0.0);
}

#[test]
fn bounded_family_has_pointwise_supremum() {
    let envelope = abs();
    let family = Family::Countable(CountableFamily::bounded(
        |n| abs().smul(seminorm::NonNegReal::abs(1.0 - 1.0 / (n as f64 + 1.0))),
        envelope.clone(),
        64,
    ));
    assert!(family.bdd_above());
    let sup = Seminorm::sup_set(&family);
    let probes = line_probes(-4.0, 4.0, 0.5);
    assert!(sup.le_on(&envelope, &probes));
    for n in 0..64 {
        assert!(family_term(&family, n).le_on(&sup, &probes));
    }
    assert!(family.is_upper_bound_on(&envelope, &probes, 64));
}

fn family_term(family: &Family<f64, f64>, n: usize) -> Seminorm<f64, f64> {
    match family {
        Family::Countable(c) => c.term(n),
        Family::Finite(members) => members[n].clone(),
    }
}

#[test]
fn finite_family_supremum_and_empty_set() {
    let probes = line_probes(-3.0, 3.0, 0.25);
    let family = Family::Finite(vec![scaled(1), scaled(5), scaled(2)]);
    assert!(Seminorm::sup_set(&family).eq_on(&scaled(5), &probes));
    let empty: Family<f64, f64> = Family::Finite(Vec::new());
    assert!(Seminorm::sup_set(&empty).eq_on(&Seminorm::zero(), &probes));
}

#[test]
fn seminorms_form_a_conditionally_complete_lattice() {
    assert_lattice::<Seminorm<f64, f64>>();
    assert_lattice::<Seminorm<f64, [f64; 3]>>();
}
