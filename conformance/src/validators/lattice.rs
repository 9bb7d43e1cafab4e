//! Lattice validator.
//!
//! Checks on sampled points:
//! - `p ≤ p ⊔ q`, `q ≤ p ⊔ q` and `p ⊔ q ≤ r` for an upper bound `r`
//! - `p ⊓ q ≤ p`, `p ⊓ q ≤ q` and `p ⊓ p = p`
//! - the default meet search against known closed forms, including a pair
//!   of rank-one seminorms whose minimiser lies far off the coordinate axes
//!   (a gap above `1e-7` fails, one above the configured tolerance warns)
//! - `sup_set` of an unbounded family is `0`, of a bounded one is below its envelope

use seminorm::order::{JoinSemilattice, MeetSemilattice};
use seminorm::{CountableFamily, Family, NonNegReal, Seminorm};

use super::sampler;
use crate::catalog::{abs, functional, l1, linf, projection, weighted, PlaneSeminorm};
use crate::config::ConformanceConfig;
use crate::report::{ConformanceReport, TestResult};

/// Relative tolerance of the closed-form meet comparison.
const MEET_APPROXIMATION: f64 = 1e-7;

/// Validates the lattice operations.
pub fn validate(config: &ConformanceConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut samples = sampler(config, 2);
    let line = samples.line_points(config.samples);
    let plane = samples.plane_points(config.samples);

    // Join bounds
    let (p, q) = (l1(), weighted(NonNegReal::abs(2.0), NonNegReal::abs(0.5)));
    let join = p.join(&q);
    let upper = p.add(&q);
    let mut violations = Vec::new();
    for x in &plane {
        let j = join.apply(x);
        if j < p.apply(x) || j < q.apply(x) || j > upper.apply(x) * (1.0 + config.tolerance) {
            violations.push(format!("x = {x:?}: (p ⊔ q)(x) = {j}"));
        }
    }
    report.push(TestResult::from_violations(
        "lattice/join",
        "join is the least of the sampled upper bounds",
        violations,
    ));

    // Meet bounds
    let first = projection(0);
    let meet = first.meet(&linf());
    let line_meet = abs().meet(&abs());
    let mut violations = Vec::new();
    for x in &plane {
        let m = meet.apply(x);
        let slack = config.tolerance * (1.0 + m.abs());
        if m < 0.0 || m > first.apply(x) + slack || m > linf().apply(x) + slack {
            violations.push(format!("x = {x:?}: (p ⊓ q)(x) = {m}"));
        }
    }
    for x in &line {
        if (line_meet.apply(x) - x.abs()).abs() > config.tolerance * (1.0 + x.abs()) {
            violations.push(format!("x = {x}: (|x| ⊓ |x|)(x) = {}", line_meet.apply(x)));
        }
    }
    report.push(TestResult::from_violations(
        "lattice/meet",
        "meet is a lower bound and idempotent",
        violations,
    ));

    report.push(check_meet_closed_form(&plane, config.tolerance));
    report.extend(check_families(&line, config.tolerance));
    report
}

/// Closed forms of the default plane meet:
/// - `|x₀| + 2|x₁|` and `2|x₀| + |x₁|` meet in `|x₀| + |x₁|`
/// - `|x₀ − 2.5x₁|` and `|x₀ − 2.4x₁|` have independent kernels, so their
///   meet is `0`, reached at `u = (25x₀ − 60x₁, 10x₀ − 24x₁)`
fn check_meet_closed_form(plane: &[[f64; 2]], tolerance: f64) -> TestResult {
    let cases: [(PlaneSeminorm, PlaneSeminorm, PlaneSeminorm); 2] = [
        (
            weighted(NonNegReal::ONE, NonNegReal::abs(2.0)),
            weighted(NonNegReal::abs(2.0), NonNegReal::ONE),
            l1(),
        ),
        (
            functional([1.0, -2.5]),
            functional([1.0, -2.4]),
            PlaneSeminorm::zero(),
        ),
    ];
    let mut worst = 0.0_f64;
    let mut violations = Vec::new();
    for (p, q, expected) in &cases {
        let meet = p.meet(q);
        for x in plane {
            let (m, e) = (meet.apply(x), expected.apply(x));
            let gap = (m - e).abs() / (1.0 + e);
            worst = worst.max(gap);
            if gap > MEET_APPROXIMATION {
                violations.push(format!("`{}` at x = {x:?}: {m}, expected {e}", meet.label()));
            }
        }
    }
    if violations.is_empty() && worst <= tolerance {
        TestResult::pass(
            "lattice/meet-search",
            format!("meet search matches the closed-form meets (worst relative gap {worst:.2e})"),
        )
    } else if violations.is_empty() {
        TestResult::warn(
            "lattice/meet-search",
            format!("meet search within {MEET_APPROXIMATION:e} of the closed forms, above the configured {tolerance:e} (gap {worst:.2e})"),
        )
    } else {
        tracing::debug!(worst, "meet search missed a closed-form meet");
        TestResult::from_violations(
            "lattice/meet-search",
            "meet search matches the closed-form meets",
            violations,
        )
    }
}

fn check_families(line: &[f64], tolerance: f64) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let unbounded: Family<f64, f64> = Family::Countable(CountableFamily::unbounded(|n| {
        Seminorm::of(format!("{n}|x|"), move |x: &f64| n as f64 * x.abs())
    }));
    let sup = Seminorm::sup_set(&unbounded);
    let nonzero: Vec<String> = line
        .iter()
        .filter(|x| sup.apply(*x) != 0.0)
        .map(|x| format!("x = {x}: sup = {}", sup.apply(x)))
        .collect();
    report.push(TestResult::from_violations(
        "lattice/sup-set",
        "unbounded family has supremum 0",
        nonzero,
    ));

    let envelope = abs().smul(2u32);
    let bounded: Family<f64, f64> = Family::Countable(CountableFamily::bounded(
        |n| abs().smul(NonNegReal::abs(2.0 - 1.0 / (n as f64 + 1.0))),
        envelope.clone(),
        32,
    ));
    let sup = Seminorm::sup_set(&bounded);
    let mut violations = Vec::new();
    if !bounded.is_upper_bound_on(&envelope, line, 32) {
        violations.push("envelope is not an upper bound of the scanned terms".to_owned());
    }
    if !sup.le_on(&envelope, line) {
        violations.push("supremum exceeds the envelope".to_owned());
    }
    for x in line {
        let expected = (2.0 - 1.0 / 32.0) * x.abs();
        if (sup.apply(x) - expected).abs() > tolerance * (1.0 + expected) {
            violations.push(format!("x = {x}: sup = {}, expected {expected}", sup.apply(x)));
        }
    }
    report.push(TestResult::from_violations(
        "lattice/sup-set",
        "bounded family has its pointwise supremum",
        violations,
    ));
    report
}
