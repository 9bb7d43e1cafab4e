//! Ball geometry validator.
//!
//! For every configured radius, on sampled points:
//! - `ball |·| 0 r = (-r, r)` and `closedBall |·| 0 r = [-r, r]`
//! - `ball (c • p) x r = ball p x (r / c)`
//! - `ball (p ⊔ q) x r = ball p x r ∩ ball q x r`, also for finite families
//! - balls grow with the radius and shrink with the seminorm
//! - `k • closedBall p x r = closedBall p (k • x) (‖k‖ · r)`
//! - every sampled point is absorbed by `ball p 0 r`

use seminorm::geometry::{
    ball_finset_sup, ball_sup, closed_ball_finset_sup, set_eq_on, subset_on, Ball, ClosedBall,
};

use super::sampler;
use crate::catalog::{abs, l1, l2, linf, projection};
use crate::config::ConformanceConfig;
use crate::report::{ConformanceReport, TestResult};

/// Validates the ball laws.
pub fn validate(config: &ConformanceConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut samples = sampler(config, 3);
    let line = samples.line_points(config.samples);
    let plane = samples.plane_points(config.samples);
    let center = samples.scalar();
    let plane_center = [samples.scalar(), samples.scalar()];

    for &r in &config.radii {
        let mut violations = Vec::new();

        let open = Ball::new(abs(), 0.0, r);
        let closed = ClosedBall::new(abs(), 0.0, r);
        for y in &line {
            if open.contains(y) != (-r < *y && *y < r) || closed.contains(y) != (-r <= *y && *y <= r) {
                violations.push(format!("r = {r}, y = {y}: membership differs from the interval"));
            }
        }

        match Ball::of_smul(abs(), 2u32, center, r) {
            Ok(rewritten) => {
                if !set_eq_on(&Ball::new(abs().smul(2u32), center, r), &rewritten, &line) {
                    violations.push(format!("r = {r}: ball (2 • p) differs from ball p (r / 2)"));
                }
            }
            Err(e) => violations.push(e.to_string()),
        }

        let (joined, parts) = ball_sup(&l1(), &linf(), &plane_center, r);
        if !set_eq_on(&joined, &parts, &plane) {
            violations.push(format!("r = {r}: ball (p ⊔ q) is not the intersection"));
        }
        let family = [l1(), l2(), projection(1)];
        match (
            ball_finset_sup(&family, &plane_center, r),
            closed_ball_finset_sup(&family, &plane_center, r),
        ) {
            (Ok((b, bs)), Ok((c, cs))) => {
                if !set_eq_on(&b, &bs, &plane) || !set_eq_on(&c, &cs, &plane) {
                    violations.push(format!("r = {r}: finite supremum ball is not the intersection"));
                }
            }
            (Err(e), _) | (_, Err(e)) => violations.push(e.to_string()),
        }

        let small = Ball::new(l2(), plane_center, r);
        match small.widen(2.0 * r) {
            Ok(wide) if subset_on(&small, &wide, &plane) => {}
            Ok(_) => violations.push(format!("r = {r}: widening lost points")),
            Err(e) => violations.push(e.to_string()),
        }
        if !subset_on(&Ball::new(l1(), plane_center, r), &Ball::new(l1(), plane_center, r).under(&linf()), &plane) {
            violations.push(format!("r = {r}: ball of ℓ¹ is not inside ball of ℓ∞"));
        }

        report.push(TestResult::from_violations(
            "geometry/ball",
            format!("ball laws hold at radius {r}"),
            violations,
        ));
    }

    report.push(check_scaling(config, &line, center));
    report.push(check_absorbency(config, &plane));
    report
}

fn check_scaling(config: &ConformanceConfig, line: &[f64], center: f64) -> TestResult {
    let mut violations = Vec::new();
    for &r in &config.radii {
        let cb = ClosedBall::new(abs(), center, r);
        for &k in config.scalars.iter().filter(|k| **k != 0.0) {
            let scaled = match cb.scale(k) {
                Ok(s) => s,
                Err(e) => {
                    violations.push(e.to_string());
                    continue;
                }
            };
            for y in line {
                let direct = scaled.contains(y);
                let via_preimage = cb.contains_scaled_set(k, y);
                // Boundary points may round differently on the two sides.
                let on_boundary = (scaled.seminorm().dist(y, scaled.center()) - scaled.radius()).abs()
                    <= config.tolerance * (1.0 + scaled.radius());
                if direct != via_preimage && !on_boundary {
                    violations.push(format!("r = {r}, k = {k}, y = {y}"));
                }
            }
        }
    }
    TestResult::from_violations(
        "geometry/scaling",
        "k • closedBall p x r = closedBall p (k • x) (‖k‖ · r)",
        violations,
    )
}

fn check_absorbency(config: &ConformanceConfig, plane: &[[f64; 2]]) -> TestResult {
    let mut violations = Vec::new();
    for &r in &config.radii {
        let ball = Ball::new(l2(), [0.0, 0.0], r);
        if !ball.is_balanced() {
            violations.push(format!("r = {r}: centered ball is not balanced"));
        }
        for y in plane {
            match ball.absorbing_scalar(y) {
                Ok(a) if ball.contains_scaled_set(a, y) => {}
                Ok(a) => violations.push(format!("r = {r}, y = {y:?}: {a} • ball misses y")),
                Err(e) => violations.push(format!("r = {r}, y = {y:?}: {e}")),
            }
        }
    }
    TestResult::from_violations(
        "geometry/absorbency",
        "centered balls are balanced and absorb every sample",
        violations,
    )
}
