//! Continuity validator.
//!
//! For `p = c • |·|` with the witness `δ₀ = r / c` (and for the Euclidean
//! norm on the plane), the derived modulus must satisfy
//! `|x − y| < δ(ε) ⟹ |p(x) − p(y)| < ε` on sampled pairs, and the modulus
//! must be exactly `δ(ε) = ε / c`.

use seminorm::continuity::{derive_continuity, ModulusCheck, NeighborhoodWitness, UniformContinuity};
use seminorm::norm_adapter::NormedSpace;
use seminorm::ContinuityError;

use super::sampler;
use crate::catalog::{abs, l2, Sampler};
use crate::config::ConformanceConfig;
use crate::report::{ConformanceReport, TestResult};

const TOLERANCES: [f64; 4] = [1.0, 0.1, 1e-3, 1e-6];
const WEIGHTS: [u32; 4] = [1, 2, 5, 10];

/// Validates derived continuity moduli.
pub fn validate(config: &ConformanceConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut samples = sampler(config, 4);

    for &r in &config.radii {
        let mut violations = Vec::new();
        let mut ratios = Vec::new();
        for c in WEIGHTS {
            let weight = f64::from(c);
            let modulus = NeighborhoodWitness::from_norm_bound(weight, r)
                .and_then(|w| derive_continuity(&abs().smul(c), r, w));
            match modulus {
                Ok(m) => {
                    let line = samples.line_points(config.samples);
                    violations.extend(check_pairs(&m, &line, &mut samples, |x, t| x + t));
                    match m.delta(TOLERANCES[1]) {
                        Ok(delta) => ratios.push(delta * weight / TOLERANCES[1]),
                        Err(e) => violations.push(e.to_string()),
                    }
                }
                Err(e) => violations.push(format!("c = {c}: {e}")),
            }
        }
        if ratios.iter().any(|q| (q - 1.0).abs() > config.tolerance) {
            violations.push(format!("δ · c / ε should be 1: {ratios:?}"));
        }

        match NeighborhoodWitness::from_norm_bound(1.0, r).and_then(|w| derive_continuity(&l2(), r, w)) {
            Ok(m) => {
                let plane = samples.plane_points(config.samples);
                violations.extend(check_pairs(&m, &plane, &mut samples, |x, t| [x[0] + t, x[1] - t]));
            }
            Err(e) => violations.push(format!("ℓ²: {e}")),
        }

        report.push(TestResult::from_violations(
            "continuity/modulus",
            format!("derived modulus holds with closed-ball radius {r}"),
            violations,
        ));
    }
    report
}

/// Checks the modulus on pairs `(x, shift(x, t))` with `|t|` a fraction of
/// `δ(ε) / 2`, so that the pair is within `δ` in both `ℝ` and `ℝ²`.
fn check_pairs<E, F>(
    m: &UniformContinuity<f64, E>,
    points: &[E],
    samples: &mut Sampler,
    shift: F,
) -> Vec<String>
where
    E: NormedSpace<f64>,
    F: Fn(&E, f64) -> E,
{
    let mut violations = Vec::new();
    for &eps in &TOLERANCES {
        let delta = match m.delta(eps) {
            Ok(d) => d,
            Err(e) => {
                violations.push(describe(eps, &e));
                continue;
            }
        };
        for x in points {
            let t = samples.between(-0.45, 0.45) * delta;
            let y = shift(x, t);
            match m.check_pair(x, &y, eps) {
                Ok(ModulusCheck::Violated) => violations.push(format!(
                    "`{}`: ε = {eps}, x = {x:?}, y = {y:?}",
                    m.at_zero().seminorm().label()
                )),
                Ok(_) => {}
                Err(e) => violations.push(describe(eps, &e)),
            }
        }
    }
    violations
}

fn describe(eps: f64, e: &ContinuityError) -> String {
    format!("ε = {eps}: {e}")
}
