//! Seminorm law validator.
//!
//! Checks every catalog seminorm for:
//! - `p(0) = 0`, non-negativity and symmetry
//! - subadditivity on every sampled pair
//! - absolute homogeneity for every configured scalar
//! - the reverse triangle inequality `|p(x) − p(y)| ≤ p(x − y)`

use seminorm::laws::{check_reverse_triangle, check_seminorm_laws};
use seminorm::{Module, Seminorm};

use super::sampler;
use crate::catalog::{line_catalog, plane_catalog};
use crate::config::ConformanceConfig;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "algebra/laws";

/// Validates the seminorm laws on the catalog.
pub fn validate(config: &ConformanceConfig) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let mut samples = sampler(config, 1);
    let line = samples.line_points(config.samples);
    let plane = samples.plane_points(config.samples);

    for p in line_catalog() {
        report.push(check(&p, &line, &config.scalars, config.tolerance));
    }
    for p in plane_catalog() {
        report.push(check(&p, &plane, &config.scalars, config.tolerance));
    }
    report
}

fn check<E: Module<f64>>(
    p: &Seminorm<f64, E>,
    points: &[E],
    scalars: &[f64],
    tolerance: f64,
) -> TestResult {
    let outcome = check_seminorm_laws(p, points, scalars, tolerance)
        .and_then(|()| check_reverse_triangle(p, points, tolerance));
    match outcome {
        Ok(()) => TestResult::pass(
            VALIDATOR,
            format!("`{}` satisfies the seminorm laws on {} points", p.label(), points.len()),
        ),
        Err(violation) => TestResult::fail(
            VALIDATOR,
            format!("`{}` violates a seminorm law", p.label()),
            vec![violation.to_string()],
        ),
    }
}
