//! Seminorm conformance suite.
//!
//! The seminorm constructors trust their callers to supply maps that obey
//! the seminorm laws, and several results (meet, suprema of families,
//! continuity moduli) are computed numerically. This crate samples the
//! whole surface and reports every law it observes to fail.
//!
//! # Conformance Scope
//!
//! | Area | Validator | Checks |
//! |------|-----------|--------|
//! | Algebra | `algebra/laws` | defining laws of every catalog seminorm |
//! | Lattice | `lattice/*` | join and meet bounds, meet search, `sup_set` |
//! | Geometry | `geometry/*` | ball images, monotonicity, scaling, absorbency |
//! | Continuity | `continuity/modulus` | derived `ε ↦ δ` on sampled pairs |
//!
//! # Entry Point
//!
//! ```no_run
//! use seminorm_conformance::{run_all, ConformanceConfig};
//!
//! let report = run_all(&ConformanceConfig::default()).expect("invalid configuration");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod catalog;
pub mod config;
pub mod report;
pub mod validators;

pub use config::ConformanceConfig;
pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Seminorm laws on the catalog
/// 2. Lattice operations and suprema of families
/// 3. Ball geometry at every configured radius
/// 4. Continuity moduli
///
/// # Errors
///
/// Returns an error only if the configuration is invalid; law violations
/// are reported as failures, never as errors.
pub fn run_all(config: &ConformanceConfig) -> anyhow::Result<ConformanceReport> {
    config.validate()?;
    tracing::info!(
        samples = config.samples,
        seed = config.seed,
        tolerance = config.tolerance,
        "running seminorm conformance"
    );

    let mut report = ConformanceReport::new();

    // 1. Algebra
    report.extend(validators::algebra::validate(config));

    // 2. Lattice
    report.extend(validators::lattice::validate(config));

    // 3. Geometry
    report.extend(validators::geometry::validate(config));

    // 4. Continuity
    report.extend(validators::continuity::validate(config));

    let summary = report.summary();
    tracing::debug!(
        passed = summary.passed,
        warnings = summary.warnings,
        failed = summary.failed,
        "conformance finished"
    );
    Ok(report)
}
