//! Outcomes of the sampled law checks and the report a run collects.
//!
//! Each validator turns the samples it rejected into one [`TestResult`].
//! A result with no rejected samples passes; a numerical result that is
//! within the search accuracy but above the configured tolerance warns.

use serde::Serialize;

/// How a checked law fared on its samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Every sample satisfied the law.
    Pass,
    /// A computed value is less accurate than configured (non-blocking).
    Warning,
    /// At least one sample violated the law (blocks conformance).
    Failure,
}

/// One checked law.
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Validator path, `area/law` (`lattice/meet-search`).
    pub validator: String,
    /// What was checked, and on what.
    pub message: String,
    /// Outcome.
    pub severity: Severity,
    /// Rejected samples, one per line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl TestResult {
    fn new(
        validator: impl Into<String>,
        message: impl Into<String>,
        severity: Severity,
        details: Vec<String>,
    ) -> Self {
        Self {
            validator: validator.into(),
            message: message.into(),
            severity,
            details,
        }
    }

    /// A law that held on every sample.
    pub fn pass(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Pass, Vec::new())
    }

    /// A law violated by the listed samples.
    pub fn fail(
        validator: impl Into<String>,
        message: impl Into<String>,
        samples: Vec<String>,
    ) -> Self {
        Self::new(validator, message, Severity::Failure, samples)
    }

    /// A value computed less accurately than configured.
    pub fn warn(validator: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(validator, message, Severity::Warning, Vec::new())
    }

    /// Passes on no violations, otherwise fails and counts them in the message.
    pub fn from_violations(
        validator: impl Into<String>,
        message: impl Into<String>,
        violations: Vec<String>,
    ) -> Self {
        if violations.is_empty() {
            return Self::pass(validator, message);
        }
        let message = format!("{} ({} violation(s))", message.into(), violations.len());
        Self::fail(validator, message, violations)
    }

    /// Whether this result blocks conformance.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Result counts per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Passing results.
    pub passed: usize,
    /// Warnings.
    pub warnings: usize,
    /// Failures.
    pub failed: usize,
}

/// Every result of a run, in validator order.
#[derive(Debug, Default, Serialize)]
pub struct ConformanceReport {
    /// The results.
    pub results: Vec<TestResult>,
}

impl ConformanceReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one result.
    pub fn push(&mut self, result: TestResult) {
        self.results.push(result);
    }

    /// Appends the results of another validator.
    pub fn extend(&mut self, other: ConformanceReport) {
        self.results.extend(other.results);
    }

    /// Number of results with `severity`.
    pub fn count(&self, severity: Severity) -> usize {
        self.results.iter().filter(|r| r.severity == severity).count()
    }

    /// Counts per severity.
    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.count(Severity::Pass),
            warnings: self.count(Severity::Warning),
            failed: self.count(Severity::Failure),
        }
    }

    /// Number of failed results.
    pub fn failure_count(&self) -> usize {
        self.count(Severity::Failure)
    }

    /// No result failed; warnings allowed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_block_and_warnings_do_not() {
        let mut report = ConformanceReport::new();
        report.push(TestResult::pass("algebra/laws", "ok"));
        report.push(TestResult::warn("lattice/meet-search", "gap 3e-9"));
        assert!(report.all_passed());
        report.push(TestResult::from_violations("geometry/ball", "interval", vec!["y = 1".into()]));
        assert_eq!(
            report.summary(),
            Summary {
                passed: 1,
                warnings: 1,
                failed: 1
            }
        );
        assert!(!report.all_passed());
        assert!(report.results[2].message.ends_with("(1 violation(s))"));
        assert_eq!(report.results[2].details, vec!["y = 1".to_owned()]);
    }

    #[test]
    fn empty_violations_pass() {
        let result = TestResult::from_violations("continuity/modulus", "radius 1", Vec::new());
        assert_eq!(result.severity, Severity::Pass);
        assert_eq!(result.message, "radius 1");
    }

    #[test]
    fn serializes_severity_in_lowercase() {
        let json = serde_json::to_string(&TestResult::warn("v", "m")).unwrap_or_default();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(!json.contains("details"));
    }
}
