//! Run configuration, loaded from TOML.
//!
//! ```toml
//! samples = 64
//! seed = 7
//! tolerance = 1e-9
//! scalars = [-2.0, -0.5, 0.0, 1.0, 3.0]
//! radii = [0.5, 1.0, 2.0]
//! ```
//!
//! Every field is optional; missing fields take their default.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Sampling parameters shared by all validators.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConformanceConfig {
    /// Number of random sample points per validator.
    pub samples: usize,
    /// Seed of the sample generator; runs are reproducible.
    pub seed: u64,
    /// Relative tolerance for floating-point law checks.
    pub tolerance: f64,
    /// Scalars used for homogeneity and set-scaling checks.
    pub scalars: Vec<f64>,
    /// Radii used for ball checks.
    pub radii: Vec<f64>,
}

impl Default for ConformanceConfig {
    fn default() -> Self {
        Self {
            samples: 32,
            seed: 0x5e31_0042,
            tolerance: 1e-9,
            scalars: vec![-2.0, -0.5, 0.0, 1.0, 3.0],
            radii: vec![0.5, 1.0, 2.0],
        }
    }
}

impl ConformanceConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, names an unknown
    /// field, or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid conformance configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Checks the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns an error for zero samples, a non-positive tolerance, or a
    /// missing or non-positive radius.
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            bail!("samples must be at least 1");
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            bail!("tolerance {} must be positive", self.tolerance);
        }
        if self.radii.is_empty() {
            bail!("at least one radius is required");
        }
        if let Some(r) = self.radii.iter().find(|r| !(r.is_finite() && **r > 0.0)) {
            bail!("radius {r} must be positive");
        }
        if let Some(a) = self.scalars.iter().find(|a| !a.is_finite()) {
            bail!("scalar {a} must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_the_default() {
        let parsed = ConformanceConfig::from_toml_str("").ok();
        assert_eq!(parsed, Some(ConformanceConfig::default()));
    }

    #[test]
    fn fields_override_defaults() {
        let parsed = ConformanceConfig::from_toml_str("samples = 5\nradii = [3.0]\n").ok();
        let config = parsed.unwrap_or_default();
        assert_eq!(config.samples, 5);
        assert_eq!(config.radii, vec![3.0]);
        assert_eq!(config.seed, ConformanceConfig::default().seed);
    }

    #[test]
    fn rejects_bad_values_and_unknown_fields() {
        assert!(ConformanceConfig::from_toml_str("samples = 0").is_err());
        assert!(ConformanceConfig::from_toml_str("radii = [1.0, -1.0]").is_err());
        assert!(ConformanceConfig::from_toml_str("tolerance = 0.0").is_err());
        assert!(ConformanceConfig::from_toml_str("sample = 3").is_err());
    }
}
