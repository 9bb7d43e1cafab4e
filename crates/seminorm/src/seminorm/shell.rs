//! Rescaling a point into a seminorm shell.

use super::Seminorm;
use crate::core::{Module, NontriviallyNormedField};
use crate::error::SeminormError;

/// Upper bound on exponent adjustments while searching for the shell.
const MAX_SHELL_STEPS: usize = 2_048;

impl<S: NontriviallyNormedField, E: Module<S>> Seminorm<S, E> {
    /// Finds `d = cⁿ` with `ε / ‖c‖ ≤ p(d • x) < ε`.
    ///
    /// Given `‖c‖ > 1`, `ε > 0` and `p(x) ≠ 0`, the powers of `c` move
    /// `p(cⁿ • x) = ‖c‖ⁿ · p(x)` through every shell `[ε/‖c‖, ε)`. The
    /// returned scalar also satisfies `‖d‖⁻¹ ≤ ε⁻¹ · ‖c‖ · p(x)`.
    ///
    /// # Errors
    ///
    /// * [`SeminormError::NonPositiveTolerance`] if `ε` is not positive.
    /// * [`SeminormError::ShellScalarTooSmall`] if `‖c‖ ≤ 1`.
    /// * [`SeminormError::VanishingValue`] if `p(x) = 0`.
    /// * [`SeminormError::ShellNotFound`] if the values are not finite.
    pub fn rescale_to_shell(&self, x: &E, epsilon: f64, c: S) -> Result<S, SeminormError> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(SeminormError::NonPositiveTolerance { epsilon });
        }
        let base = c.norm();
        if base <= 1.0 {
            return Err(SeminormError::ShellScalarTooSmall { norm: base });
        }
        let value = self.apply(x);
        if value == 0.0 {
            return Err(SeminormError::VanishingValue {
                label: self.label().to_owned(),
            });
        }
        if !value.is_finite() {
            return Err(SeminormError::ShellNotFound { value });
        }

        // Initial guess from logarithms, corrected against real evaluations.
        let guess = ((epsilon / value).ln() / base.ln()).floor();
        let mut n = guess.clamp(i32::MIN as f64 / 2.0, i32::MAX as f64 / 2.0) as i32;
        let lower = epsilon / base;
        for _ in 0..MAX_SHELL_STEPS {
            let d = c.zpow(n).ok_or(SeminormError::ShellNotFound { value })?;
            let scaled = self.apply(&x.smul(&d));
            if !scaled.is_finite() {
                return Err(SeminormError::ShellNotFound { value });
            }
            if scaled >= epsilon {
                n -= 1;
            } else if scaled < lower {
                n += 1;
            } else {
                tracing::trace!(seminorm = %self, exponent = n, "rescaled into shell");
                return Ok(d);
            }
        }
        Err(SeminormError::ShellNotFound { value })
    }
}
