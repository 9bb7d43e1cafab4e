//! Continuity of a seminorm from one bounded neighbourhood.
//!
//! If the closed ball `closedBall p 0 r` contains an ambient neighbourhood
//! `{ y | ‖y‖ < δ₀ }` of the origin, then `p` is uniformly continuous:
//!
//! | Step | Statement |
//! |------|-----------|
//! | 1 | pick `k ≠ 0` with `‖k‖ < ε / r` |
//! | 2 | `‖y‖ < ‖k‖ · δ₀ ⟹ ‖k⁻¹ • y‖ < δ₀ ⟹ p(k⁻¹ • y) ≤ r` |
//! | 3 | so `p(y) = ‖k‖ · p(k⁻¹ • y) ≤ ‖k‖ · r < ε`: continuity at 0 |
//! | 4 | `|p(x) − p(y)| ≤ p(x − y)` upgrades step 3 to a uniform modulus |
//!
//! Letting `‖k‖` run up to `ε / r` gives the linear bound
//! `p(y) ≤ (r / δ₀) · ‖y‖`, and with it the constructive modulus
//! `ε ↦ δ = ε · δ₀ / r`. For `p = c|·|` with its sharp witness this is
//! `δ = ε / c`.
//!
//! # Example
//!
//! ```
//! use seminorm::Seminorm;
//! use seminorm::continuity::{derive_continuity, ModulusCheck, NeighborhoodWitness};
//!
//! let p: Seminorm<f64, f64> = Seminorm::of("|x|", |x: &f64| x.abs());
//! let witness = NeighborhoodWitness::new(1.0).unwrap();
//! let modulus = derive_continuity(&p, 1.0, witness).unwrap();
//!
//! let delta = modulus.delta(0.1).unwrap();
//! assert_eq!(delta, 0.1);
//! assert_eq!(modulus.check_pair(&0.3, &(0.3 + delta / 2.0), 0.1).unwrap(), ModulusCheck::Holds);
//! ```

use tracing::debug;

use crate::core::NontriviallyNormedField;
use crate::error::ContinuityError;
use crate::norm_adapter::NormedSpace;
use crate::seminorm::Seminorm;

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Certificate that `{ y | ‖y‖ < radius } ⊆ closedBall p 0 r`.
///
/// The certificate is not checked; the caller vouches for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NeighborhoodWitness {
    radius: f64,
}

impl NeighborhoodWitness {
    /// Witness with ambient radius `δ₀`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuityError::NonPositiveWitness`] unless `δ₀` is
    /// positive and finite.
    pub fn new(radius: f64) -> Result<Self, ContinuityError> {
        if !positive(radius) {
            return Err(ContinuityError::NonPositiveWitness { radius });
        }
        Ok(Self { radius })
    }

    /// Witness for a seminorm dominated by the ambient norm,
    /// `p ≤ bound · ‖·‖`: the ambient ball of radius `r / bound` lies in
    /// `closedBall p 0 r`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuityError::NonPositiveRadius`] for a bad `r`, and
    /// [`ContinuityError::NonPositiveWitness`] if `bound` is not positive.
    pub fn from_norm_bound(bound: f64, r: f64) -> Result<Self, ContinuityError> {
        if !positive(r) {
            return Err(ContinuityError::NonPositiveRadius { radius: r });
        }
        if !positive(bound) {
            return Err(ContinuityError::NonPositiveWitness { radius: bound });
        }
        Self::new(r / bound)
    }

    /// The ambient radius `δ₀`.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

/// Outcome of testing the modulus on a pair of points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModulusCheck {
    /// The points are not within `δ(ε)` of each other; nothing to check.
    OutOfRange,
    /// `‖x − y‖ < δ(ε)` and `|p(x) − p(y)| < ε`.
    Holds,
    /// `‖x − y‖ < δ(ε)` but `|p(x) − p(y)| ≥ ε`: the witness was false.
    Violated,
}

/// `p(y) → 0` as `y → 0`, with modulus `ε ↦ ‖k‖ · δ₀`.
#[derive(Debug, Clone)]
pub struct ContinuityAtZero<S, E> {
    seminorm: Seminorm<S, E>,
    radius: f64,
    witness: NeighborhoodWitness,
}

impl<S: NontriviallyNormedField, E: NormedSpace<S>> ContinuityAtZero<S, E> {
    /// The seminorm the modulus belongs to.
    pub fn seminorm(&self) -> &Seminorm<S, E> {
        &self.seminorm
    }

    /// The closed-ball radius `r`.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The neighbourhood witness.
    pub fn witness(&self) -> NeighborhoodWitness {
        self.witness
    }

    /// The scalar `k` of step 1, with `0 < ‖k‖ < ε / r`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuityError::NonPositiveTolerance`] for a bad `ε`, and
    /// [`ContinuityError::NoSmallScalar`] if the field supplies no scalar
    /// strictly inside the bound.
    pub fn scalar_for(&self, epsilon: f64) -> Result<S, ContinuityError> {
        if !positive(epsilon) {
            return Err(ContinuityError::NonPositiveTolerance { epsilon });
        }
        let bound = epsilon / self.radius;
        match S::with_norm_below(bound) {
            Some(k) if k.norm() > 0.0 && k.norm() < bound => Ok(k),
            _ => Err(ContinuityError::NoSmallScalar { bound }),
        }
    }

    /// `δ(ε) = ε · δ₀ / r`, the supremum of `‖k‖ · δ₀` over step-1 scalars.
    ///
    /// `‖y‖ < δ(ε)` gives `p(y) ≤ r · ‖y‖ / δ₀ < ε`.
    ///
    /// # Errors
    ///
    /// See [`scalar_for`](Self::scalar_for).
    pub fn delta(&self, epsilon: f64) -> Result<f64, ContinuityError> {
        self.scalar_for(epsilon)?;
        Ok(epsilon * self.witness.radius / self.radius)
    }

    /// Whether `‖y‖ < δ(ε) ⟹ p(y) < ε` holds at `y`.
    ///
    /// # Errors
    ///
    /// See [`scalar_for`](Self::scalar_for).
    pub fn holds_at(&self, y: &E, epsilon: f64) -> Result<bool, ContinuityError> {
        let delta = self.delta(epsilon)?;
        Ok(y.ambient_norm() >= delta || self.seminorm.apply(y) < epsilon)
    }
}

/// Uniform continuity of a seminorm with an explicit modulus.
#[derive(Debug, Clone)]
pub struct UniformContinuity<S, E> {
    at_zero: ContinuityAtZero<S, E>,
}

impl<S: NontriviallyNormedField, E: NormedSpace<S>> UniformContinuity<S, E> {
    /// The continuity-at-zero certificate this was derived from.
    pub fn at_zero(&self) -> &ContinuityAtZero<S, E> {
        &self.at_zero
    }

    /// `δ(ε)`: `‖x − y‖ < δ(ε) ⟹ |p(x) − p(y)| < ε`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuityError::NonPositiveTolerance`] for `ε ≤ 0`.
    pub fn delta(&self, epsilon: f64) -> Result<f64, ContinuityError> {
        self.at_zero.delta(epsilon)
    }

    /// Tests the modulus on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuityError::NonPositiveTolerance`] for `ε ≤ 0`.
    pub fn check_pair(&self, x: &E, y: &E, epsilon: f64) -> Result<ModulusCheck, ContinuityError> {
        let delta = self.delta(epsilon)?;
        if x.vsub(y).ambient_norm() >= delta {
            return Ok(ModulusCheck::OutOfRange);
        }
        if self.at_zero.seminorm.abs_sub(x, y) < epsilon {
            Ok(ModulusCheck::Holds)
        } else {
            Ok(ModulusCheck::Violated)
        }
    }
}

/// Derives uniform continuity of `p` from a neighbourhood of 0 inside
/// `closedBall p 0 r`.
///
/// # Errors
///
/// Returns [`ContinuityError::NonPositiveRadius`] unless `r` is positive
/// and finite.
pub fn derive_continuity<S, E>(
    p: &Seminorm<S, E>,
    r: f64,
    witness: NeighborhoodWitness,
) -> Result<UniformContinuity<S, E>, ContinuityError>
where
    S: NontriviallyNormedField,
    E: NormedSpace<S>,
{
    if !positive(r) {
        return Err(ContinuityError::NonPositiveRadius { radius: r });
    }
    debug!(
        seminorm = p.label(),
        radius = r,
        witness = witness.radius(),
        "derived uniform continuity modulus"
    );
    Ok(UniformContinuity {
        at_zero: ContinuityAtZero {
            seminorm: p.clone(),
            radius: r,
            witness,
        },
    })
}
