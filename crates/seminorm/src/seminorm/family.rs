//! Suprema of families of seminorms.
//!
//! The supremum of a set of seminorms exists exactly when the set is
//! pointwise bounded above; it is then the pointwise supremum. To keep
//! [`Seminorm::sup_set`] total, an unbounded family has supremum `zero`.
//! That fallback is a modeling convention, not an error: identities such
//! as `sup_set(∅) = ⊥ = 0` rely on it.
//!
//! Only finite or explicitly enumerable families are executable:
//!
//! * [`Family::Finite`] is always bounded above.
//! * [`Family::Countable`] is bounded exactly when it carries an
//!   `envelope`, the caller's witness that every term is dominated by one
//!   seminorm. Its supremum is evaluated as the running maximum over the
//!   first `scan_depth` terms.
//!
//! # Example
//!
//! ```
//! use seminorm::{CountableFamily, Family, Seminorm};
//!
//! // pₙ(x) = n·|x| has no upper bound.
//! let family: Family<f64, f64> = Family::Countable(CountableFamily::unbounded(|n| {
//!     Seminorm::of(format!("{n}|x|"), move |x: &f64| n as f64 * x.abs())
//! }));
//! assert!(!family.bdd_above());
//! assert_eq!(Seminorm::sup_set(&family).apply(&5.0), 0.0);
//! ```

use core::fmt;
use std::sync::Arc;

use super::Seminorm;
use crate::core::{Module, NormedScalar};

/// Countably indexed family `n ↦ pₙ`.
pub struct CountableFamily<S, E> {
    term: Arc<dyn Fn(usize) -> Seminorm<S, E> + Send + Sync>,
    envelope: Option<Seminorm<S, E>>,
    scan_depth: usize,
}

impl<S, E> Clone for CountableFamily<S, E> {
    fn clone(&self) -> Self {
        Self {
            term: Arc::clone(&self.term),
            envelope: self.envelope.clone(),
            scan_depth: self.scan_depth,
        }
    }
}

impl<S, E> fmt::Debug for CountableFamily<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountableFamily")
            .field("envelope", &self.envelope)
            .field("scan_depth", &self.scan_depth)
            .finish_non_exhaustive()
    }
}

impl<S: NormedScalar, E: Module<S>> CountableFamily<S, E> {
    /// A family with no known upper bound.
    pub fn unbounded<T>(term: T) -> Self
    where
        T: Fn(usize) -> Seminorm<S, E> + Send + Sync + 'static,
    {
        Self {
            term: Arc::new(term),
            envelope: None,
            scan_depth: 0,
        }
    }

    /// A family dominated by `envelope`.
    ///
    /// # Caller obligations
    ///
    /// `term(n) ≤ envelope` pointwise for every `n`. The supremum is taken
    /// over `term(0..scan_depth)`; it is exact when the supremum of the
    /// family is attained within that prefix at every point.
    pub fn bounded<T>(term: T, envelope: Seminorm<S, E>, scan_depth: usize) -> Self
    where
        T: Fn(usize) -> Seminorm<S, E> + Send + Sync + 'static,
    {
        Self {
            term: Arc::new(term),
            envelope: Some(envelope),
            scan_depth,
        }
    }

    /// The `n`-th member.
    pub fn term(&self, n: usize) -> Seminorm<S, E> {
        (self.term)(n)
    }

    /// The dominating seminorm, if any.
    pub fn envelope(&self) -> Option<&Seminorm<S, E>> {
        self.envelope.as_ref()
    }

    /// Number of leading terms scanned by the supremum.
    pub fn scan_depth(&self) -> usize {
        self.scan_depth
    }
}

/// A set of seminorms given to [`Seminorm::sup_set`].
#[derive(Debug)]
pub enum Family<S, E> {
    /// Finitely many seminorms.
    Finite(Vec<Seminorm<S, E>>),
    /// An enumerable family.
    Countable(CountableFamily<S, E>),
}

impl<S, E> Clone for Family<S, E> {
    fn clone(&self) -> Self {
        match self {
            Self::Finite(members) => Self::Finite(members.clone()),
            Self::Countable(c) => Self::Countable(c.clone()),
        }
    }
}

/// Outcome of a supremum: well defined, or degenerate (unbounded family).
#[derive(Debug, Clone)]
pub enum Supremum<S, E> {
    /// The family is bounded above; this is its least upper bound.
    WellDefined(Seminorm<S, E>),
    /// The family is unbounded; by convention its supremum is `zero`.
    Degenerate,
}

impl<S: NormedScalar, E: Module<S>> Supremum<S, E> {
    /// Collapses the tag, mapping `Degenerate` to the zero seminorm.
    pub fn into_seminorm(self) -> Seminorm<S, E> {
        match self {
            Self::WellDefined(p) => p,
            Self::Degenerate => Seminorm::zero(),
        }
    }

    /// Returns true if the supremum was well defined.
    pub fn is_well_defined(&self) -> bool {
        matches!(self, Self::WellDefined(_))
    }
}

impl<S: NormedScalar, E: Module<S>> Family<S, E> {
    /// Whether the family is pointwise bounded above.
    ///
    /// Pure and evaluated once per supremum.
    pub fn bdd_above(&self) -> bool {
        match self {
            Self::Finite(_) => true,
            Self::Countable(c) => c.envelope.is_some(),
        }
    }

    /// Whether the family is pointwise bounded below. Always true: `zero`
    /// is below every seminorm.
    pub fn bdd_below(&self) -> bool {
        true
    }

    /// A seminorm above every member, if the family is bounded.
    pub fn upper_bound(&self) -> Option<Seminorm<S, E>> {
        match self {
            Self::Finite(members) => Some(Seminorm::finset_sup(members)),
            Self::Countable(c) => c.envelope.clone(),
        }
    }

    /// Tagged supremum.
    pub fn supremum(&self) -> Supremum<S, E> {
        if !self.bdd_above() {
            return Supremum::Degenerate;
        }
        match self {
            Self::Finite(members) => Supremum::WellDefined(Seminorm::finset_sup(members)),
            Self::Countable(c) => {
                let terms: Vec<Seminorm<S, E>> = (0..c.scan_depth).map(|n| c.term(n)).collect();
                match &c.envelope {
                    Some(envelope) => Supremum::WellDefined(scan_sup(terms, envelope.clone())),
                    None => Supremum::Degenerate,
                }
            }
        }
    }
}

fn scan_sup<S: NormedScalar, E: Module<S>>(
    terms: Vec<Seminorm<S, E>>,
    envelope: Seminorm<S, E>,
) -> Seminorm<S, E> {
    let label = format!("⨆[{} terms ≤ {}]", terms.len(), envelope.label());
    let sup = Seminorm::finset_sup(&terms);
    Seminorm::of(label, move |x: &E| {
        let value = sup.apply(x);
        let cap = envelope.apply(x);
        if value > cap * (1.0 + 1e-12) + f64::EPSILON {
            tracing::warn!(
                envelope = %envelope,
                value,
                cap,
                "family member exceeds its declared envelope"
            );
        }
        value
    })
}

impl<S: NormedScalar, E: Module<S>> Seminorm<S, E> {
    /// Supremum of a family: the pointwise supremum when the family is
    /// bounded above, `zero` otherwise. Never fails.
    pub fn sup_set(family: &Family<S, E>) -> Self {
        let supremum = family.supremum();
        if !supremum.is_well_defined() {
            tracing::debug!("unbounded family: supremum falls back to the zero seminorm");
        }
        supremum.into_seminorm()
    }
}
