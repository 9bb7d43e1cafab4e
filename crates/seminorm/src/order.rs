//! Pointwise order and lattice structure.
//!
//! `p ≤ q ⟺ ∀x, p(x) ≤ q(x)`. The quantifier ranges over the whole space,
//! so comparisons are evaluated on a finite probe set; a `true` answer is
//! evidence on those probes, a `false` answer is a genuine counterexample.
//!
//! The order-theoretic structure is assembled from small traits instead
//! of one hierarchy:
//!
//! ```text
//! JoinSemilattice ─┐
//!                  ├─► Lattice ─┐
//! MeetSemilattice ─┘            ├─► ConditionallyCompleteLattice
//! SupSet ───────────────────────┘
//! OrderedAddMonoid
//! ```
//!
//! Seminorms are a join-semilattice over any scalars and a lattice over
//! field scalars (the meet is the infimal convolution, which divides).
//!
//! # Example
//!
//! ```
//! use seminorm::Seminorm;
//! use seminorm::order::{JoinSemilattice, MeetSemilattice};
//!
//! let p: Seminorm<f64, f64> = Seminorm::of("|x|", |x: &f64| x.abs());
//! let q = p.smul(2u32);
//! let probes = [-3.0, -0.5, 0.0, 1.0, 4.0];
//!
//! assert!(p.le_on(&p.join(&q), &probes));
//! assert!(p.meet(&q).le_on(&p, &probes));
//! assert!(!q.le_on(&p, &probes));
//! ```

use crate::core::{Module, NormedField, NormedScalar, ScalarAction};
use crate::seminorm::{Family, InfimumDomain, Seminorm};

/// Relative tolerance for pointwise comparisons of computed values.
pub const ORDER_TOLERANCE: f64 = 1e-9;

#[inline]
fn le_approx(a: f64, b: f64) -> bool {
    a <= b + ORDER_TOLERANCE * (1.0 + a.abs().max(b.abs()))
}

/// Binary least upper bound.
pub trait JoinSemilattice: Sized {
    /// `self ⊔ other`.
    fn join(&self, other: &Self) -> Self;
}

/// Binary greatest lower bound.
pub trait MeetSemilattice: Sized {
    /// `self ⊓ other`.
    fn meet(&self, other: &Self) -> Self;
}

/// Both binary bounds.
pub trait Lattice: JoinSemilattice + MeetSemilattice {}

impl<T: JoinSemilattice + MeetSemilattice> Lattice for T {}

/// A total supremum operation that is a least upper bound on sets that are
/// bounded above.
pub trait SupSet: Sized {
    /// The set representation.
    type Set;

    /// Whether `set` is bounded above.
    fn bdd_above(set: &Self::Set) -> bool;

    /// Supremum of `set`; only meaningful when [`bdd_above`](Self::bdd_above).
    fn sup_of(set: &Self::Set) -> Self;
}

/// A lattice whose bounded-above sets have least upper bounds.
pub trait ConditionallyCompleteLattice: Lattice + SupSet {}

impl<T: Lattice + SupSet> ConditionallyCompleteLattice for T {}

/// A commutative monoid whose addition is monotone and cancellative.
pub trait OrderedAddMonoid: Sized {
    /// Additive identity.
    fn identity() -> Self;

    /// Addition.
    fn combine(&self, other: &Self) -> Self;
}

impl<S: NormedScalar, E: Module<S>> JoinSemilattice for Seminorm<S, E> {
    fn join(&self, other: &Self) -> Self {
        self.sup(other)
    }
}

impl<S: NormedField, E: InfimumDomain<S>> MeetSemilattice for Seminorm<S, E> {
    fn meet(&self, other: &Self) -> Self {
        self.inf(other)
    }
}

impl<S: NormedScalar, E: Module<S>> SupSet for Seminorm<S, E> {
    type Set = Family<S, E>;

    fn bdd_above(set: &Family<S, E>) -> bool {
        set.bdd_above()
    }

    fn sup_of(set: &Family<S, E>) -> Self {
        Seminorm::sup_set(set)
    }
}

impl<S: NormedScalar, E: Module<S>> OrderedAddMonoid for Seminorm<S, E> {
    fn identity() -> Self {
        Seminorm::zero()
    }

    fn combine(&self, other: &Self) -> Self {
        self.add(other)
    }
}

impl<S: NormedScalar, E: Module<S>> Seminorm<S, E> {
    /// `self ≤ other` on every probe.
    pub fn le_on(&self, other: &Self, probes: &[E]) -> bool {
        probes
            .iter()
            .all(|x| le_approx(self.apply(x), other.apply(x)))
    }

    /// `self ≤ other` on every probe and `self < other` on at least one.
    pub fn lt_on(&self, other: &Self, probes: &[E]) -> bool {
        self.le_on(other, probes) && !other.le_on(self, probes)
    }

    /// `self = other` on every probe (antisymmetry of `≤`).
    pub fn eq_on(&self, other: &Self, probes: &[E]) -> bool {
        self.le_on(other, probes) && other.le_on(self, probes)
    }

    /// First probe where `self ≤ other` fails.
    pub fn le_counterexample<'a>(&self, other: &Self, probes: &'a [E]) -> Option<&'a E> {
        probes
            .iter()
            .find(|x| !le_approx(self.apply(x), other.apply(x)))
    }
}

impl<S: NormedScalar, E: Module<S>> Family<S, E> {
    /// Whether `bound` dominates every member on the probes.
    ///
    /// Countable families are checked on their first `depth` terms.
    pub fn is_upper_bound_on(&self, bound: &Seminorm<S, E>, probes: &[E], depth: usize) -> bool {
        match self {
            Family::Finite(members) => members.iter().all(|p| p.le_on(bound, probes)),
            Family::Countable(c) => (0..depth).all(|n| c.term(n).le_on(bound, probes)),
        }
    }
}

/// `a • p ≤ b • q` on the probes, given weights `a ≤ b`.
///
/// With `p ≤ q`, this follows from `a·p(x) ≤ b·p(x) ≤ b·q(x)`, which uses
/// `p(x) ≥ 0`. Returns false if `a > b`.
pub fn smul_le_smul<S, E, R>(a: R, b: R, p: &Seminorm<S, E>, q: &Seminorm<S, E>, probes: &[E]) -> bool
where
    S: NormedScalar,
    E: Module<S>,
    R: ScalarAction,
{
    if a.to_nnreal() > b.to_nnreal() {
        return false;
    }
    p.smul(a).le_on(&q.smul(b), probes)
}
