//! Seminorms and their algebra.
//!
//! A [`Seminorm<S, E>`] is an immutable, cheaply clonable evaluation map
//! `E → ℝ` over a module `E` with scalars `S`, carrying three invariants:
//!
//! 1. `p(0) = 0`
//! 2. `p(x + y) ≤ p(x) + p(y)` (subadditivity)
//! 3. `p(a • x) = ‖a‖ · p(x)` (absolute homogeneity)
//!
//! Non-negativity and symmetry `p(-x) = p(x)` follow from these.
//!
//! Every operation returns a new seminorm; nothing is mutated.
//!
//! | Operation | Result | Scalars |
//! |-----------|--------|---------|
//! | [`zero`](Seminorm::zero) | `x ↦ 0` | any |
//! | [`add`](Seminorm::add) | `x ↦ p(x) + q(x)` | any |
//! | [`smul`](Seminorm::smul) | `x ↦ r • p(x)` | any, `r: ScalarAction` |
//! | [`sup`](Seminorm::sup) | `x ↦ max(p(x), q(x))` | any |
//! | [`inf`](Seminorm::inf) | `x ↦ inf_u p(u) + q(x − u)` | field |
//! | [`sup_set`](Seminorm::sup_set) | pointwise supremum, or `0` if unbounded | any |
//! | [`comp`](Seminorm::comp) | `x ↦ p(f(x))` | isometric scalar change |
//!
//! # Example
//!
//! ```
//! use seminorm::Seminorm;
//!
//! let p: Seminorm<f64, f64> = Seminorm::of("|x|", |x: &f64| x.abs());
//! let q = p.smul(2u32);
//!
//! assert_eq!(p.sup(&q).apply(&-3.0), 6.0);
//! assert_eq!(p.add(&q).apply(&1.0), 3.0);
//! assert_eq!(p.inf(&q).apply(&5.0), 5.0);
//! ```

mod family;
mod infimum;
mod shell;

pub use family::{CountableFamily, Family, Supremum};
pub use infimum::{CompassSearch, EndpointSearch, InfimumDomain, InfimumSearch, NestedLineSearch};

use core::fmt;
use core::marker::PhantomData;
use std::sync::Arc;

use crate::core::{IsometricRingHom, Module, NormedField, NormedScalar, ScalarAction};

/// Shared evaluation map of a seminorm.
pub type EvalFn<E> = Arc<dyn Fn(&E) -> f64 + Send + Sync>;

/// A seminorm on the `S`-module `E`.
///
/// The evaluation map is shared behind an [`Arc`], so clones are cheap and
/// seminorms can be sent to other threads.
pub struct Seminorm<S, E> {
    eval: EvalFn<E>,
    label: Arc<str>,
    _scalar: PhantomData<fn() -> S>,
}

impl<S, E> Clone for Seminorm<S, E> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
            label: Arc::clone(&self.label),
            _scalar: PhantomData,
        }
    }
}

impl<S, E> fmt::Debug for Seminorm<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seminorm({})", self.label)
    }
}

impl<S, E> fmt::Display for Seminorm<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl<S: NormedScalar, E: Module<S>> Seminorm<S, E> {
    fn from_parts(label: impl Into<Arc<str>>, eval: EvalFn<E>) -> Self {
        Self {
            eval,
            label: label.into(),
            _scalar: PhantomData,
        }
    }

    /// The zero seminorm `x ↦ 0`, bottom of the order.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_parts("0", Arc::new(|_: &E| 0.0))
    }

    /// Builds a seminorm from its evaluation map.
    ///
    /// # Caller obligations
    ///
    /// `f` must be subadditive and absolutely homogeneous for every input:
    ///
    /// * `f(x + y) ≤ f(x) + f(y)`
    /// * `f(a • x) = ‖a‖ · f(x)`
    ///
    /// `f(0) = 0` then follows by taking `a = 0`. These quantified properties
    /// cannot be checked at construction; a map violating them produces a
    /// value on which the lattice and ball laws do not hold. Use
    /// [`laws::check_seminorm_laws`](crate::laws::check_seminorm_laws) in
    /// tests to sample them.
    pub fn of<F>(label: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        let label = label.into();
        tracing::trace!(seminorm = %label, "constructed seminorm");
        Self::from_parts(label, Arc::new(f))
    }

    /// Evaluates `p(x)`.
    #[inline]
    pub fn apply(&self, x: &E) -> f64 {
        (self.eval)(x)
    }

    /// Seminorm distance `p(x − y)`.
    ///
    /// Symmetric (`p(x − y) = p(y − x)`) and satisfies the triangle
    /// inequality, so it is a pseudometric.
    #[inline]
    pub fn dist(&self, x: &E, y: &E) -> f64 {
        self.apply(&x.vsub(y))
    }

    /// `|p(x) − p(y)|`, which never exceeds [`dist`](Self::dist).
    #[inline]
    pub fn abs_sub(&self, x: &E, y: &E) -> f64 {
        (self.apply(x) - self.apply(y)).abs()
    }

    /// Human-readable description, built up by the algebra operations.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a copy with a different label and the same evaluation map.
    #[must_use]
    pub fn relabel(&self, label: impl Into<Arc<str>>) -> Self {
        Self::from_parts(label, Arc::clone(&self.eval))
    }

    /// The shared evaluation map.
    #[inline]
    pub fn eval_fn(&self) -> &EvalFn<E> {
        &self.eval
    }

    /// Pointwise sum `x ↦ p(x) + q(x)`.
    ///
    /// Homogeneity follows from `‖a‖·p(x) + ‖a‖·q(x) = ‖a‖·(p(x) + q(x))`;
    /// subadditivity by regrouping the four-term sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let (p, q) = (Arc::clone(&self.eval), Arc::clone(&other.eval));
        Self::from_parts(
            format!("({} + {})", self.label, other.label),
            Arc::new(move |x: &E| p(x) + q(x)),
        )
    }

    /// Scaling by a weight `r` acting through `R → [0, ∞) → ℝ`.
    ///
    /// `(r • p)(x) = r • p(x)`. Homogeneity is preserved because the action
    /// commutes with scaling by `‖a‖` (see [`ScalarAction`]).
    #[must_use]
    pub fn smul<R: ScalarAction>(&self, r: R) -> Self {
        let weight = r.to_nnreal();
        let p = Arc::clone(&self.eval);
        Self::from_parts(
            format!("{weight} • {}", self.label),
            Arc::new(move |x: &E| weight.get() * p(x)),
        )
    }

    /// Pointwise maximum `x ↦ max(p(x), q(x))`, the join.
    ///
    /// Homogeneity uses `max(c·a, c·b) = c·max(a, b)` for `c = ‖a‖ ≥ 0`.
    #[must_use]
    pub fn sup(&self, other: &Self) -> Self {
        let (p, q) = (Arc::clone(&self.eval), Arc::clone(&other.eval));
        Self::from_parts(
            format!("({} ⊔ {})", self.label, other.label),
            Arc::new(move |x: &E| p(x).max(q(x))),
        )
    }

    /// Supremum of finitely many seminorms, folded with [`sup`](Self::sup)
    /// from [`zero`](Self::zero). The empty supremum is `zero`.
    #[must_use]
    pub fn finset_sup<'a, I>(members: I) -> Self
    where
        I: IntoIterator<Item = &'a Self>,
        S: 'a,
        E: 'a,
    {
        let evals: Vec<EvalFn<E>> = members.into_iter().map(|p| Arc::clone(&p.eval)).collect();
        if evals.is_empty() {
            return Self::zero();
        }
        let label = format!("⨆[{}]", evals.len());
        Self::from_parts(
            label,
            Arc::new(move |x: &E| evals.iter().fold(0.0, |acc, p| acc.max(p(x)))),
        )
    }

    /// Composition `x ↦ p(f(x))` with a semilinear map `f : F → E`.
    ///
    /// # Caller obligations
    ///
    /// `f` must be additive and satisfy `f(a • x) = hom(a) • f(x)`. Because
    /// `hom` preserves norms, `p(f(a • x)) = ‖a‖ · p(f(x))`.
    pub fn comp<S2, F, H, L>(&self, hom: H, f: L) -> Seminorm<S2, F>
    where
        S2: NormedScalar,
        F: Module<S2>,
        H: IsometricRingHom<S2, S>,
        L: Fn(&F) -> E + Send + Sync + 'static,
    {
        // The homomorphism only certifies the scalar change.
        let _ = hom;
        let p = Arc::clone(&self.eval);
        Seminorm::from_parts(
            format!("{} ∘ f", self.label),
            Arc::new(move |x: &F| p(&f(x))),
        )
    }
}

impl<S: NormedField, E: Module<S>> Seminorm<S, E> {
    /// Builds a seminorm from a map with only a one-sided homogeneity bound.
    ///
    /// # Caller obligations
    ///
    /// * `f(0) = 0`
    /// * `f(x + y) ≤ f(x) + f(y)`
    /// * `f(r • x) ≤ ‖r‖ · f(x)`
    ///
    /// Over a field the bound is automatically an equality: for `r ≠ 0`,
    /// applying it at `(r⁻¹, r • x)` gives `f(x) ≤ ‖r‖⁻¹ · f(r • x)`, and
    /// multiplying by `‖r‖ > 0` yields the reverse inequality. For `r = 0`
    /// both sides are `f(0) = 0`. The result therefore satisfies the same
    /// invariants as [`of`](Self::of).
    pub fn of_smul_le<F>(label: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&E) -> f64 + Send + Sync + 'static,
    {
        Self::of(label, f)
    }

    /// Infimal convolution `x ↦ inf_u p(u) + q(x − u)`, the meet.
    ///
    /// The candidate values are bounded below by 0, so the infimum exists;
    /// it is computed with the domain's default [`InfimumSearch`].
    #[must_use]
    pub fn inf(&self, other: &Self) -> Self
    where
        E: InfimumDomain<S>,
    {
        self.inf_with(other, E::Search::default())
    }

    /// Infimal convolution computed with an explicit search strategy.
    ///
    /// The result never exceeds `min(p(x), q(x))` (candidates `u = x` and
    /// `u = 0`), so `p ⊓ q ≤ p` and `p ⊓ q ≤ q` hold exactly whatever the
    /// strategy. How close it gets to the true infimum depends on the
    /// strategy; see [`EndpointSearch`], [`NestedLineSearch`] and [`CompassSearch`].
    #[must_use]
    pub fn inf_with<Q>(&self, other: &Self, search: Q) -> Self
    where
        Q: InfimumSearch<S, E>,
    {
        let (p, q) = (Arc::clone(&self.eval), Arc::clone(&other.eval));
        Self::from_parts(
            format!("({} ⊓ {})", self.label, other.label),
            Arc::new(move |x: &E| {
                let objective = |u: &E| p(u) + q(&x.vsub(u));
                search.infimum(x, &objective).max(0.0)
            }),
        )
    }
}

impl<S: NormedScalar, E: Module<S>> Default for Seminorm<S, E> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<S: NormedScalar, E: Module<S>> core::ops::Add for Seminorm<S, E> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Seminorm::add(&self, &rhs)
    }
}

impl<S: NormedScalar, E: Module<S>> core::ops::Add for &Seminorm<S, E> {
    type Output = Seminorm<S, E>;

    fn add(self, rhs: Self) -> Seminorm<S, E> {
        Seminorm::add(self, rhs)
    }
}
