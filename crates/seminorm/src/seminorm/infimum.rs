//! Search strategies for the infimal convolution.
//!
//! The meet `(p ⊓ q)(x) = inf_u p(u) + q(x − u)` ranges over the whole
//! space. The objective `u ↦ p(u) + q(x − u)` is convex (both terms are),
//! non-negative, and equals `p(x)` at `u = x` and `q(x)` at `u = 0`.
//!
//! | Strategy | Candidates | Exact when |
//! |----------|------------|------------|
//! | [`EndpointSearch`] | `u ∈ {0, x}` | one-dimensional spaces, comparable seminorms |
//! | [`NestedLineSearch`] | nested line searches over a basis | any convex objective on ℝⁿ, small `n` |
//! | [`CompassSearch`] | pattern search from the better endpoint | smooth objectives; may stop at a kink |
//!
//! All start from the endpoints, so the result is always at most
//! `min(p(x), q(x))`.

use crate::core::{AmbientNorm, Basis, Module, NormedScalar};

/// Computes `inf_u objective(u)` for the infimal convolution at `x`.
pub trait InfimumSearch<S: NormedScalar, E: Module<S>>: Send + Sync + 'static {
    /// Infimum of `objective` over the module, for the convolution at `x`.
    fn infimum(&self, x: &E, objective: &dyn Fn(&E) -> f64) -> f64;
}

/// A module with a canonical infimum search.
pub trait InfimumDomain<S: NormedScalar>: Module<S> {
    /// Strategy used by [`Seminorm::inf`](crate::Seminorm::inf).
    type Search: InfimumSearch<S, Self> + Default;
}

/// Minimum over the two endpoints `u = 0` and `u = x`.
///
/// On a line every seminorm is `c·|x|`, so the objective is piecewise
/// linear with its minimum at an endpoint. When `p ≤ q` the infimum is
/// `p(x) ≥ inf_u p(u) + p(x − u)` attained at `u = x`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndpointSearch;

impl<S: NormedScalar, E: Module<S>> InfimumSearch<S, E> for EndpointSearch {
    fn infimum(&self, x: &E, objective: &dyn Fn(&E) -> f64) -> f64 {
        objective(&E::zero()).min(objective(x))
    }
}

/// Derivative-free compass search over a coordinate basis.
///
/// Starts at the better endpoint and polls `±eᵢ` and `±eᵢ ± eⱼ` at the
/// current step, moving on the first improvement and halving the step
/// when no direction improves. The step starts at
/// `initial_step · max(best, 1)` and the search stops once it falls below
/// `min_step · max(best, 1)` or after `max_evaluations` objective calls.
///
/// Cheap, but only an upper bound: at a kink whose descent cone contains
/// none of the polled directions (a valley of `|u₀ − 2.5u₁| + |1 − u₀ + 2.4u₁|`
/// for instance) it stops early, and the result need not be subadditive.
/// [`NestedLineSearch`] is the exact default on `[f64; N]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompassSearch {
    /// Initial step, relative to the starting objective value.
    pub initial_step: f64,
    /// Termination step, relative to the current objective value.
    pub min_step: f64,
    /// Budget of objective evaluations.
    pub max_evaluations: usize,
}

impl Default for CompassSearch {
    fn default() -> Self {
        Self {
            initial_step: 1.0,
            min_step: 1e-10,
            max_evaluations: 20_000,
        }
    }
}

impl CompassSearch {
    fn directions<E: Module<f64> + Basis>() -> Vec<E> {
        let basis = E::basis();
        let mut dirs = Vec::with_capacity(2 * basis.len() * basis.len());
        for e in &basis {
            dirs.push(e.clone());
            dirs.push(e.vneg());
        }
        for (i, a) in basis.iter().enumerate() {
            for b in &basis[i + 1..] {
                let plus = a.vadd(b);
                let minus = a.vsub(b);
                dirs.push(plus.vneg());
                dirs.push(plus);
                dirs.push(minus.vneg());
                dirs.push(minus);
            }
        }
        dirs
    }
}

impl<E: Module<f64> + Basis> InfimumSearch<f64, E> for CompassSearch {
    fn infimum(&self, x: &E, objective: &dyn Fn(&E) -> f64) -> f64 {
        let origin = E::zero();
        let at_origin = objective(&origin);
        let at_x = objective(x);
        let (mut best_u, mut best) = if at_x < at_origin {
            (x.clone(), at_x)
        } else {
            (origin, at_origin)
        };
        if best <= 0.0 || !best.is_finite() {
            return best;
        }

        let directions = Self::directions::<E>();
        let mut step = self.initial_step * best.max(1.0);
        let mut evaluations = 2usize;

        while step >= self.min_step * best.max(1.0) && evaluations < self.max_evaluations {
            let mut improved = false;
            for d in &directions {
                let candidate = best_u.vadd(&d.smul(&step));
                let value = objective(&candidate);
                evaluations += 1;
                if value < best {
                    best = value;
                    best_u = candidate;
                    improved = true;
                    break;
                }
                if evaluations >= self.max_evaluations {
                    break;
                }
            }
            if !improved {
                step *= 0.5;
            }
        }
        best
    }
}

/// `1 / φ`, the golden-section shrink factor.
const GOLDEN_RATIO_CONJUGATE: f64 = 0.618_033_988_749_894_9;

/// Exact minimisation by nested line searches over a coordinate basis.
///
/// For a convex `f`, `u₀ ↦ min_{u₁, …} f(u₀, u₁, …)` is convex again, so
/// one line search per coordinate, nested, reaches the infimum of the whole
/// objective, kinks and off-axis valleys included. Each line search
/// brackets a minimum by doubling its step from `‖x‖` outwards, then
/// narrows the bracket by golden sections until its width is below
/// `tolerance · (|a| + |c| + ‖x‖)`.
///
/// Every step is a multiple of `‖x‖`, so the search commutes with scaling
/// `x`. A line search is about 60 evaluations, and the nesting multiplies
/// them, so evaluations grow as `60ᴺ`: meant for the plane and ℝ³.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NestedLineSearch {
    /// Relative bracket width at which a line search stops.
    pub tolerance: f64,
    /// Step doublings allowed while bracketing a minimum.
    pub max_expansions: usize,
    /// Golden-section iterations allowed per line search.
    pub max_iterations: usize,
}

impl Default for NestedLineSearch {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_expansions: 128,
            max_iterations: 200,
        }
    }
}

impl NestedLineSearch {
    /// Minimises `f` over `base + span(axes)`, returning the best point.
    fn minimize<E: Module<f64>>(
        &self,
        axes: &[E],
        base: &E,
        step: f64,
        objective: &dyn Fn(&E) -> f64,
    ) -> (E, f64) {
        let Some((axis, rest)) = axes.split_first() else {
            return (base.clone(), objective(base));
        };
        self.line_minimum(step, |t| {
            let point = base.vadd(&axis.smul(&t));
            self.minimize(rest, &point, step, objective)
        })
    }

    /// Minimises the convex `t ↦ eval(t).1` over ℝ.
    ///
    /// Returns the best evaluation seen, which is never worse than `t = 0`.
    fn line_minimum<T, F>(&self, step: f64, eval: F) -> (T, f64)
    where
        F: Fn(f64) -> (T, f64),
    {
        let mut best = eval(0.0);
        let sample = |t: f64, best: &mut (T, f64)| {
            let (point, value) = eval(t);
            if value < best.1 {
                *best = (point, value);
            }
            value
        };

        let at_zero = best.1;
        let forward = sample(step, &mut best);
        let descent = if forward < at_zero {
            Some((step, forward))
        } else {
            let backward = sample(-step, &mut best);
            (backward < at_zero).then_some((-step, backward))
        };

        // Bracket [a, c] around a point no higher than either end.
        let (mut a, mut c) = match descent {
            None => (-step, step),
            Some((first, first_value)) => {
                let (mut low, mut mid, mut mid_value) = (0.0_f64, first, first_value);
                let mut expansions = 0;
                loop {
                    let high = 2.0 * mid;
                    if !high.is_finite() || expansions >= self.max_expansions {
                        // Still descending: no bracket, keep the best seen.
                        return best;
                    }
                    let high_value = sample(high, &mut best);
                    if high_value >= mid_value {
                        break (low.min(high), low.max(high));
                    }
                    low = mid;
                    mid = high;
                    mid_value = high_value;
                    expansions += 1;
                }
            }
        };

        let mut x1 = c - GOLDEN_RATIO_CONJUGATE * (c - a);
        let mut x2 = a + GOLDEN_RATIO_CONJUGATE * (c - a);
        let mut f1 = sample(x1, &mut best);
        let mut f2 = sample(x2, &mut best);
        for _ in 0..self.max_iterations {
            if c - a <= self.tolerance * (a.abs() + c.abs() + step) {
                break;
            }
            if f1 <= f2 {
                c = x2;
                x2 = x1;
                f2 = f1;
                x1 = c - GOLDEN_RATIO_CONJUGATE * (c - a);
                f1 = sample(x1, &mut best);
            } else {
                a = x1;
                x1 = x2;
                f1 = f2;
                x2 = a + GOLDEN_RATIO_CONJUGATE * (c - a);
                f2 = sample(x2, &mut best);
            }
        }
        best
    }
}

impl<E: Module<f64> + Basis + AmbientNorm> InfimumSearch<f64, E> for NestedLineSearch {
    fn infimum(&self, x: &E, objective: &dyn Fn(&E) -> f64) -> f64 {
        let origin = E::zero();
        let at_origin = objective(&origin);
        let at_x = objective(x);
        let (start, best) = if at_x < at_origin {
            (x.clone(), at_x)
        } else {
            (origin, at_origin)
        };
        let step = x.ambient_norm();
        if best <= 0.0 || !best.is_finite() || !(step > 0.0 && step.is_finite()) {
            return best;
        }
        let (_, value) = self.minimize(&E::basis(), &start, step, objective);
        value.min(best)
    }
}

impl InfimumDomain<f64> for f64 {
    type Search = EndpointSearch;
}

impl<const N: usize> InfimumDomain<f64> for [f64; N] {
    type Search = NestedLineSearch;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_search_takes_the_smaller_endpoint() {
        let p = |u: &f64| u.abs();
        let q = |v: &f64| 3.0 * v.abs();
        let x = 2.0;
        let objective = |u: &f64| p(u) + q(&(x - u));
        let inf = InfimumSearch::<f64, f64>::infimum(&EndpointSearch, &x, &objective);
        assert_eq!(inf, 2.0);
    }

    #[test]
    fn compass_search_finds_off_segment_minimum() {
        // p = |x₀| + 2|x₁|, q = 2|x₀| + |x₁|: the meet is the ℓ¹ norm.
        let p = |u: &[f64; 2]| u[0].abs() + 2.0 * u[1].abs();
        let q = |v: &[f64; 2]| 2.0 * v[0].abs() + v[1].abs();
        let x = [1.0, 1.0];
        let objective = |u: &[f64; 2]| p(u) + q(&[x[0] - u[0], x[1] - u[1]]);
        let inf = CompassSearch::default().infimum(&x, &objective);
        assert!((inf - 2.0).abs() < 1e-6, "inf = {inf}");
    }

    #[test]
    fn compass_search_respects_its_budget() {
        let search = CompassSearch {
            max_evaluations: 3,
            ..CompassSearch::default()
        };
        let objective = |u: &[f64; 2]| (u[0] - 0.3).abs() + (u[1] + 0.7).abs() + 1.0;
        let inf = search.infimum(&[1.0, 1.0], &objective);
        // Never worse than the endpoints.
        assert!(inf <= objective(&[0.0, 0.0]).min(objective(&[1.0, 1.0])));
    }

    fn rank_one(a: [f64; 2]) -> impl Fn(&[f64; 2]) -> f64 {
        move |u: &[f64; 2]| (a[0] * u[0] + a[1] * u[1]).abs()
    }

    #[test]
    fn nested_search_follows_an_off_axis_valley() {
        // Kernels (2.5, 1) and (2.4, 1) meet the decomposition
        // (1, 0) = (25, 10) + (−24, −10), so the meet vanishes there.
        let p = rank_one([1.0, -2.5]);
        let q = rank_one([1.0, -2.4]);
        let x = [1.0, 0.0];
        let objective = |u: &[f64; 2]| p(u) + q(&[x[0] - u[0], x[1] - u[1]]);
        assert!(objective(&[25.0, 10.0]) < 1e-12);

        let inf = NestedLineSearch::default().infimum(&x, &objective);
        assert!(inf < 1e-9, "inf = {inf}");
        // The compass search stalls at the starting kink.
        let stalled = CompassSearch::default().infimum(&x, &objective);
        assert!(stalled > 0.5, "stalled = {stalled}");
    }

    #[test]
    fn nested_search_is_exact_on_a_polyhedral_meet() {
        let p = |u: &[f64; 2]| u[0].abs() + 2.0 * u[1].abs();
        let q = |v: &[f64; 2]| 2.0 * v[0].abs() + v[1].abs();
        for x in [[1.0, 1.0], [-3.0, 0.5], [0.0, 7.0], [1e-6, -2e-6]] {
            let objective = |u: &[f64; 2]| p(u) + q(&[x[0] - u[0], x[1] - u[1]]);
            let inf = NestedLineSearch::default().infimum(&x, &objective);
            let expected = x[0].abs() + x[1].abs();
            assert!((inf - expected).abs() <= 1e-9 * expected, "x = {x:?}: {inf} vs {expected}");
        }
    }

    #[test]
    fn nested_search_keeps_parallel_kernels() {
        // b = 3a: the meet is |a·x|, attained at u = x.
        let p = rank_one([1.0, 2.0]);
        let q = rank_one([3.0, 6.0]);
        let x = [0.5, -2.0];
        let objective = |u: &[f64; 2]| p(u) + q(&[x[0] - u[0], x[1] - u[1]]);
        let inf = NestedLineSearch::default().infimum(&x, &objective);
        assert!((inf - 3.5).abs() < 1e-9, "inf = {inf}");
    }

    #[test]
    fn nested_search_at_the_origin_is_zero() {
        let objective = |u: &[f64; 3]| u.iter().map(|v| v.abs()).sum::<f64>();
        assert_eq!(NestedLineSearch::default().infimum(&[0.0; 3], &objective), 0.0);
    }

    #[test]
    fn line_minimum_brackets_distant_minima() {
        let search = NestedLineSearch::default();
        let (t, value) = search.line_minimum(1.0, |t| (t, (t - 1000.0).abs() + 0.5));
        assert!((t - 1000.0).abs() < 1e-6 && (value - 0.5).abs() < 1e-6);
        let (t, _) = search.line_minimum(1.0, |t| (t, (t + 3.25).abs()));
        assert!((t + 3.25).abs() < 1e-9);
    }

    #[test]
    fn directions_span_axes_and_diagonals() {
        let dirs = CompassSearch::directions::<[f64; 3]>();
        assert_eq!(dirs.len(), 6 + 12);
        assert!(dirs.contains(&[1.0, -1.0, 0.0]));
        assert!(dirs.contains(&[0.0, 0.0, -1.0]));
    }
}
