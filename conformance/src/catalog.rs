//! Concrete seminorms and sample points exercised by the validators.
//!
//! | Space | Seminorms |
//! |-------|-----------|
//! | `ℝ` | `|x|`, `3 • |x|`, `|x| ⊔ 2|x|`, `|x| ⊓ 2|x|` |
//! | `ℝ²` | `ℓ¹`, `ℓ²`, `ℓ∞`, weighted `ℓ¹`, projection `|x₀|`, sums, joins, finite suprema |

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use seminorm::norm_adapter::norm_seminorm;
use seminorm::{NonNegReal, Seminorm};

/// Seminorm on the real line.
pub type LineSeminorm = Seminorm<f64, f64>;

/// Seminorm on the plane.
pub type PlaneSeminorm = Seminorm<f64, [f64; 2]>;

/// Half-width of the sampling box.
pub const SAMPLE_RANGE: f64 = 10.0;

/// `|x|`.
pub fn abs() -> LineSeminorm {
    Seminorm::of("|x|", |x: &f64| x.abs())
}

/// `Σ |xᵢ|`.
pub fn l1() -> PlaneSeminorm {
    Seminorm::of("ℓ¹", |x: &[f64; 2]| x[0].abs() + x[1].abs())
}

/// Euclidean norm, through the ambient norm adapter.
pub fn l2() -> PlaneSeminorm {
    norm_seminorm::<f64, [f64; 2]>().relabel("ℓ²")
}

/// `max |xᵢ|`.
pub fn linf() -> PlaneSeminorm {
    Seminorm::of("ℓ∞", |x: &[f64; 2]| x[0].abs().max(x[1].abs()))
}

/// `w₀|x₀| + w₁|x₁|` with non-negative weights.
pub fn weighted(w0: NonNegReal, w1: NonNegReal) -> PlaneSeminorm {
    let (a, b) = (w0.get(), w1.get());
    Seminorm::of(format!("{a}|x₀| + {b}|x₁|"), move |x: &[f64; 2]| {
        a * x[0].abs() + b * x[1].abs()
    })
}

/// `|xᵢ|`, a seminorm with a nontrivial kernel.
pub fn projection(index: usize) -> PlaneSeminorm {
    let i = index.min(1);
    Seminorm::of(format!("|x{i}|"), move |x: &[f64; 2]| x[i].abs())
}

/// `|a · x|`, a rank-one seminorm whose kernel is the line `a⊥`.
pub fn functional(a: [f64; 2]) -> PlaneSeminorm {
    Seminorm::of(format!("|{}x₀ + {}x₁|", a[0], a[1]), move |x: &[f64; 2]| {
        (a[0] * x[0] + a[1] * x[1]).abs()
    })
}

/// Seminorms on the line, built with every algebra operation.
pub fn line_catalog() -> Vec<LineSeminorm> {
    vec![
        abs(),
        abs().smul(3u32),
        abs().sup(&abs().smul(2u32)),
        abs().inf(&abs().smul(2u32)),
        abs().add(&abs().smul(NonNegReal::abs(0.5))),
    ]
}

/// Seminorms on the plane, built with every algebra operation.
pub fn plane_catalog() -> Vec<PlaneSeminorm> {
    let two = NonNegReal::abs(2.0);
    let half = NonNegReal::abs(0.5);
    vec![
        l1(),
        l2(),
        linf(),
        weighted(two, half),
        projection(0),
        projection(1),
        l1().add(&projection(0)),
        l2().sup(&weighted(half, two)),
        Seminorm::finset_sup(&[l1(), l2(), linf(), projection(1)]),
        weighted(two, half).inf(&functional([1.0, -1.0])),
        PlaneSeminorm::zero(),
    ]
}

/// Reproducible sample points.
#[derive(Debug)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// A sampler seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A point of `[-SAMPLE_RANGE, SAMPLE_RANGE]`.
    pub fn scalar(&mut self) -> f64 {
        self.rng.gen_range(-SAMPLE_RANGE..=SAMPLE_RANGE)
    }

    /// A value of `[low, high)`.
    pub fn between(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    /// `n` points of the line, always including `0`.
    pub fn line_points(&mut self, n: usize) -> Vec<f64> {
        std::iter::once(0.0)
            .chain((1..n).map(|_| self.scalar()))
            .collect()
    }

    /// `n` points of the plane, always including the origin.
    pub fn plane_points(&mut self, n: usize) -> Vec<[f64; 2]> {
        std::iter::once([0.0, 0.0])
            .chain((1..n).map(|_| [self.scalar(), self.scalar()]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samplers_are_reproducible() {
        let a = Sampler::new(3).plane_points(8);
        let b = Sampler::new(3).plane_points(8);
        assert_eq!(a, b);
        assert_eq!(a[0], [0.0, 0.0]);
        assert!(a.iter().flatten().all(|v| v.abs() <= SAMPLE_RANGE));
    }

    #[test]
    fn catalog_values() {
        assert_eq!(l2().apply(&[3.0, 4.0]), 5.0);
        assert_eq!(linf().apply(&[3.0, -4.0]), 4.0);
        assert_eq!(projection(1).apply(&[3.0, -4.0]), 4.0);
        assert_eq!(weighted(NonNegReal::abs(2.0), NonNegReal::ZERO).apply(&[1.5, 9.0]), 3.0);
        assert!(line_catalog().iter().all(|p| p.apply(&0.0) == 0.0));
        assert_eq!(functional([1.0, -2.5]).apply(&[5.0, 2.0]), 0.0);
        assert_eq!(functional([2.0, 1.0]).apply(&[-1.0, 0.5]), 1.5);
        assert_eq!(plane_catalog().len(), 11);
    }
}
