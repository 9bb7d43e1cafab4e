//! Balls of suprema as intersections of balls.

use super::{Ball, ClosedBall, Region};
use crate::core::{Module, NormedScalar};
use crate::error::GeometryError;
use crate::seminorm::Seminorm;

/// Intersection of regions. The empty intersection is the whole space.
#[derive(Debug, Clone)]
pub struct BallIntersection<B> {
    members: Vec<B>,
}

impl<B> BallIntersection<B> {
    /// Intersection of `members`.
    pub fn new(members: Vec<B>) -> Self {
        Self { members }
    }

    /// The intersected regions.
    pub fn members(&self) -> &[B] {
        &self.members
    }

    /// Whether no region is intersected (so every point is contained).
    pub fn is_universe(&self) -> bool {
        self.members.is_empty()
    }
}

impl<E, B: Region<E>> Region<E> for BallIntersection<B> {
    fn contains(&self, y: &E) -> bool {
        self.members.iter().all(|b| b.contains(y))
    }
}

/// `ball (p ⊔ q) x r` together with the equal set `ball p x r ∩ ball q x r`.
pub fn ball_sup<S, E>(
    p: &Seminorm<S, E>,
    q: &Seminorm<S, E>,
    center: &E,
    radius: f64,
) -> (Ball<S, E>, BallIntersection<Ball<S, E>>)
where
    S: NormedScalar,
    E: Module<S>,
{
    let joined = Ball::new(p.sup(q), center.clone(), radius);
    let parts = BallIntersection::new(vec![
        Ball::new(p.clone(), center.clone(), radius),
        Ball::new(q.clone(), center.clone(), radius),
    ]);
    (joined, parts)
}

/// `closedBall (p ⊔ q) x r` together with `closedBall p x r ∩ closedBall q x r`.
pub fn closed_ball_sup<S, E>(
    p: &Seminorm<S, E>,
    q: &Seminorm<S, E>,
    center: &E,
    radius: f64,
) -> (ClosedBall<S, E>, BallIntersection<ClosedBall<S, E>>)
where
    S: NormedScalar,
    E: Module<S>,
{
    let joined = ClosedBall::new(p.sup(q), center.clone(), radius);
    let parts = BallIntersection::new(vec![
        ClosedBall::new(p.clone(), center.clone(), radius),
        ClosedBall::new(q.clone(), center.clone(), radius),
    ]);
    (joined, parts)
}

/// `ball (⨆ pᵢ) x r` together with `⋂ ball pᵢ x r`.
///
/// The radius must be positive: for an empty family the supremum is `0`,
/// whose ball of radius `r > 0` is the whole space, matching the empty
/// intersection.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveRadius`] if `radius ≤ 0`.
pub fn ball_finset_sup<S, E>(
    family: &[Seminorm<S, E>],
    center: &E,
    radius: f64,
) -> Result<(Ball<S, E>, BallIntersection<Ball<S, E>>), GeometryError>
where
    S: NormedScalar,
    E: Module<S>,
{
    if radius.is_nan() || radius <= 0.0 {
        return Err(GeometryError::NonPositiveRadius { radius });
    }
    let joined = Ball::new(Seminorm::finset_sup(family), center.clone(), radius);
    let parts = family
        .iter()
        .map(|p| Ball::new(p.clone(), center.clone(), radius))
        .collect();
    Ok((joined, BallIntersection::new(parts)))
}

/// `closedBall (⨆ pᵢ) x r` together with `⋂ closedBall pᵢ x r`.
///
/// # Errors
///
/// Returns [`GeometryError::NonPositiveRadius`] if `radius ≤ 0`.
pub fn closed_ball_finset_sup<S, E>(
    family: &[Seminorm<S, E>],
    center: &E,
    radius: f64,
) -> Result<(ClosedBall<S, E>, BallIntersection<ClosedBall<S, E>>), GeometryError>
where
    S: NormedScalar,
    E: Module<S>,
{
    if radius.is_nan() || radius <= 0.0 {
        return Err(GeometryError::NonPositiveRadius { radius });
    }
    let joined = ClosedBall::new(Seminorm::finset_sup(family), center.clone(), radius);
    let parts = family
        .iter()
        .map(|p| ClosedBall::new(p.clone(), center.clone(), radius))
        .collect();
    Ok((joined, BallIntersection::new(parts)))
}
