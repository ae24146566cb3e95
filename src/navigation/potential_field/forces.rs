//! Attractive and repulsive force law

use super::config::{NearSingularity, PlannerConfig};
use crate::common::types::{Force2D, Point2D};
use crate::navigation::obstacle::EllipticalObstacle;

/// Force pulling `position` toward `goal`, linear in the displacement
pub fn attractive_force(position: &Point2D, goal: &Point2D, k_attr: f64) -> Force2D {
    (goal - position) * k_attr
}

/// Force pushing `position` away from the obstacle.
///
/// Zero outside the influence region `f >= d0`. Inside it the magnitude factor
/// is `k_rep · (1/f − 1/d0) · 1/f²` applied along the gradient of `f`, which
/// vanishes continuously at `f = d0`.
///
/// A zero `k_rep` switches repulsion off everywhere, the center included.
///
/// Returns `None` when the force is singular: `f` is exactly zero, below the
/// threshold of a [`NearSingularity::Reject`] policy, or so small that the
/// magnitude factor overflows.
pub fn repulsive_force(
    position: &Point2D,
    obstacle: &EllipticalObstacle,
    config: &PlannerConfig,
) -> Option<Force2D> {
    if config.k_rep == 0.0 {
        return Some(Force2D::zeros());
    }
    let f = obstacle.implicit_value(position);
    if f >= config.d0 {
        return Some(Force2D::zeros());
    }
    if f == 0.0 {
        return None;
    }

    let f = match config.near_singularity {
        NearSingularity::Unbounded => f,
        NearSingularity::Reject { min_value } => {
            if f < min_value {
                return None;
            }
            f
        }
        NearSingularity::Clamp { min_value } => f.max(min_value),
    };

    let factor = config.k_rep * (1.0 / f - 1.0 / config.d0) * (1.0 / (f * f));
    if !factor.is_finite() {
        return None;
    }
    Some(obstacle.gradient(position) * factor)
}

/// Result of evaluating the field at one position
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FieldSample {
    pub force: Force2D,
    pub repulsion_active: bool,
    pub capped: bool,
}

pub(crate) fn sample_field(
    position: &Point2D,
    goal: &Point2D,
    obstacle: &EllipticalObstacle,
    config: &PlannerConfig,
) -> Option<FieldSample> {
    let repulsive = repulsive_force(position, obstacle, config)?;
    let mut force = attractive_force(position, goal, config.k_attr) + repulsive;

    let mut capped = false;
    if let Some(max_force) = config.max_force {
        let magnitude = force.norm();
        if magnitude > max_force {
            force *= max_force / magnitude;
            capped = true;
        }
    }

    Some(FieldSample {
        force,
        repulsion_active: repulsive != Force2D::zeros(),
        capped,
    })
}

/// Combined force at `position`, after the optional magnitude cap.
///
/// Returns `None` when the repulsive term is singular.
pub fn total_force(
    position: &Point2D,
    goal: &Point2D,
    obstacle: &EllipticalObstacle,
    config: &PlannerConfig,
) -> Option<Force2D> {
    sample_field(position, goal, obstacle, config).map(|sample| sample.force)
}
