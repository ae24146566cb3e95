//! Potential-field path planning around an elliptical obstacle
//!
//! The robot is treated as a point that follows the combined field of an
//! attractive pull toward the goal and a repulsive push away from the
//! obstacle. Positions are advanced with explicit Euler steps,
//! `p ← p + dt · F(p)`, for a fixed number of steps. There is no velocity
//! state: this is a first-order, field-following model.

pub mod config;
pub mod forces;

pub use config::{MAX_STEPS, NearSingularity, PlannerConfig};
pub use forces::{attractive_force, repulsive_force, total_force};

use tracing::{debug, trace, warn};

use self::forces::sample_field;
use super::obstacle::EllipticalObstacle;
use super::planner::PathPlanner;
use super::trajectory::Trajectory;
use crate::common::types::{Point2D, is_finite};
use crate::error::PlannerError;

/// Potential-field planner for a single elliptical obstacle
#[derive(Debug, Clone)]
pub struct PotentialFieldPlanner {
    obstacle: EllipticalObstacle,
    config: PlannerConfig,
}

impl PotentialFieldPlanner {
    /// Create a new planner, rejecting an invalid configuration up front
    pub fn new(obstacle: EllipticalObstacle, config: PlannerConfig) -> Result<Self, PlannerError> {
        config.validate()?;
        Ok(PotentialFieldPlanner { obstacle, config })
    }

    pub fn obstacle(&self) -> &EllipticalObstacle {
        &self.obstacle
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Integrate the field from `start` toward `goal`.
    ///
    /// The result always holds `steps + 1` points, starting at `start`. A
    /// singular repulsive force or a non-finite update aborts the run.
    pub fn plan(&self, start: Point2D, goal: Point2D) -> Result<Trajectory, PlannerError> {
        if !is_finite(&start) {
            return Err(PlannerError::invalid("start", "coordinates must be finite"));
        }
        if !is_finite(&goal) {
            return Err(PlannerError::invalid("goal", "coordinates must be finite"));
        }

        let config = &self.config;
        debug!(
            start = ?(start.x, start.y),
            goal = ?(goal.x, goal.y),
            steps = config.steps,
            "planning potential field trajectory"
        );

        let mut position = start;
        let mut points = Vec::with_capacity(config.steps + 1);
        points.push(position);
        let mut cap_reported = false;

        for step in 0..config.steps {
            let sample = sample_field(&position, &goal, &self.obstacle, config)
                .ok_or(PlannerError::Singularity { step, position })?;

            if sample.repulsion_active {
                trace!(
                    step,
                    f = self.obstacle.implicit_value(&position),
                    "repulsion active"
                );
            }
            if sample.capped && !cap_reported {
                warn!(step, max_force = ?config.max_force, "force cap engaged");
                cap_reported = true;
            }

            position += sample.force * config.dt;
            if !is_finite(&position) {
                return Err(PlannerError::NonFinite { step });
            }
            points.push(position);
        }

        let trajectory = Trajectory::from_points(points);
        debug!(
            points = trajectory.len(),
            distance_to_goal = trajectory.distance_to(&goal),
            "potential field trajectory complete"
        );
        Ok(trajectory)
    }
}

impl PathPlanner for PotentialFieldPlanner {
    fn plan_path(&self, start: Point2D, goal: Point2D) -> Result<Trajectory, PlannerError> {
        self.plan(start, goal)
    }

    fn name(&self) -> &str {
        "PotentialField"
    }
}

/// Plan a trajectory from `start` to `goal` around `obstacle`.
///
/// Pure and deterministic: identical inputs give bit-identical trajectories.
pub fn plan(
    start: Point2D,
    goal: Point2D,
    obstacle: EllipticalObstacle,
    config: PlannerConfig,
) -> Result<Trajectory, PlannerError> {
    PotentialFieldPlanner::new(obstacle, config)?.plan(start, goal)
}
