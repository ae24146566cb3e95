//! Path planning module

use tracing::debug;

use super::trajectory::Trajectory;
use crate::common::types::{Point2D, is_finite};
use crate::error::PlannerError;

/// Trait for path planning algorithms
pub trait PathPlanner: Send + Sync {
    /// Plan a path from start to goal
    fn plan_path(&self, start: Point2D, goal: Point2D) -> Result<Trajectory, PlannerError>;

    /// Get the name of this planner
    fn name(&self) -> &str;
}

/// Straight-line baseline planner
///
/// Samples the segment from start to goal at evenly spaced points, ignoring
/// any obstacle. Pair it with [`super::collision::check_collisions`] to see
/// where the direct route would hit.
#[derive(Debug, Clone)]
pub struct StraightLinePlanner {
    samples: usize,
}

impl StraightLinePlanner {
    /// Create a new straight-line planner with `samples` points per path
    pub fn new(samples: usize) -> Result<Self, PlannerError> {
        if samples < 2 {
            return Err(PlannerError::invalid("samples", "need at least start and goal"));
        }
        Ok(StraightLinePlanner { samples })
    }

    pub fn samples(&self) -> usize {
        self.samples
    }
}

impl Default for StraightLinePlanner {
    fn default() -> Self {
        StraightLinePlanner { samples: 200 }
    }
}

impl PathPlanner for StraightLinePlanner {
    fn plan_path(&self, start: Point2D, goal: Point2D) -> Result<Trajectory, PlannerError> {
        if !is_finite(&start) {
            return Err(PlannerError::invalid("start", "coordinates must be finite"));
        }
        if !is_finite(&goal) {
            return Err(PlannerError::invalid("goal", "coordinates must be finite"));
        }

        let last = (self.samples - 1) as f64;
        let points: Vec<Point2D> = (0..self.samples)
            .map(|i| {
                if i == self.samples - 1 {
                    // land exactly on the goal
                    goal
                } else {
                    start + (goal - start) * (i as f64 / last)
                }
            })
            .collect();

        debug!(samples = points.len(), "planned straight line");
        Ok(Trajectory::from_points(points))
    }

    fn name(&self) -> &str {
        "StraightLine"
    }
}
