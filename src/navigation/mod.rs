//! Navigation module: obstacle model, planners and their output
pub mod collision;
pub mod obstacle;
pub mod planner;
pub mod potential_field;
pub mod trajectory;

use tracing::info;

use self::collision::{CollisionReport, check_collisions};
use self::obstacle::EllipticalObstacle;
use self::planner::{PathPlanner, StraightLinePlanner};
use self::potential_field::{PlannerConfig, PotentialFieldPlanner};
use self::trajectory::Trajectory;
use crate::common::types::Point2D;
use crate::error::PlannerError;

/// Both planners run against the same obstacle
pub struct NavigationStack {
    obstacle: EllipticalObstacle,
    baseline: StraightLinePlanner,
    field: PotentialFieldPlanner,
}

/// Outcome of planning one start/goal pair with both planners
#[derive(Debug, Clone)]
pub struct PlanComparison {
    pub baseline: Trajectory,
    pub baseline_collisions: CollisionReport,
    pub field: Trajectory,
    pub field_collisions: CollisionReport,
    /// Smallest implicit value the field trajectory reaches
    pub field_min_value: f64,
}

impl NavigationStack {
    /// Create a new navigation stack
    pub fn new(
        obstacle: EllipticalObstacle,
        config: PlannerConfig,
        baseline_samples: usize,
    ) -> Result<Self, PlannerError> {
        Ok(NavigationStack {
            obstacle,
            baseline: StraightLinePlanner::new(baseline_samples)?,
            field: PotentialFieldPlanner::new(obstacle, config)?,
        })
    }

    pub fn obstacle(&self) -> &EllipticalObstacle {
        &self.obstacle
    }

    pub fn field_planner(&self) -> &PotentialFieldPlanner {
        &self.field
    }

    /// Plan with both planners and check each result for collisions
    pub fn compare(&self, start: Point2D, goal: Point2D) -> Result<PlanComparison, PlannerError> {
        let baseline = self.baseline.plan_path(start, goal)?;
        let baseline_collisions = check_collisions(&baseline, &self.obstacle);
        info!(
            planner = self.baseline.name(),
            points = baseline.len(),
            first_collision = ?baseline_collisions.first_collision(),
            "baseline planned"
        );

        let field = self.field.plan_path(start, goal)?;
        let field_collisions = check_collisions(&field, &self.obstacle);
        let field_min_value = field
            .iter()
            .map(|p| self.obstacle.implicit_value(p))
            .fold(f64::INFINITY, f64::min);
        info!(
            planner = self.field.name(),
            points = field.len(),
            distance_to_goal = field.distance_to(&goal),
            min_value = field_min_value,
            "potential field planned"
        );

        Ok(PlanComparison {
            baseline,
            baseline_collisions,
            field,
            field_collisions,
            field_min_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::point;

    #[test]
    fn test_compare_reference_scenario() {
        let obstacle = EllipticalObstacle::new(3.0, 2.0).unwrap();
        let stack = NavigationStack::new(obstacle, PlannerConfig::default(), 200).unwrap();
        let result = stack.compare(point(-7.0, -7.0), point(7.0, 7.0)).unwrap();

        assert!(!result.baseline_collisions.is_collision_free());
        assert_eq!(result.field.len(), 301);
        assert!(result.field_min_value > 0.0);
        assert_eq!(result.field_collisions.flags().len(), 301);
        assert_eq!(stack.obstacle().b(), 2.0);
        assert_eq!(stack.field_planner().config().steps, 300);
    }

    #[test]
    fn test_new_rejects_bad_parts() {
        let obstacle = EllipticalObstacle::new(3.0, 2.0).unwrap();
        assert!(NavigationStack::new(obstacle, PlannerConfig::default(), 1).is_err());
        let config = PlannerConfig {
            dt: 0.0,
            ..PlannerConfig::default()
        };
        assert!(NavigationStack::new(obstacle, config, 200).is_err());
    }
}
