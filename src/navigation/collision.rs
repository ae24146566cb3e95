//! Collision detection against the elliptical obstacle
//!
//! A sample collides when its center lies inside or on the ellipse.

use super::obstacle::EllipticalObstacle;
use super::trajectory::Trajectory;

/// Per-sample collision result for a trajectory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionReport {
    inside: Vec<bool>,
}

impl CollisionReport {
    /// Whether sample `index` collides
    pub fn is_colliding(&self, index: usize) -> bool {
        self.inside.get(index).copied().unwrap_or(false)
    }

    /// Index of the first colliding sample
    pub fn first_collision(&self) -> Option<usize> {
        self.inside.iter().position(|&hit| hit)
    }

    pub fn collision_count(&self) -> usize {
        self.inside.iter().filter(|&&hit| hit).count()
    }

    pub fn is_collision_free(&self) -> bool {
        self.first_collision().is_none()
    }

    pub fn flags(&self) -> &[bool] {
        &self.inside
    }
}

/// Check every sample of `trajectory` against `obstacle`
pub fn check_collisions(trajectory: &Trajectory, obstacle: &EllipticalObstacle) -> CollisionReport {
    CollisionReport {
        inside: trajectory.iter().map(|p| obstacle.contains(p)).collect(),
    }
}
