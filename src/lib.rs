//! Potential-field path planning around an elliptical obstacle
//!
//! A point robot is pulled toward its goal and pushed away from an
//! axis-aligned ellipse centered at the origin. [`plan`] integrates the field
//! for a fixed number of steps and returns the [`Trajectory`] for a renderer
//! to draw or animate.

pub mod common;
pub mod error;
pub mod navigation;

pub use crate::common::types::{Force2D, Point2D, point};
pub use crate::error::PlannerError;
pub use crate::navigation::NavigationStack;
pub use crate::navigation::obstacle::EllipticalObstacle;
pub use crate::navigation::planner::{PathPlanner, StraightLinePlanner};
pub use crate::navigation::potential_field::{
    NearSingularity, PlannerConfig, PotentialFieldPlanner, plan,
};
pub use crate::navigation::trajectory::{Frame, Trajectory};
