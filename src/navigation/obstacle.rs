//! Elliptical obstacle
//!
//! An axis-aligned ellipse centered at the origin. The normalized implicit
//! function `f(x, y) = x²/a² + y²/b²` is 1 on the boundary, below 1 inside and
//! above 1 outside. The planner uses it both as a distance proxy and to decide
//! whether repulsion is active.

use std::f64::consts::PI;

use crate::common::types::{Point2D, point};
use crate::error::PlannerError;

/// Axis-aligned elliptical obstacle centered at the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalObstacle {
    a: f64, // semi-axis along x
    b: f64, // semi-axis along y
}

impl EllipticalObstacle {
    /// Create a new obstacle with semi-axes `a` (along x) and `b` (along y)
    pub fn new(a: f64, b: f64) -> Result<Self, PlannerError> {
        if !a.is_finite() || a <= 0.0 {
            return Err(PlannerError::invalid("a_obs", format!("semi-axis must be positive, got {}", a)));
        }
        if !b.is_finite() || b <= 0.0 {
            return Err(PlannerError::invalid("b_obs", format!("semi-axis must be positive, got {}", b)));
        }
        Ok(EllipticalObstacle { a, b })
    }

    /// Semi-axis along x
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Semi-axis along y
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Implicit function value at `p`
    pub fn implicit_value(&self, p: &Point2D) -> f64 {
        (p.x * p.x) / (self.a * self.a) + (p.y * p.y) / (self.b * self.b)
    }

    /// Gradient of the implicit function at `p`
    pub fn gradient(&self, p: &Point2D) -> Point2D {
        point(2.0 * p.x / (self.a * self.a), 2.0 * p.y / (self.b * self.b))
    }

    /// Check if `p` lies inside or on the obstacle
    pub fn contains(&self, p: &Point2D) -> bool {
        self.implicit_value(p) <= 1.0
    }

    /// Point on the boundary at parameter `theta`
    pub fn boundary_point(&self, theta: f64) -> Point2D {
        point(self.a * theta.cos(), self.b * theta.sin())
    }

    /// Sample the boundary as a closed curve.
    ///
    /// Returns `samples` points evenly spaced over `[0, 2π]`; the first and last
    /// points coincide. Fewer than two samples yields just the point at θ = 0.
    pub fn boundary(&self, samples: usize) -> Vec<Point2D> {
        if samples < 2 {
            return vec![self.boundary_point(0.0)];
        }
        let step = 2.0 * PI / (samples - 1) as f64;
        (0..samples)
            .map(|i| self.boundary_point(i as f64 * step))
            .collect()
    }

    /// Unit tangent at `boundary_point(theta)`, counter-clockwise.
    ///
    /// The tangent is perpendicular to `(cos θ / a, sin θ / b)`, the normal of
    /// the tangent line written in linear form.
    pub fn tangent_heading(&self, theta: f64) -> Point2D {
        let normal = point(theta.cos() / self.a, theta.sin() / self.b);
        let tangent = point(-normal.y, normal.x);
        // normal never vanishes for positive axes
        tangent / tangent.norm()
    }
}
