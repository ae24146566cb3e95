//! Common utilities and types for potential-field planning

/// Common types and utilities used across the codebase
pub mod types {
    use nalgebra::Vector2;

    /// A 2D point
    pub type Point2D = Vector2<f64>;

    /// A 2D force vector
    pub type Force2D = Vector2<f64>;

    /// Build a point from its coordinates
    pub fn point(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    /// Whether both coordinates are finite
    pub fn is_finite(p: &Point2D) -> bool {
        p.x.is_finite() && p.y.is_finite()
    }
}
