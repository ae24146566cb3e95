//! Planned trajectory handed to the display collaborator

use std::ops::Index;

use crate::common::types::Point2D;

/// An ordered, immutable sequence of positions.
///
/// The first entry is the start point. A renderer draws it either as a whole
/// polyline or frame by frame through [`Trajectory::frame`].
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    points: Vec<Point2D>,
}

/// One animation frame: the current position and the path walked so far
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub index: usize,
    pub current: Point2D,
    pub path: &'a [Point2D],
}

impl Trajectory {
    /// Only planners build trajectories; `points` must be non-empty.
    pub(crate) fn from_points(points: Vec<Point2D>) -> Self {
        debug_assert!(!points.is_empty());
        Trajectory { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point2D> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point2D> {
        self.points.iter()
    }

    /// First position
    pub fn start(&self) -> Point2D {
        self.points[0]
    }

    /// Last position
    pub fn end(&self) -> Point2D {
        self.points[self.points.len() - 1]
    }

    /// Frame `index` of an animation over this trajectory
    pub fn frame(&self, index: usize) -> Option<Frame<'_>> {
        let current = *self.points.get(index)?;
        Some(Frame {
            index,
            current,
            path: &self.points[..=index],
        })
    }

    /// All frames in order
    pub fn frames(&self) -> impl Iterator<Item = Frame<'_>> {
        (0..self.points.len()).filter_map(move |i| self.frame(i))
    }

    /// Total polyline length
    pub fn path_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .sum()
    }

    /// Euclidean distance from the last position to `target`
    pub fn distance_to(&self, target: &Point2D) -> f64 {
        (self.end() - target).norm()
    }
}

impl Index<usize> for Trajectory {
    type Output = Point2D;

    fn index(&self, index: usize) -> &Point2D {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::point;

    fn sample() -> Trajectory {
        Trajectory::from_points(vec![point(0.0, 0.0), point(3.0, 4.0), point(3.0, 0.0)])
    }

    #[test]
    fn test_accessors() {
        let traj = sample();
        assert_eq!(traj.len(), 3);
        assert!(!traj.is_empty());
        assert_eq!(traj.start(), point(0.0, 0.0));
        assert_eq!(traj.end(), point(3.0, 0.0));
        assert_eq!(traj[1], point(3.0, 4.0));
        assert!(traj.get(3).is_none());
        assert_eq!(traj.iter().count(), 3);
    }

    #[test]
    fn test_frames_grow() {
        let traj = sample();
        let frame = traj.frame(1).unwrap();
        assert_eq!(frame.current, point(3.0, 4.0));
        assert_eq!(frame.path.len(), 2);
        assert!(traj.frame(3).is_none());

        let lens: Vec<usize> = traj.frames().map(|f| f.path.len()).collect();
        assert_eq!(lens, vec![1, 2, 3]);
    }

    #[test]
    fn test_lengths() {
        let traj = sample();
        assert!((traj.path_length() - 9.0).abs() < 1e-12);
        assert!((traj.distance_to(&point(3.0, 4.0)) - 4.0).abs() < 1e-12);
    }
}
