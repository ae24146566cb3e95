//! Error types for planning operations.

use crate::common::types::Point2D;

/// Errors that can occur while planning a trajectory.
///
/// Configuration problems are reported before any integration starts.
/// Numerical failures abort the run; no partial trajectory is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlannerError {
    /// A configuration value or obstacle parameter was rejected.
    #[error("invalid {parameter}: {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        parameter: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The repulsive force is singular at the current position.
    ///
    /// The obstacle's implicit function is zero (or below the rejection
    /// threshold), so the `1/f` terms cannot be evaluated.
    #[error("singular repulsive force at step {step}, position ({:.6}, {:.6})", .position.x, .position.y)]
    Singularity {
        /// Integration step at which the force was evaluated.
        step: usize,
        /// Position where the force became singular.
        position: Point2D,
    },

    /// An update produced a non-finite coordinate.
    #[error("position became non-finite at step {step}")]
    NonFinite {
        /// Integration step that produced the bad position.
        step: usize,
    },
}

impl PlannerError {
    pub(crate) fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidConfig {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error was raised before integration began
    pub fn is_config_error(&self) -> bool {
        matches!(self, PlannerError::InvalidConfig { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::point;

    #[test]
    fn test_display_messages() {
        let err = PlannerError::invalid("dt", "must be positive");
        assert_eq!(err.to_string(), "invalid dt: must be positive");
        assert!(err.is_config_error());

        let err = PlannerError::Singularity {
            step: 0,
            position: point(0.0, 0.0),
        };
        assert!(err.to_string().contains("singular repulsive force"));
        assert!(!err.is_config_error());
    }
}
