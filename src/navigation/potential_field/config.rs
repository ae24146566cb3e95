//! Potential-field planner configuration

use std::collections::HashMap;

use crate::error::PlannerError;

/// What to do when the robot gets very close to the obstacle center.
///
/// The repulsive factor grows like `1/f³` as `f → 0`. Whatever the policy, an
/// implicit value of exactly zero is a singularity error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum NearSingularity {
    /// Evaluate the force law as written.
    #[default]
    Unbounded,
    /// Fail the run when `f` drops below `min_value`.
    Reject { min_value: f64 },
    /// Evaluate the repulsive magnitude at `max(f, min_value)`.
    Clamp { min_value: f64 },
}

/// Gains, threshold and integration settings for one planning run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    pub k_attr: f64,            // attractive gain
    pub k_rep: f64,             // repulsive gain, 0 disables repulsion
    pub d0: f64,                // repulsion is active while f < d0
    pub dt: f64,                // Euler step
    pub steps: usize,           // number of integration steps
    pub max_force: Option<f64>, // cap on the total force magnitude
    pub near_singularity: NearSingularity,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            k_attr: 1.0,
            k_rep: 10.0,
            d0: 1.5,
            dt: 0.05,
            steps: 300,
            max_force: None,
            near_singularity: NearSingularity::Unbounded,
        }
    }
}

/// Upper bound on `steps`; the trajectory holds `steps + 1` points in memory
pub const MAX_STEPS: usize = 10_000_000;

fn require_positive(parameter: &str, value: f64) -> Result<(), PlannerError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PlannerError::invalid(parameter, format!("must be positive and finite, got {}", value)));
    }
    Ok(())
}

impl PlannerConfig {
    /// Check every parameter before any integration starts
    pub fn validate(&self) -> Result<(), PlannerError> {
        require_positive("k_attr", self.k_attr)?;
        if !self.k_rep.is_finite() || self.k_rep < 0.0 {
            return Err(PlannerError::invalid("k_rep", format!("must be non-negative and finite, got {}", self.k_rep)));
        }
        require_positive("d0", self.d0)?;
        require_positive("dt", self.dt)?;
        if self.steps == 0 {
            return Err(PlannerError::invalid("steps", "must be at least 1"));
        }
        if self.steps > MAX_STEPS {
            return Err(PlannerError::invalid("steps", format!("must be at most {}, got {}", MAX_STEPS, self.steps)));
        }
        if let Some(max_force) = self.max_force {
            require_positive("max_force", max_force)?;
        }
        match self.near_singularity {
            NearSingularity::Unbounded => {}
            NearSingularity::Reject { min_value } | NearSingularity::Clamp { min_value } => {
                require_positive("near_singularity.min_value", min_value)?;
                if min_value >= self.d0 {
                    return Err(PlannerError::invalid(
                        "near_singularity.min_value",
                        format!("must be below d0 ({}), got {}", self.d0, min_value),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Override parameters from a name/value map.
    ///
    /// Recognized keys: `k_attr`, `k_rep`, `d0`, `dt`, `steps`, `max_force`.
    /// The configuration is left untouched if any key or value is rejected.
    pub fn configure(&mut self, params: &HashMap<String, f64>) -> Result<(), PlannerError> {
        let mut updated = *self;
        for (key, &value) in params {
            match key.as_str() {
                "k_attr" => updated.k_attr = value,
                "k_rep" => updated.k_rep = value,
                "d0" => updated.d0 = value,
                "dt" => updated.dt = value,
                "steps" => {
                    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 {
                        return Err(PlannerError::invalid("steps", format!("must be a whole number, got {}", value)));
                    }
                    updated.steps = value as usize;
                }
                "max_force" => updated.max_force = Some(value),
                other => return Err(PlannerError::invalid(other, "unknown parameter")),
            }
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_default_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.steps, 300);
        assert_eq!(config.max_force, None);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = PlannerConfig::default();
        let cases = [
            PlannerConfig { dt: 0.0, ..base },
            PlannerConfig { dt: -0.1, ..base },
            PlannerConfig { d0: 0.0, ..base },
            PlannerConfig { steps: 0, ..base },
            PlannerConfig { steps: usize::MAX, ..base },
            PlannerConfig { steps: MAX_STEPS + 1, ..base },
            PlannerConfig { k_attr: 0.0, ..base },
            PlannerConfig { k_rep: -1.0, ..base },
            PlannerConfig { k_rep: f64::NAN, ..base },
            PlannerConfig { max_force: Some(0.0), ..base },
            PlannerConfig { near_singularity: NearSingularity::Clamp { min_value: 2.0 }, ..base },
            PlannerConfig { near_singularity: NearSingularity::Reject { min_value: -1.0 }, ..base },
        ];
        for config in cases {
            let err = config.validate().unwrap_err();
            assert!(err.is_config_error(), "{:?}", config);
        }
        assert!(PlannerConfig { k_rep: 0.0, ..base }.validate().is_ok());
        assert!(PlannerConfig { steps: MAX_STEPS, ..base }.validate().is_ok());
    }

    #[test]
    fn test_configure_overrides() {
        let mut config = PlannerConfig::default();
        config
            .configure(&params(&[("k_rep", 5.0), ("steps", 120.0), ("max_force", 20.0)]))
            .unwrap();
        assert_eq!(config.k_rep, 5.0);
        assert_eq!(config.steps, 120);
        assert_eq!(config.max_force, Some(20.0));
        assert_eq!(config.dt, 0.05);
    }

    #[test]
    fn test_configure_is_all_or_nothing() {
        let mut config = PlannerConfig::default();
        assert!(config.configure(&params(&[("k_rep", 5.0), ("dt", -1.0)])).is_err());
        assert_eq!(config, PlannerConfig::default());

        assert!(config.configure(&params(&[("lookahead", 1.0)])).is_err());
        assert!(config.configure(&params(&[("steps", 10.5)])).is_err());
        assert!(config.configure(&params(&[("steps", 0.0)])).is_err());
        assert!(config.configure(&params(&[("steps", 1e30)])).is_err());
        assert_eq!(config, PlannerConfig::default());
    }
}
