//! Configuration for strategy-space discretization.
//!
//! The grid builder evaluates every pair of thresholds drawn from a fixed
//! arithmetic progression; this module owns that progression and the
//! tie tolerance used by the best-response scans.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default discretization step: 5%, giving 20 thresholds over [0, 1).
pub const DEFAULT_STEP: f64 = 0.05;

/// Absolute tolerance for treating two EVs as tied in the best-response
/// scans; values this close count as ties, so near-ties surface as
/// multiple candidate best responses.
pub const TIE_TOLERANCE: f64 = 1e-6;

/// Discretization settings for one grid computation.
///
/// # Example
/// ```
/// use nash_grid::grid::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.thresholds().len(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Spacing between adjacent thresholds, as a fraction in (0, 1).
    pub step: f64,

    /// Absolute tolerance for EV ties in the max/min scans.
    pub tie_tolerance: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tie_tolerance: TIE_TOLERANCE,
        }
    }
}

impl GridConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set the discretization step.
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Builder method: set the tie tolerance.
    pub fn with_tie_tolerance(mut self, tie_tolerance: f64) -> Self {
        self.tie_tolerance = tie_tolerance;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step.is_finite() && self.step > 0.0 && self.step < 1.0) {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !(self.tie_tolerance.is_finite() && self.tie_tolerance >= 0.0) {
            return Err(ConfigError::InvalidTolerance(self.tie_tolerance));
        }
        Ok(())
    }

    /// The discretized threshold list: every multiple of `step` strictly
    /// below 1, in increasing order, starting at 0.
    ///
    /// Both grid axes use this same list. The cutoff is backed off by a
    /// hair so accumulated float error cannot admit a threshold of
    /// effectively 1.0.
    pub fn thresholds(&self) -> Vec<f64> {
        let cutoff = 1.0 - 1e-9;
        (0u64..)
            .map(|i| i as f64 * self.step)
            .take_while(|&t| t < cutoff)
            .collect()
    }
}

/// Errors from validating a [`GridConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Step is not a fraction in (0, 1).
    InvalidStep(f64),
    /// Tie tolerance is negative or non-finite.
    InvalidTolerance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStep(val) => {
                write!(f, "step {} is not a fraction in (0, 1)", val)
            }
            ConfigError::InvalidTolerance(val) => {
                write!(f, "tie tolerance {} must be a non-negative number", val)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let thresholds = GridConfig::default().thresholds();
        assert_eq!(thresholds.len(), 20);
        assert_eq!(thresholds[0], 0.0);
        assert!((thresholds[19] - 0.95).abs() < 1e-12);
        assert!(thresholds.iter().all(|&t| t < 1.0));
    }

    #[test]
    fn test_thresholds_strictly_increasing() {
        for &step in &[0.05, 0.01, 0.1, 0.25] {
            let thresholds = GridConfig::new().with_step(step).thresholds();
            for pair in thresholds.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_thresholds_for_step_not_dividing_one() {
        // Every multiple below 1 is included, even when the last gap to
        // 1 is smaller than the step.
        let thresholds = GridConfig::new().with_step(0.3).thresholds();
        assert_eq!(thresholds.len(), 4);
        assert!((thresholds[3] - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        assert!(matches!(
            GridConfig::new().with_step(0.0).validate(),
            Err(ConfigError::InvalidStep(_))
        ));
        assert!(GridConfig::new().with_step(1.0).validate().is_err());
        assert!(GridConfig::new().with_step(-0.05).validate().is_err());
        assert!(GridConfig::new().with_step(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        assert!(matches!(
            GridConfig::new().with_tie_tolerance(-1e-6).validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));
        assert!(GridConfig::new()
            .with_tie_tolerance(f64::INFINITY)
            .validate()
            .is_err());
        assert!(GridConfig::new().with_tie_tolerance(0.0).validate().is_ok());
    }
}
