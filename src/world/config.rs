/// Velocity retention factor per second assigned to new bodies; 1 would
/// disable damping entirely.
pub const DEFAULT_DAMPING: f64 = 0.5;

/// Tunables for the fixed-timestep step driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Duration of one fixed substep in seconds. Chosen much smaller than a
    /// typical frame time so integration stays stable.
    pub substep_duration: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            substep_duration: 1.0 / 600.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_substep_duration() {
        let config = SimulationConfig::default();
        assert!((config.substep_duration - 1.0 / 600.0).abs() < 1e-15);
    }
}
