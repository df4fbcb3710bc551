//! Runway resource configuration.

/// Parallel runways that each process one landing at a time.
///
/// # Examples
///
/// ```
/// use u_landing::schedule::RunwayConfig;
///
/// let runways = RunwayConfig::default();
/// assert_eq!(runways.count, 3);
/// assert!((runways.separation_gap - 0.05).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayConfig {
    /// Number of runways.
    pub count: usize,
    /// Buffer added after a runway frees up, in hours (3 minutes).
    pub separation_gap: f64,
    /// Hours a runway stays blocked after a landing.
    pub occupancy: f64,
}

impl Default for RunwayConfig {
    fn default() -> Self {
        Self {
            count: 3,
            separation_gap: 3.0 / 60.0,
            occupancy: 3.0,
        }
    }
}

impl RunwayConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_separation_gap(mut self, hours: f64) -> Self {
        self.separation_gap = hours;
        self
    }

    pub fn with_occupancy(mut self, hours: f64) -> Self {
        self.occupancy = hours;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("at least one runway is required".into());
        }
        if !(self.separation_gap.is_finite() && self.separation_gap >= 0.0) {
            return Err(format!(
                "separation_gap must be non-negative, got {}",
                self.separation_gap
            ));
        }
        if !(self.occupancy.is_finite() && self.occupancy >= 0.0) {
            return Err(format!(
                "occupancy must be non-negative, got {}",
                self.occupancy
            ));
        }
        Ok(())
    }
}
