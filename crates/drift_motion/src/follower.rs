//! Arc-length follower configuration and sampling
//!
//! A follower sweeps a 2-D coordinate around a closed path at constant
//! speed: one full lap per period. Position is a pure function of
//! accumulated active time, so pausing and resuming can never jump phase.

use drift_core::{Point, SharedPath};

use crate::error::{ConfigError, Result};

/// Default lap duration for a border highlight
pub const DEFAULT_PERIOD_MS: f32 = 3000.0;

/// Sweep direction along the path
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Sweep {
    /// Travel in the path's own winding direction
    #[default]
    Forward,
    /// Travel the outline backwards
    Reverse,
}

/// Configuration for an arc-length follower
#[derive(Clone)]
pub struct ArcConfig {
    /// The closed outline to travel
    pub path: SharedPath,
    /// Duration of one full lap, in milliseconds
    pub period_ms: f32,
    /// Travel direction
    pub sweep: Sweep,
}

impl ArcConfig {
    /// Create a follower config with the given lap duration
    pub fn new(path: SharedPath, period_ms: f32) -> Self {
        Self {
            path,
            period_ms,
            sweep: Sweep::Forward,
        }
    }

    /// Create a follower config with the default lap duration
    pub fn with_default_period(path: SharedPath) -> Self {
        Self::new(path, DEFAULT_PERIOD_MS)
    }

    /// Travel the outline backwards
    pub fn reverse(mut self) -> Self {
        self.sweep = Sweep::Reverse;
        self
    }

    /// Validate construction parameters; never called during ticking
    pub fn validate(&self) -> Result<()> {
        if self.period_ms <= 0.0 {
            return Err(ConfigError::NonPositivePeriod(self.period_ms));
        }
        let total = self.path.total_length();
        if total <= 0.0 {
            return Err(ConfigError::DegeneratePath(total));
        }
        Ok(())
    }

    /// Position after `elapsed_ms` of active time
    ///
    /// `rate = total_length / period`, `phase = elapsed * rate mod
    /// total_length`. Periodic with period exactly `period_ms`.
    pub fn sample(&self, elapsed_ms: f64) -> Point {
        let total = self.path.total_length() as f64;
        let rate = total / self.period_ms as f64;
        let phase = (elapsed_ms * rate).rem_euclid(total);

        let phase = match self.sweep {
            Sweep::Forward => phase,
            // point_at_length wraps, so `total - 0` is the start point again
            Sweep::Reverse => total - phase,
        };

        self.path.point_at_length(phase as f32)
    }
}
