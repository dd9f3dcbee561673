//! Configuration options for the demo player

use crate::error::{LandingError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Length of the recorded demo call (3 minutes)
pub const DEFAULT_DURATION_SECS: u32 = 180;

/// Configuration for the simulated demo player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Total length of the demo in seconds
    pub duration_secs: u32,

    /// Wall-clock time between two progress ticks
    pub tick_period: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            tick_period: Duration::from_secs(1),
        }
    }
}

impl PlayerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the demo duration
    pub fn with_duration_secs(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Set the tick period
    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    /// Reject configurations the player cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(LandingError::Configuration(
                "demo duration must be at least one second".to_string(),
            ));
        }
        if self.tick_period.is_zero() {
            return Err(LandingError::Configuration(
                "tick period must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
