//! Round timing configuration.
//! 
//! This module defines the countdown parameters of a round and the immutable
//! `CountdownConfig` value the controller is built with.
use serde::{Deserialize, Serialize};

use crate::game::error::RoundError;

/// Length of a round in milliseconds, counted from the first tap.
pub const INITIAL_DURATION_MS: u64 = 20000;

/// Interval (in milliseconds) between two countdown ticks.
pub const TICK_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownConfig {
    initial_duration_ms: u64,
    tick_interval_ms: u64,
}

impl CountdownConfig {
    /// Build a config with custom timings. The tick interval must be non-zero.
    pub fn new(initial_duration_ms: u64, tick_interval_ms: u64) -> Result<Self, RoundError> {
        if tick_interval_ms == 0 {
            return Err(RoundError::InvalidConfig("tick interval must be greater than zero".to_string()));
        }
        Ok(Self { initial_duration_ms, tick_interval_ms })
    }

    pub fn initial_duration_ms(&self) -> u64 {
        self.initial_duration_ms
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            initial_duration_ms: INITIAL_DURATION_MS,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}
