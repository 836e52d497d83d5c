//! Minimal state needed to resume a round after the host was suspended.

use serde::{Serialize, Deserialize};

use crate::config::round::CountdownConfig;
use crate::game::error::RoundError;
use crate::game::state::RoundState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub player_one_score: u32,
    pub player_two_score: u32,
    pub time_remaining_ms: u64,
}

impl Snapshot {
    pub fn new(player_one_score: u32, player_two_score: u32, time_remaining_ms: u64) -> Self {
        Self { player_one_score, player_two_score, time_remaining_ms }
    }

    /// Check the remaining time fits in a round of `config`.
    pub fn validate(&self, config: &CountdownConfig) -> Result<(), RoundError> {
        if self.time_remaining_ms > config.initial_duration_ms() {
            return Err(RoundError::InvalidSnapshot(format!(
                "time remaining {}ms exceeds round duration {}ms",
                self.time_remaining_ms,
                config.initial_duration_ms()
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, RoundError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a persisted snapshot. Negative or missing values are rejected.
    pub fn from_json(text: &str) -> Result<Self, RoundError> {
        Ok(serde_json::from_str(text)?)
    }
}

impl From<&RoundState> for Snapshot {
    fn from(state: &RoundState) -> Self {
        Snapshot::new(state.player_one_score, state.player_two_score, state.time_remaining_ms)
    }
}
