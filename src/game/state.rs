use serde::{Serialize, Deserialize};

use crate::game::types::{Player, RoundPhase, Scores};

/// Scores and countdown position of the round in play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub player_one_score: u32,
    pub player_two_score: u32,
    pub time_remaining_ms: u64,
    pub phase: RoundPhase,
}

impl RoundState {
    // Fresh round: no taps yet, full countdown ahead
    pub fn new(initial_duration_ms: u64) -> Self {
        RoundState {
            player_one_score: 0,
            player_two_score: 0,
            time_remaining_ms: initial_duration_ms,
            phase: RoundPhase::NotStarted,
        }
    }

    pub fn started(&self) -> bool {
        self.phase != RoundPhase::NotStarted
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::PlayerOne => self.player_one_score,
            Player::PlayerTwo => self.player_two_score,
        }
    }

    pub fn scores(&self) -> Scores {
        Scores {
            player_one: self.player_one_score,
            player_two: self.player_two_score,
        }
    }

    /// Add one point to `player` and return the new score.
    pub fn increment(&mut self, player: Player) -> u32 {
        let score = match player {
            Player::PlayerOne => &mut self.player_one_score,
            Player::PlayerTwo => &mut self.player_two_score,
        };
        *score = score.saturating_add(1);
        *score
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.time_remaining_ms / 1000
    }
}
