use std::fmt;

use actix::Message;
use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::PlayerOne, Player::PlayerTwo];

    pub fn other(self) -> Player {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Player::PlayerOne => "Player 1",
            Player::PlayerTwo => "Player 2",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Winner {
    /// Decide the winner from a score pair. Equal scores are a draw.
    pub fn from_scores(scores: Scores) -> Self {
        use std::cmp::Ordering;
        match scores.player_one.cmp(&scores.player_two) {
            Ordering::Greater => Winner::PlayerOne,
            Ordering::Less => Winner::PlayerTwo,
            Ordering::Equal => Winner::Draw,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Winner::PlayerOne => Player::PlayerOne.label(),
            Winner::PlayerTwo => Player::PlayerTwo.label(),
            Winner::Draw => "No one",
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub player_one: u32,
    pub player_two: u32,
}

/// Where a round currently stands.
///
/// `Expiring` only exists while the controller handles the end of the
/// countdown; taps seen in that window are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    Running,
    Expiring,
}

/// Display updates produced by the controller for the presentation layer.
#[derive(Message, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[rtype(result = "()")]
pub enum RoundEvent {
    ScoreChanged { player: Player, score: u32 },
    TimeChanged { seconds_remaining: u64 },
    RoundEnded { winner: Winner, final_scores: Scores },
}
