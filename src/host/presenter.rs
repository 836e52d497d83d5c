//! Console presenter: renders round events as text lines.

use actix::prelude::*;

use crate::game::types::{Player, RoundEvent};

#[derive(Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(event: &RoundEvent) -> String {
        match event {
            RoundEvent::ScoreChanged { player, score } => format!("{} score: {}", player, score),
            RoundEvent::TimeChanged { seconds_remaining } => format!("Time left: {}", seconds_remaining),
            RoundEvent::RoundEnded { winner, final_scores } => format!(
                "Time's up! {}: {} - {}: {}. Winner: {}",
                Player::PlayerOne,
                final_scores.player_one,
                Player::PlayerTwo,
                final_scores.player_two,
                winner
            ),
        }
    }
}

impl Actor for ConsolePresenter {
    type Context = Context<Self>;
}

impl Handler<RoundEvent> for ConsolePresenter {
    type Result = ();

    fn handle(&mut self, msg: RoundEvent, _: &mut Context<Self>) -> Self::Result {
        println!("{}", Self::render(&msg));
    }
}
