//! Core of a two-player tap game.
//!
//! The first tap of a round arms a shared countdown; every tap scores a point
//! for its player; when the countdown runs out the winner is announced and a
//! fresh round is set up. `game` holds the state machine, `host` runs it on
//! the actix runtime.

pub mod config;
pub mod game;
pub mod host;

mod tests;
