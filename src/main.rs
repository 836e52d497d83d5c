//! Demo host for the tap game.
//!
//! Starts a console presenter and a round session, lets two simulated players
//! tap away, suspends the session mid-round (saving the snapshot as JSON),
//! resumes from that JSON and plays the round to its end.

use std::time::Duration;

use actix::prelude::*;
use log::{info, warn};
use rand::Rng;

use time_fighter::config::demo::{
    MAX_TAP_DELAY_MS, MIN_TAP_DELAY_MS, SHUTDOWN_GRACE_MS, SUSPENDED_FOR_MS, SUSPEND_AFTER_MS,
};
use time_fighter::config::round::CountdownConfig;
use time_fighter::game::{Player, Snapshot};
use time_fighter::host::messages::{Suspend, Tap};
use time_fighter::host::presenter::ConsolePresenter;
use time_fighter::host::session::RoundSession;

/// Tap at random for `duration_ms`, alternating players at random.
async fn play(session: &Addr<RoundSession>, duration_ms: u64) {
    let deadline = tokio::time::Instant::now() + Duration::from_millis(duration_ms);
    loop {
        let (delay, player) = {
            let mut rng = rand::rng();
            let delay = rng.random_range(MIN_TAP_DELAY_MS..=MAX_TAP_DELAY_MS);
            let player = if rng.random_bool(0.5) { Player::PlayerOne } else { Player::PlayerTwo };
            (Duration::from_millis(delay), player)
        };
        if tokio::time::Instant::now() + delay >= deadline {
            break;
        }
        tokio::time::sleep(delay).await;
        session.do_send(Tap(player));
    }
}

#[actix::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable.
    env_logger::init();

    let config = CountdownConfig::default();
    let presenter = ConsolePresenter::new().start();

    let session = RoundSession::launch(None, config, presenter.clone().recipient());
    play(&session, SUSPEND_AFTER_MS).await;

    // Host going to the background: save, then tear down.
    let saved = session
        .send(Suspend)
        .await
        .map_err(std::io::Error::other)?;
    let saved_json = match saved {
        Some(snapshot) => snapshot.to_json().map_err(std::io::Error::other)?,
        None => {
            warn!("[Host] Session was already suspended, nothing to save");
            return Ok(());
        }
    };
    info!("[Host] Saved state: {}", saved_json);

    tokio::time::sleep(Duration::from_millis(SUSPENDED_FOR_MS)).await;

    let restored = match Snapshot::from_json(&saved_json) {
        Ok(snapshot) => Some(snapshot),
        Err(err) => {
            warn!("[Host] Could not read saved state: {}", err);
            None
        }
    };
    let remaining_ms = restored
        .map(|snapshot| snapshot.time_remaining_ms)
        .unwrap_or(config.initial_duration_ms());
    let session = RoundSession::launch(restored, config, presenter.recipient());

    // The countdown resumes on the first tap, which lands within one tap delay.
    play(&session, remaining_ms).await;
    tokio::time::sleep(Duration::from_millis(MAX_TAP_DELAY_MS + SHUTDOWN_GRACE_MS)).await;

    let _ = session.send(Suspend).await;
    info!("[Host] Done");
    Ok(())
}
