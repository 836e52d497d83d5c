//! Round controller: owns the round state and mediates every transition.
//!
//! The countdown is driven by an injected [`Scheduler`]; display updates go
//! to an injected [`EventSink`]. Calls are expected from a single dispatch
//! thread, never overlapping a timer callback.
use log::{debug, info};

use crate::config::round::CountdownConfig;
use crate::game::error::RoundError;
use crate::game::events::EventSink;
use crate::game::scheduler::Scheduler;
use crate::game::snapshot::Snapshot;
use crate::game::state::RoundState;
use crate::game::types::{Player, RoundEvent, RoundPhase, Winner};

pub struct RoundController<S: Scheduler, E: EventSink> {
    config: CountdownConfig,
    state: RoundState,
    scheduler: S,
    sink: E,
}

impl<S: Scheduler, E: EventSink> RoundController<S, E> {
    pub fn new(scheduler: S, sink: E) -> Self {
        Self::with_config(CountdownConfig::default(), scheduler, sink)
    }

    pub fn with_config(config: CountdownConfig, scheduler: S, sink: E) -> Self {
        Self {
            config,
            state: RoundState::new(config.initial_duration_ms()),
            scheduler,
            sink,
        }
    }

    /// Reset to a fresh round: zero scores, full countdown, not started.
    ///
    /// Emits nothing; call [`publish_state`](Self::publish_state) to redraw.
    pub fn initialize_fresh(&mut self) {
        if self.state.phase == RoundPhase::Running {
            self.scheduler.cancel();
        }
        self.state = RoundState::new(self.config.initial_duration_ms());
        debug!("[RoundController] Fresh round ready ({}ms)", self.state.time_remaining_ms);
    }

    /// Rebuild a paused round from a persisted snapshot. The next tap arms the
    /// countdown from the restored remaining time.
    pub fn restore_from(&mut self, snapshot: Snapshot) -> Result<(), RoundError> {
        snapshot.validate(&self.config)?;
        if self.state.phase == RoundPhase::Running {
            self.scheduler.cancel();
        }
        self.state = RoundState {
            player_one_score: snapshot.player_one_score,
            player_two_score: snapshot.player_two_score,
            time_remaining_ms: snapshot.time_remaining_ms,
            phase: RoundPhase::NotStarted,
        };
        info!(
            "[RoundController] Restored round: Player 1 - {}; Player 2 - {}; time left {}ms",
            snapshot.player_one_score, snapshot.player_two_score, snapshot.time_remaining_ms
        );
        Ok(())
    }

    pub fn register_tap(&mut self, player: Player) {
        match self.state.phase {
            RoundPhase::Expiring => {
                debug!("[RoundController] Tap from {} ignored while the round ends", player);
                return;
            }
            RoundPhase::NotStarted => {
                self.state.phase = RoundPhase::Running;
                self.scheduler.start(self.state.time_remaining_ms, self.config.tick_interval_ms());
                info!(
                    "[RoundController] Round started by {} with {}ms on the clock",
                    player, self.state.time_remaining_ms
                );
            }
            RoundPhase::Running => {}
        }

        let score = self.state.increment(player);
        self.sink.emit(RoundEvent::ScoreChanged { player, score });
    }

    /// Scheduler tick carrying the time left on the countdown.
    pub fn on_tick(&mut self, remaining_ms: u64) {
        if self.state.phase != RoundPhase::Running {
            debug!("[RoundController] Stale tick ({}ms) ignored", remaining_ms);
            return;
        }
        // Never let a late tick wind the clock back up.
        self.state.time_remaining_ms = remaining_ms.min(self.state.time_remaining_ms);
        self.sink.emit(RoundEvent::TimeChanged {
            seconds_remaining: self.state.seconds_remaining(),
        });
    }

    /// End of the countdown: announce the winner from the final scores, then
    /// reset and publish the fresh round.
    pub fn on_timer_expire(&mut self) {
        if self.state.phase != RoundPhase::Running {
            debug!("[RoundController] Stale expiry ignored");
            return;
        }
        self.state.phase = RoundPhase::Expiring;
        self.state.time_remaining_ms = 0;

        let final_scores = self.state.scores();
        let winner = Winner::from_scores(final_scores);
        info!(
            "[RoundController] Round over: Player 1 - {}; Player 2 - {}; winner: {}",
            final_scores.player_one, final_scores.player_two, winner
        );
        self.sink.emit(RoundEvent::RoundEnded { winner, final_scores });

        self.initialize_fresh();
        self.publish_state();
    }

    /// Emit the current scores and time so a presenter can redraw everything.
    pub fn publish_state(&mut self) {
        for player in Player::ALL {
            let score = self.state.score(player);
            self.sink.emit(RoundEvent::ScoreChanged { player, score });
        }
        self.sink.emit(RoundEvent::TimeChanged {
            seconds_remaining: self.state.seconds_remaining(),
        });
    }

    /// Current scores and remaining time for the host to persist. Does not
    /// touch the countdown; the host cancels it.
    pub fn snapshot(&self) -> Snapshot {
        let snapshot = Snapshot::from(&self.state);
        debug!("[RoundController] Snapshot taken: {:?}", snapshot);
        snapshot
    }

    /// Take the snapshot, then cancel the countdown and drop the controller.
    pub fn suspend(mut self) -> Snapshot {
        let snapshot = self.snapshot();
        self.scheduler.cancel();
        snapshot
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn is_started(&self) -> bool {
        self.state.started()
    }

    pub fn score(&self, player: Player) -> u32 {
        self.state.score(player)
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.state.seconds_remaining()
    }

    pub fn config(&self) -> &CountdownConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn sink(&self) -> &E {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut E {
        &mut self.sink
    }
}
