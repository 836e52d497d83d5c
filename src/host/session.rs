//! Round session actor.
//!
//! Owns a `RoundController` wired to an `ActixScheduler` and a presenter,
//! and serialises taps and timer signals through the actor mailbox so they
//! never overlap.

use actix::prelude::*;
use log::{debug, info, warn};
use uuid::Uuid;

use crate::config::round::CountdownConfig;
use crate::game::controller::RoundController;
use crate::game::countdown::CountdownStep;
use crate::game::snapshot::Snapshot;
use crate::game::state::RoundState;
use crate::game::types::RoundEvent;
use crate::host::messages::{QueryState, Reset, Suspend, TakeSnapshot, Tap, TimerSignal};
use crate::host::scheduler::ActixScheduler;

type Controller = RoundController<ActixScheduler, Recipient<RoundEvent>>;

pub struct RoundSession {
    pub session_id: Uuid,
    // None once the session has been suspended.
    controller: Option<Controller>,
}

impl RoundSession {
    /// Start a session, resuming `saved` when given. An unusable snapshot is
    /// logged and replaced by a fresh round.
    pub fn launch(
        saved: Option<Snapshot>,
        config: CountdownConfig,
        presenter: Recipient<RoundEvent>,
    ) -> Addr<RoundSession> {
        RoundSession::create(move |ctx| {
            let session_id = Uuid::new_v4();
            let scheduler = ActixScheduler::new(ctx.address().recipient());
            let mut controller = RoundController::with_config(config, scheduler, presenter);

            if let Some(snapshot) = saved {
                if let Err(err) = controller.restore_from(snapshot) {
                    warn!("[RoundSession] session_id={} {}; starting a fresh round", session_id, err);
                    controller.initialize_fresh();
                }
            }
            controller.publish_state();

            RoundSession {
                session_id,
                controller: Some(controller),
            }
        })
    }
}

impl Actor for RoundSession {
    type Context = Context<Self>;

    fn started(&mut self, _: &mut Self::Context) {
        info!("[RoundSession] Session started: session_id={}", self.session_id);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("[RoundSession] Session stopped: session_id={}", self.session_id);
    }
}

impl Handler<Tap> for RoundSession {
    type Result = ();

    fn handle(&mut self, msg: Tap, _: &mut Context<Self>) -> Self::Result {
        match self.controller.as_mut() {
            Some(controller) => controller.register_tap(msg.0),
            None => warn!("[RoundSession] Tap from {} after suspend: session_id={}", msg.0, self.session_id),
        }
    }
}

impl Handler<TimerSignal> for RoundSession {
    type Result = ();

    fn handle(&mut self, msg: TimerSignal, _: &mut Context<Self>) -> Self::Result {
        let Some(controller) = self.controller.as_mut() else {
            return;
        };
        // Signals from a cancelled countdown may still be queued.
        if msg.generation != controller.scheduler().generation() {
            debug!(
                "[RoundSession] Dropped signal from countdown #{} (current #{})",
                msg.generation,
                controller.scheduler().generation()
            );
            return;
        }
        match msg.step {
            CountdownStep::Tick(remaining_ms) => controller.on_tick(remaining_ms),
            CountdownStep::Expire => controller.on_timer_expire(),
        }
    }
}

impl Handler<TakeSnapshot> for RoundSession {
    type Result = Option<Snapshot>;

    fn handle(&mut self, _: TakeSnapshot, _: &mut Context<Self>) -> Self::Result {
        self.controller.as_ref().map(|controller| controller.snapshot())
    }
}

impl Handler<Suspend> for RoundSession {
    type Result = Option<Snapshot>;

    fn handle(&mut self, _: Suspend, ctx: &mut Context<Self>) -> Self::Result {
        let snapshot = self.controller.take().map(|controller| controller.suspend());
        if let Some(snapshot) = &snapshot {
            info!(
                "[RoundSession] Suspending session_id={}: Player 1 - {}; Player 2 - {}; time left {}ms",
                self.session_id, snapshot.player_one_score, snapshot.player_two_score, snapshot.time_remaining_ms
            );
        }
        ctx.stop();
        snapshot
    }
}

impl Handler<Reset> for RoundSession {
    type Result = ();

    fn handle(&mut self, _: Reset, _: &mut Context<Self>) -> Self::Result {
        if let Some(controller) = self.controller.as_mut() {
            controller.initialize_fresh();
            controller.publish_state();
        }
    }
}

impl Handler<QueryState> for RoundSession {
    type Result = Option<RoundState>;

    fn handle(&mut self, _: QueryState, _: &mut Context<Self>) -> Self::Result {
        self.controller.as_ref().map(|controller| controller.state().clone())
    }
}
