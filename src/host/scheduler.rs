//! Scheduler backed by the actix runtime.
//! 
//! Each armed countdown runs as a spawned task that sleeps until the next
//! step is due and forwards it to the session as a `TimerSignal`. Cancelling
//! aborts the task and moves to a new generation, so anything still queued
//! from the old countdown is recognisably stale.

use actix::Recipient;
use log::debug;
use tokio::task::JoinHandle;
use tokio::time::{sleep_until, Instant};

use crate::game::countdown::Countdown;
use crate::game::scheduler::Scheduler;
use crate::host::messages::TimerSignal;

pub struct ActixScheduler {
    session: Recipient<TimerSignal>,
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl ActixScheduler {
    pub fn new(session: Recipient<TimerSignal>) -> Self {
        Self {
            session,
            generation: 0,
            task: None,
        }
    }

    /// Generation of the countdown currently allowed to deliver signals.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Scheduler for ActixScheduler {
    fn start(&mut self, duration_ms: u64, interval_ms: u64) {
        self.cancel();
        let generation = self.generation;
        let session = self.session.clone();
        let countdown = Countdown::new(duration_ms, interval_ms);
        debug!("[ActixScheduler] Arming countdown #{} for {}ms", generation, duration_ms);

        self.task = Some(actix::spawn(async move {
            // Deadlines are absolute so slow deliveries don't stretch the round.
            let mut due = Instant::now();
            for (delay, step) in countdown {
                due += delay;
                sleep_until(due).await;
                session.do_send(TimerSignal { generation, step });
            }
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("[ActixScheduler] Countdown #{} cancelled", self.generation);
        }
        self.generation += 1;
    }
}

impl Drop for ActixScheduler {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
