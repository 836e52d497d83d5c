use actix::prelude::*;

use crate::game::countdown::CountdownStep;
use crate::game::snapshot::Snapshot;
use crate::game::state::RoundState;
use crate::game::types::Player;

/// A player pressed their button.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Tap(pub Player);

/// Progress of an armed countdown, tagged with the countdown it belongs to.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct TimerSignal {
    pub generation: u64,
    pub step: CountdownStep,
}

/// Read the scores and remaining time without side effects.
#[derive(Message)]
#[rtype(result = "Option<Snapshot>")]
pub struct TakeSnapshot;

/// Persist-and-teardown: returns the snapshot, cancels the countdown and stops the session.
#[derive(Message)]
#[rtype(result = "Option<Snapshot>")]
pub struct Suspend;

/// Abandon the round in play and start over.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Reset;

#[derive(Message)]
#[rtype(result = "Option<RoundState>")]
pub struct QueryState;
