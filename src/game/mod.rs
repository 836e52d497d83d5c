pub mod types;
pub mod error;
pub mod state;
pub mod countdown;
pub mod scheduler;
pub mod events;
pub mod snapshot;
pub mod controller;

pub use controller::RoundController;
pub use error::RoundError;
pub use events::EventSink;
pub use scheduler::Scheduler;
pub use snapshot::Snapshot;
pub use types::{Player, RoundEvent, RoundPhase, Scores, Winner};
