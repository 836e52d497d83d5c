/// Actix host for the round controller.
/// 
/// Re-exports submodules for the session actor, its scheduler, messages and presenter.
pub mod messages;
pub mod scheduler;
pub mod session;
pub mod presenter;
