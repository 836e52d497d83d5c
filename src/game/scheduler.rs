//! Periodic timer capability the round controller depends on.
//!
//! `start` arms a countdown of `duration_ms` ticking every `interval_ms`.
//! The implementation reports progress by driving
//! [`RoundController::on_tick`](crate::game::controller::RoundController::on_tick)
//! with the remaining time and, once, 
//! [`RoundController::on_timer_expire`](crate::game::controller::RoundController::on_timer_expire).
//! After `cancel` no further signal may reach the controller.
pub trait Scheduler {
    fn start(&mut self, duration_ms: u64, interval_ms: u64);
    fn cancel(&mut self);
}
