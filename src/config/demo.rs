//! Demo host configuration constants.
//! 
//! Pacing of the simulated players and of the suspend/resume cycle played by
//! the `time-fighter` binary.

/// Shortest pause (in milliseconds) between two taps of a simulated player.
pub const MIN_TAP_DELAY_MS: u64 = 80;

/// Longest pause (in milliseconds) between two taps of a simulated player.
pub const MAX_TAP_DELAY_MS: u64 = 400;

/// Time (in milliseconds) after the first tap at which the host is suspended.
pub const SUSPEND_AFTER_MS: u64 = 6000;

/// How long (in milliseconds) the host stays suspended before resuming.
pub const SUSPENDED_FOR_MS: u64 = 1500;

/// Grace period (in milliseconds) left after the round for the last events to render.
pub const SHUTDOWN_GRACE_MS: u64 = 500;
