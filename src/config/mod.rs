/// Main configuration module.
/// 
/// Re-exports submodules for round timing and the demo host.
pub mod round;
pub mod demo;
