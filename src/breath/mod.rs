pub mod controller;
pub mod progress;
pub mod state;

pub use controller::{BreathController, BreathSnapshot};
pub use state::{BreathPhase, TimerState};
