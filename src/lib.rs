//! Core engine for a guided breathing app: a repeating inhale / hold /
//! exhale cycle with user-configurable phase durations.
//!
//! [`BreathController`] owns the timer state and the 1-second tick source;
//! the presentation layer drives it with start / pause / reset and duration
//! edits, and renders from the [`BreathSnapshot`] values it publishes on a
//! watch channel. The snapshot carries the derived indicator fill level from
//! [`breath::progress`], so the renderer never recomputes timer logic.

pub mod breath;
pub mod settings;
pub mod utils;

pub use breath::{BreathController, BreathPhase, BreathSnapshot, TimerState};
pub use settings::{Durations, DEFAULT_DURATIONS, MAX_SECONDS, MIN_SECONDS};
