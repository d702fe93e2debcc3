use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::settings::Durations;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
}

impl Default for BreathPhase {
    fn default() -> Self {
        BreathPhase::Inhale
    }
}

impl BreathPhase {
    /// Next phase in the fixed cyclic order inhale → hold → exhale → inhale.
    pub fn next(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BreathPhase::Inhale => "inhale",
            BreathPhase::Hold => "hold",
            BreathPhase::Exhale => "exhale",
        }
    }
}

/// Full state of the breath timer.
///
/// `remaining_seconds` counts down to 1; the tick that would take it below 1
/// advances `phase` instead, so it is never 0 or negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: BreathPhase,
    pub remaining_seconds: u32,
    pub is_running: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_cycles: u64,
}

impl TimerState {
    /// Initial shape: idle at the top of an inhale, countdown loaded from the
    /// current settings.
    pub fn initial(durations: &Durations) -> Self {
        Self {
            phase: BreathPhase::Inhale,
            remaining_seconds: durations.effective(BreathPhase::Inhale),
            is_running: false,
            started_at: None,
            completed_cycles: 0,
        }
    }

    /// Apply one 1-second tick. Counts down within the current phase, or
    /// advances to the next phase when the countdown is exhausted, reloading
    /// the countdown from `durations` as they are *now* (a mid-run settings
    /// edit lands at the next phase boundary).
    ///
    /// Returns the newly entered phase, if this tick crossed a boundary.
    pub fn advance_tick(&mut self, durations: &Durations) -> Option<BreathPhase> {
        if self.remaining_seconds > 1 {
            self.remaining_seconds -= 1;
            return None;
        }

        let next = self.phase.next();
        self.phase = next;
        self.remaining_seconds = durations.effective(next);
        if next == BreathPhase::Inhale {
            self.completed_cycles += 1;
        }
        Some(next)
    }

    /// Reload the countdown for the current phase from `durations`. Used when
    /// settings change while the timer is not running, so the displayed
    /// remaining time tracks the edited value.
    pub fn resync_remaining(&mut self, durations: &Durations) {
        self.remaining_seconds = durations.effective(self.phase);
    }
}
