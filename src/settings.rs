use serde::{Deserialize, Serialize};

use crate::breath::BreathPhase;
use crate::utils::number::clamp;

pub const MIN_SECONDS: u32 = 0;
pub const MAX_SECONDS: u32 = 60;

/// Per-phase durations in whole seconds, as configured by the user.
///
/// Values are stored exactly as entered (a 0 stays a 0); the timer always
/// reads them through [`Durations::effective`], which floors to 1 second so
/// no phase can have zero length.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Durations {
    pub inhale: u32,
    pub hold: u32,
    pub exhale: u32,
}

pub const DEFAULT_DURATIONS: Durations = Durations {
    inhale: 4,
    hold: 4,
    exhale: 6,
};

impl Default for Durations {
    fn default() -> Self {
        DEFAULT_DURATIONS
    }
}

impl Durations {
    pub fn seconds_for(&self, phase: BreathPhase) -> u32 {
        match phase {
            BreathPhase::Inhale => self.inhale,
            BreathPhase::Hold => self.hold,
            BreathPhase::Exhale => self.exhale,
        }
    }

    /// Duration the timer actually runs for `phase`: never shorter than 1s.
    pub fn effective(&self, phase: BreathPhase) -> u32 {
        self.seconds_for(phase).max(1)
    }

    /// Replace exactly one field, clamped into `[MIN_SECONDS, MAX_SECONDS]`.
    /// The other two fields are left untouched.
    pub fn set(&mut self, phase: BreathPhase, seconds: u32) {
        let seconds = clamp(seconds, MIN_SECONDS, MAX_SECONDS);
        match phase {
            BreathPhase::Inhale => self.inhale = seconds,
            BreathPhase::Hold => self.hold = seconds,
            BreathPhase::Exhale => self.exhale = seconds,
        }
    }
}
