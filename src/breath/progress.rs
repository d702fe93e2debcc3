//! Pure view-value mapping: from timer state to the numbers the renderer
//! tweens between. Nothing here is cached; everything is recomputed from the
//! `(phase, durations, remaining)` inputs on each call.

use serde::Serialize;

use crate::settings::Durations;

use super::BreathPhase;

/// Which edge the indicator fills from for the current phase.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FillEdge {
    /// Filling upward: inhale and hold.
    Bottom,
    /// Draining downward: exhale.
    Top,
}

pub fn fill_edge(phase: BreathPhase) -> FillEdge {
    match phase {
        BreathPhase::Inhale | BreathPhase::Hold => FillEdge::Bottom,
        BreathPhase::Exhale => FillEdge::Top,
    }
}

/// Normalized fill level in `[0, 1]` for the indicator.
///
/// Inhale rises from 0 at the start of the phase to 1 on its last second,
/// exhale mirrors it from 1 down to 0, and hold pins the indicator full.
/// A 1-second phase resolves to its starting endpoint; the `max(1, total - 1)`
/// denominator keeps the division defined.
pub fn progress(phase: BreathPhase, durations: &Durations, remaining_seconds: u32) -> f64 {
    let total = durations.effective(phase);
    let remaining = remaining_seconds.max(1);

    match phase {
        BreathPhase::Hold => 1.0,
        BreathPhase::Inhale => {
            if remaining >= total {
                0.0
            } else {
                let span = (total - 1).max(1) as f64;
                (((total - remaining) as f64) / span).clamp(0.0, 1.0)
            }
        }
        BreathPhase::Exhale => {
            if remaining >= total {
                1.0
            } else {
                let span = (total - 1).max(1) as f64;
                (((remaining - 1) as f64) / span).clamp(0.0, 1.0)
            }
        }
    }
}

/// Tween target for the breathing circle: grown at full breath, shrunk after
/// the exhale.
pub fn target_scale(phase: BreathPhase) -> f64 {
    match phase {
        BreathPhase::Inhale | BreathPhase::Hold => 1.0,
        BreathPhase::Exhale => 0.6,
    }
}

/// How long the renderer should tween toward [`target_scale`] when `phase` is
/// entered: the whole phase, floored at 300ms so a 1-second phase still reads
/// as motion rather than a jump.
pub fn tween_ms(phase: BreathPhase, durations: &Durations) -> u64 {
    (durations.effective(phase) as u64 * 1000).max(300)
}
