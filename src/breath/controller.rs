use std::{sync::Arc, time::Duration};

use anyhow::{anyhow, Result};
use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use crate::settings::{Durations, DEFAULT_DURATIONS, MAX_SECONDS, MIN_SECONDS};
use crate::utils::number::parse_seconds;

use super::{progress, BreathPhase, TimerState};

/// What the presentation layer renders from: the timer state, the settings it
/// was computed against, and the derived indicator fill level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreathSnapshot {
    pub state: TimerState,
    pub durations: Durations,
    pub progress: f64,
}

impl BreathSnapshot {
    fn of(state: &TimerState, durations: &Durations) -> Self {
        Self {
            progress: progress::progress(state.phase, durations, state.remaining_seconds),
            state: state.clone(),
            durations: *durations,
        }
    }
}

/// Handle to the live 1 Hz tick task. Dropping it cancels and aborts the
/// task, so the tick source cannot outlive whoever held it.
struct Ticker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel.cancel();
        self.handle.abort();
    }
}

/// Owns the breath timer: the only component that mutates [`TimerState`].
///
/// Cheap to clone; clones share state. Lock order where more than one lock is
/// taken: ticker, then state, then durations.
#[derive(Clone)]
pub struct BreathController {
    state: Arc<Mutex<TimerState>>,
    durations: Arc<Mutex<Durations>>,
    ticker: Arc<Mutex<Option<Ticker>>>,
    tick_interval: Duration,
    snapshot_tx: Arc<watch::Sender<BreathSnapshot>>,
}

impl Default for BreathController {
    fn default() -> Self {
        Self::new(DEFAULT_DURATIONS)
    }
}

impl BreathController {
    pub fn new(durations: Durations) -> Self {
        let state = TimerState::initial(&durations);
        let (snapshot_tx, _) = watch::channel(BreathSnapshot::of(&state, &durations));

        Self {
            state: Arc::new(Mutex::new(state)),
            durations: Arc::new(Mutex::new(durations)),
            ticker: Arc::new(Mutex::new(None)),
            tick_interval: Duration::from_secs(1),
            snapshot_tx: Arc::new(snapshot_tx),
        }
    }

    /// Watch-channel receiver that always holds the latest snapshot; a new
    /// value is published on every tick and every user action.
    pub fn subscribe(&self) -> watch::Receiver<BreathSnapshot> {
        self.snapshot_tx.subscribe()
    }

    pub async fn get_state(&self) -> TimerState {
        self.state.lock().await.clone()
    }

    pub async fn get_durations(&self) -> Durations {
        *self.durations.lock().await
    }

    pub async fn get_snapshot(&self) -> BreathSnapshot {
        let state = self.state.lock().await;
        let durations = self.durations.lock().await;
        BreathSnapshot::of(&state, &durations)
    }

    /// Start (or resume) the countdown. Idempotent: a second call while the
    /// tick source is live does nothing, so there can never be two tickers
    /// counting the same timer down at double speed.
    pub async fn start(&self) {
        let mut ticker_guard = self.ticker.lock().await;
        if ticker_guard.is_some() {
            debug!("start ignored: ticker already active");
            return;
        }

        {
            let mut state = self.state.lock().await;
            state.is_running = true;
            if state.started_at.is_none() {
                state.started_at = Some(Utc::now());
            }
            let durations = self.durations.lock().await;
            info!(
                "breath timer started: {} with {}s remaining",
                state.phase.as_str(),
                state.remaining_seconds
            );
            self.publish(&state, &durations);
        }

        *ticker_guard = Some(self.spawn_ticker());
    }

    /// Stop the countdown, keeping phase and remaining time exactly where
    /// they are so a later [`start`](Self::start) resumes mid-phase.
    pub async fn pause(&self) {
        let had_ticker = self.ticker.lock().await.take().is_some();

        let mut state = self.state.lock().await;
        if !had_ticker && !state.is_running {
            debug!("pause ignored: timer not running");
            return;
        }
        state.is_running = false;
        let durations = self.durations.lock().await;
        info!(
            "breath timer paused: {} with {}s remaining",
            state.phase.as_str(),
            state.remaining_seconds
        );
        self.publish(&state, &durations);
    }

    /// Stop the countdown and restore the initial shape from the current
    /// settings, regardless of prior state.
    pub async fn reset(&self) {
        self.ticker.lock().await.take();

        let mut state = self.state.lock().await;
        let durations = self.durations.lock().await;
        *state = TimerState::initial(&durations);
        info!("breath timer reset");
        self.publish(&state, &durations);
    }

    /// Replace one phase duration. While paused this immediately resyncs the
    /// displayed countdown for the current phase; while running the new value
    /// is picked up at the next phase boundary.
    pub async fn set_duration(&self, phase: BreathPhase, seconds: u32) {
        let mut state = self.state.lock().await;
        let mut durations = self.durations.lock().await;
        durations.set(phase, seconds);
        if !state.is_running {
            state.resync_remaining(&durations);
        }
        debug!(
            "duration updated: {} = {}s",
            phase.as_str(),
            durations.seconds_for(phase)
        );
        self.publish(&state, &durations);
    }

    /// Settings mutation from a raw text input. Never fails: the text is
    /// sanitized and clamped before it is applied.
    pub async fn set_duration_text(&self, phase: BreathPhase, raw: &str) {
        let seconds = parse_seconds(raw, MIN_SECONDS, MAX_SECONDS);
        self.set_duration(phase, seconds).await;
    }

    /// Deactivate the tick source and wait for the task to wind down. Unlike
    /// drop-teardown this surfaces a panicked ticker task to the caller.
    pub async fn shutdown(&self) -> Result<()> {
        let ticker = self.ticker.lock().await.take();
        if let Some(mut ticker) = ticker {
            ticker.cancel.cancel();
            match (&mut ticker.handle).await {
                Ok(()) => {}
                Err(err) if err.is_cancelled() => {}
                Err(err) => return Err(anyhow!("ticker task failed: {err}")),
            }
        }

        let mut state = self.state.lock().await;
        if state.is_running {
            state.is_running = false;
            let durations = self.durations.lock().await;
            self.publish(&state, &durations);
        }
        info!("breath timer shut down");
        Ok(())
    }

    fn spawn_ticker(&self) -> Ticker {
        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let state = self.state.clone();
        let durations = self.durations.clone();
        let snapshot_tx = self.snapshot_tx.clone();
        let tick_interval = self.tick_interval;

        let handle = tokio::spawn(async move {
            // First fire one full period from now, so starting never consumes
            // a second of the countdown instantly.
            let mut interval = time::interval_at(Instant::now() + tick_interval, tick_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let snapshot = {
                            let mut state = state.lock().await;
                            if !state.is_running {
                                break;
                            }
                            let durations = durations.lock().await;
                            if let Some(entered) = state.advance_tick(&durations) {
                                debug!(
                                    "phase transition: {} for {}s (cycle {})",
                                    entered.as_str(),
                                    state.remaining_seconds,
                                    state.completed_cycles
                                );
                            }
                            BreathSnapshot::of(&state, &durations)
                        };
                        snapshot_tx.send_replace(snapshot);
                    }
                    _ = token.cancelled() => break,
                }
            }
        });

        Ticker { cancel, handle }
    }

    fn publish(&self, state: &TimerState, durations: &Durations) {
        self.snapshot_tx.send_replace(BreathSnapshot::of(state, durations));
    }
}
