use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, error, info};
use serde::Serialize;
use tauri::{AppHandle, Emitter};
use tokio::sync::Mutex;

use crate::predictor::{predict, Advisory, PredictorConfig, PredictorError};
use crate::session::state::{AnalysisTicket, SessionSnapshot, SessionState};
use crate::session::stats::AggregateStats;
use crate::wheel::{self, default_value_for, RouletteColor, SpinOutcome};

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct OutcomeRecordedEvent {
    outcome: SpinOutcome,
    stats: AggregateStats,
}

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct AdvisoryUpdatedEvent {
    advisory: Advisory,
}

/// Owns the session store and drives the analysis workflow: every
/// qualifying history mutation spawns one analysis over a snapshot, and
/// its result is applied only while the generation still matches.
#[derive(Clone)]
pub struct SessionController {
    state: Arc<Mutex<SessionState>>,
    app_handle: AppHandle,
    predictor: PredictorConfig,
}

impl SessionController {
    pub fn new(app_handle: AppHandle) -> Self {
        let predictor = PredictorConfig::default();
        Self {
            state: Arc::new(Mutex::new(SessionState::new(predictor.min_history))),
            app_handle,
            predictor,
        }
    }

    /// Simulate one spin and record it.
    pub async fn spin(&self) -> Result<SpinOutcome> {
        let outcome = wheel::spin().context("spin aborted")?;
        self.record(outcome).await
    }

    /// Record a manually observed outcome. With an explicit value the
    /// color is derived from it; without one, the per-color placeholder
    /// default applies (GREEN 0, RED 1, BLACK 2).
    pub async fn record_manual(
        &self,
        color: RouletteColor,
        value: Option<u32>,
    ) -> Result<SpinOutcome> {
        let value = value.unwrap_or_else(|| default_value_for(color));
        let outcome = SpinOutcome::from_value(value)?;
        self.record(outcome).await
    }

    pub async fn clear(&self) {
        {
            let mut state = self.state.lock().await;
            state.clear();
        }
        info!("Session history cleared");
        let _ = self.app_handle.emit("session-cleared", ());
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().await.snapshot()
    }

    async fn record(&self, outcome: SpinOutcome) -> Result<SpinOutcome> {
        let (stats, ticket) = {
            let mut state = self.state.lock().await;
            state.record(outcome.clone());
            let ticket = state.ready_for_analysis().then(|| state.begin_analysis());
            (AggregateStats::from_history(&state.history_vec()), ticket)
        };

        info!(
            "Recorded outcome {} ({}) as spin #{}",
            outcome.value,
            outcome.color.as_str(),
            stats.total_spins
        );

        let _ = self.app_handle.emit(
            "outcome-recorded",
            OutcomeRecordedEvent {
                outcome: outcome.clone(),
                stats,
            },
        );

        if let Some(ticket) = ticket {
            self.spawn_analysis(ticket);
        }

        Ok(outcome)
    }

    fn spawn_analysis(&self, ticket: AnalysisTicket) {
        let state = self.state.clone();
        let app_handle = self.app_handle.clone();
        let config = self.predictor;

        tokio::spawn(async move {
            let result = predict(&ticket.history, &config);
            let mut guard = state.lock().await;
            match result {
                Ok(advisory) => {
                    if guard.complete_analysis(ticket.generation, advisory.clone()) {
                        let _ =
                            app_handle.emit("advisory-updated", AdvisoryUpdatedEvent { advisory });
                    } else {
                        debug!(
                            "Discarding stale advisory for generation {}",
                            ticket.generation
                        );
                    }
                }
                Err(PredictorError::InsufficientData { have, need }) => {
                    // Only reachable when the history shrank under an
                    // in-flight ticket; the generation check makes it a
                    // no-op either way.
                    error!("Analysis ran with insufficient data ({have}/{need})");
                    if guard.fail_analysis(ticket.generation) {
                        let _ = app_handle.emit(
                            "advisory-updated",
                            AdvisoryUpdatedEvent {
                                advisory: Advisory::engine_error(),
                            },
                        );
                    }
                }
            }
        });
    }
}
